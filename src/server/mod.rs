//! Local preview server
//!
//! Serves the site directory as static files. In watch mode the post index
//! is rebuilt whenever the posts directory changes.

use anyhow::Result;
use axum::Router;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEvent};
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Site;

/// Start the preview server
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool) -> Result<()> {
    let app = Router::new()
        .fallback_service(
            ServeDir::new(&site.base_dir).append_index_html_on_directories(true),
        )
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    if watch {
        println!("Watching {:?} for new posts...", site.posts_dir);
        let site = site.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_posts(&site) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Block on file events in the posts directory and rebuild the index
fn watch_posts(site: &Site) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    std::fs::create_dir_all(&site.posts_dir)?;
    debouncer
        .watcher()
        .watch(&site.posts_dir, RecursiveMode::NonRecursive)?;
    tracing::debug!("Watching: {:?}", site.posts_dir);

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                if !touches_posts(&events) {
                    continue;
                }
                match site.rebuild_index() {
                    Ok(count) => println!("🔄 Re-indexed {} posts", count),
                    Err(e) => println!("❌ Indexing failed: {}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Only markdown files matter; editor swap files and the like are ignored
fn touches_posts(events: &[DebouncedEvent]) -> bool {
    events.iter().any(|e| {
        let path = e.path.to_string_lossy();
        path.ends_with(".md") && !path.ends_with('~')
    })
}
