//! Render a page the way a browser would after its scripts ran

use anyhow::Result;
use std::path::PathBuf;

use crate::content::MarkdownRenderer;
use crate::loader::LoaderContext;
use crate::page::{load_page, PageEvent, PageKind, PageRequest};
use crate::platform::{FileStore, FixedScheme, FsFetcher, HttpClient, HttpFetcher, KeyValueStore, MemoryStore};
use crate::theme::ThemeEvent;
use crate::Site;

/// Options of a single page render
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub page: PageKind,
    /// Value of the post query parameter
    pub post: Option<String>,
    /// OS color-scheme preference at load time
    pub prefers_dark: Option<bool>,
    /// File backing the theme preference; in-memory when absent
    pub theme_store: Option<PathBuf>,
    /// Fetch resources from a deployed site instead of the site directory
    pub remote: Option<String>,
    /// Number of toggle clicks to replay after loading
    pub toggles: u8,
}

impl RenderOptions {
    pub fn new(page: PageKind) -> Self {
        Self {
            page,
            post: None,
            prefers_dark: None,
            theme_store: None,
            remote: None,
            toggles: 0,
        }
    }
}

/// Render the page and return the resulting HTML document
pub async fn run(site: &Site, options: &RenderOptions) -> Result<String> {
    match &options.remote {
        Some(base_url) => {
            tracing::info!("Fetching resources from {}", base_url);
            render_with(site, &HttpClient::new(base_url), options).await
        }
        None => render_with(site, &FsFetcher::new(&site.base_dir), options).await,
    }
}

async fn render_with<F: HttpFetcher>(
    site: &Site,
    fetcher: &F,
    options: &RenderOptions,
) -> Result<String> {
    let config = &site.config;
    let mut store: Box<dyn KeyValueStore> = match &options.theme_store {
        Some(path) => Box::new(FileStore::open(path)?),
        None => Box::new(MemoryStore::new()),
    };

    let renderer = MarkdownRenderer::from_config(&config.markdown);
    let loader = LoaderContext::new(config, fetcher).with_markdown(&renderer);
    let request = match &options.post {
        Some(post) => PageRequest::default().with_param(&config.post_query_param, post),
        None => PageRequest::default(),
    };

    let mut doc = options.page.skeleton(config);
    let mut session = load_page(
        &mut doc,
        &*store,
        &FixedScheme(options.prefers_dark),
        &loader,
        &request,
    )
    .await;

    if let Some(outcome) = session.outcome() {
        tracing::debug!("{} page: {:?}", options.page, outcome);
    }

    for _ in 0..options.toggles {
        session.dispatch(
            PageEvent::Theme(ThemeEvent::ToggleClicked),
            &mut doc,
            &mut *store,
        );
    }

    Ok(doc.to_html())
}
