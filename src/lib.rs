//! sitefront: the front-end logic of a small personal site
//!
//! Theme switching, the scroll indicator, contact-address obfuscation and the
//! three content pipelines (post list, article, link collection) run against
//! an in-memory [`dom::Document`] with injected storage, network and
//! color-scheme capabilities, so a page load can be reproduced from the
//! command line or in tests.

pub mod commands;
pub mod config;
pub mod content;
pub mod dom;
pub mod email;
pub mod error;
pub mod helpers;
pub mod loader;
pub mod page;
pub mod platform;
pub mod scroll;
pub mod server;
pub mod theme;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site directory on disk
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory (the web root)
    pub base_dir: PathBuf,
    /// Directory holding the markdown posts
    pub posts_dir: PathBuf,
}

impl Site {
    /// Open a site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Path of the post index file
    pub fn index_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.posts_index)
    }

    /// Path of the link collection file
    pub fn links_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.links_path)
    }

    /// Rebuild the post index from the posts directory
    pub fn rebuild_index(&self) -> Result<usize> {
        commands::index::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::create_post(self, title, None)
    }
}
