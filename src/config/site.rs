//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub owner: String,

    // Resources
    pub posts_index: String,
    pub posts_dir: String,
    pub links_path: String,

    // Navigation
    pub home_page: String,
    pub article_page: String,
    pub post_query_param: String,

    // Persisted preference
    pub storage_key: String,

    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub dom: DomConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Malte".to_string(),

            posts_index: "posts.json".to_string(),
            posts_dir: "posts".to_string(),
            links_path: "links.md".to_string(),

            home_page: "index.html".to_string(),
            article_page: "article.html".to_string(),
            post_query_param: "post".to_string(),

            storage_key: "theme".to_string(),

            email: EmailConfig::default(),
            dom: DomConfig::default(),
            messages: MessagesConfig::default(),
            markdown: MarkdownConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Path of a post relative to the site root
    pub fn post_path(&self, filename: &str) -> String {
        format!("{}/{}", self.posts_dir.trim_end_matches('/'), filename)
    }
}

/// Parts of the contact address, joined only at runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub user: String,
    pub domain: String,
    pub element_id: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            user: "kontakt".to_string(),
            domain: "example.com".to_string(),
            element_id: "email-link".to_string(),
        }
    }
}

/// Element hooks the page scripts look for
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    pub list_container: String,
    pub article_container: String,
    pub links_container: String,
    pub theme_toggle: String,
    pub progress_bar_class: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            list_container: "article-list-container".to_string(),
            article_container: "article-content-container".to_string(),
            links_container: "link-collection-container".to_string(),
            theme_toggle: "darkModeToggleContainer".to_string(),
            progress_bar_class: "scroll-progress-bar".to_string(),
        }
    }
}

/// User-facing strings rendered by the pipelines
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub loading: String,
    pub post_list_error: String,
    pub article_error: String,
    pub links_error: String,
    pub no_article: String,
    pub back_to_overview: String,
    pub default_article_title: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            loading: "Lade...".to_string(),
            post_list_error: "Fehler beim Laden der Artikel.".to_string(),
            article_error: "Fehler: Artikel konnte nicht geladen werden.".to_string(),
            links_error: "Fehler beim Laden der Links.".to_string(),
            no_article: "Kein Artikel ausgewählt.".to_string(),
            back_to_overview: "Zurück zur Übersicht".to_string(),
            default_article_title: "Artikel".to_string(),
        }
    }
}

/// Markdown rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub highlight: bool,
    pub highlight_theme: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            highlight_theme: "base16-ocean.dark".to_string(),
        }
    }
}
