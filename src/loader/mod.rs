//! Content loader - the fetch, parse and render pipelines
//!
//! Each pipeline fetches one resource, turns it into nodes and replaces the
//! placeholder inside its container. Failures never escape a pipeline: they
//! are logged and rendered as a single inline error element.

mod article;
mod links;
mod post_list;

pub use article::{load_article, render_empty_state};
pub use links::{load_link_collection, render_link_items, LINK_ICON_SVG};
pub use post_list::{load_post_list, render_post_items};

use crate::config::SiteConfig;
use crate::content::RenderMarkdown;
use crate::dom::{Document, Element, Node};
use crate::platform::HttpFetcher;

/// The three content pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    PostList,
    Article,
    LinkCollection,
}

impl Pipeline {
    pub fn name(self) -> &'static str {
        match self {
            Pipeline::PostList => "post-list",
            Pipeline::Article => "article",
            Pipeline::LinkCollection => "link-collection",
        }
    }
}

/// What a pipeline run did to its container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Content rendered; the number of items (1 for an article)
    Rendered(usize),
    /// Required input was missing, a guidance message was shown
    EmptyState,
    /// The resource could not be loaded, an inline error was shown
    Failed,
    /// A required capability was missing, the document was left untouched
    Aborted,
    /// The page has no container for this pipeline
    MissingContainer,
}

/// Maps container ids to the pipeline that fills them
#[derive(Debug, Clone)]
pub struct CapabilityTable {
    entries: Vec<(String, Pipeline)>,
}

impl CapabilityTable {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            entries: vec![
                (config.dom.list_container.clone(), Pipeline::PostList),
                (config.dom.article_container.clone(), Pipeline::Article),
                (config.dom.links_container.clone(), Pipeline::LinkCollection),
            ],
        }
    }

    pub fn entries(&self) -> &[(String, Pipeline)] {
        &self.entries
    }

    /// The pipeline for this page, chosen by the first container present
    pub fn select(&self, doc: &Document) -> Option<Pipeline> {
        self.entries
            .iter()
            .find(|(id, _)| doc.contains_id(id))
            .map(|(_, pipeline)| *pipeline)
    }
}

/// Capabilities a pipeline run needs
pub struct LoaderContext<'a, F> {
    pub config: &'a SiteConfig,
    pub fetcher: &'a F,
    pub markdown: Option<&'a dyn RenderMarkdown>,
}

impl<'a, F: HttpFetcher> LoaderContext<'a, F> {
    pub fn new(config: &'a SiteConfig, fetcher: &'a F) -> Self {
        Self {
            config,
            fetcher,
            markdown: None,
        }
    }

    /// Builder: provide the markdown capability
    pub fn with_markdown(mut self, markdown: &'a dyn RenderMarkdown) -> Self {
        self.markdown = Some(markdown);
        self
    }

    /// Run one pipeline against the document
    pub async fn run(
        &self,
        pipeline: Pipeline,
        doc: &mut Document,
        post: Option<&str>,
    ) -> PipelineOutcome {
        tracing::debug!("Running {} pipeline", pipeline.name());
        match pipeline {
            Pipeline::PostList => load_post_list(doc, self.config, self.fetcher).await,
            Pipeline::Article => {
                load_article(doc, self.config, self.fetcher, self.markdown, post).await
            }
            Pipeline::LinkCollection => {
                load_link_collection(doc, self.config, self.fetcher).await
            }
        }
    }
}

/// Replace the container content with one error element
fn render_error(container: &mut Element, tag: &str, message: &str) {
    container.replace_children(vec![Node::from(Element::new(tag).text(message))]);
}
