//! Page bootstrap - the single page-load entry point
//!
//! Loading a page always initializes the theme, the contact link and the
//! scroll indicator. The capability table is then consulted once and at most
//! one content pipeline runs.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::SiteConfig;
use crate::dom::{Document, Element, Node};
use crate::email::EmailObfuscator;
use crate::helpers::{link_to, parse_query};
use crate::loader::{CapabilityTable, LoaderContext, Pipeline, PipelineOutcome};
use crate::platform::{HttpFetcher, KeyValueStore, MediaQuery};
use crate::scroll::{ScrollIndicator, ScrollMetrics};
use crate::theme::{ThemeController, ThemeEvent, ThemeState};

/// The three page layouts of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Index,
    Article,
    Links,
}

impl PageKind {
    /// Markup of the page as served, before any script ran
    pub fn skeleton(self, config: &SiteConfig) -> Document {
        let (title, container) = match self {
            PageKind::Index => (
                config.owner.clone(),
                Element::new("ul").attr("id", &config.dom.list_container),
            ),
            PageKind::Article => (
                config.messages.default_article_title.clone(),
                Element::new("article").attr("id", &config.dom.article_container),
            ),
            PageKind::Links => (
                format!("Links - {}", config.owner),
                Element::new("ul").attr("id", &config.dom.links_container),
            ),
        };

        let header = Element::new("header")
            .child(
                Element::new("nav")
                    .child(link_to(&config.home_page, &config.owner, false))
                    .child(link_to("links.html", "Links", false)),
            )
            .child(
                Element::new("div")
                    .attr("id", &config.dom.theme_toggle)
                    .attr("class", "dark-mode-toggle"),
            );
        let footer = Element::new("footer").child(
            Element::new("a")
                .attr("id", &config.email.element_id)
                .attr("href", "#"),
        );

        Document::with_body(
            &title,
            vec![
                Element::new("div")
                    .attr("class", &config.dom.progress_bar_class)
                    .into(),
                header.into(),
                Node::from(
                    Element::new("main").child(container.text(&config.messages.loading)),
                ),
                footer.into(),
            ],
        )
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::Index => "index",
            PageKind::Article => "article",
            PageKind::Links => "links",
        };
        f.write_str(name)
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" | "home" => Ok(PageKind::Index),
            "article" | "post" => Ok(PageKind::Article),
            "links" | "link" => Ok(PageKind::Links),
            other => Err(format!(
                "Unknown page: {}. Available: index, article, links",
                other
            )),
        }
    }
}

/// The navigation input of a page load (`location.search`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    params: HashMap<String, String>,
}

impl PageRequest {
    pub fn from_query(query: &str) -> Self {
        Self {
            params: parse_query(query),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Builder: set a query parameter
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }
}

/// Events delivered to a loaded page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    Theme(ThemeEvent),
    Scrolled(ScrollMetrics),
}

/// Listeners and results of one page load
#[derive(Debug, Clone)]
pub struct PageSession {
    theme: ThemeController,
    scroll: ScrollIndicator,
    pipeline: Option<Pipeline>,
    outcome: Option<PipelineOutcome>,
}

impl PageSession {
    pub fn theme(&self) -> ThemeState {
        self.theme.state()
    }

    /// The pipeline selected for this page, if any
    pub fn pipeline(&self) -> Option<Pipeline> {
        self.pipeline
    }

    pub fn outcome(&self) -> Option<PipelineOutcome> {
        self.outcome
    }

    /// Deliver an event to the page's listeners
    pub fn dispatch<S>(&mut self, event: PageEvent, doc: &mut Document, store: &mut S)
    where
        S: KeyValueStore + ?Sized,
    {
        match event {
            PageEvent::Theme(event) => {
                self.theme.handle(event, doc, store);
            }
            PageEvent::Scrolled(metrics) => {
                self.scroll.update(doc, metrics);
            }
        }
    }
}

/// Run the page-load entry point
pub async fn load_page<S, M, F>(
    doc: &mut Document,
    store: &S,
    media: &M,
    loader: &LoaderContext<'_, F>,
    request: &PageRequest,
) -> PageSession
where
    S: KeyValueStore + ?Sized,
    M: MediaQuery + ?Sized,
    F: HttpFetcher,
{
    let config = loader.config;

    let theme = ThemeController::initialize(doc, config, store, media);
    EmailObfuscator::new(config).apply(doc);
    let scroll = ScrollIndicator::new(config);
    scroll.update(doc, ScrollMetrics::default());

    let pipeline = CapabilityTable::from_config(config).select(doc);
    let outcome = match pipeline {
        Some(pipeline) => {
            let post = request.param(&config.post_query_param);
            Some(loader.run(pipeline, doc, post).await)
        }
        None => {
            tracing::debug!("No content container on page");
            None
        }
    };

    PageSession {
        theme,
        scroll,
        pipeline,
        outcome,
    }
}
