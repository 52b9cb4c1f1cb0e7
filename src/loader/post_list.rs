//! Post list pipeline - `posts.json` to a list of article links

use super::{render_error, PipelineOutcome};
use crate::config::SiteConfig;
use crate::content::PostIndex;
use crate::dom::{Document, Element, Node};
use crate::error::LoadError;
use crate::helpers::{article_url, link_to};
use crate::platform::HttpFetcher;

/// Load the post index and render it newest first
pub async fn load_post_list<F: HttpFetcher>(
    doc: &mut Document,
    config: &SiteConfig,
    fetcher: &F,
) -> PipelineOutcome {
    let container_id = &config.dom.list_container;
    if !doc.contains_id(container_id) {
        return PipelineOutcome::MissingContainer;
    }

    let result = fetch_index(config, fetcher).await;
    let Some(container) = doc.element_by_id_mut(container_id) else {
        return PipelineOutcome::MissingContainer;
    };

    match result {
        Ok(index) => {
            let items = render_post_items(config, &index);
            let count = items.len();
            container.replace_children(items);
            tracing::info!("Rendered {} posts", count);
            PipelineOutcome::Rendered(count)
        }
        Err(e) => {
            tracing::error!("Error fetching posts: {}", e);
            render_error(container, "li", &config.messages.post_list_error);
            PipelineOutcome::Failed
        }
    }
}

async fn fetch_index<F: HttpFetcher>(
    config: &SiteConfig,
    fetcher: &F,
) -> Result<PostIndex, LoadError> {
    let body = fetcher.fetch_text(&config.posts_index).await?;
    Ok(PostIndex::parse(&body)?)
}

/// One `<li><a>` per post, newest first
pub fn render_post_items(config: &SiteConfig, index: &PostIndex) -> Vec<Node> {
    index
        .newest_first()
        .iter()
        .map(|post| {
            let href = article_url(config, post.filename());
            Element::new("li")
                .child(link_to(&href, &post.title(), false))
                .into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryFetcher;

    fn list_page() -> Document {
        Document::with_body(
            "Blog",
            vec![Element::new("ul")
                .attr("id", "article-list-container")
                .text("Lade...")
                .into()],
        )
    }

    fn container_html(doc: &Document) -> String {
        doc.element_by_id("article-list-container")
            .unwrap()
            .inner_html()
    }

    #[tokio::test]
    async fn test_renders_newest_first() {
        let config = SiteConfig::default();
        let fetcher = MemoryFetcher::new().with(
            "posts.json",
            r#"{"posts": ["2024-01-01-a.md", "2024-03-01-b.md"]}"#,
        );
        let mut doc = list_page();

        let outcome = load_post_list(&mut doc, &config, &fetcher).await;
        assert_eq!(outcome, PipelineOutcome::Rendered(2));
        assert_eq!(
            container_html(&doc),
            concat!(
                r#"<li><a href="article.html?post=2024-03-01-b.md">B</a></li>"#,
                r#"<li><a href="article.html?post=2024-01-01-a.md">A</a></li>"#
            )
        );
    }

    #[tokio::test]
    async fn test_empty_index_clears_placeholder() {
        let config = SiteConfig::default();
        let fetcher = MemoryFetcher::new().with("posts.json", r#"{"posts": []}"#);
        let mut doc = list_page();

        let outcome = load_post_list(&mut doc, &config, &fetcher).await;
        assert_eq!(outcome, PipelineOutcome::Rendered(0));
        assert_eq!(container_html(&doc), "");
    }

    #[tokio::test]
    async fn test_fetch_failure_renders_single_error() {
        let config = SiteConfig::default();
        let fetcher = MemoryFetcher::new();
        let mut doc = list_page();

        let outcome = load_post_list(&mut doc, &config, &fetcher).await;
        assert_eq!(outcome, PipelineOutcome::Failed);
        assert_eq!(
            container_html(&doc),
            "<li>Fehler beim Laden der Artikel.</li>"
        );
    }

    #[tokio::test]
    async fn test_malformed_json_renders_single_error() {
        let config = SiteConfig::default();
        let fetcher = MemoryFetcher::new().with("posts.json", "<!DOCTYPE html><p>Not Found</p>");
        let mut doc = list_page();

        let outcome = load_post_list(&mut doc, &config, &fetcher).await;
        assert_eq!(outcome, PipelineOutcome::Failed);
        let container = doc.element_by_id("article-list-container").unwrap();
        assert_eq!(container.children().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_container_skips_fetch() {
        let config = SiteConfig::default();
        let fetcher = MemoryFetcher::new();
        let mut doc = Document::new("t");

        let outcome = load_post_list(&mut doc, &config, &fetcher).await;
        assert_eq!(outcome, PipelineOutcome::MissingContainer);
        assert_eq!(fetcher.calls(), 0);
    }
}
