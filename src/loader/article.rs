//! Article pipeline - one post's markdown rendered into the content region

use super::{render_error, PipelineOutcome};
use crate::config::SiteConfig;
use crate::content::RenderMarkdown;
use crate::dom::{Document, Element, Node};
use crate::helpers::link_to;
use crate::platform::HttpFetcher;

/// Load and render the post named by the `post` query parameter
///
/// Without a filename the guided empty state is shown and nothing is fetched.
/// Without a markdown renderer the document is left untouched.
pub async fn load_article<F: HttpFetcher>(
    doc: &mut Document,
    config: &SiteConfig,
    fetcher: &F,
    markdown: Option<&dyn RenderMarkdown>,
    filename: Option<&str>,
) -> PipelineOutcome {
    let container_id = &config.dom.article_container;
    if !doc.contains_id(container_id) {
        return PipelineOutcome::MissingContainer;
    }

    let Some(filename) = filename.filter(|f| !f.is_empty()) else {
        if let Some(container) = doc.element_by_id_mut(container_id) {
            container.replace_children(render_empty_state(config));
        }
        return PipelineOutcome::EmptyState;
    };

    let Some(markdown) = markdown else {
        tracing::error!("Markdown renderer unavailable, cannot render {}", filename);
        return PipelineOutcome::Aborted;
    };

    let result = fetcher.fetch_text(&config.post_path(filename)).await;
    let Some(container) = doc.element_by_id_mut(container_id) else {
        return PipelineOutcome::MissingContainer;
    };

    let source = match result {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("Error fetching article {}: {}", filename, e);
            render_error(container, "p", &config.messages.article_error);
            return PipelineOutcome::Failed;
        }
    };

    let rendered = markdown.render(&source);
    container.replace_children(vec![Node::raw(rendered.html)]);
    container.append(
        link_to(
            &config.home_page,
            &format!("← {}", config.messages.back_to_overview),
            false,
        )
        .attr("class", "back-link"),
    );

    let title = rendered
        .first_heading
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| config.messages.default_article_title.clone());
    doc.set_title(&format!("{} - {}", title, config.owner));

    tracing::info!("Rendered article {}", filename);
    PipelineOutcome::Rendered(1)
}

/// "No article selected" paragraph with a link home
pub fn render_empty_state(config: &SiteConfig) -> Vec<Node> {
    let paragraph = Element::new("p")
        .text(&format!("{} ", config.messages.no_article))
        .child(link_to(
            &config.home_page,
            &config.messages.back_to_overview,
            false,
        ))
        .text(".");
    vec![paragraph.into()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MarkdownRenderer;
    use crate::platform::MemoryFetcher;

    fn article_page() -> Document {
        Document::with_body(
            "Artikel",
            vec![Element::new("article")
                .attr("id", "article-content-container")
                .text("Lade...")
                .into()],
        )
    }

    fn container(doc: &Document) -> &Element {
        doc.element_by_id("article-content-container").unwrap()
    }

    #[tokio::test]
    async fn test_renders_article() {
        let config = SiteConfig::default();
        let renderer = MarkdownRenderer::new();
        let fetcher = MemoryFetcher::new().with(
            "posts/2024-05-01-my-post.md",
            "# Mein Post\n\nHallo *Welt*.",
        );
        let mut doc = article_page();

        let outcome = load_article(
            &mut doc,
            &config,
            &fetcher,
            Some(&renderer),
            Some("2024-05-01-my-post.md"),
        )
        .await;

        assert_eq!(outcome, PipelineOutcome::Rendered(1));
        assert_eq!(doc.title(), "Mein Post - Malte");
        let html = container(&doc).inner_html();
        assert!(html.starts_with("<h1>Mein Post</h1>"));
        assert!(html.contains("<em>Welt</em>"));
        assert!(!html.contains("Lade..."));
        assert!(html.ends_with(
            r#"<a href="index.html" class="back-link">← Zurück zur Übersicht</a>"#
        ));
    }

    #[tokio::test]
    async fn test_default_title_without_heading() {
        let config = SiteConfig::default();
        let renderer = MarkdownRenderer::new();
        let fetcher = MemoryFetcher::new().with("posts/x.md", "Kein Titel hier.");
        let mut doc = article_page();

        load_article(&mut doc, &config, &fetcher, Some(&renderer), Some("x.md")).await;
        assert_eq!(doc.title(), "Artikel - Malte");
    }

    #[tokio::test]
    async fn test_missing_param_shows_empty_state_without_fetch() {
        let config = SiteConfig::default();
        let renderer = MarkdownRenderer::new();
        let fetcher = MemoryFetcher::new();

        for filename in [None, Some("")] {
            let mut doc = article_page();
            let outcome =
                load_article(&mut doc, &config, &fetcher, Some(&renderer), filename).await;
            assert_eq!(outcome, PipelineOutcome::EmptyState);
            assert_eq!(
                container(&doc).inner_html(),
                r#"<p>Kein Artikel ausgewählt. <a href="index.html">Zurück zur Übersicht</a>.</p>"#
            );
        }
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_renders_single_error() {
        let config = SiteConfig::default();
        let renderer = MarkdownRenderer::new();
        let fetcher = MemoryFetcher::new();
        let mut doc = article_page();

        let outcome = load_article(
            &mut doc,
            &config,
            &fetcher,
            Some(&renderer),
            Some("2024-05-01-gone.md"),
        )
        .await;
        assert_eq!(outcome, PipelineOutcome::Failed);
        assert_eq!(
            container(&doc).inner_html(),
            "<p>Fehler: Artikel konnte nicht geladen werden.</p>"
        );
        assert_eq!(doc.title(), "Artikel");
    }

    #[tokio::test]
    async fn test_missing_renderer_leaves_document_untouched() {
        let config = SiteConfig::default();
        let fetcher = MemoryFetcher::new().with("posts/a.md", "# A");
        let mut doc = article_page();
        let before = doc.clone();

        let outcome = load_article(&mut doc, &config, &fetcher, None, Some("a.md")).await;
        assert_eq!(outcome, PipelineOutcome::Aborted);
        assert_eq!(doc, before);
        assert_eq!(fetcher.calls(), 0);
    }
}
