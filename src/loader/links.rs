//! Link collection pipeline - `links.md` to a list of link cards

use super::{render_error, PipelineOutcome};
use crate::config::SiteConfig;
use crate::content::{parse_links, LinkEntry};
use crate::dom::{Document, Element, Node};
use crate::platform::HttpFetcher;

/// Chain-link icon shown in front of every card
pub const LINK_ICON_SVG: &str = r#"<svg class="link-item-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M17 7h-4v2h4c1.65 0 3 1.35 3 3s-1.35 3-3 3h-4v2h4c2.76 0 5-2.24 5-5s-2.24-5-5-5zm-6 8H7c-1.65 0-3-1.35-3-3s1.35-3 3-3h4V7H7c-2.76 0-5 2.24-5 5s2.24 5 5 5h4v-2zm-3-4h8v2H8v-2z"/></svg>"#;

/// Load the link collection and render one card per complete entry
pub async fn load_link_collection<F: HttpFetcher>(
    doc: &mut Document,
    config: &SiteConfig,
    fetcher: &F,
) -> PipelineOutcome {
    let container_id = &config.dom.links_container;
    if !doc.contains_id(container_id) {
        return PipelineOutcome::MissingContainer;
    }

    let result = fetcher.fetch_text(&config.links_path).await;
    let Some(container) = doc.element_by_id_mut(container_id) else {
        return PipelineOutcome::MissingContainer;
    };

    match result {
        Ok(text) => {
            let entries = parse_links(&text);
            let items = render_link_items(&entries);
            let count = items.len();
            container.replace_children(items);
            tracing::info!("Rendered {} links", count);
            PipelineOutcome::Rendered(count)
        }
        Err(e) => {
            tracing::error!("Error fetching links: {}", e);
            render_error(container, "li", &config.messages.links_error);
            PipelineOutcome::Failed
        }
    }
}

/// One `<li class="link-item">` card per entry
pub fn render_link_items(entries: &[LinkEntry]) -> Vec<Node> {
    entries
        .iter()
        .map(|entry| {
            let anchor = Element::new("a")
                .attr("href", &entry.url)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .child(Element::new("h3").text(&entry.title));
            let text = Element::new("div")
                .attr("class", "link-item-text")
                .child(anchor)
                .child(Element::new("p").text(entry.desc_or_empty()));

            Element::new("li")
                .attr("class", "link-item")
                .child(Node::raw(LINK_ICON_SVG))
                .child(text)
                .into()
        })
        .collect()
}
