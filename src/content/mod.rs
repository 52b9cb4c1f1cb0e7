//! Content module - post index, link collection and markdown processing

mod links;
mod markdown;
mod post;

pub use links::{parse_fields, parse_links, LinkEntry};
pub use markdown::{MarkdownRenderer, RenderMarkdown, RenderedMarkdown};
pub use post::{format_title, PostIndex, PostRef};
