//! Document model - the rendering surface the page scripts write into

mod document;
mod node;

pub use document::Document;
pub use node::{Element, Node};
