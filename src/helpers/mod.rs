//! Helper functions shared by the renderers
//!
//! HTML escaping and the navigation URLs the pipelines generate.

mod html;
mod url;

pub use html::*;
pub use url::*;
