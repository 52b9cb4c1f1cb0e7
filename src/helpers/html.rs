//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

use crate::dom::Element;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Reverse `html_escape` for the entities it produces
pub fn html_unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Text content of an HTML fragment: tags removed, entities decoded
pub fn text_content_of(fragment: &str) -> String {
    html_unescape(&TAG.replace_all(fragment, ""))
}

/// Generate an anchor element
///
/// External links open in a new browsing context without handing over
/// `window.opener` or the referrer.
///
/// # Examples
/// ```ignore
/// link_to("index.html", "Home", false) // -> <a href="index.html">Home</a>
/// ```
pub fn link_to(href: &str, text: &str, external: bool) -> Element {
    let a = Element::new("a").attr("href", href);
    let a = if external {
        a.attr("target", "_blank").attr("rel", "noopener noreferrer")
    } else {
        a
    };
    a.text(text)
}
