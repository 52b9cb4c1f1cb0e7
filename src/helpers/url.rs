//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::HashMap;

use crate::config::SiteConfig;

/// Characters escaped inside a query value; filenames keep `-`, `.` and `_` readable
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

/// Encode a query parameter value
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Link to the article view for a post filename
///
/// # Examples
/// ```ignore
/// article_url(&config, "2024-05-01-my-post.md") // -> "article.html?post=2024-05-01-my-post.md"
/// ```
pub fn article_url(config: &SiteConfig, filename: &str) -> String {
    format!(
        "{}?{}={}",
        config.article_page,
        config.post_query_param,
        encode_query_value(filename)
    )
}

/// Parse a query string (`?a=1&b=2` or `a=1&b=2`) into a map
///
/// `+` is decoded as a space, the first occurrence of a key wins.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(key);
        let value = decode_component(value);
        params.entry(key).or_insert(value);
    }

    params
}

fn decode_component(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().into_owned()
}
