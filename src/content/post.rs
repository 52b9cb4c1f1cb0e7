//! Post references and the post index

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DATE_PREFIX: Regex = Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})-").unwrap();
}

/// Turn a post filename into a display title
///
/// Strips the `YYYY-MM-DD-` prefix and the `.md` extension, turns hyphens
/// into spaces and capitalizes the first character only.
///
/// # Examples
/// ```ignore
/// format_title("2024-05-01-my-post.md") // -> "My post"
/// ```
pub fn format_title(filename: &str) -> String {
    let title = DATE_PREFIX.replace(filename, "");
    let title = title.strip_suffix(".md").unwrap_or(&*title);
    let title = title.replace('-', " ");

    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A post, identified by its filename
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostRef {
    filename: String,
}

impl PostRef {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn title(&self) -> String {
        format_title(&self.filename)
    }

    /// Date encoded in the filename prefix, if valid
    pub fn date(&self) -> Option<NaiveDate> {
        let caps = DATE_PREFIX.captures(&self.filename)?;
        NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()
    }
}

/// The `posts.json` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostIndex {
    pub posts: Vec<String>,
}

impl PostIndex {
    /// Parse the index from JSON
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the index as pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Posts in descending filename order, i.e. newest date prefix first
    ///
    /// The source order is not trusted.
    pub fn newest_first(&self) -> Vec<PostRef> {
        let mut posts: Vec<PostRef> = self.posts.iter().map(|p| PostRef::new(p)).collect();
        posts.sort();
        posts.reverse();
        posts
    }
}
