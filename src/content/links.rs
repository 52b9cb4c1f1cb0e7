//! Link collection parsing (`links.md`)
//!
//! Entries are separated by a line containing exactly `---`. Each entry is a
//! sequence of `KEY: value` lines, split on the first `": "`; keys are
//! case-insensitive and values may contain further colons.
//!
//! ```text
//! TITLE: Rust
//! URL: https://www.rust-lang.org
//! DESC: A language empowering everyone
//! ---
//! TITLE: Crates
//! URL: https://crates.io
//! ```

use indexmap::IndexMap;

/// Separator between two entries
const ENTRY_SEPARATOR: &str = "\n---\n";

/// A single link card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub url: String,
    pub title: String,
    pub desc: Option<String>,
}

impl LinkEntry {
    /// Build an entry from parsed fields; `None` unless URL and TITLE are set
    pub fn from_fields(fields: &IndexMap<String, String>) -> Option<Self> {
        let url = fields.get("URL").filter(|v| !v.is_empty())?;
        let title = fields.get("TITLE").filter(|v| !v.is_empty())?;
        Some(Self {
            url: url.clone(),
            title: title.clone(),
            desc: fields.get("DESC").cloned(),
        })
    }

    /// Description text, empty when absent
    pub fn desc_or_empty(&self) -> &str {
        self.desc.as_deref().unwrap_or("")
    }
}

/// Parse one entry block into uppercase keys and trimmed values
///
/// Lines without `": "` or with an empty key or value are skipped. A
/// repeated key keeps the last value.
pub fn parse_fields(block: &str) -> IndexMap<String, String> {
    let mut fields = IndexMap::new();

    for line in block.lines() {
        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }
        fields.insert(key.trim().to_uppercase(), value.trim().to_string());
    }

    fields
}

/// Parse the whole link collection, dropping incomplete entries
pub fn parse_links(text: &str) -> Vec<LinkEntry> {
    let text = text.replace("\r\n", "\n");
    let mut entries = Vec::new();

    for block in text.trim().split(ENTRY_SEPARATOR) {
        let fields = parse_fields(block);
        match LinkEntry::from_fields(&fields) {
            Some(entry) => entries.push(entry),
            None => {
                if !fields.is_empty() {
                    tracing::debug!("Skipping link entry without URL or TITLE: {:?}", fields);
                }
            }
        }
    }

    entries
}
