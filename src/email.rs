//! Contact address obfuscation
//!
//! The address never appears in the page markup; it is assembled from its
//! parts when the page loads. This only deters naive scrapers.

use crate::config::{EmailConfig, SiteConfig};
use crate::dom::Document;

#[derive(Debug, Clone)]
pub struct EmailObfuscator {
    user: String,
    domain: String,
    element_id: String,
}

impl EmailObfuscator {
    pub fn new(config: &SiteConfig) -> Self {
        let EmailConfig {
            user,
            domain,
            element_id,
        } = config.email.clone();
        Self {
            user,
            domain,
            element_id,
        }
    }

    pub fn address(&self) -> String {
        format!("{}@{}", self.user, self.domain)
    }

    /// Fill in the contact link; returns false when the page has none
    pub fn apply(&self, doc: &mut Document) -> bool {
        let Some(link) = doc.element_by_id_mut(&self.element_id) else {
            return false;
        };
        let address = self.address();
        link.set_attr("href", &format!("mailto:{}", address));
        link.set_text(&address);
        true
    }
}
