//! Configuration module

mod site;

pub use site::DomConfig;
pub use site::EmailConfig;
pub use site::MarkdownConfig;
pub use site::MessagesConfig;
pub use site::SiteConfig;
