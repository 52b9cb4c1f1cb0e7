//! Injected platform capabilities
//!
//! The page scripts never touch ambient globals. Storage, network access and
//! the OS color-scheme signal are passed in through these traits so every
//! pipeline runs the same against a browser shim, a site directory or a fake.

mod fetch;
mod store;

pub use fetch::{FsFetcher, HttpClient, HttpFetcher, MemoryFetcher};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Source of the OS-level color-scheme preference
pub trait MediaQuery {
    /// `Some(true)` when the OS prefers dark, `None` when it reports nothing
    fn prefers_dark(&self) -> Option<bool>;
}

/// A color-scheme source with a fixed answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedScheme(pub Option<bool>);

impl MediaQuery for FixedScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
