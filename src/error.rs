//! Error types shared by the capability layer and the content pipelines

use thiserror::Error;

/// Failure to retrieve a resource through an [`HttpFetcher`](crate::platform::HttpFetcher)
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Refusing to fetch path outside the site root: {0}")]
    InvalidPath(String),

    #[error("Request for {path} failed with status {status}")]
    Status { path: String, status: u16 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failure to persist a value in a [`KeyValueStore`](crate::platform::KeyValueStore)
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid store contents: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure inside a content pipeline, caught at the pipeline boundary
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
