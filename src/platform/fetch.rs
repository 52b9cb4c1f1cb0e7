//! Resource fetching (the `fetch` stand-in)

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::FetchError;

/// Retrieves site resources by path relative to the site root
#[allow(async_fn_in_trait)]
pub trait HttpFetcher {
    /// Fetch a resource body as text
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Fetches resources from a site directory on disk
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolve a request path, refusing anything that escapes the root
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || path.is_empty() {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl HttpFetcher for FsFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let file = self.resolve(path)?;
        tracing::debug!("Fetching {:?}", file);
        tokio::fs::read_to_string(&file).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FetchError::NotFound(path.to_string())
            } else {
                FetchError::Io {
                    path: path.to_string(),
                    source: e,
                }
            }
        })
    }
}

/// Fetches resources from a deployed site over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl HttpFetcher for HttpClient {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Serves resources from memory and counts requests
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    resources: HashMap<String, String>,
    calls: AtomicUsize,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register a resource body
    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.resources.insert(path.to_string(), body.to_string());
        self
    }

    /// Number of fetches issued so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpFetcher for MemoryFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.resources
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}
