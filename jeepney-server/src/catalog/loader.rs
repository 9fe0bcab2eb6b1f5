//! Catalog loading from a file or a URL.

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use super::error::CatalogError;
use super::routes::RouteCatalog;

/// Where the route document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A local JSON file.
    File(PathBuf),
    /// An HTTP(S) URL serving the JSON document.
    Url(String),
}

impl CatalogSource {
    /// Interpret a configuration string.
    ///
    /// Strings starting with `http://` or `https://` are URLs; anything else
    /// is a file path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            CatalogSource::Url(s.to_string())
        } else {
            CatalogSource::File(PathBuf::from(s))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}

/// Configuration for the catalog loader.
#[derive(Debug, Clone)]
pub struct CatalogLoaderConfig {
    /// Where to read the document from
    pub source: CatalogSource,
    /// Request timeout in seconds (URL sources only)
    pub timeout_secs: u64,
}

impl CatalogLoaderConfig {
    /// Create a new config for the given source.
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            timeout_secs: 30,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Loads fresh `RouteCatalog`s from a configured source.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    http: reqwest::Client,
    source: CatalogSource,
}

impl CatalogLoader {
    /// Create a new loader.
    pub fn new(config: CatalogLoaderConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            source: config.source,
        })
    }

    /// The source this loader reads from.
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Read and validate a complete catalog.
    ///
    /// Nothing is returned unless every route in the document is valid.
    pub async fn load(&self) -> Result<RouteCatalog, CatalogError> {
        let text = match &self.source {
            CatalogSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
            CatalogSource::Url(url) => self.fetch(url).await?,
        };

        debug!(source = %self.source, bytes = text.len(), "Read route document");
        RouteCatalog::from_json(&text)
    }

    async fn fetch(&self, url: &str) -> Result<String, CatalogError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}
