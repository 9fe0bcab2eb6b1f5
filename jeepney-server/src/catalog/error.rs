//! Catalog error types.

use std::path::PathBuf;

/// Errors that can occur when loading the route catalog.
///
/// Any of these aborts the whole load; no partial catalog is produced.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A route entry has a missing or mistyped field, too few coordinates,
    /// or a duplicate name
    #[error("invalid route data at entry {index}: {reason}")]
    InvalidRouteData { index: usize, reason: String },

    /// A coordinate is not a valid `[lat, lng]` pair
    #[error("malformed coordinate {index} in route {route}: {reason}")]
    MalformedCoordinate {
        route: String,
        index: usize,
        reason: String,
    },

    /// The document is not JSON of the expected shape
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Reading a local catalog file failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote server returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Reload requested on a store that has no source to load from
    #[error("catalog has no source to reload from")]
    NoSource,
}
