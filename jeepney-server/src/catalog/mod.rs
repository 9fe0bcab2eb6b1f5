//! Route catalog: the fixed set of jeepney routes.
//!
//! Routes are loaded once from a JSON document (a local file or a URL),
//! validated atomically, and then shared read-only. Reloading builds a
//! fresh catalog and swaps it in; readers keep whatever snapshot they hold.

mod document;
mod error;
mod loader;
mod routes;
mod store;

pub use document::{RouteDocument, RouteEntry};
pub use error::CatalogError;
pub use loader::{CatalogLoader, CatalogLoaderConfig, CatalogSource};
pub use routes::RouteCatalog;
pub use store::CatalogStore;
