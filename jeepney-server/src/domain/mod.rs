//! Domain types for the jeepney route matcher.
//!
//! This module contains the core domain model types that represent
//! validated route data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod point;
mod route;

pub use error::DomainError;
pub use point::{InvalidPoint, Point};
pub use route::Route;
