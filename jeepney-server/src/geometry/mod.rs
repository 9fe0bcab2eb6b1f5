//! Geometry primitives over geographic points.
//!
//! All distances are meters, measured with the haversine formula. Nothing
//! in the engine compares raw degree deltas.

mod distance;
mod nearest;

pub use distance::{EARTH_RADIUS_M, distance_m, polyline_length_m};
pub use nearest::{GeometryError, NearestPoint, nearest_point_on_polyline};
