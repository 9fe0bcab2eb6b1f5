//! Routes passing near a point.

use std::sync::Arc;

use crate::catalog::RouteCatalog;
use crate::domain::{Point, Route};
use crate::geometry::{GeometryError, NearestPoint, nearest_point_on_polyline};

/// A route within reach of some query point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyRoute {
    /// The route.
    pub route: Arc<Route>,

    /// Position of the route in the catalog; its identity for this snapshot.
    pub catalog_index: usize,

    /// Closest point of the route to the query.
    pub nearest: NearestPoint,
}

/// Find every route whose path passes within `threshold_m` of `point`.
///
/// Results are in catalog order. An empty result is normal: it means the
/// point is out of walking range of every route.
///
/// # Errors
///
/// Propagates `GeometryError::EmptyPolyline`, which only a corrupt route
/// can trigger.
pub fn find_routes_near(
    catalog: &RouteCatalog,
    point: Point,
    threshold_m: f64,
) -> Result<Vec<NearbyRoute>, GeometryError> {
    let mut nearby = Vec::new();

    for (catalog_index, route) in catalog.routes().iter().enumerate() {
        let nearest = nearest_point_on_polyline(route.coordinates(), point)?;
        if nearest.distance_m <= threshold_m {
            nearby.push(NearbyRoute {
                route: Arc::clone(route),
                catalog_index,
                nearest,
            });
        }
    }

    Ok(nearby)
}
