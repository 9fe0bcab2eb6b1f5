//! Direct and transfer journey search.
//!
//! Tries, in order, a single route serving both points and then a pair of
//! routes meeting at a transfer point. The first success wins; simpler
//! journeys are always preferred.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::RouteCatalog;
use crate::domain::{Point, Route};
use crate::geometry::{GeometryError, NearestPoint, distance_m};

use super::config::{InvalidConfig, PlannerConfig};
use super::proximity::{NearbyRoute, find_routes_near};

/// Error from journey planning.
///
/// Not finding a journey is not an error; see `JourneyPlan::NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A route's geometry is unusable
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Planner configuration is unusable
    #[error(transparent)]
    InvalidConfig(#[from] InvalidConfig),
}

/// A journey served by one route, boarded and alighted in travel order.
///
/// # Invariants
///
/// `start_nearest.segment_index <= end_nearest.segment_index`
#[derive(Debug, Clone, PartialEq)]
pub struct DirectMatch {
    pub route: Arc<Route>,
    /// Boarding point on `route`, closest to the start.
    pub start_nearest: NearestPoint,
    /// Alighting point on `route`, closest to the end.
    pub end_nearest: NearestPoint,
}

/// A journey on two routes that meet at `transfer_point`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferMatch {
    pub start_route: Arc<Route>,
    pub end_route: Arc<Route>,
    /// A coordinate of `start_route` within tolerance of a coordinate of `end_route`.
    pub transfer_point: Point,
    /// Boarding point on `start_route`.
    pub start_nearest: NearestPoint,
    /// Alighting point on `end_route`.
    pub end_nearest: NearestPoint,
}

/// Outcome of planning a journey.
#[derive(Debug, Clone, PartialEq)]
pub enum JourneyPlan {
    Direct(DirectMatch),
    Transfer(TransferMatch),
    /// No direct or single-transfer journey exists
    NotFound,
}

impl JourneyPlan {
    /// Returns true unless this is `NotFound`.
    pub fn is_found(&self) -> bool {
        !matches!(self, JourneyPlan::NotFound)
    }

    /// Number of vehicle changes: 0 for direct, 1 for transfer.
    pub fn changes(&self) -> Option<usize> {
        match self {
            JourneyPlan::Direct(_) => Some(0),
            JourneyPlan::Transfer(_) => Some(1),
            JourneyPlan::NotFound => None,
        }
    }
}

/// Journey planner over one catalog snapshot.
pub struct Planner<'a> {
    catalog: &'a RouteCatalog,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(catalog: &'a RouteCatalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Plan a journey from `start` to `end`.
    ///
    /// Deterministic: the same catalog and points always give the same plan.
    pub fn plan(&self, start: Point, end: Point) -> Result<JourneyPlan, PlanError> {
        self.config.validate()?;

        let threshold = self.config.proximity_threshold_m;
        let start_routes = find_routes_near(self.catalog, start, threshold)?;
        let end_routes = find_routes_near(self.catalog, end, threshold)?;

        debug!(
            %start,
            %end,
            start_candidates = start_routes.len(),
            end_candidates = end_routes.len(),
            "Found candidate routes"
        );

        if let Some(direct) = find_direct(&start_routes, &end_routes) {
            debug!(route = direct.route.name(), "Direct route found");
            return Ok(JourneyPlan::Direct(direct));
        }

        if let Some(transfer) =
            find_transfer(&start_routes, &end_routes, self.config.transfer_tolerance_m)
        {
            debug!(
                from = transfer.start_route.name(),
                to = transfer.end_route.name(),
                at = %transfer.transfer_point,
                "Transfer route found"
            );
            return Ok(JourneyPlan::Transfer(transfer));
        }

        debug!("No route found");
        Ok(JourneyPlan::NotFound)
    }
}

/// Plan a journey against `catalog`. Shorthand for `Planner::new(..).plan(..)`.
pub fn plan(
    catalog: &RouteCatalog,
    start: Point,
    end: Point,
    config: &PlannerConfig,
) -> Result<JourneyPlan, PlanError> {
    Planner::new(catalog, config).plan(start, end)
}

/// First route, in catalog order, near both points and ridden forwards.
fn find_direct(start_routes: &[NearbyRoute], end_routes: &[NearbyRoute]) -> Option<DirectMatch> {
    start_routes.iter().find_map(|s| {
        let e = end_routes
            .iter()
            .find(|e| e.catalog_index == s.catalog_index)?;

        // Boarding after the alighting point would mean riding backwards.
        (s.nearest.segment_index <= e.nearest.segment_index).then(|| DirectMatch {
            route: Arc::clone(&s.route),
            start_nearest: s.nearest,
            end_nearest: e.nearest,
        })
    })
}

/// First (start route, end route) pair that meets somewhere.
///
/// Pairs are tried start-major in catalog order. A route is never paired
/// with itself.
fn find_transfer(
    start_routes: &[NearbyRoute],
    end_routes: &[NearbyRoute],
    tolerance_m: f64,
) -> Option<TransferMatch> {
    for s in start_routes {
        for e in end_routes {
            if s.catalog_index == e.catalog_index {
                continue;
            }

            let meeting = overlap_points(s.route.coordinates(), e.route.coordinates(), tolerance_m)
                .next();
            if let Some(transfer_point) = meeting {
                return Some(TransferMatch {
                    start_route: Arc::clone(&s.route),
                    end_route: Arc::clone(&e.route),
                    transfer_point,
                    start_nearest: s.nearest,
                    end_nearest: e.nearest,
                });
            }
        }
    }

    None
}

/// Coordinates of `a` lying within `tolerance_m` of some coordinate of `b`.
///
/// Yielded lazily in `a`'s order.
pub fn overlap_points<'a>(
    a: &'a [Point],
    b: &'a [Point],
    tolerance_m: f64,
) -> impl Iterator<Item = Point> + 'a {
    a.iter()
        .copied()
        .filter(move |&pa| b.iter().any(|&pb| distance_m(pa, pb) <= tolerance_m))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
