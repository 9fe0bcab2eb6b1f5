//! Data transfer objects for web requests and responses.
//!
//! The `/route` response follows the OSRM route service shape so that map
//! front ends written against OSRM can draw it unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::RouteCatalog;
use crate::domain::{Point, Route};
use crate::geometry::{NearestPoint, distance_m};
use crate::itinerary::{Itinerary, ItineraryLeg};
use crate::planner::JourneyPlan;

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Start point as `lat,lng`
    pub start: String,

    /// End point as `lat,lng`
    pub end: String,
}

/// Response for a found journey.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Always `"Ok"`
    pub code: &'static str,

    /// The journey, as a single-element list
    pub routes: Vec<RouteResult>,

    /// Start and end snapped onto the boarding and alighting routes
    pub waypoints: Vec<WaypointResult>,
}

/// A planned journey.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Itinerary title, e.g. "R1" or "R1 to R2 (via transfer)"
    pub name: String,

    /// Path to draw, as `[lat, lng]` pairs
    pub geometry: Vec<Point>,

    pub legs: Vec<LegResult>,

    /// Total distance in meters
    pub distance: f64,

    /// Total duration in seconds
    pub duration: f64,

    /// Number of vehicle changes
    pub changes: usize,
}

/// One instruction of a journey.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Instruction text, e.g. "Ride R1"
    pub summary: String,

    /// Distance in meters
    pub distance: f64,

    /// Duration in seconds
    pub duration: f64,
}

/// A query point snapped onto a route.
#[derive(Debug, Serialize)]
pub struct WaypointResult {
    /// Route the point was snapped onto
    pub name: String,

    /// Snapped location as `[lat, lng]`
    pub location: Point,

    /// Distance in meters from the query point to `location`
    pub distance: f64,
}

/// Response when no journey exists.
#[derive(Debug, Serialize)]
pub struct NoRouteResponse {
    /// Always `"NoRoute"`
    pub code: &'static str,

    pub message: String,
}

/// Response listing the loaded routes.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// When the catalog was loaded
    pub loaded_at: DateTime<Utc>,

    pub routes: Vec<RouteSummary>,
}

/// A route as drawn on the map.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub color: String,
    pub coordinates: Vec<Point>,
}

/// Response after a catalog reload.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    /// Number of routes in the new catalog
    pub routes: usize,

    /// When the new catalog was loaded
    pub loaded_at: DateTime<Utc>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteResponse {
    /// Create from a found plan and its itinerary.
    pub fn new(start: Point, end: Point, plan: &JourneyPlan, itinerary: &Itinerary) -> Self {
        Self {
            code: "Ok",
            routes: vec![RouteResult::from_itinerary(
                itinerary,
                plan.changes().unwrap_or_default(),
            )],
            waypoints: WaypointResult::for_plan(start, end, plan),
        }
    }
}

impl RouteResult {
    /// Create from an itinerary.
    pub fn from_itinerary(itinerary: &Itinerary, changes: usize) -> Self {
        Self {
            name: itinerary.title.clone(),
            geometry: itinerary.coordinates.clone(),
            legs: itinerary.legs.iter().map(LegResult::from_leg).collect(),
            distance: itinerary.total_distance_m,
            duration: itinerary.total_duration_s,
            changes,
        }
    }
}

impl LegResult {
    /// Create from an itinerary leg.
    pub fn from_leg(leg: &ItineraryLeg) -> Self {
        Self {
            summary: leg.text.clone(),
            distance: leg.distance_m,
            duration: leg.duration_s,
        }
    }
}

impl WaypointResult {
    fn snapped(query: Point, route: &Route, nearest: &NearestPoint) -> Self {
        Self {
            name: route.name().to_string(),
            location: nearest.point,
            distance: distance_m(query, nearest.point),
        }
    }

    /// Boarding and alighting waypoints. Empty when no journey was found.
    pub fn for_plan(start: Point, end: Point, plan: &JourneyPlan) -> Vec<Self> {
        match plan {
            JourneyPlan::Direct(m) => vec![
                Self::snapped(start, &m.route, &m.start_nearest),
                Self::snapped(end, &m.route, &m.end_nearest),
            ],
            JourneyPlan::Transfer(m) => vec![
                Self::snapped(start, &m.start_route, &m.start_nearest),
                Self::snapped(end, &m.end_route, &m.end_nearest),
            ],
            JourneyPlan::NotFound => Vec::new(),
        }
    }
}

impl NoRouteResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: "NoRoute",
            message: message.into(),
        }
    }
}

impl RoutesResponse {
    /// Create from a catalog snapshot, in catalog order.
    pub fn from_catalog(catalog: &RouteCatalog) -> Self {
        let routes = catalog
            .routes()
            .iter()
            .map(|r| RouteSummary {
                name: r.name().to_string(),
                color: r.color().to_string(),
                coordinates: r.coordinates().to_vec(),
            })
            .collect();

        Self {
            loaded_at: catalog.loaded_at(),
            routes,
        }
    }
}

impl ReloadResponse {
    pub fn from_catalog(catalog: &RouteCatalog) -> Self {
        Self {
            routes: catalog.len(),
            loaded_at: catalog.loaded_at(),
        }
    }
}
