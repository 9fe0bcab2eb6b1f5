//! Itinerary construction from plan matches.

use serde::Serialize;

use crate::domain::{Point, Route};
use crate::geometry::{NearestPoint, polyline_length_m};
use crate::planner::{DirectMatch, JourneyPlan, PlannerConfig, TransferMatch};

/// Errors from itinerary formatting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    /// Slicing the matched route left nothing to ride
    #[error("route {route} has no usable coordinates for this journey")]
    EmptyRoute { route: String },
}

/// One instruction of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryLeg {
    /// Instruction text, e.g. "Ride R1".
    pub text: String,
    /// Distance covered by this leg (meters).
    pub distance_m: f64,
    /// Estimated time for this leg (seconds).
    pub duration_s: f64,
}

impl ItineraryLeg {
    fn ride(route: &Route, distance_m: f64, config: &PlannerConfig) -> Self {
        Self {
            text: format!("Ride {}", route.name()),
            distance_m,
            duration_s: config.duration_for(distance_m),
        }
    }

    fn transfer(at: Point) -> Self {
        Self {
            text: format!("Transfer at {at}"),
            distance_m: 0.0,
            duration_s: 0.0,
        }
    }
}

/// A journey as shown to the rider.
///
/// # Invariants
///
/// - `coordinates` is non-empty
/// - totals are the sums over `legs`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub title: String,
    /// Path to draw, in travel order.
    pub coordinates: Vec<Point>,
    pub legs: Vec<ItineraryLeg>,
    pub total_distance_m: f64,
    pub total_duration_s: f64,
}

impl Itinerary {
    /// Format any plan. `NotFound` has no itinerary and yields `None`.
    pub fn from_plan(
        plan: &JourneyPlan,
        config: &PlannerConfig,
    ) -> Result<Option<Self>, ItineraryError> {
        match plan {
            JourneyPlan::Direct(m) => Self::from_direct(m, config).map(Some),
            JourneyPlan::Transfer(m) => Self::from_transfer(m, config).map(Some),
            JourneyPlan::NotFound => Ok(None),
        }
    }

    /// A single ride from the boarding point to the alighting point.
    ///
    /// The path is the part of the route between the two nearest points.
    pub fn from_direct(m: &DirectMatch, config: &PlannerConfig) -> Result<Self, ItineraryError> {
        let coordinates = ride_slice(&m.route, &m.start_nearest, &m.end_nearest)?;
        let distance = polyline_length_m(&coordinates);

        Ok(Self::new(
            m.route.name().to_string(),
            coordinates,
            vec![ItineraryLeg::ride(&m.route, distance, config)],
        ))
    }

    /// Ride, transfer, ride.
    ///
    /// The path is the whole first route, the transfer point, then the whole
    /// second route; each ride leg is the full length of its route.
    pub fn from_transfer(
        m: &TransferMatch,
        config: &PlannerConfig,
    ) -> Result<Self, ItineraryError> {
        let first = non_empty(&m.start_route)?;
        let second = non_empty(&m.end_route)?;

        let mut coordinates = Vec::with_capacity(first.len() + 1 + second.len());
        coordinates.extend_from_slice(first);
        coordinates.push(m.transfer_point);
        coordinates.extend_from_slice(second);

        let legs = vec![
            ItineraryLeg::ride(&m.start_route, polyline_length_m(first), config),
            ItineraryLeg::transfer(m.transfer_point),
            ItineraryLeg::ride(&m.end_route, polyline_length_m(second), config),
        ];

        Ok(Self::new(
            format!(
                "{} to {} (via transfer)",
                m.start_route.name(),
                m.end_route.name()
            ),
            coordinates,
            legs,
        ))
    }

    fn new(title: String, coordinates: Vec<Point>, legs: Vec<ItineraryLeg>) -> Self {
        let total_distance_m = legs.iter().map(|l| l.distance_m).sum();
        let total_duration_s = legs.iter().map(|l| l.duration_s).sum();
        Self {
            title,
            coordinates,
            legs,
            total_distance_m,
            total_duration_s,
        }
    }
}

/// The ridden part of `route`: boarding point, the vertices in between,
/// alighting point. Consecutive duplicates are dropped.
fn ride_slice(
    route: &Route,
    start: &NearestPoint,
    end: &NearestPoint,
) -> Result<Vec<Point>, ItineraryError> {
    let between = route
        .coordinates()
        .get(start.segment_index + 1..=end.segment_index)
        .filter(|_| start.segment_index <= end.segment_index)
        .ok_or_else(|| ItineraryError::EmptyRoute {
            route: route.name().to_string(),
        })?;

    let mut coordinates = Vec::with_capacity(between.len() + 2);
    coordinates.push(start.point);
    coordinates.extend_from_slice(between);
    coordinates.push(end.point);
    coordinates.dedup();

    Ok(coordinates)
}

fn non_empty(route: &Route) -> Result<&[Point], ItineraryError> {
    match route.coordinates() {
        [] => Err(ItineraryError::EmptyRoute {
            route: route.name().to_string(),
        }),
        coords => Ok(coords),
    }
}
