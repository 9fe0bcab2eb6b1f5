//! Rider-facing itineraries.
//!
//! Turns a geometric `JourneyPlan` into something a map layer can draw and a
//! rider can read: a coordinate sequence plus legs with distances and
//! estimated durations.

mod format;

pub use format::{Itinerary, ItineraryError, ItineraryLeg};
