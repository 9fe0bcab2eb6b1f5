//! Journey planner over the route catalog.
//!
//! This module implements the route matching that answers:
//! "Which jeepney (or pair of jeepneys) takes me from here to there?"
//!
//! Candidate routes for each endpoint come from a proximity search; the
//! planner then tries a direct route and falls back to a single transfer.

mod config;
mod proximity;
mod search;

pub use config::{InvalidConfig, PlannerConfig};
pub use proximity::{NearbyRoute, find_routes_near};
pub use search::{
    DirectMatch, JourneyPlan, PlanError, Planner, TransferMatch, overlap_points, plan,
};
