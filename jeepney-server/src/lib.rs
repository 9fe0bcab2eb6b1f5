//! Jeepney route matching server.
//!
//! A web application that answers: "Which jeepney do I ride from here to
//! there, and where do I change if one isn't enough?"

pub mod catalog;
pub mod domain;
pub mod geometry;
pub mod itinerary;
pub mod planner;
pub mod settings;
pub mod web;
