//! # eco-routing
//!
//! Emissions-aware route selection over a fixed set of geographic stops.
//! Several tour heuristics propose visiting orders; each is classified by
//! road type from its geometry and scored for CO₂ under a vehicle, fuel and
//! traffic profile. The lowest-emission route is returned together with the
//! shortest one for comparison.
//!
//! ## Modules
//!
//! - [`models`] — Stops, routes, vehicle profiles, requests and results
//! - [`distance`] — Haversine distance, distance matrix and providers
//! - [`geometry`] — Planar convex hull over lat/lon
//! - [`constructive`] — Nearest neighbor, insertion heuristics, bypass, variants
//! - [`local_search`] — Open-path 2-opt
//! - [`classify`] — Route features and road-type rules
//! - [`emission`] — Analytic tables, oracle contract and scorer
//! - [`traffic`] — Traffic provider contract and hotspot table
//! - [`evaluation`] — Measures, classifies and scores one candidate
//! - [`selection`] — Candidate generation and greenest/shortest selection
//! - [`config`] — JSON-loadable tables
//! - [`error`] — Validation, configuration and oracle errors

pub mod classify;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod emission;
pub mod error;
pub mod evaluation;
pub mod geometry;
pub mod local_search;
pub mod models;
pub mod selection;
pub mod traffic;
