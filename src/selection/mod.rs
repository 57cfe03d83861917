//! Candidate generation and greenest/shortest selection.
//!
//! - [`generate_candidates`] — default heuristics, bypass and opt-in variants
//!   in a fixed order
//! - [`RouteSelector`] — evaluates candidates and keeps both minima

mod candidates;
mod selector;

pub use candidates::{generate_candidates, Candidate, CandidatePlan, Heuristic};
pub use selector::RouteSelector;
