//! Selection output types.

use serde::{Deserialize, Serialize};

use super::Route;
use crate::classify::RouteMetrics;
use crate::emission::ScoreResult;
use crate::selection::Heuristic;

/// A candidate route with its measured distance, features and score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedRoute {
    /// Constructor that produced the route.
    pub heuristic: Heuristic,
    /// `true` if 2-opt was applied after construction.
    pub polished: bool,
    pub route: Route,
    pub metrics: RouteMetrics,
    pub score: ScoreResult,
    /// 1-based request position of each route entry.
    pub input_positions: Vec<usize>,
}

impl EvaluatedRoute {
    /// Distance as measured by the selector's distance provider.
    pub fn distance(&self) -> f64 {
        self.metrics.total_distance
    }

    /// Emissions the route is ranked by.
    pub fn adjusted_emissions(&self) -> f64 {
        self.score.adjusted_emissions
    }
}

/// Trade-off between the greenest and the shortest route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteComparison {
    /// `best - shortest`, in kilometres; never negative.
    pub distance_delta: f64,
    /// `shortest - best` adjusted emissions, in kilograms; never negative.
    pub emissions_savings: f64,
    /// `true` if the two routes visit stops in a different order.
    pub is_different_route: bool,
}

impl RouteComparison {
    /// Compares the greenest route `best` against the shortest route.
    pub fn between(best: &EvaluatedRoute, shortest: &EvaluatedRoute) -> Self {
        Self {
            distance_delta: best.distance() - shortest.distance(),
            emissions_savings: shortest.adjusted_emissions() - best.adjusted_emissions(),
            is_different_route: best.route != shortest.route,
        }
    }
}

/// Outcome of one selection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Candidate with the lowest adjusted emissions.
    pub best: EvaluatedRoute,
    /// Candidate with the lowest distance.
    pub shortest: EvaluatedRoute,
    pub comparison: RouteComparison,
    pub candidates_evaluated: usize,
}

impl SelectionResult {
    /// Assembles a result and its comparison block.
    pub fn new(best: EvaluatedRoute, shortest: EvaluatedRoute, candidates_evaluated: usize) -> Self {
        let comparison = RouteComparison::between(&best, &shortest);
        Self {
            best,
            shortest,
            comparison,
            candidates_evaluated,
        }
    }
}
