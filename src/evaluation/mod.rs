//! Candidate route evaluation.
//!
//! - [`RouteEvaluator`] — measures, classifies and scores one visiting order

mod evaluator;

pub use evaluator::RouteEvaluator;
