//! Emissions estimation for a scored route.
//!
//! - [`EmissionTables`] — analytic multipliers and ordered congestion rules
//! - [`EmissionOracle`] — external predictor contract, with [`LinearOracle`]
//! - [`OracleCalibration`] — turns a raw prediction into kilograms of CO₂
//! - [`EmissionScorer`] — picks a policy per call and falls back on failure

mod oracle;
mod scorer;
mod tables;

pub use oracle::{
    EmissionOracle, LinearOracle, OracleCalibration, OracleFeatures, RoadSpeeds, SpeedBand,
    FEATURE_COUNT,
};
pub use scorer::{EmissionScorer, ScoreResult, ScoreSource};
pub use tables::{ByFuel, ByTraffic, ByVehicle, EmissionTables, PenaltyRule};
