//! Error types raised at the boundaries of the routing core.
//!
//! The algorithms themselves are total over validated input; errors only
//! arise while validating a request, loading configuration, or talking to an
//! emissions oracle.

use std::path::PathBuf;

use thiserror::Error;

/// Validation failures for an incoming request.
///
/// Raised before any algorithm runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoutingError {
    /// A stop entry is not a JSON object.
    #[error("stop {index} is not an object")]
    NotAnObject {
        /// 0-based position in the request.
        index: usize,
    },
    /// A coordinate field is absent.
    #[error("stop {index} is missing `{field}`")]
    MissingCoordinate {
        /// 0-based position in the request.
        index: usize,
        /// Either `lat` or `lon`.
        field: &'static str,
    },
    /// A coordinate field is present but is not a number.
    #[error("stop {index} has a non-numeric `{field}`")]
    NonNumericCoordinate {
        /// 0-based position in the request.
        index: usize,
        /// Either `lat` or `lon`.
        field: &'static str,
    },
    /// A coordinate is NaN, infinite, or outside its geographic range.
    #[error("stop {index} has an out-of-range `{field}` ({value})")]
    CoordinateOutOfRange {
        /// 0-based position in the request.
        index: usize,
        /// Either `lat` or `lon`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Failures while loading a [`RoutingConfig`](crate::config::RoutingConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read configuration at {}", path.display())]
    Read {
        /// Requested path.
        path: PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The configuration document is not valid JSON for the expected shape.
    #[error("failed to parse configuration")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Failures reported by an [`EmissionOracle`](crate::emission::EmissionOracle).
///
/// These never abort a request: the scorer falls back to the analytic policy.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OracleError {
    /// The oracle could not be reached or has no parameters loaded.
    #[error("emission oracle unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
    /// The oracle answered with a value that cannot be used.
    #[error("emission oracle returned an unusable value ({value})")]
    InvalidOutput {
        /// The rejected prediction.
        value: f64,
    },
}
