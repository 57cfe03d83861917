//! Traffic provider contract.

use serde::{Deserialize, Serialize};

use crate::models::Stop;

/// Traffic estimate for one route at one hour of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficAnalysis {
    /// Congestion level in `[0, 1]`.
    pub traffic_level: f64,
    pub estimated_speed_kmh: f64,
    /// Free-form label such as `"highway"` or `"city"`.
    pub route_type_label: String,
}

/// Source of traffic levels and speed estimates.
///
/// Calls are synchronous; the caller owns any timeout or retry policy.
pub trait TrafficProvider {
    /// Analyzes `route` at `hour` (0–23, local time).
    fn analyze(&self, route: &[Stop], hour: u8) -> TrafficAnalysis;
}
