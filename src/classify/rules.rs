//! Road-type labels and the ordered rule list that assigns them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geometry-derived approximation of the roads a route runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadType {
    /// Long, straight legs over a long trip.
    Highway,
    /// Short legs with frequent direction changes in a tight area.
    DenseUrban,
    /// Medium legs, few turns, compact area.
    Suburban,
    /// Long legs over a spread-out area.
    Rural,
    /// None of the above.
    #[default]
    Mixed,
    /// Too few stops to tell.
    Unknown,
}

impl RoadType {
    /// Every label that [`classify`] can return for a route with segments.
    pub const CLASSIFIED: [RoadType; 5] = [
        Self::Highway,
        Self::DenseUrban,
        Self::Suburban,
        Self::Rural,
        Self::Mixed,
    ];

    /// The snake-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Highway => "highway",
            Self::DenseUrban => "dense_urban",
            Self::Suburban => "suburban",
            Self::Rural => "rural",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assigns a road type from route features. First matching rule wins:
///
/// 1. `highway` — longest leg > 15 km, < 0.5 turns/km, trip > 20 km
/// 2. `dense_urban` — mean leg < 3 km, > 2 turns/km, spread < 0.02
/// 3. `suburban` — mean leg < 8 km, < 2 turns/km, spread < 0.05
/// 4. `rural` — mean leg > 5 km, spread > 0.05
/// 5. `mixed` otherwise
///
/// # Examples
///
/// ```
/// use eco_routing::classify::{classify, RoadType};
///
/// assert_eq!(classify(10.0, 16.0, 0.1, 0.3, 25.0), RoadType::Highway);
/// assert_eq!(classify(4.0, 6.0, 0.01, 1.0, 12.0), RoadType::Suburban);
/// ```
pub fn classify(
    avg_segment_km: f64,
    max_segment_km: f64,
    coordinate_spread: f64,
    turns_per_km: f64,
    total_distance_km: f64,
) -> RoadType {
    if max_segment_km > 15.0 && turns_per_km < 0.5 && total_distance_km > 20.0 {
        RoadType::Highway
    } else if avg_segment_km < 3.0 && turns_per_km > 2.0 && coordinate_spread < 0.02 {
        RoadType::DenseUrban
    } else if avg_segment_km < 8.0 && turns_per_km < 2.0 && coordinate_spread < 0.05 {
        RoadType::Suburban
    } else if avg_segment_km > 5.0 && coordinate_spread > 0.05 {
        RoadType::Rural
    } else {
        RoadType::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::highway(10.0, 16.0, 0.1, 0.3, 25.0, RoadType::Highway)]
    #[case::dense_urban(1.0, 2.0, 0.01, 3.0, 5.0, RoadType::DenseUrban)]
    #[case::suburban(5.0, 7.0, 0.03, 1.0, 15.0, RoadType::Suburban)]
    #[case::rural(9.0, 12.0, 0.08, 0.2, 30.0, RoadType::Rural)]
    #[case::mixed(4.0, 6.0, 0.03, 3.0, 12.0, RoadType::Mixed)]
    fn test_each_branch(
        #[case] avg: f64,
        #[case] max: f64,
        #[case] spread: f64,
        #[case] turns: f64,
        #[case] total: f64,
        #[case] expected: RoadType,
    ) {
        assert_eq!(classify(avg, max, spread, turns, total), expected);
    }

    #[test]
    fn test_rule_order_highway_beats_rural() {
        // Also satisfies the rural rule; highway is checked first.
        assert_eq!(classify(9.0, 16.0, 0.08, 0.2, 30.0), RoadType::Highway);
    }

    #[test]
    fn test_boundaries_are_strict() {
        assert_eq!(classify(10.0, 15.0, 0.1, 0.3, 25.0), RoadType::Rural);
        assert_eq!(classify(3.0, 4.0, 0.01, 3.0, 6.0), RoadType::Mixed);
    }

    #[test]
    fn test_deterministic() {
        let a = classify(2.5, 4.0, 0.015, 2.5, 7.5);
        let b = classify(2.5, 4.0, 0.015, 2.5, 7.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RoadType::DenseUrban.to_string(), "dense_urban");
        assert_eq!(
            serde_json::to_string(&RoadType::Highway).expect("serialize"),
            "\"highway\""
        );
    }
}
