//! Table-driven traffic estimation from named congestion hotspots.

use serde::{Deserialize, Serialize};

use super::provider::{TrafficAnalysis, TrafficProvider};
use crate::distance::{haversine, path_length};
use crate::models::Stop;

/// A circular area with a known base congestion level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub radius_km: f64,
    /// Base congestion level in `[0, 1]`.
    pub level: f64,
}

impl Hotspot {
    fn contains(&self, stop: &Stop) -> bool {
        Stop::new(self.lat, self.lon).is_some_and(|centre| haversine(&centre, stop) <= self.radius_km)
    }
}

/// Congestion multiplier for an hour range, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RushHour {
    pub from: u8,
    pub to: u8,
    pub multiplier: f64,
}

/// A route-length class used to scale free-flow speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteClass {
    pub label: String,
    /// The class applies to routes strictly longer than this.
    pub longer_than_km: f64,
    pub speed_factor: f64,
}

/// Parameters for [`HotspotTraffic`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotspotTable {
    /// Checked in order; the first containing hotspot sets the base level.
    pub hotspots: Vec<Hotspot>,
    /// Base level outside every hotspot.
    pub fallback_level: f64,
    /// Checked in order; hours outside every range use 1.0.
    pub rush_hours: Vec<RushHour>,
    /// Checked in order; routes matching none use `default_class`.
    pub route_classes: Vec<RouteClass>,
    pub default_class: RouteClass,
    /// Speed at level 0 before the route-class factor.
    pub free_flow_kmh: f64,
    /// Speed at level 1 before the route-class factor.
    pub congested_kmh: f64,
    pub min_speed_kmh: f64,
}

impl HotspotTable {
    fn hour_multiplier(&self, hour: u8) -> f64 {
        self.rush_hours
            .iter()
            .find(|r| (r.from..=r.to).contains(&hour))
            .map_or(1.0, |r| r.multiplier)
    }

    fn route_class(&self, distance_km: f64) -> &RouteClass {
        self.route_classes
            .iter()
            .find(|c| distance_km > c.longer_than_km)
            .unwrap_or(&self.default_class)
    }

    fn base_level(&self, stop: &Stop) -> f64 {
        self.hotspots
            .iter()
            .find(|h| h.contains(stop))
            .map_or(self.fallback_level, |h| h.level)
    }
}

impl Default for HotspotTable {
    fn default() -> Self {
        Self {
            hotspots: Vec::new(),
            fallback_level: 0.2,
            rush_hours: vec![
                RushHour {
                    from: 7,
                    to: 9,
                    multiplier: 1.4,
                },
                RushHour {
                    from: 17,
                    to: 19,
                    multiplier: 1.5,
                },
                RushHour {
                    from: 12,
                    to: 14,
                    multiplier: 1.1,
                },
                RushHour {
                    from: 22,
                    to: 23,
                    multiplier: 0.6,
                },
                RushHour {
                    from: 0,
                    to: 5,
                    multiplier: 0.6,
                },
            ],
            route_classes: vec![
                RouteClass {
                    label: "highway".to_string(),
                    longer_than_km: 15.0,
                    speed_factor: 1.2,
                },
                RouteClass {
                    label: "mixed".to_string(),
                    longer_than_km: 8.0,
                    speed_factor: 1.0,
                },
            ],
            default_class: RouteClass {
                label: "city".to_string(),
                longer_than_km: 0.0,
                speed_factor: 0.8,
            },
            free_flow_kmh: 60.0,
            congested_kmh: 20.0,
            min_speed_kmh: 10.0,
        }
    }
}

/// [`TrafficProvider`] backed by a [`HotspotTable`].
///
/// Each stop takes the level of the first hotspot containing it, scaled by
/// the hour multiplier and capped at 1. The route level is the mean over
/// stops.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::traffic::{Hotspot, HotspotTable, HotspotTraffic, TrafficProvider};
///
/// let mut table = HotspotTable::default();
/// table.hotspots.push(Hotspot {
///     name: "Junction".to_string(),
///     lat: 12.9177,
///     lon: 77.6238,
///     radius_km: 2.0,
///     level: 0.8,
/// });
/// let traffic = HotspotTraffic::new(table);
///
/// let route = vec![Stop::new(12.918, 77.624).unwrap()];
/// let a = traffic.analyze(&route, 18);
/// assert_eq!(a.traffic_level, 1.0);
/// assert_eq!(a.route_type_label, "city");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotspotTraffic {
    table: HotspotTable,
}

impl HotspotTraffic {
    /// Creates a provider over `table`.
    pub fn new(table: HotspotTable) -> Self {
        Self { table }
    }

    /// Mean congestion level over `route` at `hour`.
    pub fn traffic_level(&self, route: &[Stop], hour: u8) -> f64 {
        if route.is_empty() {
            return 0.0;
        }
        let multiplier = self.table.hour_multiplier(hour);
        let total: f64 = route
            .iter()
            .map(|s| (self.table.base_level(s) * multiplier).min(1.0))
            .sum();
        total / route.len() as f64
    }
}

impl TrafficProvider for HotspotTraffic {
    fn analyze(&self, route: &[Stop], hour: u8) -> TrafficAnalysis {
        let level = self.traffic_level(route, hour);
        let class = self.table.route_class(path_length(route));
        let free = self.table.free_flow_kmh * class.speed_factor;
        let congested = self.table.congested_kmh * class.speed_factor;
        let speed = (free - level * (free - congested)).max(self.table.min_speed_kmh);
        log::debug!(
            "traffic level {level:.2} at {hour:02}:00 over {} stops, {} route at {speed:.1} km/h",
            route.len(),
            class.label
        );
        TrafficAnalysis {
            traffic_level: level,
            estimated_speed_kmh: speed,
            route_type_label: class.label.clone(),
        }
    }
}
