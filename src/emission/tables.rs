//! Analytic emission policy: per-parameter multipliers and congestion rules.

use serde::{Deserialize, Serialize};

use crate::classify::RoadType;
use crate::models::{FuelType, TrafficRegime, VehicleProfile, VehicleType};

/// One value per [`VehicleType`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ByVehicle<T> {
    pub car: T,
    pub motorcycle: T,
    pub truck: T,
    pub bus: T,
}

impl<T: Copy> ByVehicle<T> {
    /// Looks up the entry for `vehicle`.
    pub fn get(&self, vehicle: VehicleType) -> T {
        match vehicle {
            VehicleType::Car => self.car,
            VehicleType::Motorcycle => self.motorcycle,
            VehicleType::Truck => self.truck,
            VehicleType::Bus => self.bus,
        }
    }
}

/// One value per [`FuelType`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ByFuel<T> {
    pub electric: T,
    pub hybrid: T,
    pub petrol: T,
    pub diesel: T,
}

impl<T: Copy> ByFuel<T> {
    /// Looks up the entry for `fuel`.
    pub fn get(&self, fuel: FuelType) -> T {
        match fuel {
            FuelType::Electric => self.electric,
            FuelType::Hybrid => self.hybrid,
            FuelType::Petrol => self.petrol,
            FuelType::Diesel => self.diesel,
        }
    }
}

/// One value per [`TrafficRegime`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ByTraffic<T> {
    pub free_flow: T,
    pub moderate: T,
    pub heavy: T,
}

impl<T: Copy> ByTraffic<T> {
    /// Looks up the entry for `traffic`.
    pub fn get(&self, traffic: TrafficRegime) -> T {
        match traffic {
            TrafficRegime::FreeFlow => self.free_flow,
            TrafficRegime::Moderate => self.moderate,
            TrafficRegime::Heavy => self.heavy,
        }
    }
}

/// A congestion rule: applies `factor` when the road type matches and the
/// vehicle and traffic filters (if any) contain the profile's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyRule {
    pub road_type: RoadType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicles: Option<Vec<VehicleType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic: Option<Vec<TrafficRegime>>,
    pub factor: f64,
}

impl PenaltyRule {
    /// Returns `true` if this rule applies.
    pub fn matches(&self, road_type: RoadType, profile: &VehicleProfile) -> bool {
        self.road_type == road_type
            && self
                .vehicles
                .as_ref()
                .map_or(true, |v| v.contains(&profile.vehicle))
            && self
                .traffic
                .as_ref()
                .map_or(true, |t| t.contains(&profile.traffic))
    }
}

/// Multiplier tables for the analytic policy.
///
/// `adjusted = distance * base_per_km * fuel * traffic * congestion_penalty`,
/// with emissions in kilograms of CO₂.
///
/// # Examples
///
/// ```
/// use eco_routing::classify::RoadType;
/// use eco_routing::emission::EmissionTables;
/// use eco_routing::models::{FuelType, TrafficRegime, VehicleProfile, VehicleType};
///
/// let tables = EmissionTables::default();
/// let truck = VehicleProfile::new(VehicleType::Truck, FuelType::Diesel, TrafficRegime::FreeFlow);
/// assert_eq!(tables.congestion_penalty(RoadType::Highway, &truck), 0.2);
/// assert_eq!(tables.congestion_penalty(RoadType::Mixed, &truck), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionTables {
    /// Kilograms of CO₂ per kilometre for a petrol vehicle in moderate traffic.
    pub base_per_km: ByVehicle<f64>,
    pub fuel_multiplier: ByFuel<f64>,
    pub traffic_multiplier: ByTraffic<f64>,
    /// Evaluated in order; the first match wins.
    pub penalty_rules: Vec<PenaltyRule>,
    /// Applied when no rule matches.
    pub default_penalty: f64,
}

impl EmissionTables {
    /// `base_per_km * fuel * traffic` for `profile`.
    pub fn per_km(&self, profile: &VehicleProfile) -> f64 {
        self.base_per_km.get(profile.vehicle)
            * self.fuel_multiplier.get(profile.fuel)
            * self.traffic_multiplier.get(profile.traffic)
    }

    /// Factor from the first matching penalty rule.
    pub fn congestion_penalty(&self, road_type: RoadType, profile: &VehicleProfile) -> f64 {
        self.penalty_rules
            .iter()
            .find(|rule| rule.matches(road_type, profile))
            .map_or(self.default_penalty, |rule| rule.factor)
    }
}

impl Default for EmissionTables {
    fn default() -> Self {
        let large: Vec<VehicleType> = VehicleType::ALL
            .into_iter()
            .filter(VehicleType::is_large)
            .collect();
        let large = Some(large);
        let heavy = Some(vec![TrafficRegime::Heavy]);
        Self {
            base_per_km: ByVehicle {
                car: 0.15,
                motorcycle: 0.10,
                truck: 0.40,
                bus: 0.55,
            },
            fuel_multiplier: ByFuel {
                electric: 0.3,
                hybrid: 0.7,
                petrol: 1.0,
                diesel: 1.1,
            },
            traffic_multiplier: ByTraffic {
                free_flow: 0.9,
                moderate: 1.0,
                heavy: 1.3,
            },
            penalty_rules: vec![
                PenaltyRule {
                    road_type: RoadType::Highway,
                    vehicles: large.clone(),
                    traffic: None,
                    factor: 0.2,
                },
                PenaltyRule {
                    road_type: RoadType::DenseUrban,
                    vehicles: None,
                    traffic: heavy.clone(),
                    factor: 2.2,
                },
                PenaltyRule {
                    road_type: RoadType::Suburban,
                    vehicles: None,
                    traffic: heavy,
                    factor: 1.6,
                },
                PenaltyRule {
                    road_type: RoadType::Rural,
                    vehicles: large,
                    traffic: None,
                    factor: 0.8,
                },
            ],
            default_penalty: 1.0,
        }
    }
}
