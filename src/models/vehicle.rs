//! Vehicle, fuel, and traffic parameters.

use serde::{Deserialize, Serialize};

/// Kind of vehicle making the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Passenger car.
    #[default]
    Car,
    /// Motorcycle or scooter.
    Motorcycle,
    /// Goods truck.
    Truck,
    /// Bus.
    Bus,
}

impl VehicleType {
    /// Every vehicle type, in declaration order.
    pub const ALL: [VehicleType; 4] = [Self::Car, Self::Motorcycle, Self::Truck, Self::Bus];

    /// Parses a request label, case-insensitively.
    ///
    /// Returns `None` for unrecognized labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "car" => Some(Self::Car),
            "motorcycle" | "motorbike" => Some(Self::Motorcycle),
            "truck" => Some(Self::Truck),
            "bus" => Some(Self::Bus),
            _ => None,
        }
    }

    /// Returns `true` for trucks and buses.
    pub fn is_large(&self) -> bool {
        matches!(self, Self::Truck | Self::Bus)
    }
}

/// Fuel or drive train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    /// Battery electric.
    Electric,
    /// Petrol-electric hybrid.
    Hybrid,
    /// Petrol (gasoline).
    #[default]
    Petrol,
    /// Diesel.
    Diesel,
}

impl FuelType {
    /// Parses a request label, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "electric" | "ev" => Some(Self::Electric),
            "hybrid" => Some(Self::Hybrid),
            "petrol" | "gasoline" => Some(Self::Petrol),
            "diesel" => Some(Self::Diesel),
            _ => None,
        }
    }
}

/// Prevailing traffic conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficRegime {
    /// Roads are clear.
    FreeFlow,
    /// Normal daytime traffic.
    #[default]
    Moderate,
    /// Congested, stop-and-go.
    Heavy,
}

impl TrafficRegime {
    /// Parses a request label such as `"Free flow"`, `"free_flow"` or `"Heavy"`.
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "freeflow" | "free" | "light" => Some(Self::FreeFlow),
            "moderate" | "medium" => Some(Self::Moderate),
            "heavy" | "congested" => Some(Self::Heavy),
            _ => None,
        }
    }

    /// Maps a traffic level in `[0, 1]` onto a regime.
    ///
    /// Below 0.35 is free flow, below 0.65 moderate, anything else heavy.
    pub fn from_level(level: f64) -> Self {
        if level < 0.35 {
            Self::FreeFlow
        } else if level < 0.65 {
            Self::Moderate
        } else {
            Self::Heavy
        }
    }
}

/// The parameter set a route is scored under.
///
/// # Examples
///
/// ```
/// use eco_routing::models::{FuelType, TrafficRegime, VehicleProfile, VehicleType};
///
/// let p = VehicleProfile::from_labels(Some("Truck"), Some("diesel"), Some("Free flow"));
/// assert_eq!(p.vehicle, VehicleType::Truck);
/// assert_eq!(p.fuel, FuelType::Diesel);
/// assert_eq!(p.traffic, TrafficRegime::FreeFlow);
///
/// let d = VehicleProfile::from_labels(None, Some("kerosene"), None);
/// assert_eq!(d, VehicleProfile::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Vehicle type.
    pub vehicle: VehicleType,
    /// Fuel type.
    pub fuel: FuelType,
    /// Traffic regime.
    pub traffic: TrafficRegime,
}

impl VehicleProfile {
    /// Creates a profile.
    pub fn new(vehicle: VehicleType, fuel: FuelType, traffic: TrafficRegime) -> Self {
        Self {
            vehicle,
            fuel,
            traffic,
        }
    }

    /// Builds a profile from optional request labels.
    ///
    /// Absent or unrecognized labels fall back to car, petrol and moderate.
    pub fn from_labels(vehicle: Option<&str>, fuel: Option<&str>, traffic: Option<&str>) -> Self {
        Self {
            vehicle: parse_or_default(vehicle, "vehicle_type", VehicleType::from_label),
            fuel: parse_or_default(fuel, "fuel_type", FuelType::from_label),
            traffic: parse_or_default(traffic, "traffic_conditions", TrafficRegime::from_label),
        }
    }

    /// Returns a copy with a different traffic regime.
    pub fn with_traffic(mut self, traffic: TrafficRegime) -> Self {
        self.traffic = traffic;
        self
    }
}

pub(crate) fn parse_or_default<T: Default + std::fmt::Debug>(
    label: Option<&str>,
    field: &str,
    parse: fn(&str) -> Option<T>,
) -> T {
    let Some(label) = label else {
        return T::default();
    };
    parse(label).unwrap_or_else(|| {
        let fallback = T::default();
        log::debug!("unrecognized {field} {label:?}, using {fallback:?}");
        fallback
    })
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Car", VehicleType::Car)]
    #[case("TRUCK", VehicleType::Truck)]
    #[case(" bus ", VehicleType::Bus)]
    #[case("Motorcycle", VehicleType::Motorcycle)]
    fn test_vehicle_labels(#[case] label: &str, #[case] expected: VehicleType) {
        assert_eq!(VehicleType::from_label(label), Some(expected));
    }

    #[rstest]
    #[case("Free flow", TrafficRegime::FreeFlow)]
    #[case("free_flow", TrafficRegime::FreeFlow)]
    #[case("FreeFlow", TrafficRegime::FreeFlow)]
    #[case("Moderate", TrafficRegime::Moderate)]
    #[case("heavy", TrafficRegime::Heavy)]
    fn test_traffic_labels(#[case] label: &str, #[case] expected: TrafficRegime) {
        assert_eq!(TrafficRegime::from_label(label), Some(expected));
    }

    #[test]
    fn test_fuel_labels() {
        assert_eq!(FuelType::from_label("Electric"), Some(FuelType::Electric));
        assert_eq!(FuelType::from_label("hybrid"), Some(FuelType::Hybrid));
        assert_eq!(FuelType::from_label("Diesel"), Some(FuelType::Diesel));
        assert_eq!(FuelType::from_label("coal"), None);
    }

    #[test]
    fn test_traffic_from_level() {
        assert_eq!(TrafficRegime::from_level(0.0), TrafficRegime::FreeFlow);
        assert_eq!(TrafficRegime::from_level(0.34), TrafficRegime::FreeFlow);
        assert_eq!(TrafficRegime::from_level(0.5), TrafficRegime::Moderate);
        assert_eq!(TrafficRegime::from_level(0.65), TrafficRegime::Heavy);
        assert_eq!(TrafficRegime::from_level(1.0), TrafficRegime::Heavy);
    }

    #[test]
    fn test_profile_defaults() {
        let p = VehicleProfile::from_labels(None, None, None);
        assert_eq!(p.vehicle, VehicleType::Car);
        assert_eq!(p.fuel, FuelType::Petrol);
        assert_eq!(p.traffic, TrafficRegime::Moderate);
    }

    #[test]
    fn test_profile_unrecognized_falls_back() {
        let p = VehicleProfile::from_labels(Some("spaceship"), Some("Electric"), Some("gridlock"));
        assert_eq!(p.vehicle, VehicleType::Car);
        assert_eq!(p.fuel, FuelType::Electric);
        assert_eq!(p.traffic, TrafficRegime::Moderate);
    }

    #[test]
    fn test_large_vehicles() {
        let large: Vec<VehicleType> = VehicleType::ALL
            .into_iter()
            .filter(VehicleType::is_large)
            .collect();
        assert_eq!(large, vec![VehicleType::Truck, VehicleType::Bus]);
    }

    #[test]
    fn test_is_large() {
        assert!(VehicleType::Truck.is_large());
        assert!(VehicleType::Bus.is_large());
        assert!(!VehicleType::Car.is_large());
        assert!(!VehicleType::Motorcycle.is_large());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&TrafficRegime::FreeFlow).expect("serialize");
        assert_eq!(json, "\"free_flow\"");
        let back: TrafficRegime = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, TrafficRegime::FreeFlow);
    }
}
