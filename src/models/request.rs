//! Incoming optimisation request and its validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::stop::valid_latitude;
use super::{Stop, TrafficRegime, VehicleProfile};
use crate::error::RoutingError;

/// An optimisation request as it arrives from the transport layer.
///
/// Stops are kept as raw JSON so that malformed entries can be reported
/// precisely instead of failing deserialization wholesale.
///
/// # Examples
///
/// ```
/// use eco_routing::models::{OptimizeRequest, VehicleType};
///
/// let req: OptimizeRequest = serde_json::from_str(r#"{
///     "stops": [{"lat": 37.7749, "lon": -122.4194}, {"lat": 37.7849, "lon": -122.4094}],
///     "vehicle_type": "Truck"
/// }"#).unwrap();
///
/// let validated = req.validate().unwrap();
/// assert_eq!(validated.stops.len(), 2);
/// assert_eq!(validated.profile.vehicle, VehicleType::Truck);
/// assert!(!validated.traffic_specified);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Stops as `{"lat": .., "lon": ..}` objects.
    #[serde(default)]
    pub stops: Vec<Value>,
    /// Vehicle label, e.g. `"Car"`.
    #[serde(default)]
    pub vehicle_type: Option<String>,
    /// Fuel label, e.g. `"Petrol"`.
    #[serde(default)]
    pub fuel_type: Option<String>,
    /// Traffic label, e.g. `"Free flow"`.
    #[serde(default)]
    pub traffic_conditions: Option<String>,
}

/// A request whose stops passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    /// Stops in request order.
    pub stops: Vec<Stop>,
    /// Scoring parameters with defaults applied.
    pub profile: VehicleProfile,
    /// `true` when the request named a recognized traffic regime.
    ///
    /// When `false`, a traffic provider may supply the regime instead.
    pub traffic_specified: bool,
}

impl OptimizeRequest {
    /// Validates every stop and resolves the parameter labels.
    ///
    /// # Errors
    ///
    /// Returns the first [`RoutingError`] found, scanning stops in order.
    pub fn validate(&self) -> Result<ValidatedRequest, RoutingError> {
        let stops = parse_stops(&self.stops)?;
        let profile = VehicleProfile::from_labels(
            self.vehicle_type.as_deref(),
            self.fuel_type.as_deref(),
            self.traffic_conditions.as_deref(),
        );
        let traffic_specified = self
            .traffic_conditions
            .as_deref()
            .and_then(TrafficRegime::from_label)
            .is_some();
        Ok(ValidatedRequest {
            stops,
            profile,
            traffic_specified,
        })
    }
}

/// Parses raw JSON stop objects into [`Stop`]s.
///
/// # Errors
///
/// Fails on the first entry that is not an object, lacks `lat`/`lon`, has a
/// non-numeric coordinate, or has a coordinate outside its range.
pub fn parse_stops(raw: &[Value]) -> Result<Vec<Stop>, RoutingError> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| {
            let object = value
                .as_object()
                .ok_or(RoutingError::NotAnObject { index })?;
            let lat = coordinate(object, index, "lat")?;
            let lon = coordinate(object, index, "lon")?;
            Stop::new(lat, lon).ok_or_else(|| {
                let (field, value) = if valid_latitude(lat) {
                    ("lon", lon)
                } else {
                    ("lat", lat)
                };
                RoutingError::CoordinateOutOfRange {
                    index,
                    field,
                    value,
                }
            })
        })
        .collect()
}

fn coordinate(
    object: &serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<f64, RoutingError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(RoutingError::MissingCoordinate { index, field }),
        Some(value) => value
            .as_f64()
            .ok_or(RoutingError::NonNumericCoordinate { index, field }),
    }
}
