//! Oracle-backed scoring: feature encoding, calibration, and a linear oracle.

use serde::{Deserialize, Serialize};

use super::tables::{ByFuel, ByTraffic, ByVehicle};
use crate::classify::RoadType;
use crate::error::OracleError;
use crate::models::{FuelType, TrafficRegime, VehicleProfile, VehicleType};

/// Number of features sent to an [`EmissionOracle`].
pub const FEATURE_COUNT: usize = 8;

/// External predictor of emissions from a fixed-length feature vector.
///
/// The prediction is unitless; [`OracleCalibration`] turns it into kilograms.
/// Implementations may fail, in which case the scorer uses the analytic
/// policy for that route.
pub trait EmissionOracle {
    /// Predicts raw emissions for one feature vector.
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, OracleError>;
}

/// Model inputs for one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OracleFeatures {
    pub speed_kmh: f64,
    pub engine_size: f64,
    pub traffic_code: f64,
    pub vehicle_code: f64,
    pub fuel_code: f64,
}

impl OracleFeatures {
    /// Numeric code the model was trained with.
    pub fn vehicle_code(vehicle: VehicleType) -> f64 {
        match vehicle {
            VehicleType::Car => 0.0,
            VehicleType::Truck => 1.0,
            VehicleType::Bus => 2.0,
            VehicleType::Motorcycle => 3.0,
        }
    }

    /// Numeric code the model was trained with.
    pub fn fuel_code(fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Electric => 0.0,
            FuelType::Hybrid => 1.0,
            FuelType::Petrol => 2.0,
            FuelType::Diesel => 3.0,
        }
    }

    /// Numeric code the model was trained with.
    pub fn traffic_code(traffic: TrafficRegime) -> f64 {
        match traffic {
            TrafficRegime::FreeFlow => 0.0,
            TrafficRegime::Moderate => 1.0,
            TrafficRegime::Heavy => 2.0,
        }
    }

    /// Assembles features for `profile` at `speed_kmh`.
    pub fn new(profile: &VehicleProfile, speed_kmh: f64, engine_size: f64) -> Self {
        Self {
            speed_kmh,
            engine_size,
            traffic_code: Self::traffic_code(profile.traffic),
            vehicle_code: Self::vehicle_code(profile.vehicle),
            fuel_code: Self::fuel_code(profile.fuel),
        }
    }

    /// The vector in model order, including the three interaction terms.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.speed_kmh,
            self.engine_size,
            self.traffic_code,
            self.vehicle_code,
            self.fuel_code,
            self.speed_kmh * self.speed_kmh,
            self.engine_size * self.vehicle_code,
            self.speed_kmh * self.traffic_code,
        ]
    }
}

/// Typical speeds per road type, in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadSpeeds {
    pub highway: f64,
    pub suburban: f64,
    pub dense_urban: f64,
    pub rural: f64,
    pub mixed: f64,
}

impl RoadSpeeds {
    /// Speed for `road_type`, or `None` for [`RoadType::Unknown`].
    pub fn get(&self, road_type: RoadType) -> Option<f64> {
        match road_type {
            RoadType::Highway => Some(self.highway),
            RoadType::Suburban => Some(self.suburban),
            RoadType::DenseUrban => Some(self.dense_urban),
            RoadType::Rural => Some(self.rural),
            RoadType::Mixed => Some(self.mixed),
            RoadType::Unknown => None,
        }
    }
}

/// Speed-efficiency multiplier applied below `up_to_kmh`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBand {
    pub up_to_kmh: f64,
    /// Whether `up_to_kmh` itself belongs to this band.
    #[serde(default)]
    pub inclusive: bool,
    pub factor: f64,
}

impl SpeedBand {
    fn contains(&self, speed_kmh: f64) -> bool {
        if self.inclusive {
            speed_kmh <= self.up_to_kmh
        } else {
            speed_kmh < self.up_to_kmh
        }
    }
}

/// Converts a raw oracle prediction into kilograms of CO₂.
///
/// The per-km prediction is corrected by fuel, engine size and a speed
/// efficiency curve, clamped to `[min_grams_per_km, max_grams_per_km]`, then
/// scaled by the calibration constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleCalibration {
    pub fuel_factor: ByFuel<f64>,
    /// Engine displacement in litres.
    pub engine_size: ByVehicle<f64>,
    pub speed_kmh: ByTraffic<RoadSpeeds>,
    /// Speed when the road type is unknown.
    pub default_speed_kmh: f64,
    /// Checked in order; the first containing band wins.
    pub speed_bands: Vec<SpeedBand>,
    /// Factor above every band.
    pub top_speed_factor: f64,
    pub engine_factor_base: f64,
    pub engine_factor_per_litre: f64,
    /// Kilometres the model's raw prediction refers to.
    pub distance_scale_km: f64,
    pub min_grams_per_km: f64,
    pub max_grams_per_km: f64,
    pub calibration: f64,
}

impl OracleCalibration {
    /// Typical speed for a regime and road type.
    pub fn speed(&self, traffic: TrafficRegime, road_type: RoadType) -> f64 {
        self.speed_kmh
            .get(traffic)
            .get(road_type)
            .unwrap_or(self.default_speed_kmh)
    }

    /// Multiplier from the speed-efficiency curve.
    pub fn speed_factor(&self, speed_kmh: f64) -> f64 {
        self.speed_bands
            .iter()
            .find(|band| band.contains(speed_kmh))
            .map_or(self.top_speed_factor, |band| band.factor)
    }

    /// Multiplier from engine displacement.
    pub fn engine_factor(&self, engine_size: f64) -> f64 {
        self.engine_factor_base + engine_size * self.engine_factor_per_litre
    }

    /// Turns a raw prediction for a route of `distance_km` into kilograms,
    /// before any congestion penalty.
    pub fn to_kilograms(
        &self,
        prediction: f64,
        distance_km: f64,
        fuel: FuelType,
        engine_size: f64,
        speed_kmh: f64,
    ) -> f64 {
        if distance_km <= 0.0 {
            return 0.0;
        }
        let raw_grams = prediction * (distance_km / self.distance_scale_km);
        let per_km = raw_grams / distance_km
            * self.fuel_factor.get(fuel)
            * self.engine_factor(engine_size)
            * self.speed_factor(speed_kmh);
        let clamped = per_km.clamp(self.min_grams_per_km, self.max_grams_per_km);
        clamped * distance_km / 1000.0 * self.calibration
    }
}

impl Default for OracleCalibration {
    fn default() -> Self {
        Self {
            fuel_factor: ByFuel {
                electric: 0.4,
                hybrid: 0.8,
                petrol: 1.0,
                diesel: 1.05,
            },
            engine_size: ByVehicle {
                car: 2.0,
                motorcycle: 0.8,
                truck: 4.5,
                bus: 6.0,
            },
            speed_kmh: ByTraffic {
                free_flow: RoadSpeeds {
                    highway: 85.0,
                    suburban: 55.0,
                    dense_urban: 45.0,
                    rural: 65.0,
                    mixed: 55.0,
                },
                moderate: RoadSpeeds {
                    highway: 70.0,
                    suburban: 40.0,
                    dense_urban: 30.0,
                    rural: 50.0,
                    mixed: 40.0,
                },
                heavy: RoadSpeeds {
                    highway: 50.0,
                    suburban: 25.0,
                    dense_urban: 18.0,
                    rural: 40.0,
                    mixed: 30.0,
                },
            },
            default_speed_kmh: 35.0,
            speed_bands: vec![
                SpeedBand {
                    up_to_kmh: 20.0,
                    inclusive: false,
                    factor: 1.8,
                },
                SpeedBand {
                    up_to_kmh: 40.0,
                    inclusive: false,
                    factor: 1.4,
                },
                SpeedBand {
                    up_to_kmh: 70.0,
                    inclusive: true,
                    factor: 1.0,
                },
                SpeedBand {
                    up_to_kmh: 90.0,
                    inclusive: true,
                    factor: 1.1,
                },
            ],
            top_speed_factor: 1.3,
            engine_factor_base: 0.8,
            engine_factor_per_litre: 0.1,
            distance_scale_km: 10.0,
            min_grams_per_km: 20.0,
            max_grams_per_km: 1200.0,
            calibration: 3.0,
        }
    }
}

/// Standard-scaled linear model over the eight oracle features.
///
/// Parameters are usually loaded from JSON produced by an offline fit.
///
/// # Examples
///
/// ```
/// use eco_routing::emission::{EmissionOracle, LinearOracle};
///
/// let oracle: LinearOracle = serde_json::from_str(r#"{
///     "means":   [0, 0, 0, 0, 0, 0, 0, 0],
///     "scales":  [1, 1, 1, 1, 1, 1, 1, 1],
///     "weights": [2, 0, 0, 0, 0, 0, 0, 0],
///     "bias": 100
/// }"#).unwrap();
/// let y = oracle.predict(&[10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
/// assert_eq!(y, 120.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearOracle {
    pub means: [f64; FEATURE_COUNT],
    pub scales: [f64; FEATURE_COUNT],
    pub weights: [f64; FEATURE_COUNT],
    pub bias: f64,
}

impl EmissionOracle for LinearOracle {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, OracleError> {
        let mut y = self.bias;
        for i in 0..FEATURE_COUNT {
            let scale = self.scales[i];
            if scale == 0.0 || !scale.is_finite() {
                return Err(OracleError::Unavailable {
                    reason: format!("scaler has unusable scale {scale} for feature {i}"),
                });
            }
            y += self.weights[i] * (features[i] - self.means[i]) / scale;
        }
        if y.is_finite() {
            Ok(y)
        } else {
            Err(OracleError::InvalidOutput { value: y })
        }
    }
}
