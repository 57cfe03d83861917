//! Per-route emission scoring with analytic fallback.

use serde::{Deserialize, Serialize};

use super::oracle::{EmissionOracle, OracleCalibration, OracleFeatures};
use super::tables::EmissionTables;
use crate::classify::RoadType;
use crate::error::OracleError;
use crate::models::VehicleProfile;

/// Which policy produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Analytic,
    Oracle,
}

/// Emissions estimate for one route under one [`VehicleProfile`].
///
/// All emissions are kilograms of CO₂.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Estimate before the congestion penalty.
    pub raw_emissions: f64,
    /// `raw_emissions * penalty_factor`; the value routes are ranked by.
    pub adjusted_emissions: f64,
    pub penalty_factor: f64,
    pub source: ScoreSource,
}

/// Scores routes from distance, profile and road type.
///
/// Built either analytic-only or with an oracle. An oracle is consulted per
/// call; if it fails or answers with a negative or non-finite value, that
/// route is scored analytically and a warning is logged.
///
/// # Examples
///
/// ```
/// use eco_routing::classify::RoadType;
/// use eco_routing::emission::{EmissionScorer, EmissionTables, ScoreSource};
/// use eco_routing::models::VehicleProfile;
///
/// let tables = EmissionTables::default();
/// let scorer = EmissionScorer::analytic(&tables);
/// let score = scorer.score(10.0, RoadType::Mixed, &VehicleProfile::default(), None);
/// assert!((score.adjusted_emissions - 1.5).abs() < 1e-9);
/// assert_eq!(score.source, ScoreSource::Analytic);
/// ```
#[derive(Clone, Copy)]
pub struct EmissionScorer<'a> {
    tables: &'a EmissionTables,
    oracle: Option<(&'a OracleCalibration, &'a dyn EmissionOracle)>,
}

impl<'a> EmissionScorer<'a> {
    /// A scorer using only the analytic tables.
    pub fn analytic(tables: &'a EmissionTables) -> Self {
        Self {
            tables,
            oracle: None,
        }
    }

    /// A scorer that asks `oracle` first.
    pub fn with_oracle(
        tables: &'a EmissionTables,
        calibration: &'a OracleCalibration,
        oracle: &'a dyn EmissionOracle,
    ) -> Self {
        Self {
            tables,
            oracle: Some((calibration, oracle)),
        }
    }

    /// Scores a route of `distance_km`.
    ///
    /// `speed_kmh` overrides the speed the oracle features would otherwise
    /// derive from the traffic regime and road type. It has no effect on the
    /// analytic policy. A zero-length route scores zero without consulting
    /// the oracle.
    pub fn score(
        &self,
        distance_km: f64,
        road_type: RoadType,
        profile: &VehicleProfile,
        speed_kmh: Option<f64>,
    ) -> ScoreResult {
        let Some((calibration, oracle)) = self.oracle else {
            return self.score_analytic(distance_km, road_type, profile);
        };
        if distance_km <= 0.0 {
            return self.score_analytic(distance_km, road_type, profile);
        }
        match self.score_oracle(distance_km, road_type, profile, speed_kmh, calibration, oracle) {
            Ok(score) => score,
            Err(err) => {
                log::warn!("{err}; scoring {distance_km:.2} km route analytically");
                self.score_analytic(distance_km, road_type, profile)
            }
        }
    }

    /// Scores with the analytic tables only.
    pub fn score_analytic(
        &self,
        distance_km: f64,
        road_type: RoadType,
        profile: &VehicleProfile,
    ) -> ScoreResult {
        let penalty_factor = self.tables.congestion_penalty(road_type, profile);
        let raw_emissions = distance_km * self.tables.per_km(profile);
        ScoreResult {
            raw_emissions,
            adjusted_emissions: raw_emissions * penalty_factor,
            penalty_factor,
            source: ScoreSource::Analytic,
        }
    }

    fn score_oracle(
        &self,
        distance_km: f64,
        road_type: RoadType,
        profile: &VehicleProfile,
        speed_kmh: Option<f64>,
        calibration: &OracleCalibration,
        oracle: &dyn EmissionOracle,
    ) -> Result<ScoreResult, OracleError> {
        let speed = speed_kmh.unwrap_or_else(|| calibration.speed(profile.traffic, road_type));
        let engine_size = calibration.engine_size.get(profile.vehicle);
        let features = OracleFeatures::new(profile, speed, engine_size);
        let prediction = oracle.predict(&features.to_array())?;
        if !prediction.is_finite() || prediction < 0.0 {
            return Err(OracleError::InvalidOutput { value: prediction });
        }

        let raw_emissions =
            calibration.to_kilograms(prediction, distance_km, profile.fuel, engine_size, speed);
        let penalty_factor = self.tables.congestion_penalty(road_type, profile);
        Ok(ScoreResult {
            raw_emissions,
            adjusted_emissions: raw_emissions * penalty_factor,
            penalty_factor,
            source: ScoreSource::Oracle,
        })
    }
}

impl std::fmt::Debug for EmissionScorer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmissionScorer")
            .field("tables", self.tables)
            .field("oracle", &self.oracle.is_some())
            .finish()
    }
}
