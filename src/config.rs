//! Tunable parameters for scoring, bypass routing and traffic estimation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constructive::BypassCorridor;
use crate::emission::{EmissionTables, OracleCalibration};
use crate::error::ConfigError;
use crate::traffic::HotspotTable;

/// Every table the selector consults.
///
/// All sections are optional in JSON; missing sections take their defaults.
///
/// # Examples
///
/// ```
/// use eco_routing::config::RoutingConfig;
///
/// let config = RoutingConfig::from_json_str(r#"{
///     "bypass": {
///         "start": {"name": "Depot", "lat": 12.8456, "lon": 77.6603},
///         "end": {"name": "Hub", "lat": 13.0358, "lon": 77.5970}
///     }
/// }"#).unwrap();
/// assert!(config.bypass.is_some());
/// assert_eq!(config.emission.base_per_km.truck, 0.40);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub emission: EmissionTables,
    pub oracle: OracleCalibration,
    /// Corridor for the bypass constructor; no bypass candidate when absent.
    pub bypass: Option<BypassCorridor>,
    pub traffic: HotspotTable,
}

impl RoutingConfig {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })
    }

    /// Reads and parses a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded routing configuration from {}", path.display());
        Ok(config)
    }
}
