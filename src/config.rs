// src/config.rs
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SalarError};
use crate::geo::projection::Projection;
use crate::types::{GeographicPosition, ReferenceNode};

/// Optional per-deployment configuration file, looked up in the working
/// directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "salar.toml";

/// Run configuration: projection, reference node and thresholds. Passed
/// explicitly into every component call; there are no module-level globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Target metric CRS identifier, e.g. `EPSG:32719` (UTM 19S).
    #[serde(default = "default_projection")]
    pub projection: String,
    #[serde(default = "default_reference")]
    pub reference: Option<ReferenceNode>,
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold_km: f64,
    #[serde(default = "default_proximity_radius")]
    pub proximity_radius_km: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            projection: default_projection(),
            reference: default_reference(),
            critical_threshold_km: default_critical_threshold(),
            proximity_radius_km: default_proximity_radius(),
        }
    }
}

fn default_projection() -> String {
    "EPSG:32719".to_string()
}

fn default_reference() -> Option<ReferenceNode> {
    Some(ReferenceNode {
        name: "Parque Industrial Güemes".to_string(),
        position: GeographicPosition::new(-24.6932, -65.0435),
    })
}

fn default_critical_threshold() -> f64 {
    300.0
}

fn default_proximity_radius() -> f64 {
    50.0
}

impl AnalysisConfig {
    /// Loads the configuration: from the given file, else from `salar.toml`
    /// in the working directory if present, else the built-in deployment
    /// defaults. The result is validated before it is returned.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting configuration fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::from_file(local)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `Config` if the TOML is invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SalarError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse_toml(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    /// `Config` if the TOML does not deserialize.
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SalarError::Config(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// `UnknownProjection` for an unparseable CRS identifier; `Config` for
    /// non-finite thresholds, a negative critical threshold, or an invalid
    /// reference position. A non-positive proximity radius is legal (it
    /// just produces empty neighbor sets).
    pub fn validate(&self) -> Result<()> {
        Projection::parse(&self.projection)?;

        if !self.critical_threshold_km.is_finite() || self.critical_threshold_km < 0.0 {
            return Err(SalarError::Config(format!(
                "critical_threshold_km must be a non-negative finite number, got {}",
                self.critical_threshold_km
            )));
        }
        if !self.proximity_radius_km.is_finite() {
            return Err(SalarError::Config(format!(
                "proximity_radius_km must be finite, got {}",
                self.proximity_radius_km
            )));
        }
        if let Some(reference) = &self.reference {
            if !reference.position.is_valid() {
                return Err(SalarError::InvalidCoordinate {
                    name: Some(reference.name.clone()),
                    lat: reference.position.lat,
                    lon: reference.position.lon,
                });
            }
        }
        Ok(())
    }
}
