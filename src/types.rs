// src/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicPosition {
    pub lat: f64,
    pub lon: f64,
}

impl GeographicPosition {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true if both components are finite and within the WGS84
    /// valid ranges (lat [-90, 90], lon [-180, 180]).
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && self.lat.abs() <= 90.0
            && self.lon.abs() <= 180.0
    }
}

/// A position in the planar metric system, meters easting/northing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPosition {
    pub x: f64,
    pub y: f64,
}

/// A lithium extraction site as loaded from the data file. Immutable once
/// loaded; columns the core does not understand ride along in `extra`.
#[derive(Debug, Clone, Serialize)]
pub struct Site {
    pub name: String,
    pub company: String,
    pub salar: String,
    pub position: GeographicPosition,
    pub extra: BTreeMap<String, String>,
}

/// The fixed logistics hub every site distance is measured against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceNode {
    pub name: String,
    #[serde(flatten)]
    pub position: GeographicPosition,
}

/// Logistics classification of a single site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Critical,
    Standard,
}

impl Classification {
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Standard => "standard",
        }
    }
}

/// A site within collaboration radius of another site.
#[derive(Debug, Clone, Serialize)]
pub struct Neighbor {
    pub name: String,
    pub distance_km: f64,
}

/// Per-site analysis output: reference distance, classification and the
/// neighbor set, as plain data for whatever presentation consumes it.
#[derive(Debug, Clone, Serialize)]
pub struct SiteRecord {
    pub name: String,
    pub company: String,
    pub salar: String,
    pub position: GeographicPosition,
    pub distance_km: f64,
    pub classification: Classification,
    pub neighbors: Vec<Neighbor>,
}

impl SiteRecord {
    /// Returns true if the site has at least one collaboration candidate.
    #[must_use]
    pub fn has_neighbors(&self) -> bool {
        !self.neighbors.is_empty()
    }
}

/// Aggregated results for a full analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub reference: ReferenceNode,
    pub projection: String,
    pub critical_threshold_km: f64,
    pub proximity_radius_km: f64,
    pub sites: Vec<SiteRecord>,
    pub duration_ms: u128,
}

impl AnalysisReport {
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Number of sites classified as critical logistics.
    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.sites
            .iter()
            .filter(|s| s.classification.is_critical())
            .count()
    }

    /// Mean distance to the reference node, 0.0 for an empty run.
    #[must_use]
    pub fn mean_distance_km(&self) -> f64 {
        if self.sites.is_empty() {
            return 0.0;
        }
        let total: f64 = self.sites.iter().map(|s| s.distance_km).sum();
        total / self.sites.len() as f64
    }
}
