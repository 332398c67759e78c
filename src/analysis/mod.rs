// src/analysis/mod.rs
//! Core analysis pipeline: project once, measure reference distances and
//! neighbor sets from the same projected coordinates, classify.

pub mod classify;
pub mod proximity;

pub use classify::classify;
pub use proximity::find_neighbors;

use std::time::Instant;

use crate::config::AnalysisConfig;
use crate::error::{Result, SalarError};
use crate::geo::distance;
use crate::geo::projection::Projection;
use crate::types::{AnalysisReport, Neighbor, ProjectedPosition, Site, SiteRecord};

/// The analysis engine. Holds the run configuration; every call to
/// [`Engine::analyze`] is a pure function of its inputs, with no state
/// carried across runs.
pub struct Engine {
    config: AnalysisConfig,
    projection: Projection,
}

impl Engine {
    /// Builds an engine from a validated configuration.
    ///
    /// # Errors
    /// Returns `UnknownProjection` if the configured CRS identifier does not
    /// parse.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let projection = Projection::parse(&config.projection)?;
        Ok(Self { config, projection })
    }

    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Runs the full pipeline over a sequence of sites.
    ///
    /// An empty slice is a valid degenerate case and produces an empty
    /// report. The first invalid coordinate aborts the run: data integrity
    /// over partial results.
    ///
    /// # Errors
    /// `MissingReferenceNode` if no reference is configured,
    /// `InvalidCoordinate` (tagged with the offending site's name) if any
    /// position fails validation.
    pub fn analyze(&self, sites: &[Site]) -> Result<AnalysisReport> {
        let start = Instant::now();

        let reference = self
            .config
            .reference
            .clone()
            .ok_or(SalarError::MissingReferenceNode)?;

        // One projected position per site, under the same transform as the
        // reference node. Both distance passes below consume this vector,
        // so the two reported figures can never drift apart.
        let mut projected: Vec<ProjectedPosition> = Vec::with_capacity(sites.len());
        for site in sites {
            let p = self
                .projection
                .project(site.position)
                .map_err(|e| e.for_site(&site.name))?;
            projected.push(p);
        }
        let reference_projected = self
            .projection
            .project(reference.position)
            .map_err(|e| e.for_site(&reference.name))?;

        let distances = distance::reference_distances(&projected, reference_projected);
        let neighbors = proximity::find_neighbors(&projected, self.config.proximity_radius_km);

        let records: Vec<SiteRecord> = sites
            .iter()
            .enumerate()
            .map(|(i, site)| SiteRecord {
                name: site.name.clone(),
                company: site.company.clone(),
                salar: site.salar.clone(),
                position: site.position,
                distance_km: distances[i],
                classification: classify::classify(
                    distances[i],
                    self.config.critical_threshold_km,
                ),
                neighbors: neighbors[i]
                    .iter()
                    .map(|&(j, d)| Neighbor {
                        name: sites[j].name.clone(),
                        distance_km: d,
                    })
                    .collect(),
            })
            .collect();

        Ok(AnalysisReport {
            reference,
            projection: self.config.projection.clone(),
            critical_threshold_km: self.config.critical_threshold_km,
            proximity_radius_km: self.config.proximity_radius_km,
            sites: records,
            duration_ms: start.elapsed().as_millis(),
        })
    }
}
