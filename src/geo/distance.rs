// src/geo/distance.rs
//! Euclidean distance over projected positions, reported in kilometers.

use crate::types::ProjectedPosition;

/// Planar distance between two projected positions in kilometers.
///
/// Exactly symmetric and zero for identical inputs: the deltas only change
/// sign with argument order, and `hypot` is sign-insensitive.
#[must_use]
pub fn distance_km(a: ProjectedPosition, b: ProjectedPosition) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx.hypot(dy) / 1000.0
}

/// Distance from every site to the reference node, index-aligned with the
/// input sequence.
#[must_use]
pub fn reference_distances(sites: &[ProjectedPosition], reference: ProjectedPosition) -> Vec<f64> {
    sites.iter().map(|p| distance_km(*p, reference)).collect()
}
