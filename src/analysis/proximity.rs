// src/analysis/proximity.rs
//! Brute-force all-pairs neighbor discovery. O(n²) distance evaluations is
//! fine at this scale (tens of sites); a grid index could replace the inner
//! loop without changing the contract if n ever grows.

use rayon::prelude::*;

use crate::geo::distance::distance_km;
use crate::types::ProjectedPosition;

/// For every site, the indices of the other sites within `radius_km`, with
/// their pairwise distance. Sets keep the input insertion order, exclude the
/// site itself, and include ties exactly at the radius. A non-positive (or
/// NaN) radius yields empty sets across the board.
#[must_use]
pub fn find_neighbors(projected: &[ProjectedPosition], radius_km: f64) -> Vec<Vec<(usize, f64)>> {
    if !(radius_km > 0.0) {
        return vec![Vec::new(); projected.len()];
    }

    projected
        .par_iter()
        .enumerate()
        .map(|(i, a)| {
            projected
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .filter_map(|(j, b)| {
                    let d = distance_km(*a, *b);
                    (d <= radius_km).then_some((j, d))
                })
                .collect()
        })
        .collect()
}
