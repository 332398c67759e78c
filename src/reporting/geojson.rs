// src/reporting/geojson.rs
//! GeoJSON export: one Point feature per site plus the reference node, as
//! renderer-independent hand-off data for any map front end.

use serde_json::{json, Value};

use crate::types::AnalysisReport;

/// Builds a GeoJSON `FeatureCollection` from an analysis report.
///
/// GeoJSON positions are `[lon, lat]`. Site features carry the distance,
/// classification, neighbor names and the influence radius used for the
/// run; the reference node is a separate feature tagged `role: reference`.
#[must_use]
pub fn feature_collection(report: &AnalysisReport) -> Value {
    let mut features = Vec::with_capacity(report.sites.len() + 1);

    features.push(json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [report.reference.position.lon, report.reference.position.lat],
        },
        "properties": {
            "name": report.reference.name,
            "role": "reference",
        },
    }));

    for site in &report.sites {
        let neighbor_names: Vec<&str> =
            site.neighbors.iter().map(|n| n.name.as_str()).collect();
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [site.position.lon, site.position.lat],
            },
            "properties": {
                "name": site.name,
                "company": site.company,
                "salar": site.salar,
                "role": "site",
                "distance_km": site.distance_km,
                "classification": site.classification.label(),
                "neighbors": neighbor_names,
                "influence_radius_km": report.proximity_radius_km,
            },
        }));
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
