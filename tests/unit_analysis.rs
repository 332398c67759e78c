// tests/unit_analysis.rs
use std::collections::BTreeMap;

use salar_core::analysis::Engine;
use salar_core::config::AnalysisConfig;
use salar_core::error::SalarError;
use salar_core::types::{Classification, GeographicPosition, Site};

fn site(name: &str, lat: f64, lon: f64) -> Site {
    Site {
        name: name.to_string(),
        company: "Test Co".to_string(),
        salar: "Test Salar".to_string(),
        position: GeographicPosition::new(lat, lon),
        extra: BTreeMap::new(),
    }
}

fn engine() -> Engine {
    Engine::new(AnalysisConfig::default()).unwrap()
}

fn engine_with(radius_km: f64, threshold_km: f64) -> Engine {
    let config = AnalysisConfig {
        proximity_radius_km: radius_km,
        critical_threshold_km: threshold_km,
        ..AnalysisConfig::default()
    };
    Engine::new(config).unwrap()
}

// Scenario A: single site, default Güemes reference, threshold 300 km,
// radius 50 km.
#[test]
fn test_single_site_standard_no_neighbors() {
    let report = engine().analyze(&[site("Olaroz Este", -24.19, -66.59)]).unwrap();

    assert_eq!(report.site_count(), 1);
    let record = &report.sites[0];
    assert!(
        (160.0..=195.0).contains(&record.distance_km),
        "distance {}",
        record.distance_km
    );
    assert_eq!(record.classification, Classification::Standard);
    assert!(record.neighbors.is_empty());
    assert_eq!(report.critical_count(), 0);
}

// Scenario B: two sites ~7.5 km apart are mutual neighbors at radius 50
// but not at radius 5.
#[test]
fn test_close_pair_mutual_neighbors() {
    let sites = [
        site("Centenario", -24.50, -66.50),
        site("Ratones", -24.55, -66.45),
    ];

    let report = engine_with(50.0, 300.0).analyze(&sites).unwrap();
    assert_eq!(report.sites[0].neighbors.len(), 1);
    assert_eq!(report.sites[0].neighbors[0].name, "Ratones");
    assert_eq!(report.sites[1].neighbors.len(), 1);
    assert_eq!(report.sites[1].neighbors[0].name, "Centenario");
    assert!(
        (7.0..=8.0).contains(&report.sites[0].neighbors[0].distance_km),
        "pairwise {}",
        report.sites[0].neighbors[0].distance_km
    );

    let report = engine_with(5.0, 300.0).analyze(&sites).unwrap();
    assert!(report.sites[0].neighbors.is_empty());
    assert!(report.sites[1].neighbors.is_empty());
}

// Scenario C: a distance exactly at the threshold is Standard.
#[test]
fn test_exact_threshold_is_standard() {
    let sites = [site("Edge", -24.19, -66.59)];
    let exact = engine().analyze(&sites).unwrap().sites[0].distance_km;

    let report = engine_with(50.0, exact).analyze(&sites).unwrap();
    assert_eq!(report.sites[0].classification, Classification::Standard);

    // Nudge the threshold below and the site tips critical.
    let report = engine_with(50.0, exact - 0.001).analyze(&sites).unwrap();
    assert_eq!(report.sites[0].classification, Classification::Critical);
}

// Scenario D: an empty site list is a valid degenerate case.
#[test]
fn test_empty_site_list() {
    let report = engine().analyze(&[]).unwrap();
    assert_eq!(report.site_count(), 0);
    assert_eq!(report.critical_count(), 0);
    assert_eq!(report.mean_distance_km(), 0.0);
}

#[test]
fn test_far_site_is_critical() {
    let report = engine().analyze(&[site("Antofalla Sur", -25.60, -68.20)]).unwrap();
    let record = &report.sites[0];
    assert!(record.distance_km > 300.0, "distance {}", record.distance_km);
    assert_eq!(record.classification, Classification::Critical);
    assert_eq!(report.critical_count(), 1);
}

#[test]
fn test_neighbor_relation_symmetric() {
    let sites = [
        site("A", -24.50, -66.50),
        site("B", -24.55, -66.45),
        site("C", -24.60, -66.55),
        site("D", -25.60, -68.20),
    ];
    let report = engine_with(30.0, 300.0).analyze(&sites).unwrap();

    for record in &report.sites {
        for neighbor in &record.neighbors {
            let other = report
                .sites
                .iter()
                .find(|s| s.name == neighbor.name)
                .unwrap();
            assert!(
                other.neighbors.iter().any(|n| n.name == record.name),
                "{} sees {} but not vice versa",
                record.name,
                neighbor.name
            );
        }
    }
}

#[test]
fn test_non_positive_radius_empties_all_sets() {
    let sites = [
        site("A", -24.50, -66.50),
        site("B", -24.55, -66.45),
    ];
    for radius in [0.0, -25.0] {
        let report = engine_with(radius, 300.0).analyze(&sites).unwrap();
        assert!(
            report.sites.iter().all(|s| s.neighbors.is_empty()),
            "radius {radius}"
        );
    }
}

#[test]
fn test_missing_reference_node_fails() {
    let config = AnalysisConfig {
        reference: None,
        ..AnalysisConfig::default()
    };
    let engine = Engine::new(config).unwrap();
    let err = engine.analyze(&[site("Lonely", -24.5, -66.5)]).unwrap_err();
    assert!(matches!(err, SalarError::MissingReferenceNode));
}

#[test]
fn test_invalid_coordinate_fails_fast_with_site_name() {
    let sites = [
        site("Fine", -24.50, -66.50),
        site("Broken", -95.0, -66.45),
    ];
    let err = engine().analyze(&sites).unwrap_err();
    match err {
        SalarError::InvalidCoordinate { name, lat, .. } => {
            assert_eq!(name.as_deref(), Some("Broken"));
            assert_eq!(lat, -95.0);
        }
        other => panic!("expected InvalidCoordinate, got {other}"),
    }
}

#[test]
fn test_nan_coordinate_rejected() {
    let err = engine()
        .analyze(&[site("NotANumber", f64::NAN, -66.5)])
        .unwrap_err();
    assert!(matches!(err, SalarError::InvalidCoordinate { .. }));
}
