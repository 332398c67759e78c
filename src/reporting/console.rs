// src/reporting/console.rs
use colored::Colorize;

use crate::types::{AnalysisReport, SiteRecord};

/// Prints the full analysis report to stdout: reference distance table,
/// collaboration clusters, then a summary line.
pub fn print_report(report: &AnalysisReport) {
    if report.sites.is_empty() {
        println!("{}", "No sites loaded.".dimmed());
        return;
    }

    print_distance_table(report);
    print_collaboration(report);
    print_summary(report);
}

fn print_distance_table(report: &AnalysisReport) {
    println!(
        "{}",
        format!("--- DISTANCES TO LOGISTICS NODE ({}) ---", report.reference.name).bold()
    );

    let width = report
        .sites
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    for site in &report.sites {
        let label = if site.classification.is_critical() {
            format!("CRITICAL (>{} km)", report.critical_threshold_km).red().bold()
        } else {
            format!("standard (<={} km)", report.critical_threshold_km).green()
        };
        println!(
            "  {:width$}  {:>8.1} km  {label}",
            site.name,
            site.distance_km,
            width = width
        );
    }
    println!();
}

fn print_collaboration(report: &AnalysisReport) {
    println!(
        "{}",
        format!(
            "--- COLLABORATION ANALYSIS (radius {} km) ---",
            report.proximity_radius_km
        )
        .bold()
    );

    let clustered: Vec<&SiteRecord> = report.sites.iter().filter(|s| s.has_neighbors()).collect();
    if clustered.is_empty() {
        println!("  {}", "No sites within collaboration range of each other.".dimmed());
    }
    for site in clustered {
        println!("  {} has potential partners:", site.name.cyan());
        for neighbor in &site.neighbors {
            println!(
                "     {} {} at {:.2} km",
                "->".blue(),
                neighbor.name,
                neighbor.distance_km
            );
        }
    }
    println!();
}

fn print_summary(report: &AnalysisReport) {
    let critical = report.critical_count();
    let counts = format!(
        "{} sites, {} critical, mean distance {:.1} km",
        report.site_count(),
        critical,
        report.mean_distance_km()
    );
    if critical > 0 {
        println!("{} {}", "summary:".bold(), counts.yellow());
    } else {
        println!("{} {}", "summary:".bold(), counts.green());
    }
}
