// src/bin/salar.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use salar_core::analysis::Engine;
use salar_core::config::AnalysisConfig;
use salar_core::loader;
use salar_core::reporting::{console, geojson};
use salar_core::types::AnalysisReport;

#[derive(Parser)]
#[command(name = "salar", version, about = "Lithium-site logistics analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a salar.toml configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Collaboration radius in km (overrides configuration)
    #[arg(long, global = true, value_name = "KM")]
    radius: Option<f64>,

    /// Critical-distance threshold in km (overrides configuration)
    #[arg(long, global = true, value_name = "KM")]
    threshold: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a site CSV and print the logistics report
    Analyze {
        /// Site CSV (Proyecto, Empresa, Salar, Latitud, Longitud)
        csv: PathBuf,
        /// Emit the full report as JSON instead of the console view
        #[arg(long)]
        json: bool,
    },
    /// Export the analysis as a GeoJSON FeatureCollection
    Map {
        /// Site CSV (Proyecto, Empresa, Salar, Latitud, Longitud)
        csv: PathBuf,
        /// Output file; stdout when omitted
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Analyze { csv, json } => {
            let report = analyze(csv, config)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                console::print_report(&report);
            }
        }
        Commands::Map { csv, output } => {
            let report = analyze(csv, config)?;
            let collection = geojson::feature_collection(&report);
            let rendered = serde_json::to_string_pretty(&collection)?;
            match output {
                Some(path) => {
                    fs::write(path, rendered)?;
                    println!("GeoJSON written to {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = AnalysisConfig::load(cli.config.as_deref())?;
    if let Some(radius) = cli.radius {
        config.proximity_radius_km = radius;
    }
    if let Some(threshold) = cli.threshold {
        config.critical_threshold_km = threshold;
    }
    config.validate()?;
    Ok(config)
}

fn analyze(csv: &Path, config: AnalysisConfig) -> Result<AnalysisReport> {
    let sites = loader::load_sites(csv)?;
    let engine = Engine::new(config)?;
    Ok(engine.analyze(&sites)?)
}
