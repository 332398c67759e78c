// src/loader.rs
//! CSV ingestion for site records.
//!
//! The expected header carries `Proyecto`, `Empresa`, `Salar`, `Latitud`,
//! `Longitud` (case-insensitive, any order). Columns the core does not
//! understand are preserved verbatim in [`Site::extra`] so the presentation
//! layer can show them unmodified.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, SalarError};
use crate::types::{GeographicPosition, Site};

const COL_NAME: &str = "proyecto";
const COL_COMPANY: &str = "empresa";
const COL_SALAR: &str = "salar";
const COL_LAT: &str = "latitud";
const COL_LON: &str = "longitud";

/// Loads sites from a CSV file.
///
/// # Errors
/// `Io` if the file cannot be read; see [`parse_sites`] for parse failures.
pub fn load_sites(path: &Path) -> Result<Vec<Site>> {
    let content = fs::read_to_string(path).map_err(|source| SalarError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_sites(&content)
}

/// Parses CSV content into sites.
///
/// Non-numeric coordinate text parses to NaN; the projector rejects it as
/// `InvalidCoordinate` before any distance math runs, so a malformed site
/// still fails the run fast rather than being silently skipped.
///
/// # Errors
/// `MalformedRecord` for a missing required column, an empty input, or a
/// row whose field count does not match the header.
pub fn parse_sites(content: &str) -> Result<Vec<Site>> {
    let mut rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = rows.next() else {
        return Err(SalarError::MalformedRecord {
            line: 1,
            reason: "empty input, no header row".to_string(),
        });
    };
    let header = Header::parse(header_line)?;

    let mut sites = Vec::new();
    for (index, line) in rows {
        sites.push(header.parse_row(line, index + 1)?);
    }
    Ok(sites)
}

struct Header {
    columns: Vec<String>,
    name: usize,
    company: usize,
    salar: usize,
    lat: usize,
    lon: usize,
}

impl Header {
    fn parse(line: &str) -> Result<Self> {
        let columns = split_record(line);
        let find = |wanted: &str| -> Result<usize> {
            columns
                .iter()
                .position(|c| c.trim().eq_ignore_ascii_case(wanted))
                .ok_or_else(|| SalarError::MalformedRecord {
                    line: 1,
                    reason: format!("missing required column '{wanted}'"),
                })
        };
        Ok(Self {
            name: find(COL_NAME)?,
            company: find(COL_COMPANY)?,
            salar: find(COL_SALAR)?,
            lat: find(COL_LAT)?,
            lon: find(COL_LON)?,
            columns,
        })
    }

    fn parse_row(&self, line: &str, line_number: usize) -> Result<Site> {
        let fields = split_record(line);
        if fields.len() != self.columns.len() {
            return Err(SalarError::MalformedRecord {
                line: line_number,
                reason: format!(
                    "expected {} fields, found {}",
                    self.columns.len(),
                    fields.len()
                ),
            });
        }

        let known = [self.name, self.company, self.salar, self.lat, self.lon];
        let extra: BTreeMap<String, String> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| !known.contains(i))
            .map(|(i, col)| (col.trim().to_string(), fields[i].clone()))
            .collect();

        Ok(Site {
            name: fields[self.name].trim().to_string(),
            company: fields[self.company].trim().to_string(),
            salar: fields[self.salar].trim().to_string(),
            position: GeographicPosition::new(
                parse_coordinate(&fields[self.lat]),
                parse_coordinate(&fields[self.lon]),
            ),
            extra,
        })
    }
}

fn parse_coordinate(field: &str) -> f64 {
    field.trim().parse().unwrap_or(f64::NAN)
}

/// Splits one CSV record. Handles double-quoted fields with embedded commas
/// and doubled quotes; that is all the site exports use.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.clone());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}
