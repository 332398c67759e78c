// src/reporting/mod.rs
//! Presentation shell. Everything here consumes the plain data an analysis
//! run produced; no computation happens on this side of the boundary.

pub mod console;
pub mod geojson;

pub use console::print_report;
