pub mod analysis;
pub mod config;
pub mod error;
pub mod geo;
pub mod loader;
pub mod reporting;
pub mod types;
