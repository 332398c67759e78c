// src/geo/mod.rs
//! Planar metric geometry: coordinate projection and distance.

pub mod distance;
pub mod projection;

pub use distance::{distance_km, reference_distances};
pub use projection::Projection;
