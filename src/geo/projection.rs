// src/geo/projection.rs
//! WGS84 geographic to UTM planar projection (transverse Mercator forward
//! transform, USGS series form). One fixed projection per deployment; the
//! same `Projection` value must transform both the sites and the reference
//! node or the resulting distances are meaningless.

use crate::error::{Result, SalarError};
use crate::types::{GeographicPosition, ProjectedPosition};

// WGS84 ellipsoid.
const SEMI_MAJOR_M: f64 = 6_378_137.0;
const FLATTENING: f64 = 1.0 / 298.257_223_563;

// UTM conventions.
const SCALE_K0: f64 = 0.9996;
const FALSE_EASTING_M: f64 = 500_000.0;
const FALSE_NORTHING_SOUTH_M: f64 = 10_000_000.0;

/// A UTM zone, parsed once from the configured CRS identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    zone: u8,
    south: bool,
}

impl Projection {
    /// Parses a projection identifier.
    ///
    /// Accepted forms: `EPSG:326xx` (UTM north), `EPSG:327xx` (UTM south),
    /// or the shorthand `utm<zone><n|s>` (e.g. `utm19s`). Case-insensitive.
    ///
    /// # Errors
    /// Returns `UnknownProjection` for anything else; the projection is
    /// fixed per deployment, so this is a configuration-time failure.
    pub fn parse(id: &str) -> Result<Self> {
        let norm = id.trim().to_ascii_uppercase();

        if let Some(code) = norm.strip_prefix("EPSG:") {
            if let Ok(code) = code.parse::<u32>() {
                if (32601..=32660).contains(&code) {
                    return Ok(Self {
                        zone: (code - 32600) as u8,
                        south: false,
                    });
                }
                if (32701..=32760).contains(&code) {
                    return Ok(Self {
                        zone: (code - 32700) as u8,
                        south: true,
                    });
                }
            }
            return Err(SalarError::UnknownProjection(id.trim().to_string()));
        }

        if let Some(rest) = norm.strip_prefix("UTM") {
            let south = match rest.chars().last() {
                Some('S') => true,
                Some('N') => false,
                _ => return Err(SalarError::UnknownProjection(id.trim().to_string())),
            };
            let digits = &rest[..rest.len() - 1];
            if let Ok(zone) = digits.parse::<u8>() {
                if (1..=60).contains(&zone) {
                    return Ok(Self { zone, south });
                }
            }
        }

        Err(SalarError::UnknownProjection(id.trim().to_string()))
    }

    #[must_use]
    pub const fn zone(self) -> u8 {
        self.zone
    }

    #[must_use]
    pub const fn is_south(self) -> bool {
        self.south
    }

    /// Central meridian of the zone in decimal degrees.
    #[must_use]
    pub fn central_meridian_deg(self) -> f64 {
        f64::from(self.zone) * 6.0 - 183.0
    }

    /// Projects a geographic position into planar meters.
    ///
    /// Pure and deterministic: identical input yields bit-identical output.
    ///
    /// # Errors
    /// Returns `InvalidCoordinate` (without a site name; callers attach one
    /// via `SalarError::for_site`) when either component is non-finite or
    /// outside the WGS84 ranges.
    pub fn project(self, pos: GeographicPosition) -> Result<ProjectedPosition> {
        if !pos.is_valid() {
            return Err(SalarError::InvalidCoordinate {
                name: None,
                lat: pos.lat,
                lon: pos.lon,
            });
        }

        let e2 = FLATTENING * (2.0 - FLATTENING);
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        let ep2 = e2 / (1.0 - e2);

        let phi = pos.lat.to_radians();
        let lam = pos.lon.to_radians();
        let lam0 = self.central_meridian_deg().to_radians();

        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let tan_phi = phi.tan();

        let n = SEMI_MAJOR_M / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let a = (lam - lam0) * cos_phi;

        // Meridional arc from the equator.
        let m = SEMI_MAJOR_M
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * phi).sin());

        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let x = SCALE_K0
            * n
            * (a + (1.0 - t + c) * a3 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a5 / 120.0)
            + FALSE_EASTING_M;

        let mut y = SCALE_K0
            * (m + n
                * tan_phi
                * (a2 / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a6 / 720.0));
        if self.south {
            y += FALSE_NORTHING_SOUTH_M;
        }

        Ok(ProjectedPosition { x, y })
    }
}
