// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalarError {
    #[error("invalid coordinate for {}: lat {lat}, lon {lon}", name.as_deref().unwrap_or("<input>"))]
    InvalidCoordinate {
        name: Option<String>,
        lat: f64,
        lon: f64,
    },

    #[error("no reference node configured")]
    MissingReferenceNode,

    #[error("unknown projection identifier: {0}")]
    UnknownProjection(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SalarError>;

impl SalarError {
    /// Attaches a site name to an `InvalidCoordinate` raised by the
    /// projector, which only sees the bare position.
    #[must_use]
    pub fn for_site(self, site: &str) -> Self {
        match self {
            Self::InvalidCoordinate { lat, lon, .. } => Self::InvalidCoordinate {
                name: Some(site.to_string()),
                lat,
                lon,
            },
            other => other,
        }
    }
}

// Allow `?` on std::io::Error by converting to SalarError::Io with unknown path.
impl From<std::io::Error> for SalarError {
    fn from(source: std::io::Error) -> Self {
        SalarError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
