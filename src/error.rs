//! Simulation error types
//!
//! Nothing here is fatal. Sanitizer failures are absorbed by the session and
//! simply leave the scene empty; settings errors fall back to defaults.

use std::fmt;

use crate::sim::service::GeometryError;

/// Top-level error enum for the iceberg simulation
#[derive(Debug)]
pub enum SimError {
    /// A stroke had too few points (or too few distinct points) to form a ring
    DegenerateStroke {
        /// Number of usable points
        points: usize,
    },

    /// The sanitized ring encloses no area
    ZeroArea,

    /// The geometry service rejected a ring
    Geometry(GeometryError),

    /// A tuning value is outside the range the simulation stays stable in
    UnsafeSetting {
        /// Name of the setting (for logging)
        name: &'static str,
        /// The value that was rejected
        value: f64,
        /// Human-readable description of the safe range
        safe_range: &'static str,
    },

    /// Settings JSON could not be parsed
    SettingsParse(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::DegenerateStroke { points } => {
                write!(f, "stroke too short: {} usable points, need at least 3", points)
            }
            SimError::ZeroArea => write!(f, "sanitized ring has zero area"),
            SimError::Geometry(e) => write!(f, "geometry service failed: {}", e),
            SimError::UnsafeSetting {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "setting '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            SimError::SettingsParse(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeometryError> for SimError {
    fn from(e: GeometryError) -> Self {
        SimError::Geometry(e)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::SettingsParse(e.to_string())
    }
}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;
