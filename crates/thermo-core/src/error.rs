//! Error types for temperature series analysis
//!
//! The analyzers themselves never fail. These errors come from the edges:
//! decoding upstream payloads, validating series before analysis, and
//! checking user supplied parameters.

use thiserror::Error;

/// Core error type shared by all thermo crates
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A reading holds NaN or an infinite temperature
    #[error("Non-finite {field} at day {index}")]
    NonFinite { index: usize, field: &'static str },

    /// Readings are not in ascending date order
    #[error("Readings out of order at day {index}")]
    Unordered { index: usize },

    /// Columnar payload whose columns disagree in length
    #[error("Column length mismatch: time={time}, max={max}, min={min}")]
    LengthMismatch { time: usize, max: usize, min: usize },

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a parameter that must be finite and non-negative
    pub fn negative_parameter(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be finite and non-negative, got {value}"))
    }

    /// Create an error for a pair of parameters in the wrong order
    pub fn misordered(lower: &str, upper: &str) -> Self {
        Self::InvalidParameter(format!("{lower} must not exceed {upper}"))
    }
}
