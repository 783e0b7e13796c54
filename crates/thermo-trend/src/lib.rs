//! # Trend & Anomaly Analysis
//!
//! Quantifies how volatile and directional a daily temperature series is,
//! flags sharp single-day jumps, and finds sustained warming or cooling runs.
//!
//! ## Outputs
//!
//! - **Volatility**: population standard deviation of daily averages
//! - **Temperature range**: highest maximum minus lowest minimum
//! - **Trend**: least-squares slope, categorized as increasing, decreasing or stable
//! - **Stability score**: 0-100 composite with a stable/unstable verdict
//! - **Anomalies**: day-over-day average changes beyond a threshold
//! - **Exponential runs**: multi-day same-direction streaks
//!
//! ## Usage
//!
//! ```rust
//! use thermo_core::series_from_pairs;
//! use thermo_trend::{Trend, TrendAnomalyAnalyzer};
//!
//! let series = series_from_pairs(&[(10.0, 0.0), (10.0, 0.0), (10.0, 0.0)]);
//! let result = TrendAnomalyAnalyzer::default().analyze(&series);
//!
//! assert_eq!(result.stability_score, 90);
//! assert!(result.is_stable);
//! assert_eq!(result.trend, Trend::Stable);
//! ```

pub mod analyzer;
pub mod params;
pub mod runs;
pub mod types;

// Re-exports
pub use analyzer::{temperature_range, TrendAnomalyAnalyzer};
pub use params::TrendParameters;
pub use runs::detect_runs;
pub use types::{
    AnalysisResult, Anomaly, AnomalyKind, ExponentialRun, Magnitude, RunKind, StabilityGrade, Trend,
};

/// Analyze a series with the default parameters
pub fn analyze(series: &[thermo_core::DailyReading]) -> AnalysisResult {
    TrendAnomalyAnalyzer::default().analyze(series)
}
