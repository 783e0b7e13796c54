//! # Thermo Stability
//!
//! Stability analysis for daily temperature series. Two independent
//! capabilities are exposed:
//!
//! - [`analyze`]: volatility, temperature range, linear trend, a 0-100
//!   stability score, single-day anomalies and multi-day exponential runs
//! - [`classify`]: day-over-day threshold classification with a narrative
//!
//! Both are pure functions of their input and never fail. Non-finite or
//! misordered input propagates into the output; use [`analyze_checked`] and
//! [`classify_checked`] to reject such series up front.
//!
//! ```rust
//! use thermo_stability::prelude::*;
//!
//! let series = series_from_pairs(&[(20.0, 10.0), (21.0, 11.0), (22.0, 12.0), (30.0, 13.0)]);
//!
//! let trend = analyze(&series);
//! assert_eq!(trend.trend, Trend::Increasing);
//!
//! let summary = classify(&series, ClassifierOptions::default());
//! assert_eq!(summary.exp_indexes, vec![3]);
//! ```

pub use thermo_core;
pub use thermo_delta;
pub use thermo_trend;

use thermo_core::{validate_series, DailyReading, Result};
use thermo_delta::{ClassifierOptions, StabilitySummary};
use thermo_trend::AnalysisResult;

/// Trend and anomaly analysis with the default parameters
pub fn analyze(series: &[DailyReading]) -> AnalysisResult {
    thermo_trend::analyze(series)
}

/// Day-over-day classification; unset options use the defaults
pub fn classify(series: &[DailyReading], options: ClassifierOptions) -> StabilitySummary {
    thermo_delta::classify(series, options)
}

/// [`analyze`] after rejecting non-finite or misordered input
pub fn analyze_checked(series: &[DailyReading]) -> Result<AnalysisResult> {
    validate_series(series)?;
    Ok(analyze(series))
}

/// [`classify`] after rejecting non-finite or misordered input and invalid thresholds
pub fn classify_checked(series: &[DailyReading], options: ClassifierOptions) -> Result<StabilitySummary> {
    validate_series(series)?;
    options.resolve().validate()?;
    Ok(classify(series, options))
}

pub mod prelude {
    pub use crate::{analyze, analyze_checked, classify, classify_checked};
    pub use thermo_core::{
        consecutive_days, series_from_pairs, DailyColumns, DailyReading, DayDelta, Error, NaiveDate,
        Result, SeriesAnalyzer, SeriesAnalyzerProperties,
    };
    pub use thermo_delta::{ClassifierOptions, DailyDeltaClassifier, DeltaThresholds, StabilitySummary, Verdict};
    pub use thermo_trend::{
        AnalysisResult, Anomaly, AnomalyKind, ExponentialRun, Magnitude, RunKind, StabilityGrade, Trend,
        TrendAnomalyAnalyzer, TrendParameters,
    };
}
