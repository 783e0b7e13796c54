//! Day-over-day temperature change classification
//!
//! A simpler companion to trend analysis: each day is compared with the
//! previous one, flagged as stable or exponential against fixed thresholds,
//! and the whole series is summarized in a short narrative.
//!
//! ```rust
//! use thermo_core::series_from_pairs;
//! use thermo_delta::{classify, ClassifierOptions, Verdict};
//!
//! let series = series_from_pairs(&[(20.0, 10.0), (21.0, 11.0), (22.0, 12.0), (30.0, 13.0)]);
//! let summary = classify(&series, ClassifierOptions::default());
//!
//! assert!(!summary.stable);
//! assert_eq!(summary.verdict, Verdict::Exponential);
//! assert_eq!(summary.exp_indexes, vec![3]);
//! assert_eq!(summary.result, "Exponential temperature change detected on 1 day(s).");
//! ```

pub mod classifier;
pub mod options;
pub mod types;

pub use classifier::{exponential_narrative, mixed_narrative, stable_narrative, DailyDeltaClassifier};
pub use options::{ClassifierOptions, DeltaThresholds, DEFAULT_EXP_THRESHOLD, DEFAULT_STABLE_THRESHOLD};
pub use types::{StabilitySummary, Verdict};

/// Classify a series with the given options
pub fn classify(series: &[thermo_core::DailyReading], options: ClassifierOptions) -> StabilitySummary {
    DailyDeltaClassifier::with_options(options).classify(series)
}
