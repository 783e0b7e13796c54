//! Day-over-day threshold classifier
//!
//! Every consecutive pair of readings is compared on both extremes. A day is
//! stable when both extremes moved by at most the stable threshold, and
//! exponential when either moved by at least the exponential threshold. The
//! two predicates are evaluated independently.

use crate::options::{ClassifierOptions, DeltaThresholds};
use crate::types::{StabilitySummary, Verdict};
use chrono::NaiveDate;
use thermo_core::{day_deltas, DailyReading, DayDelta, SeriesAnalyzer, SeriesAnalyzerProperties};
use tracing::{debug, instrument};

/// Threshold classifier over daily maximum/minimum changes
#[derive(Debug, Clone, Default)]
pub struct DailyDeltaClassifier {
    thresholds: DeltaThresholds,
}

impl DailyDeltaClassifier {
    pub fn new(thresholds: DeltaThresholds) -> Self {
        Self { thresholds }
    }

    /// Create from partially specified options
    pub fn with_options(options: ClassifierOptions) -> Self {
        Self::new(options.resolve())
    }

    pub fn thresholds(&self) -> &DeltaThresholds {
        &self.thresholds
    }

    /// Whether both extremes stayed within the stable threshold
    pub fn is_stable_day(&self, delta: &DayDelta) -> bool {
        delta.max_delta.abs() <= self.thresholds.stable_threshold
            && delta.min_delta.abs() <= self.thresholds.stable_threshold
    }

    /// Whether either extreme reached the exponential threshold
    pub fn is_exponential_day(&self, delta: &DayDelta) -> bool {
        delta.max_delta.abs() >= self.thresholds.exp_threshold
            || delta.min_delta.abs() >= self.thresholds.exp_threshold
    }

    /// Classify a chronologically ordered series
    #[instrument(skip_all, fields(days = series.len()))]
    pub fn classify(&self, series: &[DailyReading]) -> StabilitySummary {
        if series.len() < 2 {
            debug!("series too short, returning insufficient-data summary");
            return StabilitySummary::insufficient();
        }

        let daily_deltas: Vec<DayDelta> = day_deltas(series).collect();
        let mut stable_days = 0;
        let mut exp_indexes = Vec::new();

        for delta in &daily_deltas {
            if self.is_stable_day(delta) {
                stable_days += 1;
            }
            if self.is_exponential_day(delta) {
                exp_indexes.push(delta.index);
            }
        }

        let total_days = daily_deltas.len();
        let all_stable = stable_days == total_days;

        let verdict = if exp_indexes.is_empty() && all_stable {
            Verdict::Stable
        } else if !exp_indexes.is_empty() {
            Verdict::Exponential
        } else {
            Verdict::Mixed
        };

        let result = match verdict {
            Verdict::Stable => stable_narrative(self.thresholds.stable_threshold),
            Verdict::Exponential => {
                let dates: Vec<NaiveDate> = exp_indexes.iter().filter_map(|&i| series[i].date).collect();
                exponential_narrative(&dates, exp_indexes.len())
            }
            Verdict::Mixed | Verdict::InsufficientData => mixed_narrative(stable_days, total_days),
        };

        debug!(stable_days, total_days, exponential_days = exp_indexes.len(), %verdict, "classified");

        StabilitySummary {
            result,
            stable: all_stable && exp_indexes.is_empty(),
            unstable: !all_stable,
            verdict,
            stable_days,
            exp_indexes,
            daily_deltas,
        }
    }
}

/// Narrative for a fully stable series
pub fn stable_narrative(stable_threshold: f64) -> String {
    format!("Weather has been stable: temperature changes did not exceed {stable_threshold}°C/day.")
}

/// Narrative naming the exponential days, or counting them when undated
pub fn exponential_narrative(dates: &[NaiveDate], exponential_days: usize) -> String {
    if dates.is_empty() {
        format!("Exponential temperature change detected on {exponential_days} day(s).")
    } else {
        let listed: Vec<String> = dates.iter().map(NaiveDate::to_string).collect();
        format!("Exponential temperature change detected on {}.", listed.join(", "))
    }
}

/// Narrative for a series with some unstable but no exponential days
pub fn mixed_narrative(stable_days: usize, total_days: usize) -> String {
    format!(
        "Weather has mixed periods of stability and fluctuation. {stable_days} stable / {total_days} days."
    )
}

impl SeriesAnalyzerProperties for DailyDeltaClassifier {
    fn method_name(&self) -> &'static str {
        "Daily Delta Classification"
    }
}

impl SeriesAnalyzer for DailyDeltaClassifier {
    type Output = StabilitySummary;

    fn analyze(&self, series: &[DailyReading]) -> StabilitySummary {
        self.classify(series)
    }
}
