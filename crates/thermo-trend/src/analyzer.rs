//! Trend and anomaly analysis of a daily temperature series
//!
//! The analyzer reduces a series to its daily averages and derives:
//! - volatility: population standard deviation of the averages
//! - temperature range: highest maximum minus lowest minimum
//! - trend: least-squares slope of the averages against the day index
//! - stability score: linear penalties on volatility and range
//! - anomalies: day-over-day average changes beyond a threshold
//! - exponential runs: sustained same-direction changes (see [`crate::runs`])
//!
//! Non-finite readings are not rejected; they propagate into the output.

use crate::params::TrendParameters;
use crate::runs::detect_runs;
use crate::types::{AnalysisResult, Anomaly, AnomalyKind, Magnitude, Trend};
use thermo_core::math::{max_of, min_of, ols_slope, population_std_dev};
use thermo_core::{daily_averages, DailyReading, SeriesAnalyzer, SeriesAnalyzerProperties};
use tracing::{debug, instrument};

/// Trend, volatility and anomaly analyzer
#[derive(Debug, Clone, Default)]
pub struct TrendAnomalyAnalyzer {
    params: TrendParameters,
}

impl TrendAnomalyAnalyzer {
    /// Create an analyzer with custom parameters
    pub fn new(params: TrendParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &TrendParameters {
        &self.params
    }

    /// Analyze a chronologically ordered series
    #[instrument(skip_all, fields(days = series.len()))]
    pub fn analyze(&self, series: &[DailyReading]) -> AnalysisResult {
        if series.len() < 2 {
            debug!("series too short, returning degenerate result");
            return AnalysisResult::degenerate();
        }

        let averages = daily_averages(series);

        let volatility = population_std_dev(&averages);
        let temperature_range = temperature_range(series);

        let slope = ols_slope(&averages);
        let trend = self.classify_trend(slope);
        let trend_strength = slope.abs() * self.params.trend_strength_scale;

        let stability_score = self.stability_score(volatility, temperature_range);
        let is_stable = stability_score >= self.params.stable_score;

        debug!(
            volatility,
            temperature_range,
            slope,
            stability_score,
            "summary statistics"
        );

        let anomalies = self.detect_anomalies(series, &averages);
        let exponential_runs = detect_runs(series, &averages, self.params.min_run_days);

        debug!(
            anomalies = anomalies.len(),
            runs = exponential_runs.len(),
            "scan complete"
        );

        AnalysisResult {
            is_stable,
            stability_score,
            volatility,
            temperature_range,
            trend,
            trend_strength,
            anomalies,
            exponential_runs,
        }
    }

    /// Map a raw slope (°C/day) onto a trend category
    pub fn classify_trend(&self, slope: f64) -> Trend {
        if slope.abs() > self.params.trend_slope_threshold {
            if slope > 0.0 {
                Trend::Increasing
            } else {
                Trend::Decreasing
            }
        } else {
            Trend::Stable
        }
    }

    /// Composite 0-100 score from volatility and range
    ///
    /// A NaN component contributes zero; the result is clamped to 0..=100.
    pub fn stability_score(&self, volatility: f64, temperature_range: f64) -> u8 {
        let volatility_score = (100.0 - volatility * self.params.volatility_penalty).max(0.0);
        let range_score = (100.0 - temperature_range * self.params.range_penalty).max(0.0);
        // Round half up, matching the usual display rounding
        let score = ((volatility_score + range_score) / 2.0 + 0.5).floor();
        score.clamp(0.0, 100.0) as u8
    }

    /// Size bucket for an anomalous change, or `None` when it is not anomalous
    pub fn magnitude_of(&self, change: f64) -> Option<Magnitude> {
        let abs_change = change.abs();
        if abs_change <= self.params.anomaly_threshold || abs_change.is_nan() {
            return None;
        }
        Some(if abs_change > self.params.high_threshold {
            Magnitude::High
        } else if abs_change > self.params.medium_threshold {
            Magnitude::Medium
        } else {
            Magnitude::Low
        })
    }

    fn detect_anomalies(&self, series: &[DailyReading], averages: &[f64]) -> Vec<Anomaly> {
        (1..averages.len())
            .filter_map(|i| {
                let change = averages[i] - averages[i - 1];
                let magnitude = self.magnitude_of(change)?;
                Some(Anomaly {
                    index: i,
                    day: series[i].date,
                    change,
                    kind: if change > 0.0 { AnomalyKind::Spike } else { AnomalyKind::Drop },
                    magnitude,
                })
            })
            .collect()
    }
}

/// Highest daily maximum minus lowest daily minimum
pub fn temperature_range(series: &[DailyReading]) -> f64 {
    let highest = max_of(series.iter().map(|r| r.temp_max));
    let lowest = min_of(series.iter().map(|r| r.temp_min));
    highest - lowest
}

impl SeriesAnalyzerProperties for TrendAnomalyAnalyzer {
    fn method_name(&self) -> &'static str {
        "Trend & Anomaly Analysis"
    }
}

impl SeriesAnalyzer for TrendAnomalyAnalyzer {
    type Output = AnalysisResult;

    fn analyze(&self, series: &[DailyReading]) -> AnalysisResult {
        TrendAnomalyAnalyzer::analyze(self, series)
    }
}
