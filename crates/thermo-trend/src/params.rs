//! Parameters for trend and anomaly analysis
//!
//! The defaults are the reference heuristics; every other setting is a
//! deliberate deviation from them.

use serde::{Deserialize, Serialize};
use thermo_core::{Error, Result};

/// Thresholds and penalty weights used by [`crate::TrendAnomalyAnalyzer`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendParameters {
    /// Slope magnitude (°C/day) at or below which the trend is stable
    pub trend_slope_threshold: f64,

    /// Display multiplier applied to the absolute slope
    pub trend_strength_scale: f64,

    /// Score points lost per °C of volatility
    pub volatility_penalty: f64,

    /// Score points lost per °C of temperature range
    pub range_penalty: f64,

    /// Minimum score for a stable verdict
    pub stable_score: u8,

    /// Average change (°C) that must be exceeded to flag an anomaly
    pub anomaly_threshold: f64,

    /// Change (°C) above which an anomaly is medium
    pub medium_threshold: f64,

    /// Change (°C) above which an anomaly is high
    pub high_threshold: f64,

    /// Days a same-direction run must cover to be reported
    pub min_run_days: usize,
}

impl Default for TrendParameters {
    fn default() -> Self {
        Self {
            trend_slope_threshold: 0.3,
            trend_strength_scale: 10.0,
            volatility_penalty: 10.0,
            range_penalty: 2.0,
            stable_score: 70,
            anomaly_threshold: 3.0,
            medium_threshold: 4.0,
            high_threshold: 6.0,
            min_run_days: 3,
        }
    }
}

impl TrendParameters {
    /// Parameters that flag smaller jumps and shorter runs
    pub fn sensitive() -> Self {
        Self {
            trend_slope_threshold: 0.15,
            anomaly_threshold: 2.0,
            medium_threshold: 3.0,
            high_threshold: 5.0,
            ..Self::default()
        }
    }

    /// Set the minimum stable score
    pub fn with_stable_score(mut self, score: u8) -> Self {
        self.stable_score = score;
        self
    }

    /// Set the anomaly thresholds
    pub fn with_anomaly_thresholds(mut self, low: f64, medium: f64, high: f64) -> Self {
        self.anomaly_threshold = low;
        self.medium_threshold = medium;
        self.high_threshold = high;
        self
    }

    /// Set the minimum run length in days
    pub fn with_min_run_days(mut self, days: usize) -> Self {
        self.min_run_days = days;
        self
    }

    /// Check that the parameters describe a usable configuration
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("trend_slope_threshold", self.trend_slope_threshold),
            ("trend_strength_scale", self.trend_strength_scale),
            ("volatility_penalty", self.volatility_penalty),
            ("range_penalty", self.range_penalty),
            ("anomaly_threshold", self.anomaly_threshold),
            ("medium_threshold", self.medium_threshold),
            ("high_threshold", self.high_threshold),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::negative_parameter(name, value));
            }
        }

        if self.anomaly_threshold > self.medium_threshold {
            return Err(Error::misordered("anomaly_threshold", "medium_threshold"));
        }
        if self.medium_threshold > self.high_threshold {
            return Err(Error::misordered("medium_threshold", "high_threshold"));
        }
        if self.stable_score > 100 {
            return Err(Error::InvalidParameter(format!(
                "stable_score must be at most 100, got {}",
                self.stable_score
            )));
        }
        if self.min_run_days < 2 {
            return Err(Error::InvalidParameter(format!(
                "min_run_days must be at least 2, got {}",
                self.min_run_days
            )));
        }

        Ok(())
    }
}
