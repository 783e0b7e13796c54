//! Classifier configuration

use serde::{Deserialize, Serialize};
use thermo_core::{Error, Result};

/// Default largest per-extreme change (°C) for a stable day
pub const DEFAULT_STABLE_THRESHOLD: f64 = 2.0;

/// Default smallest per-extreme change (°C) for an exponential day
pub const DEFAULT_EXP_THRESHOLD: f64 = 7.0;

/// Caller-facing options; unset fields fall back to the defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stable_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_threshold: Option<f64>,
}

impl ClassifierOptions {
    pub fn with_stable_threshold(mut self, threshold: f64) -> Self {
        self.stable_threshold = Some(threshold);
        self
    }

    pub fn with_exp_threshold(mut self, threshold: f64) -> Self {
        self.exp_threshold = Some(threshold);
        self
    }

    /// Fill unset fields with the defaults
    pub fn resolve(&self) -> DeltaThresholds {
        DeltaThresholds {
            stable_threshold: self.stable_threshold.unwrap_or(DEFAULT_STABLE_THRESHOLD),
            exp_threshold: self.exp_threshold.unwrap_or(DEFAULT_EXP_THRESHOLD),
        }
    }
}

/// Resolved thresholds used by [`crate::DailyDeltaClassifier`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaThresholds {
    /// A day is stable when both `|max_delta|` and `|min_delta|` are at most this
    pub stable_threshold: f64,
    /// A day is exponential when either `|max_delta|` or `|min_delta|` reaches this
    pub exp_threshold: f64,
}

impl Default for DeltaThresholds {
    fn default() -> Self {
        ClassifierOptions::default().resolve()
    }
}

impl From<ClassifierOptions> for DeltaThresholds {
    fn from(options: ClassifierOptions) -> Self {
        options.resolve()
    }
}

impl DeltaThresholds {
    /// Check the thresholds are usable
    ///
    /// Overlapping thresholds (`exp <= stable`) are allowed; a day can then be
    /// both stable and exponential.
    pub fn validate(&self) -> Result<()> {
        if !self.stable_threshold.is_finite() || self.stable_threshold < 0.0 {
            return Err(Error::negative_parameter("stable_threshold", self.stable_threshold));
        }
        if !self.exp_threshold.is_finite() || self.exp_threshold < 0.0 {
            return Err(Error::negative_parameter("exp_threshold", self.exp_threshold));
        }
        Ok(())
    }

    /// Whether the two categories can overlap
    pub fn overlapping(&self) -> bool {
        self.exp_threshold <= self.stable_threshold
    }
}
