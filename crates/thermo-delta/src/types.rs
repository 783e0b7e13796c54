//! Output types of the daily-delta classifier

use serde::{Deserialize, Serialize};
use std::fmt;
use thermo_core::DayDelta;

/// Which narrative the classifier chose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    /// Fewer than two readings
    InsufficientData,
    /// Every day within the stable threshold and none exponential
    Stable,
    /// At least one exponential day, however many others were stable
    Exponential,
    /// Some unstable days but none exponential
    Mixed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::InsufficientData => write!(f, "Insufficient Data"),
            Verdict::Stable => write!(f, "Stable"),
            Verdict::Exponential => write!(f, "Exponential"),
            Verdict::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Summary of day-over-day stability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilitySummary {
    /// Human-readable narrative
    pub result: String,
    /// Every day stable and no exponential day
    pub stable: bool,
    /// At least one day outside the stable threshold
    pub unstable: bool,
    pub verdict: Verdict,
    /// Number of days within the stable threshold
    pub stable_days: usize,
    /// Indices of exponential days, ascending
    pub exp_indexes: Vec<usize>,
    pub daily_deltas: Vec<DayDelta>,
}

impl StabilitySummary {
    /// Fixed summary for series too short to compare
    pub fn insufficient() -> Self {
        Self {
            result: "Insufficient data".to_string(),
            stable: true,
            unstable: false,
            verdict: Verdict::InsufficientData,
            stable_days: 0,
            exp_indexes: Vec::new(),
            daily_deltas: Vec::new(),
        }
    }

    /// Number of compared days
    pub fn total_days(&self) -> usize {
        self.daily_deltas.len()
    }

    pub fn has_exponential_days(&self) -> bool {
        !self.exp_indexes.is_empty()
    }

    /// Deltas of the exponential days
    pub fn exponential_deltas(&self) -> impl Iterator<Item = &DayDelta> {
        self.daily_deltas
            .iter()
            .filter(move |d| self.exp_indexes.binary_search(&d.index).is_ok())
    }
}

impl fmt::Display for StabilitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.verdict, self.result)
    }
}
