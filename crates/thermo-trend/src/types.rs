//! Result types for trend and anomaly analysis

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the fitted linear trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Increasing => write!(f, "increasing"),
            Trend::Decreasing => write!(f, "decreasing"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Whether an anomalous day jumped up or down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    Spike,
    Drop,
}

/// Size bucket of an anomalous change
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    Low,
    Medium,
    High,
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Low => write!(f, "low"),
            Magnitude::Medium => write!(f, "medium"),
            Magnitude::High => write!(f, "high"),
        }
    }
}

/// A single day whose average moved sharply from the previous day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    /// Index of the later day in the pair
    pub index: usize,
    /// Date of the later day
    pub day: Option<NaiveDate>,
    /// Signed change in daily average, °C
    pub change: f64,
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    pub magnitude: Magnitude,
}

/// Whether a sustained run warmed or cooled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Heating,
    Cooling,
}

impl RunKind {
    /// Label used when presenting the run
    pub fn label(&self) -> &'static str {
        match self {
            RunKind::Heating => "Rapid Warming",
            RunKind::Cooling => "Rapid Cooling",
        }
    }
}

/// A sustained stretch of same-direction daily average changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExponentialRun {
    pub start_index: usize,
    pub end_index: usize,
    pub start_day: Option<NaiveDate>,
    pub end_day: Option<NaiveDate>,
    /// Total change in daily average across the run, °C
    pub change: f64,
    /// `change` divided by the number of day-to-day steps the run covers
    pub rate: f64,
    #[serde(rename = "type")]
    pub kind: RunKind,
}

impl ExponentialRun {
    /// Number of days the run covers, both ends included
    pub fn days(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// Number of day-to-day steps the run covers
    pub fn steps(&self) -> usize {
        self.end_index - self.start_index
    }
}

/// Coarse stability verdict derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StabilityGrade {
    Unstable,
    ModeratelyStable,
    VeryStable,
}

impl StabilityGrade {
    /// Grade a 0-100 stability score
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            StabilityGrade::VeryStable
        } else if score >= 60 {
            StabilityGrade::ModeratelyStable
        } else {
            StabilityGrade::Unstable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StabilityGrade::VeryStable => "Very Stable",
            StabilityGrade::ModeratelyStable => "Moderately Stable",
            StabilityGrade::Unstable => "Unstable",
        }
    }
}

impl fmt::Display for StabilityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full output of the trend and anomaly analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// `stability_score >= stable_score`
    pub is_stable: bool,
    /// Composite score in 0..=100
    pub stability_score: u8,
    /// Population standard deviation of daily averages, °C
    pub volatility: f64,
    /// Highest maximum minus lowest minimum, °C
    pub temperature_range: f64,
    pub trend: Trend,
    /// Absolute slope scaled for display
    pub trend_strength: f64,
    pub anomalies: Vec<Anomaly>,
    #[serde(rename = "exponentialChanges")]
    pub exponential_runs: Vec<ExponentialRun>,
}

impl AnalysisResult {
    /// Fixed result for series too short to analyze
    pub fn degenerate() -> Self {
        Self {
            is_stable: true,
            stability_score: 100,
            volatility: 0.0,
            temperature_range: 0.0,
            trend: Trend::Stable,
            trend_strength: 0.0,
            anomalies: Vec::new(),
            exponential_runs: Vec::new(),
        }
    }

    pub fn grade(&self) -> StabilityGrade {
        StabilityGrade::from_score(self.stability_score)
    }

    /// No anomalies and no sustained runs
    pub fn is_quiet(&self) -> bool {
        self.anomalies.is_empty() && self.exponential_runs.is_empty()
    }

    /// Anomalies at or above a magnitude
    pub fn anomalies_at_least(&self, magnitude: Magnitude) -> impl Iterator<Item = &Anomaly> {
        self.anomalies.iter().filter(move |a| a.magnitude >= magnitude)
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trend & Anomaly Analysis:")?;
        writeln!(f, "  Stability score: {} ({})", self.stability_score, self.grade())?;
        writeln!(f, "  Volatility: {:.2}°C", self.volatility)?;
        writeln!(f, "  Range: {:.2}°C", self.temperature_range)?;
        writeln!(f, "  Trend: {} (strength {:.2})", self.trend, self.trend_strength)?;
        writeln!(f, "  Anomalies: {}", self.anomalies.len())?;
        writeln!(f, "  Exponential runs: {}", self.exponential_runs.len())?;
        Ok(())
    }
}
