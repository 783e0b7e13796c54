//! Daily temperature readings
//!
//! A series is a plain slice of [`DailyReading`] in chronological order;
//! index `i` is the day offset from the first reading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's maximum and minimum temperature in °C
///
/// `temp_max >= temp_min` is assumed but never checked; inverted pairs flow
/// through every computation as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyReading {
    /// Calendar day, absent when the upstream source carries no dates
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Daily maximum temperature
    pub temp_max: f64,
    /// Daily minimum temperature
    pub temp_min: f64,
}

impl DailyReading {
    /// Create a dated reading
    pub fn new(date: NaiveDate, temp_max: f64, temp_min: f64) -> Self {
        Self {
            date: Some(date),
            temp_max,
            temp_min,
        }
    }

    /// Create a reading without a date
    pub fn undated(temp_max: f64, temp_min: f64) -> Self {
        Self {
            date: None,
            temp_max,
            temp_min,
        }
    }

    /// Mean of the day's maximum and minimum
    #[inline]
    pub fn average(&self) -> f64 {
        (self.temp_max + self.temp_min) / 2.0
    }

    /// Sum of maximum and minimum, the basis of the classifier's average delta
    #[inline]
    pub(crate) fn extremes_sum(&self) -> f64 {
        self.temp_max + self.temp_min
    }
}

/// Build an undated series from `(max, min)` pairs
pub fn series_from_pairs(pairs: &[(f64, f64)]) -> Vec<DailyReading> {
    pairs
        .iter()
        .map(|&(max, min)| DailyReading::undated(max, min))
        .collect()
}

/// Build a dated series of consecutive days starting at `start`
pub fn consecutive_days(start: NaiveDate, pairs: &[(f64, f64)]) -> Vec<DailyReading> {
    start
        .iter_days()
        .zip(pairs)
        .map(|(date, &(max, min))| DailyReading::new(date, max, min))
        .collect()
}
