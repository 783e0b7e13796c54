//! Day-over-day delta primitives
//!
//! Both analyzers look at how consecutive days differ. The trend analyzer works
//! on the sequence of daily averages, the delta classifier on the per-extreme
//! differences; both are built from the helpers here.

use crate::reading::DailyReading;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Change between day `index - 1` and day `index`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayDelta {
    /// Index of the later reading
    pub index: usize,
    /// Change in daily maximum
    pub max_delta: f64,
    /// Change in daily minimum
    pub min_delta: f64,
    /// Change in daily average
    pub avg_delta: f64,
    /// Date of the later reading
    pub date: Option<NaiveDate>,
}

impl DayDelta {
    /// Compute the delta from `prev` to `curr`, labelled with the later day's index
    pub fn between(index: usize, prev: &DailyReading, curr: &DailyReading) -> Self {
        Self {
            index,
            max_delta: curr.temp_max - prev.temp_max,
            min_delta: curr.temp_min - prev.temp_min,
            avg_delta: (curr.extremes_sum() - prev.extremes_sum()) / 2.0,
            date: curr.date,
        }
    }

    /// Largest absolute change of the two extremes
    ///
    /// NaN deltas are ignored by `f64::max`, so a day with one NaN extreme
    /// reports the other one.
    pub fn largest_extreme_change(&self) -> f64 {
        self.max_delta.abs().max(self.min_delta.abs())
    }
}

/// Iterate the deltas of every consecutive pair, starting at index 1
pub fn day_deltas(series: &[DailyReading]) -> impl Iterator<Item = DayDelta> + '_ {
    series
        .windows(2)
        .enumerate()
        .map(|(i, pair)| DayDelta::between(i + 1, &pair[0], &pair[1]))
}

/// Daily averages of a series, in order
pub fn daily_averages(series: &[DailyReading]) -> Vec<f64> {
    series.iter().map(DailyReading::average).collect()
}

/// `values[i] - values[i - 1]` for every `i >= 1`
pub fn successive_differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Sign of a change, with zero kept distinct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
    Flat,
}

impl Direction {
    /// Classify a change; NaN is treated as flat
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Direction::Rising
        } else if change < 0.0 {
            Direction::Falling
        } else {
            Direction::Flat
        }
    }

    /// Whether two changes move strictly the same way (flat never continues)
    pub fn continues(current: f64, previous: f64) -> bool {
        match (Self::of(current), Self::of(previous)) {
            (Direction::Rising, Direction::Rising) | (Direction::Falling, Direction::Falling) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::series_from_pairs;
    use approx::assert_relative_eq;

    #[test]
    fn test_day_deltas() {
        let series = series_from_pairs(&[(10.0, 0.0), (11.0, 1.0), (19.0, 2.0)]);
        let deltas: Vec<_> = day_deltas(&series).collect();

        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[0].index, 1);
        assert_relative_eq!(deltas[0].max_delta, 1.0);
        assert_relative_eq!(deltas[0].min_delta, 1.0);
        assert_relative_eq!(deltas[0].avg_delta, 1.0);

        assert_eq!(deltas[1].index, 2);
        assert_relative_eq!(deltas[1].max_delta, 8.0);
        assert_relative_eq!(deltas[1].min_delta, 1.0);
        assert_relative_eq!(deltas[1].avg_delta, 4.5);
        assert_relative_eq!(deltas[1].largest_extreme_change(), 8.0);
    }

    #[test]
    fn test_day_deltas_short_series() {
        assert_eq!(day_deltas(&[]).count(), 0);
        assert_eq!(day_deltas(&series_from_pairs(&[(1.0, 0.0)])).count(), 0);
    }

    #[test]
    fn test_successive_differences() {
        let diffs = successive_differences(&[10.0, 10.0, 20.0, 10.0]);
        assert_eq!(diffs, vec![0.0, 10.0, -10.0]);
        assert!(successive_differences(&[1.0]).is_empty());
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::of(0.5), Direction::Rising);
        assert_eq!(Direction::of(-0.5), Direction::Falling);
        assert_eq!(Direction::of(0.0), Direction::Flat);
        assert_eq!(Direction::of(f64::NAN), Direction::Flat);

        assert!(Direction::continues(1.0, 2.0));
        assert!(Direction::continues(-1.0, -0.1));
        assert!(!Direction::continues(1.0, -1.0));
        assert!(!Direction::continues(0.0, 0.0));
        assert!(!Direction::continues(1.0, 0.0));
    }
}
