//! Sustained run detection
//!
//! A single forward scan over the daily averages. At each day the change into
//! that day is compared with the change into the previous day; the run grows
//! while both move strictly the same way. The first change has nothing before
//! it and is compared with itself, so a non-zero opening change always extends
//! the initial run to two days. When the direction breaks at day `i`, the next
//! run is anchored at `i` itself.

use crate::types::{ExponentialRun, RunKind};
use thermo_core::{DailyReading, Direction};
use tracing::trace;

/// Find every run covering at least `min_days` days
///
/// `averages[i]` must be the daily average of `series[i]`.
pub fn detect_runs(series: &[DailyReading], averages: &[f64], min_days: usize) -> Vec<ExponentialRun> {
    let mut runs = Vec::new();
    if averages.len() < 2 {
        return runs;
    }

    let mut days_in_run = 1;
    let mut start = 0;

    for i in 1..averages.len() {
        let current = averages[i] - averages[i - 1];
        let previous = if i > 1 { averages[i - 1] - averages[i - 2] } else { current };

        if Direction::continues(current, previous) {
            days_in_run += 1;
        } else {
            if days_in_run >= min_days {
                runs.push(build_run(series, averages, start, i - 1));
            }
            days_in_run = 1;
            start = i;
        }
    }

    if days_in_run >= min_days {
        runs.push(build_run(series, averages, start, averages.len() - 1));
    }

    runs
}

fn build_run(series: &[DailyReading], averages: &[f64], start: usize, end: usize) -> ExponentialRun {
    let change = averages[end] - averages[start];
    let rate = change / (end - start) as f64;
    let kind = if change > 0.0 { RunKind::Heating } else { RunKind::Cooling };
    trace!(start, end, change, rate, ?kind, "sustained run");

    ExponentialRun {
        start_index: start,
        end_index: end,
        start_day: series[start].date,
        end_day: series[end].date,
        change,
        rate,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use thermo_core::{daily_averages, series_from_pairs};

    fn runs_for(averages: &[f64]) -> Vec<ExponentialRun> {
        // max == min == average keeps the fixture readable
        let pairs: Vec<_> = averages.iter().map(|&a| (a, a)).collect();
        let series = series_from_pairs(&pairs);
        detect_runs(&series, &daily_averages(&series), 3)
    }

    #[test]
    fn test_full_span_heating() {
        let runs = runs_for(&[10.0, 12.0, 14.0, 16.0, 18.0]);
        assert_eq!(runs.len(), 1);
        assert_eq!((runs[0].start_index, runs[0].end_index), (0, 4));
        assert_relative_eq!(runs[0].change, 8.0);
        assert_relative_eq!(runs[0].rate, 2.0);
        assert_eq!(runs[0].kind, RunKind::Heating);
    }

    #[test]
    fn test_single_step_reversals() {
        assert!(runs_for(&[10.0, 10.0, 10.0, 20.0, 10.0, 10.0]).is_empty());
        assert!(runs_for(&[1.0, 2.0, 1.0, 2.0, 1.0]).is_empty());
    }

    #[test]
    fn test_opening_change_seeds_run() {
        // Two rising changes already cover three days thanks to the seed
        let runs = runs_for(&[0.0, 1.0, 2.0]);
        assert_eq!(runs.len(), 1);
        assert_eq!((runs[0].start_index, runs[0].end_index), (0, 2));
        assert_relative_eq!(runs[0].rate, 1.0);
    }

    #[test]
    fn test_run_after_break_anchors_at_break_day() {
        // Rise over 0..=3, then fall; the falling run starts at day 4
        let runs = runs_for(&[0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0]);
        assert_eq!(runs.len(), 2);

        assert_eq!((runs[0].start_index, runs[0].end_index), (0, 3));
        assert_eq!(runs[0].kind, RunKind::Heating);

        assert_eq!((runs[1].start_index, runs[1].end_index), (4, 6));
        assert_relative_eq!(runs[1].change, -2.0);
        assert_relative_eq!(runs[1].rate, -1.0);
        assert_eq!(runs[1].kind, RunKind::Cooling);
    }

    #[test]
    fn test_flat_changes_break_runs() {
        // The flat opening change does not seed a run
        let runs = runs_for(&[5.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(runs.len(), 1);
        assert_eq!((runs[0].start_index, runs[0].end_index), (2, 4));
        assert_eq!(runs[0].days(), 3);
        assert_eq!(runs[0].steps(), 2);
    }

    #[test]
    fn test_short_input() {
        assert!(runs_for(&[]).is_empty());
        assert!(runs_for(&[1.0]).is_empty());
        assert!(runs_for(&[1.0, 5.0]).is_empty());
    }
}
