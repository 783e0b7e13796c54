//! Scenario tests for the trend and anomaly analyzer
//!
//! Each test builds a short, hand-checkable series and verifies the full
//! result, including dates carried into anomalies and runs.

use approx::assert_relative_eq;
use thermo_core::{consecutive_days, series_from_pairs, NaiveDate, SeriesAnalyzer, SeriesAnalyzerProperties};
use thermo_trend::{
    AnalysisResult, AnomalyKind, Magnitude, RunKind, StabilityGrade, Trend, TrendAnomalyAnalyzer,
    TrendParameters,
};

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

/// Series whose daily averages equal `averages`, starting on Jan 1
fn series_with_averages(averages: &[f64]) -> Vec<thermo_core::DailyReading> {
    let pairs: Vec<_> = averages.iter().map(|&a| (a + 4.0, a - 4.0)).collect();
    consecutive_days(jan(1), &pairs)
}

#[test]
fn test_constant_readings() {
    let series = consecutive_days(jan(1), &[(10.0, 0.0), (10.0, 0.0), (10.0, 0.0)]);
    let result = thermo_trend::analyze(&series);

    assert_eq!(result.volatility, 0.0);
    assert_relative_eq!(result.temperature_range, 10.0);
    assert_eq!(result.trend, Trend::Stable);
    assert_eq!(result.stability_score, 90);
    assert!(result.is_stable);
    assert!(result.anomalies.is_empty());
    assert!(result.exponential_runs.is_empty());
    assert_eq!(result.grade(), StabilityGrade::VeryStable);
}

#[test]
fn test_isolated_spike_and_recovery() {
    let series = series_with_averages(&[10.0, 10.0, 10.0, 20.0, 10.0, 10.0]);
    let result = thermo_trend::analyze(&series);

    assert_eq!(result.anomalies.len(), 2);

    assert_eq!(result.anomalies[0].index, 3);
    assert_eq!(result.anomalies[0].day, Some(jan(4)));
    assert_relative_eq!(result.anomalies[0].change, 10.0);
    assert_eq!(result.anomalies[0].kind, AnomalyKind::Spike);
    assert_eq!(result.anomalies[0].magnitude, Magnitude::High);

    assert_eq!(result.anomalies[1].index, 4);
    assert_eq!(result.anomalies[1].day, Some(jan(5)));
    assert_relative_eq!(result.anomalies[1].change, -10.0);
    assert_eq!(result.anomalies[1].kind, AnomalyKind::Drop);
    assert_eq!(result.anomalies[1].magnitude, Magnitude::High);

    assert!(result.exponential_runs.is_empty());
}

#[test]
fn test_steady_warming_run() {
    let series = series_with_averages(&[10.0, 12.0, 14.0, 16.0, 18.0]);
    let result = thermo_trend::analyze(&series);

    assert_eq!(result.exponential_runs.len(), 1);
    let run = &result.exponential_runs[0];
    assert_eq!(run.start_day, Some(jan(1)));
    assert_eq!(run.end_day, Some(jan(5)));
    assert_relative_eq!(run.change, 8.0);
    assert_relative_eq!(run.rate, 2.0);
    assert_eq!(run.kind, RunKind::Heating);
    assert_eq!(run.kind.label(), "Rapid Warming");

    // Slope of 2 °C/day, well past the stable band
    assert_eq!(result.trend, Trend::Increasing);
    assert_relative_eq!(result.trend_strength, 20.0, epsilon = 1e-9);
    // Steps of 2 °C stay below the anomaly threshold
    assert!(result.anomalies.is_empty());
}

#[test]
fn test_cooling_is_mirror_of_warming() {
    let warming = thermo_trend::analyze(&series_with_averages(&[10.0, 12.0, 14.0, 16.0, 18.0]));
    let cooling = thermo_trend::analyze(&series_with_averages(&[18.0, 16.0, 14.0, 12.0, 10.0]));

    assert_eq!(cooling.trend, Trend::Decreasing);
    assert_relative_eq!(cooling.trend_strength, warming.trend_strength, epsilon = 1e-9);
    assert_relative_eq!(cooling.volatility, warming.volatility, epsilon = 1e-12);
    assert_eq!(cooling.stability_score, warming.stability_score);

    let run = &cooling.exponential_runs[0];
    assert_eq!(run.kind, RunKind::Cooling);
    assert_relative_eq!(run.rate, -2.0);
}

#[test]
fn test_volatile_week_is_unstable() {
    let series = series_from_pairs(&[
        (30.0, 18.0),
        (22.0, 10.0),
        (33.0, 21.0),
        (19.0, 6.0),
        (31.0, 20.0),
        (18.0, 5.0),
        (32.0, 19.0),
    ]);
    let result = thermo_trend::analyze(&series);

    assert!(!result.is_stable);
    assert!(result.stability_score < 70);
    assert_eq!(result.grade(), StabilityGrade::Unstable);
    assert_relative_eq!(result.temperature_range, 28.0);
    // Every step swings by more than 6 °C on average
    assert_eq!(result.anomalies.len(), 6);
    assert!(result.anomalies.iter().all(|a| a.magnitude == Magnitude::High));
    assert!(result.anomalies.iter().all(|a| a.day.is_none()));
    assert!(result.exponential_runs.is_empty());
}

#[test]
fn test_mild_drift_with_medium_anomaly() {
    // One 4.5 °C jump inside an otherwise gentle series
    let series = series_with_averages(&[15.0, 15.5, 15.0, 19.5, 19.0, 19.5]);
    let result = thermo_trend::analyze(&series);

    assert_eq!(result.anomalies.len(), 1);
    assert_eq!(result.anomalies[0].index, 3);
    assert_eq!(result.anomalies[0].magnitude, Magnitude::Medium);
    assert_eq!(result.anomalies_at_least(Magnitude::High).count(), 0);
    assert_eq!(result.anomalies_at_least(Magnitude::Low).count(), 1);
}

#[test]
fn test_custom_parameters() {
    let params = TrendParameters::default()
        .with_anomaly_thresholds(1.0, 1.5, 2.5)
        .with_min_run_days(5)
        .with_stable_score(95);
    params.validate().unwrap();
    let analyzer = TrendAnomalyAnalyzer::new(params);

    let result = analyzer.analyze(&series_with_averages(&[10.0, 12.0, 14.0, 16.0]));
    // Four days never reach the five-day minimum
    assert!(result.exponential_runs.is_empty());
    // Steps of 2 °C are now medium anomalies
    assert_eq!(result.anomalies.len(), 3);
    assert!(result.anomalies.iter().all(|a| a.magnitude == Magnitude::Medium));
    assert!(!result.is_stable);
}

#[test]
fn test_trait_surface() {
    let analyzer = TrendAnomalyAnalyzer::default();
    assert_eq!(analyzer.method_name(), "Trend & Anomaly Analysis");
    assert!(!analyzer.can_handle_size(1));
    assert!(analyzer.can_handle_size(2));

    let a = series_with_averages(&[10.0, 10.0]);
    let b = series_with_averages(&[10.0]);
    let results = SeriesAnalyzer::analyze_batch(&analyzer, &[a.as_slice(), b.as_slice()]);
    assert_eq!(results.len(), 2);
    assert_eq!(results[1], AnalysisResult::degenerate());
}

#[test]
fn test_json_output_shape() {
    let result = thermo_trend::analyze(&series_with_averages(&[10.0, 12.0, 14.0, 16.0, 18.0]));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["trend"], "increasing");
    let run = &json["exponentialChanges"][0];
    assert_eq!(run["startDay"], "2024-01-01");
    assert_eq!(run["endDay"], "2024-01-05");
    assert_eq!(run["type"], "heating");
    assert_eq!(run["rate"], 2.0);
}
