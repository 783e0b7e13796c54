//! Analyze a columnar daily payload and print the result as JSON
//!
//! Run with `RUST_LOG=thermo_trend=debug` to see the analyzer's tracing output.

use thermo_core::DailyColumns;
use thermo_trend::TrendAnomalyAnalyzer;
use tracing_subscriber::EnvFilter;

const PAYLOAD: &str = r#"{
    "daily": {
        "time": [
            "2024-04-01", "2024-04-02", "2024-04-03", "2024-04-04", "2024-04-05",
            "2024-04-06", "2024-04-07", "2024-04-08", "2024-04-09", "2024-04-10"
        ],
        "temperature_2m_max": [31.2, 31.8, 32.9, 34.1, 35.6, 28.4, 29.0, 29.3, 30.1, 30.0],
        "temperature_2m_min": [24.0, 24.3, 25.1, 26.0, 27.2, 21.9, 22.4, 22.0, 22.8, 23.1]
    }
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let series = DailyColumns::from_json(PAYLOAD)?.into_series()?;
    let result = TrendAnomalyAnalyzer::default().analyze(&series);

    println!("{result}");
    for run in &result.exponential_runs {
        println!(
            "  {} {:?} - {:?}: {:+.1}°C ({:.1}°C/day)",
            run.kind.label(),
            run.start_day,
            run.end_day,
            run.change,
            run.rate
        );
    }
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
