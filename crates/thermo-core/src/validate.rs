//! Optional input validation
//!
//! The analyzers accept any series and let bad values propagate into their
//! output. Callers that want a hard guarantee run [`validate_series`] first.

use crate::error::{Error, Result};
use crate::reading::DailyReading;

/// Check that every temperature is finite and dated readings ascend strictly
///
/// Undated readings are skipped by the ordering check.
pub fn validate_series(series: &[DailyReading]) -> Result<()> {
    let mut last_date = None;

    for (index, reading) in series.iter().enumerate() {
        if !reading.temp_max.is_finite() {
            log::debug!("rejecting series: temp_max={} at day {index}", reading.temp_max);
            return Err(Error::NonFinite { index, field: "temp_max" });
        }
        if !reading.temp_min.is_finite() {
            log::debug!("rejecting series: temp_min={} at day {index}", reading.temp_min);
            return Err(Error::NonFinite { index, field: "temp_min" });
        }

        if let Some(date) = reading.date {
            if matches!(last_date, Some(prev) if date <= prev) {
                log::debug!("rejecting series: {date} does not follow the previous reading");
                return Err(Error::Unordered { index });
            }
            last_date = Some(date);
        }

        if reading.temp_max < reading.temp_min {
            log::trace!("day {index}: temp_max below temp_min, passing through");
        }
    }

    Ok(())
}
