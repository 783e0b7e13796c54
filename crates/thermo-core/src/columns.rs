//! Columnar daily payloads
//!
//! Weather archives return daily data as parallel arrays rather than one
//! record per day. [`DailyColumns`] mirrors that shape so it can be decoded
//! directly and zipped into a series.

use crate::error::{Error, Result};
use crate::reading::DailyReading;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parallel arrays of dates and daily extremes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyColumns {
    pub time: Vec<NaiveDate>,
    #[serde(rename = "temperature_2m_max")]
    pub temp_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    pub temp_min: Vec<f64>,
}

/// Envelope holding a `daily` block, as the archive responds
#[derive(Debug, Clone, Deserialize)]
struct DailyEnvelope {
    daily: DailyColumns,
}

impl DailyColumns {
    /// Decode either a bare columns object or an envelope with a `daily` field
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("daily").is_some() {
            let envelope: DailyEnvelope = serde_json::from_value(value)?;
            Ok(envelope.daily)
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    /// Number of days, if all columns agree
    pub fn len(&self) -> Result<usize> {
        let (time, max, min) = (self.time.len(), self.temp_max.len(), self.temp_min.len());
        if time != max || time != min {
            return Err(Error::LengthMismatch { time, max, min });
        }
        Ok(time)
    }

    /// Whether the payload holds no days
    pub fn is_empty(&self) -> bool {
        self.time.is_empty() && self.temp_max.is_empty() && self.temp_min.is_empty()
    }

    /// Zip the columns into a dated series, keeping the payload's order
    pub fn into_series(self) -> Result<Vec<DailyReading>> {
        self.len()?;
        Ok(self
            .time
            .into_iter()
            .zip(self.temp_max)
            .zip(self.temp_min)
            .map(|((date, max), min)| DailyReading::new(date, max, min))
            .collect())
    }
}

impl TryFrom<DailyColumns> for Vec<DailyReading> {
    type Error = Error;

    fn try_from(columns: DailyColumns) -> Result<Self> {
        columns.into_series()
    }
}
