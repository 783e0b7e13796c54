//! Core types and traits for temperature series analysis
//!
//! This crate holds the vocabulary shared by the analysis crates:
//!
//! - [`DailyReading`]: one day's maximum and minimum temperature
//! - [`DayDelta`] and friends: the day-over-day delta primitive
//! - [`math`]: closed-form mean, population standard deviation and OLS slope
//! - [`SeriesAnalyzer`]: the trait every analysis capability implements
//! - [`DailyColumns`]: decoding of columnar daily payloads
//! - [`validate_series`]: optional strict validation before analysis
//!
//! # Example
//!
//! ```rust
//! use thermo_core::{daily_averages, day_deltas, series_from_pairs};
//!
//! let series = series_from_pairs(&[(10.0, 0.0), (12.0, 2.0), (20.0, 2.0)]);
//! assert_eq!(daily_averages(&series), vec![5.0, 7.0, 11.0]);
//!
//! let biggest = day_deltas(&series)
//!     .map(|d| d.max_delta)
//!     .fold(f64::MIN, f64::max);
//! assert_eq!(biggest, 8.0);
//! ```

pub mod columns;
pub mod delta;
pub mod error;
pub mod math;
pub mod reading;
pub mod traits;
pub mod validate;

// Re-export core types
pub use columns::DailyColumns;
pub use delta::{daily_averages, day_deltas, successive_differences, DayDelta, Direction};
pub use error::{Error, Result};
pub use reading::{consecutive_days, series_from_pairs, DailyReading};
pub use traits::{SeriesAnalyzer, SeriesAnalyzerProperties};
pub use validate::validate_series;

pub use chrono::NaiveDate;
