//! Core traits for series analysis
//!
//! Each capability is a separate implementation of [`SeriesAnalyzer`] with its
//! own output type. Analyzers are pure: the same series always gives the same
//! output, and nothing is retained between calls.

use crate::reading::DailyReading;

/// Intrinsic properties of an analyzer
pub trait SeriesAnalyzerProperties {
    /// Name of the analysis method
    fn method_name(&self) -> &'static str;

    /// Shortest series that gets the full analysis; anything shorter
    /// produces the analyzer's fixed degenerate output
    fn minimum_samples(&self) -> usize {
        2
    }

    /// Check if a series is long enough for the full analysis
    fn can_handle_size(&self, size: usize) -> bool {
        size >= self.minimum_samples()
    }
}

/// An infallible analysis over an ordered daily series
pub trait SeriesAnalyzer: SeriesAnalyzerProperties {
    /// Result produced for one series
    type Output;

    /// Analyze a chronologically ordered series
    fn analyze(&self, series: &[DailyReading]) -> Self::Output;

    /// Analyze several independent series
    fn analyze_batch(&self, batch: &[&[DailyReading]]) -> Vec<Self::Output> {
        batch.iter().map(|series| self.analyze(series)).collect()
    }
}
