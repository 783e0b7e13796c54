//! Closed-form statistics used by the analyzers
//!
//! Everything here is a single pass (or two) over a slice with no allocation.
//! Empty input yields NaN rather than an error; callers handle short series
//! before reaching these helpers.

/// Arithmetic mean
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (squared deviations divided by `n`)
pub fn population_variance(values: &[f64]) -> f64 {
    let mean = mean(values);
    values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Least-squares slope of `values` against their zero-based index
///
/// Uses `(n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)`. With fewer than two values the
/// denominator is zero and the result is NaN.
pub fn ols_slope(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x)
}

/// Largest value, propagating NaN
pub fn max_of(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.max(x)
        }
    })
}

/// Smallest value, propagating NaN
pub fn min_of(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(f64::INFINITY, |acc, x| {
        if x.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.min(x)
        }
    })
}
