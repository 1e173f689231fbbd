//! Window kernels shared by the indicator modules.
//!
//! Every function returns a vector aligned with its input; positions without
//! enough history hold [`UNDEFINED`].

use crate::models::UNDEFINED;

/// Trailing arithmetic mean over `period` values.
///
/// Each output is the direct mean of its window rather than a running sum,
/// so it is bit-identical to summing the window by hand. A window containing
/// an undefined input is undefined.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![UNDEFINED; values.len()];
    if period == 0 {
        return out;
    }
    for end in period..=values.len() {
        let window = &values[end - period..end];
        out[end - 1] = window.iter().sum::<f64>() / period as f64;
    }
    out
}

/// Trailing sample standard deviation (n - 1 denominator).
pub fn rolling_sample_std(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![UNDEFINED; values.len()];
    if period < 2 {
        return out;
    }
    for end in period..=values.len() {
        let window = &values[end - period..end];
        let mean = window.iter().sum::<f64>() / period as f64;
        let sum_sq: f64 = window.iter().map(|v| (v - mean).powi(2)).sum();
        out[end - 1] = (sum_sq / (period - 1) as f64).sqrt();
    }
    out
}

/// Smoothing factor for a span-style EMA.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step.
///
/// When the new value equals the previous average the average is returned
/// unchanged, so a flat input stays exactly flat.
pub fn ema_from_previous(value: f64, previous: f64, alpha: f64) -> f64 {
    if value == previous {
        previous
    } else {
        value * alpha + previous * (1.0 - alpha)
    }
}

/// EMA seeded with the first value, defined from index 0.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = ema_alpha(period);
    let mut out = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;
    for &value in values {
        let next = match previous {
            None => value,
            Some(prev) => ema_from_previous(value, prev, alpha),
        };
        out.push(next);
        previous = Some(next);
    }
    out
}

/// True range for one bar; without a previous close it is `high - low`.
pub fn true_range(high: f64, low: f64, prev_close: Option<f64>) -> f64 {
    let high_low = high - low;
    match prev_close {
        Some(prev) => high_low
            .max((high - prev).abs())
            .max((low - prev).abs()),
        None => high_low,
    }
}
