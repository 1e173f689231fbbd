//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::indicators::error::IndicatorResult;
use crate::indicators::validation::validate_period;
use crate::models::{Column, IndicatorSeries, PriceSeries, UNDEFINED};

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// RSI reported for a window with neither gains nor losses.
pub const RSI_NEUTRAL: f64 = 50.0;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = mean(gain, period) / mean(loss, period)
///
/// Gains and losses come from bar-to-bar Close differences, so the first
/// `period` values are undefined. A window with losses of zero reads 100 when
/// it has gains and `RSI_NEUTRAL` when it has none.
pub fn calculate_rsi(series: &PriceSeries, period: usize) -> IndicatorResult<IndicatorSeries> {
    validate_period("RSI", period)?;
    let closes = series.column(Column::Close)?;

    let mut gains = vec![UNDEFINED; closes.len()];
    let mut losses = vec![UNDEFINED; closes.len()];
    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        gains[i] = if change > 0.0 { change } else { 0.0 };
        losses[i] = if change < 0.0 { -change } else { 0.0 };
    }

    let avg_gain = math::rolling_mean(&gains, period);
    let avg_loss = math::rolling_mean(&losses, period);

    let values = avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(&gain, &loss)| relative_strength_index(gain, loss))
        .collect();

    Ok(IndicatorSeries::new(format!("rsi_{}", period), values))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(series: &PriceSeries) -> IndicatorResult<IndicatorSeries> {
    calculate_rsi(series, DEFAULT_RSI_PERIOD)
}

fn relative_strength_index(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_gain.is_nan() || avg_loss.is_nan() {
        return UNDEFINED;
    }
    if avg_loss == 0.0 {
        return if avg_gain > 0.0 { 100.0 } else { RSI_NEUTRAL };
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
