//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::indicators::error::IndicatorResult;
use crate::indicators::validation::validate_period;
use crate::models::{Column, IndicatorSeries, PriceSeries};

pub const DEFAULT_EMA_PERIOD: usize = 50;

/// Calculate EMA of Close for a specific period
///
/// alpha = 2 / (period + 1), EMA[0] = Close[0],
/// EMA[t] = Close[t] * alpha + EMA[t-1] * (1 - alpha).
/// No bias correction, so every bar has a value.
pub fn calculate_ema(series: &PriceSeries, period: usize) -> IndicatorResult<IndicatorSeries> {
    validate_period("EMA", period)?;
    let closes = series.column(Column::Close)?;
    Ok(IndicatorSeries::new(
        format!("ema_{}", period),
        math::ema_series(closes, period),
    ))
}

/// Calculate multiple EMAs at once
pub fn calculate_emas(
    series: &PriceSeries,
    periods: &[usize],
) -> IndicatorResult<Vec<IndicatorSeries>> {
    periods
        .iter()
        .map(|&period| calculate_ema(series, period))
        .collect()
}

/// Calculate EMA with default period (50)
pub fn calculate_ema_default(series: &PriceSeries) -> IndicatorResult<IndicatorSeries> {
    calculate_ema(series, DEFAULT_EMA_PERIOD)
}

