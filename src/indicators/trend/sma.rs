//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::indicators::error::IndicatorResult;
use crate::indicators::validation::validate_period;
use crate::models::{Column, IndicatorSeries, PriceSeries};

pub const DEFAULT_SMA_PERIOD: usize = 50;

/// Calculate SMA of Close over a trailing window.
///
/// The first `period - 1` values are undefined.
pub fn calculate_sma(series: &PriceSeries, period: usize) -> IndicatorResult<IndicatorSeries> {
    validate_period("SMA", period)?;
    let closes = series.column(Column::Close)?;
    Ok(IndicatorSeries::new(
        format!("sma_{}", period),
        math::rolling_mean(closes, period),
    ))
}

/// Calculate multiple SMAs at once
pub fn calculate_smas(
    series: &PriceSeries,
    periods: &[usize],
) -> IndicatorResult<Vec<IndicatorSeries>> {
    periods
        .iter()
        .map(|&period| calculate_sma(series, period))
        .collect()
}

/// Calculate SMA with default period (50)
pub fn calculate_sma_default(series: &PriceSeries) -> IndicatorResult<IndicatorSeries> {
    calculate_sma(series, DEFAULT_SMA_PERIOD)
}
