//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::error::IndicatorResult;
use crate::indicators::validation::validate_bollinger_period;
use crate::models::{BollingerBands, Column, IndicatorSeries, PriceSeries};

pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + 2 * sample standard deviation
/// Lower Band = Middle - 2 * sample standard deviation
///
/// The standard deviation uses the n - 1 denominator, so `period` must be at
/// least 2.
pub fn calculate_bollinger_bands(
    series: &PriceSeries,
    period: usize,
) -> IndicatorResult<BollingerBands> {
    validate_bollinger_period(period)?;
    let closes = series.column(Column::Close)?;

    let middle = math::rolling_mean(closes, period);
    let std = math::rolling_sample_std(closes, period);

    let upper = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| m + BOLLINGER_STD_DEV * s)
        .collect();
    let lower = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| m - BOLLINGER_STD_DEV * s)
        .collect();

    Ok(BollingerBands {
        upper: IndicatorSeries::new("bb_upper", upper),
        middle: IndicatorSeries::new("bb_middle", middle),
        lower: IndicatorSeries::new("bb_lower", lower),
        period,
        std_dev: BOLLINGER_STD_DEV,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(series: &PriceSeries) -> IndicatorResult<BollingerBands> {
    calculate_bollinger_bands(series, DEFAULT_BOLLINGER_PERIOD)
}
