//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::error::IndicatorResult;
use crate::indicators::validation::validate_macd_periods;
use crate::models::{Column, IndicatorSeries, MacdSeries, PriceSeries};

pub const DEFAULT_MACD_FAST: usize = 12;
pub const DEFAULT_MACD_SLOW: usize = 26;
pub const DEFAULT_MACD_SIGNAL: usize = 9;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd(
    series: &PriceSeries,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> IndicatorResult<MacdSeries> {
    validate_macd_periods(fast_period, slow_period, signal_period)?;
    let closes = series.column(Column::Close)?;

    let fast_ema = math::ema_series(closes, fast_period);
    let slow_ema = math::ema_series(closes, slow_period);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal_line = math::ema_series(&macd_line, signal_period);
    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(macd, signal)| macd - signal)
        .collect();

    Ok(MacdSeries {
        macd: IndicatorSeries::new("macd", macd_line),
        signal: IndicatorSeries::new("macd_signal", signal_line),
        histogram: IndicatorSeries::new("macd_histogram", histogram),
        period: (fast_period, slow_period, signal_period),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(series: &PriceSeries) -> IndicatorResult<MacdSeries> {
    calculate_macd(
        series,
        DEFAULT_MACD_FAST,
        DEFAULT_MACD_SLOW,
        DEFAULT_MACD_SIGNAL,
    )
}
