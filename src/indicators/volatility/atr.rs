//! ATR (Average True Range) indicator

use crate::common::math;
use crate::indicators::error::IndicatorResult;
use crate::indicators::validation::validate_period;
use crate::models::{Column, IndicatorSeries, PriceSeries};

pub const DEFAULT_ATR_PERIOD: usize = 14;

/// True range of every bar.
///
/// TR = max(H - L, |H - prevClose|, |L - prevClose|). The first bar has no
/// previous close, so its true range is H - L.
pub fn calculate_true_range(series: &PriceSeries) -> IndicatorResult<IndicatorSeries> {
    let [high, low, close] = series.columns([Column::High, Column::Low, Column::Close])?;

    let values = (0..high.len())
        .map(|i| {
            let prev_close = i.checked_sub(1).map(|p| close[p]);
            math::true_range(high[i], low[i], prev_close)
        })
        .collect();

    Ok(IndicatorSeries::new("true_range", values))
}

/// Calculate ATR (Average True Range)
///
/// ATR is the trailing simple mean of the true range over `period` bars;
/// the first `period - 1` values are undefined.
pub fn calculate_atr(series: &PriceSeries, period: usize) -> IndicatorResult<IndicatorSeries> {
    validate_period("ATR", period)?;
    let tr = calculate_true_range(series)?;
    Ok(IndicatorSeries::new(
        format!("atr_{}", period),
        math::rolling_mean(&tr.values, period),
    ))
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(series: &PriceSeries) -> IndicatorResult<IndicatorSeries> {
    calculate_atr(series, DEFAULT_ATR_PERIOD)
}
