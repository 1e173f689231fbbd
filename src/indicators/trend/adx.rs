//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::indicators::error::IndicatorResult;
use crate::indicators::trend::dmi::calculate_dmi_with_atr;
use crate::indicators::validation::validate_period;
use crate::indicators::volatility::calculate_atr;
use crate::models::{DmiSeries, IndicatorSeries, PriceSeries, UNDEFINED};

pub const DEFAULT_ADX_PERIOD: usize = 14;

/// Calculate ADX indicator
///
/// ADX measures trend strength regardless of direction.
/// DX = 100 * |+DI - -DI| / (+DI + -DI), ADX = mean(DX, period).
/// With the default period the first defined value is at index 2 * (period - 1).
pub fn calculate_adx(series: &PriceSeries, period: usize) -> IndicatorResult<IndicatorSeries> {
    validate_period("ADX", period)?;
    let atr = calculate_atr(series, period)?;
    calculate_adx_with_atr(series, period, &atr.values)
}

/// Same as [`calculate_adx`] with an ATR computed elsewhere for the same period.
pub fn calculate_adx_with_atr(
    series: &PriceSeries,
    period: usize,
    atr: &[f64],
) -> IndicatorResult<IndicatorSeries> {
    let dmi = calculate_dmi_with_atr(series, period, atr)?;
    Ok(calculate_adx_from_dmi(&dmi))
}

/// Smooth DX built from an existing DMI result.
pub fn calculate_adx_from_dmi(dmi: &DmiSeries) -> IndicatorSeries {
    let dx: Vec<f64> = dmi
        .plus_di
        .values
        .iter()
        .zip(&dmi.minus_di.values)
        .map(|(&plus, &minus)| directional_index_spread(plus, minus))
        .collect();

    IndicatorSeries::new(
        format!("adx_{}", dmi.period),
        math::rolling_mean(&dx, dmi.period),
    )
}

/// Calculate ADX with default period (14)
pub fn calculate_adx_default(series: &PriceSeries) -> IndicatorResult<IndicatorSeries> {
    calculate_adx(series, DEFAULT_ADX_PERIOD)
}

/// DX for one bar; zero when both indicators are zero.
fn directional_index_spread(plus_di: f64, minus_di: f64) -> f64 {
    if plus_di.is_nan() || minus_di.is_nan() {
        return UNDEFINED;
    }
    let di_sum = plus_di + minus_di;
    if di_sum == 0.0 {
        0.0
    } else {
        100.0 * (plus_di - minus_di).abs() / di_sum
    }
}
