//! DMI (Directional Movement Index): +DI and -DI

use crate::common::math;
use crate::indicators::error::{DataError, IndicatorResult};
use crate::indicators::validation::validate_period;
use crate::indicators::volatility::calculate_atr;
use crate::models::{Column, DmiSeries, IndicatorSeries, PriceSeries, UNDEFINED};

pub const DEFAULT_DMI_PERIOD: usize = 14;

/// Per-bar +DM and -DM.
///
/// high_diff = H[t] - H[t-1], low_diff = L[t-1] - L[t]. A bar contributes to
/// at most one side; the first bar has no movement.
pub fn directional_movement(high: &[f64], low: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let len = high.len().min(low.len());
    let mut plus_dm = vec![0.0; len];
    let mut minus_dm = vec![0.0; len];

    for i in 1..len {
        let high_diff = high[i] - high[i - 1];
        let low_diff = low[i - 1] - low[i];

        if high_diff > 0.0 && high_diff > low_diff {
            plus_dm[i] = high_diff;
        }
        if low_diff > 0.0 && low_diff > high_diff {
            minus_dm[i] = low_diff;
        }
    }

    (plus_dm, minus_dm)
}

/// Calculate +DI and -DI
///
/// ±DI = 100 * mean(±DM, period) / ATR(period)
pub fn calculate_dmi(series: &PriceSeries, period: usize) -> IndicatorResult<DmiSeries> {
    validate_period("DMI", period)?;
    let atr = calculate_atr(series, period)?;
    calculate_dmi_with_atr(series, period, &atr.values)
}

/// Same as [`calculate_dmi`] with an ATR computed elsewhere for the same period.
///
/// A zero ATR (no price movement in the window) gives DI = 0.
pub fn calculate_dmi_with_atr(
    series: &PriceSeries,
    period: usize,
    atr: &[f64],
) -> IndicatorResult<DmiSeries> {
    validate_period("DMI", period)?;
    let [high, low, _close] = series.columns([Column::High, Column::Low, Column::Close])?;
    if atr.len() != high.len() {
        return Err(DataError::LengthMismatch {
            name: format!("atr_{}", period),
            expected: high.len(),
            actual: atr.len(),
        }
        .into());
    }

    let (plus_dm, minus_dm) = directional_movement(high, low);
    let plus_avg = math::rolling_mean(&plus_dm, period);
    let minus_avg = math::rolling_mean(&minus_dm, period);

    let plus_di = directional_index(&plus_avg, atr);
    let minus_di = directional_index(&minus_avg, atr);

    Ok(DmiSeries {
        plus_di: IndicatorSeries::new("plus_di", plus_di),
        minus_di: IndicatorSeries::new("minus_di", minus_di),
        period,
    })
}

/// Calculate DMI with default period (14)
pub fn calculate_dmi_default(series: &PriceSeries) -> IndicatorResult<DmiSeries> {
    calculate_dmi(series, DEFAULT_DMI_PERIOD)
}

fn directional_index(dm_avg: &[f64], atr: &[f64]) -> Vec<f64> {
    dm_avg
        .iter()
        .zip(atr)
        .map(|(&dm, &atr)| {
            if dm.is_nan() || atr.is_nan() {
                UNDEFINED
            } else if atr == 0.0 {
                0.0
            } else {
                100.0 * dm / atr
            }
        })
        .collect()
}
