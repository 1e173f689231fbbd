//! VROC (Volume Rate of Change) indicator

use crate::indicators::error::IndicatorResult;
use crate::indicators::validation::validate_period;
use crate::models::{Column, IndicatorSeries, PriceSeries, UNDEFINED};

pub const DEFAULT_VROC_PERIOD: usize = 14;

/// Calculate VROC
///
/// VROC[t] = (V[t] - V[t - period]) / V[t - period] * 100
///
/// The first `period` values are undefined, and so is any bar whose base
/// volume is zero.
pub fn calculate_vroc(series: &PriceSeries, period: usize) -> IndicatorResult<IndicatorSeries> {
    validate_period("VROC", period)?;
    let volume = series.column(Column::Volume)?;

    let mut values = vec![UNDEFINED; volume.len()];
    for t in period..volume.len() {
        let base = volume[t - period];
        if base != 0.0 {
            values[t] = (volume[t] - base) / base * 100.0;
        }
    }

    Ok(IndicatorSeries::new(format!("vroc_{}", period), values))
}

/// Calculate VROC with default period (14)
pub fn calculate_vroc_default(series: &PriceSeries) -> IndicatorResult<IndicatorSeries> {
    calculate_vroc(series, DEFAULT_VROC_PERIOD)
}
