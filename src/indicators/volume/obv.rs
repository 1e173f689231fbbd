//! OBV (On-Balance Volume) indicator

use crate::indicators::error::IndicatorResult;
use crate::models::{Column, IndicatorSeries, PriceSeries};
use std::cmp::Ordering;

/// Calculate OBV
///
/// Running total of volume signed by the close-to-close direction: added on
/// an up close, subtracted on a down close, unchanged on an equal close.
/// The first bar has no previous close and starts the total at 0.
pub fn calculate_obv(series: &PriceSeries) -> IndicatorResult<IndicatorSeries> {
    let [close, volume] = series.columns([Column::Close, Column::Volume])?;

    let mut values = Vec::with_capacity(close.len());
    let mut obv = 0.0;
    values.push(obv);

    for i in 1..close.len() {
        match close[i].partial_cmp(&close[i - 1]) {
            Some(Ordering::Greater) => obv += volume[i],
            Some(Ordering::Less) => obv -= volume[i],
            _ => {}
        }
        values.push(obv);
    }

    Ok(IndicatorSeries::new("obv", values))
}
