//! Decoder for Polygon-style aggregate bar responses.
//!
//! `{"ticker": "AAPL", "results": [{"t": 1704153600000, "o": .., "h": .., "l": .., "c": .., "v": ..}]}`

use crate::indicators::error::DataError;
use crate::models::{Column, PriceSeries};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateBar {
    /// Bar start in epoch milliseconds.
    pub t: i64,
    #[serde(default)]
    pub o: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(default)]
    pub l: Option<f64>,
    #[serde(default)]
    pub c: Option<f64>,
    #[serde(default)]
    pub v: Option<f64>,
}

impl AggregateBar {
    fn field(&self, column: Column) -> Option<f64> {
        match column {
            Column::Open => self.o,
            Column::High => self.h,
            Column::Low => self.l,
            Column::Close => self.c,
            Column::Volume => self.v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatesResponse {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<AggregateBar>>,
}

/// Decode a raw JSON body into a price series.
pub fn parse_aggregates(body: &str) -> Result<PriceSeries, DataError> {
    let response: AggregatesResponse =
        serde_json::from_str(body).map_err(|e| DataError::Malformed(e.to_string()))?;
    aggregates_to_series(&response)
}

/// Build a price series from decoded bars.
///
/// A field missing on any bar drops that whole column.
pub fn aggregates_to_series(response: &AggregatesResponse) -> Result<PriceSeries, DataError> {
    let bars = response.results.as_ref().ok_or(DataError::NoResults)?;

    let timestamps = bars
        .iter()
        .map(|bar| millis_to_datetime(bar.t))
        .collect::<Result<Vec<_>, _>>()?;
    let mut series = PriceSeries::new(timestamps)?;

    for column in Column::ALL {
        let values: Option<Vec<f64>> = bars.iter().map(|bar| bar.field(column)).collect();
        match values {
            Some(values) => series = series.with_column(column, values)?,
            None => warn!(
                ticker = response.ticker.as_deref().unwrap_or("unknown"),
                %column,
                "Aggregate bars missing a field, dropping column"
            ),
        }
    }

    debug!(
        ticker = response.ticker.as_deref().unwrap_or("unknown"),
        bars = series.len(),
        "Decoded aggregate bars"
    );
    Ok(series)
}

fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>, DataError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| DataError::Malformed(format!("invalid timestamp {}", millis)))
}
