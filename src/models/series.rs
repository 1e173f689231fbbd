//! OHLCV price history as delivered by a market-data collaborator.

use crate::indicators::error::{DataError, IndicatorResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

/// Value columns of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Open,
        Column::High,
        Column::Low,
        Column::Close,
        Column::Volume,
    ];
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Column::Open => "Open",
            Column::High => "High",
            Column::Low => "Low",
            Column::Close => "Close",
            Column::Volume => "Volume",
        };
        f.write_str(name)
    }
}

/// Columnar OHLCV table ordered by strictly ascending timestamp.
///
/// Any value column may be absent; indicators check for the columns they
/// need and fail with [`DataError::MissingColumn`] otherwise. Present columns
/// always match the timestamp index in length and hold finite values only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    timestamps: Vec<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    high: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    low: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    close: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<Vec<f64>>,
}

impl PriceSeries {
    /// Start a series with no value columns.
    pub fn new(timestamps: Vec<DateTime<Utc>>) -> Result<Self, DataError> {
        if let Some(index) = timestamps
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
        {
            return Err(DataError::UnorderedTimestamps(index + 1));
        }

        Ok(Self {
            timestamps,
            open: None,
            high: None,
            low: None,
            close: None,
            volume: None,
        })
    }

    /// Attach (or replace) a value column.
    pub fn with_column(mut self, column: Column, values: Vec<f64>) -> Result<Self, DataError> {
        if values.len() != self.timestamps.len() {
            return Err(DataError::LengthMismatch {
                name: column.to_string(),
                expected: self.timestamps.len(),
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(DataError::NonFiniteValue { column, index });
        }

        *self.slot_mut(column) = Some(values);
        Ok(self)
    }

    /// Build a complete series from bars.
    pub fn from_candles(candles: &[Candle]) -> Result<Self, DataError> {
        let timestamps = candles.iter().map(|c| c.timestamp).collect();
        Self::new(timestamps)?
            .with_column(Column::Open, candles.iter().map(|c| c.open).collect())?
            .with_column(Column::High, candles.iter().map(|c| c.high).collect())?
            .with_column(Column::Low, candles.iter().map(|c| c.low).collect())?
            .with_column(Column::Close, candles.iter().map(|c| c.close).collect())?
            .with_column(Column::Volume, candles.iter().map(|c| c.volume).collect())
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.slot(column).is_some()
    }

    /// Borrow a column, failing when it is absent or the series is empty.
    pub fn column(&self, column: Column) -> IndicatorResult<&[f64]> {
        let values = self
            .slot(column)
            .as_deref()
            .ok_or(DataError::MissingColumn(column))?;
        if values.is_empty() {
            return Err(DataError::EmptySeries.into());
        }
        Ok(values)
    }

    /// Borrow several columns at once, in the order requested.
    pub fn columns<const N: usize>(&self, wanted: [Column; N]) -> IndicatorResult<[&[f64]; N]> {
        let empty: &[f64] = &[];
        let mut out = [empty; N];
        for (slot, column) in out.iter_mut().zip(wanted) {
            *slot = self.column(column)?;
        }
        Ok(out)
    }

    /// Columns present on this series.
    pub fn available_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.has_column(*c))
            .collect()
    }

    fn slot(&self, column: Column) -> &Option<Vec<f64>> {
        match column {
            Column::Open => &self.open,
            Column::High => &self.high,
            Column::Low => &self.low,
            Column::Close => &self.close,
            Column::Volume => &self.volume,
        }
    }

    fn slot_mut(&mut self, column: Column) -> &mut Option<Vec<f64>> {
        match column {
            Column::Open => &mut self.open,
            Column::High => &mut self.high,
            Column::Low => &mut self.low,
            Column::Close => &mut self.close,
            Column::Volume => &mut self.volume,
        }
    }
}
