//! Market data provider interface and the local providers.

use crate::indicators::error::DataError;
use crate::models::{Column, PriceSeries};
use crate::services::polygon::parse_aggregates;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("no data for ticker {0}")]
    UnknownTicker(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Data(#[from] DataError),
}

pub trait MarketDataProvider: Send + Sync {
    /// Get the full price history for a ticker
    fn get_series(&self, ticker: &str) -> Result<PriceSeries, MarketDataError>;

    /// Get the latest close for a ticker
    fn get_latest_price(&self, ticker: &str) -> Result<f64, MarketDataError> {
        let series = self.get_series(ticker)?;
        let closes = series.column(Column::Close).map_err(|_| {
            MarketDataError::Data(DataError::MissingColumn(Column::Close))
        })?;
        closes
            .last()
            .copied()
            .ok_or(MarketDataError::Data(DataError::EmptySeries))
    }
}

/// Provider backed by series held in memory, keyed by upper-case ticker.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataProvider {
    series: HashMap<String, PriceSeries>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, ticker: &str, series: PriceSeries) -> Self {
        self.insert(ticker, series);
        self
    }

    pub fn insert(&mut self, ticker: &str, series: PriceSeries) {
        self.series.insert(ticker.to_uppercase(), series);
    }

    pub fn tickers(&self) -> Vec<&str> {
        let mut tickers: Vec<&str> = self.series.keys().map(String::as_str).collect();
        tickers.sort_unstable();
        tickers
    }
}

impl MarketDataProvider for InMemoryMarketDataProvider {
    fn get_series(&self, ticker: &str) -> Result<PriceSeries, MarketDataError> {
        self.series
            .get(&ticker.to_uppercase())
            .cloned()
            .ok_or_else(|| MarketDataError::UnknownTicker(ticker.to_string()))
    }
}

/// Provider reading Polygon aggregate JSON from `<data_dir>/<TICKER>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileMarketDataProvider {
    data_dir: PathBuf,
}

impl JsonFileMarketDataProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, ticker: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", ticker.to_uppercase()))
    }
}

impl MarketDataProvider for JsonFileMarketDataProvider {
    fn get_series(&self, ticker: &str) -> Result<PriceSeries, MarketDataError> {
        let path = self.path_for(ticker);
        if !path.exists() {
            return Err(MarketDataError::UnknownTicker(ticker.to_string()));
        }
        let body = std::fs::read_to_string(&path).map_err(|source| MarketDataError::Io {
            path: path.clone(),
            source,
        })?;
        let series = parse_aggregates(&body)?;
        debug!(ticker, path = %path.display(), bars = series.len(), "Loaded market data");
        Ok(series)
    }
}
