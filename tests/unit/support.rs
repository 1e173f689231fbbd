//! Shared builders for unit tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use tickerlens::models::{Candle, Column, PriceSeries};

pub fn daily_timestamps(count: usize) -> Vec<DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    (0..count).map(|i| start + Duration::days(i as i64)).collect()
}

pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    PriceSeries::new(daily_timestamps(closes.len()))
        .unwrap()
        .with_column(Column::Close, closes.to_vec())
        .unwrap()
}

/// Full OHLCV series with High = Close + spread and Low = Close - spread.
pub fn series_with_spread(closes: &[f64], spread: f64, volume: f64) -> PriceSeries {
    let candles: Vec<Candle> = closes
        .iter()
        .zip(daily_timestamps(closes.len()))
        .map(|(&close, ts)| Candle::new(close, close + spread, close - spread, close, volume, ts))
        .collect();
    PriceSeries::from_candles(&candles).unwrap()
}

pub fn series_from_bars(highs: &[f64], lows: &[f64], closes: &[f64], volumes: &[f64]) -> PriceSeries {
    PriceSeries::new(daily_timestamps(closes.len()))
        .unwrap()
        .with_column(Column::High, highs.to_vec())
        .unwrap()
        .with_column(Column::Low, lows.to_vec())
        .unwrap()
        .with_column(Column::Close, closes.to_vec())
        .unwrap()
        .with_column(Column::Volume, volumes.to_vec())
        .unwrap()
}

/// Closes 1..=30, High = Close + 1, Low = Close - 1, Volume = 100.
pub fn rising_thirty() -> PriceSeries {
    let closes: Vec<f64> = (1..=30).map(f64::from).collect();
    series_with_spread(&closes, 1.0, 100.0)
}

/// Deterministic zig-zag walk with an upward drift.
pub fn zigzag_closes(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + i as f64 * 0.3 + if i % 3 == 0 { 2.5 } else { -1.25 })
        .collect()
}
