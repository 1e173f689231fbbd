//! Normalisation of requested indicator lists into a [`ChartRequest`].
//!
//! Accepts either a bare comma list (`"sma, RSI"`) or a line of the form
//! `"Indicators: sma, rsi"`. Empty entries and `None` placeholders are
//! dropped; `price`, `candlestick` and `volume` are chart switches rather than
//! indicators.

use crate::indicators::registry::{normalize_name, IndicatorKind};
use serde::Serialize;

const INDICATORS_PREFIX: &str = "indicators:";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartRequest {
    /// Indicators to compute, in request order, without duplicates.
    pub indicators: Vec<IndicatorKind>,
    /// Draw the base price chart.
    pub price: bool,
    /// Draw the price chart as candles instead of a close line.
    pub candlestick: bool,
    /// Draw a standalone volume panel.
    pub volume: bool,
    /// Entries that matched no indicator.
    pub unknown: Vec<String>,
}

/// Parse a comma separated indicator list.
pub fn parse_indicator_list(input: &str) -> ChartRequest {
    let list = input
        .lines()
        .find_map(|line| {
            let trimmed = line.trim();
            let split = INDICATORS_PREFIX.len();
            trimmed
                .get(..split)
                .filter(|prefix| prefix.eq_ignore_ascii_case(INDICATORS_PREFIX))
                .and_then(|_| trimmed.get(split..))
                .map(str::to_string)
        })
        .unwrap_or_else(|| input.to_string());

    parse_indicator_names(list.split(','))
}

/// Build a request from already separated names.
pub fn parse_indicator_names<I, S>(names: I) -> ChartRequest
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries: Vec<String> = Vec::new();
    for name in names {
        let normalized = normalize_name(name.as_ref());
        if normalized.is_empty() || normalized == "none" {
            continue;
        }
        if !entries.contains(&normalized) {
            entries.push(normalized);
        }
    }

    let mut request = ChartRequest {
        price: entries.is_empty(),
        ..ChartRequest::default()
    };

    for entry in entries {
        match entry.as_str() {
            "price" => request.price = true,
            "candlestick" | "candle" | "candles" => {
                request.price = true;
                request.candlestick = true;
            }
            "volume" => request.volume = true,
            _ => match IndicatorKind::from_name(&entry) {
                Ok(kind) if !request.indicators.contains(&kind) => request.indicators.push(kind),
                Ok(_) => {}
                Err(_) => request.unknown.push(entry),
            },
        }
    }

    request
}
