//! Unit tests for market data providers

use crate::support::rising_thirty;
use serde_json::json;
use std::fs;
use tickerlens::services::market_data::{
    InMemoryMarketDataProvider, JsonFileMarketDataProvider, MarketDataError, MarketDataProvider,
};

#[test]
fn test_in_memory_lookup_is_case_insensitive() {
    let provider = InMemoryMarketDataProvider::new().with_series("aapl", rising_thirty());
    assert_eq!(provider.tickers(), vec!["AAPL"]);
    assert_eq!(provider.get_series("Aapl").unwrap().len(), 30);
    assert_eq!(provider.get_latest_price("AAPL").unwrap(), 30.0);
    assert!(matches!(
        provider.get_series("MSFT"),
        Err(MarketDataError::UnknownTicker(_))
    ));
}

#[test]
fn test_json_file_provider_reads_upper_case_file() {
    let dir = tempfile::tempdir().unwrap();
    let body = json!({
        "ticker": "NVDA",
        "results": [
            {"t": 1_000, "o": 1.0, "h": 2.0, "l": 0.5, "c": 1.5, "v": 10.0},
            {"t": 2_000, "o": 1.5, "h": 2.5, "l": 1.0, "c": 2.25, "v": 12.0}
        ]
    });
    fs::write(dir.path().join("NVDA.json"), body.to_string()).unwrap();

    let provider = JsonFileMarketDataProvider::new(dir.path());
    assert_eq!(provider.path_for("nvda"), dir.path().join("NVDA.json"));
    assert_eq!(provider.get_series("nvda").unwrap().len(), 2);
    assert_eq!(provider.get_latest_price("NVDA").unwrap(), 2.25);
}

#[test]
fn test_json_file_provider_errors() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("BAD.json"), "{\"status\": \"ERROR\"}").unwrap();
    let provider = JsonFileMarketDataProvider::new(dir.path());

    assert!(matches!(
        provider.get_series("missing"),
        Err(MarketDataError::UnknownTicker(_))
    ));
    assert!(matches!(provider.get_series("bad"), Err(MarketDataError::Data(_))));
}
