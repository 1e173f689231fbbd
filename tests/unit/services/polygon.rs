//! Unit tests for the aggregate bar decoder

use serde_json::json;
use tickerlens::indicators::error::{DataError, IndicatorError};
use tickerlens::indicators::trend::calculate_sma;
use tickerlens::indicators::volume::calculate_obv;
use tickerlens::models::Column;
use tickerlens::services::polygon::parse_aggregates;

fn bar(t: i64, close: f64) -> serde_json::Value {
    json!({"t": t, "o": close - 0.5, "h": close + 1.0, "l": close - 1.0, "c": close, "v": 1000.0})
}

#[test]
fn test_decodes_full_bars() {
    let body = json!({
        "ticker": "AAPL",
        "status": "OK",
        "results": [bar(1_704_153_600_000, 185.0), bar(1_704_240_000_000, 184.0)]
    })
    .to_string();

    let series = parse_aggregates(&body).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.available_columns(), Column::ALL.to_vec());
    assert_eq!(series.column(Column::Close).unwrap(), &[185.0, 184.0]);
    assert_eq!(series.timestamps()[0].timestamp_millis(), 1_704_153_600_000);
}

#[test]
fn test_missing_field_drops_column() {
    let body = json!({
        "results": [
            {"t": 1_000, "o": 1.0, "h": 2.0, "l": 0.5, "c": 1.5, "v": 10.0},
            {"t": 2_000, "o": 1.5, "h": 2.5, "l": 1.0, "c": 2.0}
        ]
    })
    .to_string();

    let series = parse_aggregates(&body).unwrap();
    assert!(!series.has_column(Column::Volume));
    assert!(calculate_sma(&series, 1).is_ok());
    assert_eq!(
        calculate_obv(&series).unwrap_err(),
        IndicatorError::Data(DataError::MissingColumn(Column::Volume))
    );
}

#[test]
fn test_unordered_bars_are_rejected() {
    let body = json!({"results": [bar(2_000, 1.0), bar(1_000, 2.0)]}).to_string();
    assert_eq!(
        parse_aggregates(&body).unwrap_err(),
        DataError::UnorderedTimestamps(1)
    );
}

#[test]
fn test_empty_results_give_empty_series() {
    let series = parse_aggregates(&json!({"results": []}).to_string()).unwrap();
    assert!(series.is_empty());
    assert!(matches!(
        calculate_sma(&series, 5),
        Err(IndicatorError::Data(DataError::EmptySeries))
    ));
}
