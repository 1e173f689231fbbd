//! End-to-end checks on a 30-bar rising series

use crate::support::{rising_thirty, series_from_closes};
use tickerlens::core::engine::IndicatorEngine;
use tickerlens::indicators::momentum::{calculate_macd_default, calculate_rsi, RSI_NEUTRAL};
use tickerlens::indicators::params::IndicatorParams;
use tickerlens::indicators::registry::IndicatorKind;
use tickerlens::indicators::trend::{calculate_ema, calculate_sma};
use tickerlens::indicators::volume::calculate_obv;
use tickerlens::logging::init_logging;
use tickerlens::config::LoggingConfig;
use tickerlens::models::IndicatorOutput;

#[test]
fn test_rising_series_scenario() {
    let series = rising_thirty();

    let sma = calculate_sma(&series, 5).unwrap();
    assert_eq!(sma.values[29], 28.0);

    let ema = calculate_ema(&series, 5).unwrap();
    let last = ema.last_value().unwrap();
    assert!(last < 30.0 && last > 27.0, "EMA lags the close: {}", last);
    assert!(last < sma.values[29] + 1.0);

    let rsi = calculate_rsi(&series, 14).unwrap();
    assert_eq!(rsi.values[29], 100.0);

    let obv = calculate_obv(&series).unwrap();
    assert_eq!(obv.values[0], 0.0);
    assert_eq!(obv.values[29], 2900.0);
}

#[test]
fn test_constant_series_round_trip() {
    let series = series_from_closes(&[64.5; 40]);

    let sma = calculate_sma(&series, 10).unwrap();
    let ema = calculate_ema(&series, 10).unwrap();
    for t in 9..40 {
        assert_eq!(sma.values[t], 64.5);
        assert_eq!(ema.values[t], 64.5);
    }

    let rsi = calculate_rsi(&series, 14).unwrap();
    assert!(rsi.values[14..].iter().all(|&v| v == RSI_NEUTRAL));

    let macd = calculate_macd_default(&series).unwrap();
    assert!(macd.macd.values.iter().all(|&v| v == 0.0));
}

#[test]
fn test_engine_with_logging_installed() {
    init_logging(&LoggingConfig::default());
    // A second call keeps the first subscriber.
    init_logging(&LoggingConfig::default());

    let engine = IndicatorEngine::new(IndicatorParams::default());
    let report = engine.compute_batch(&rising_thirty(), &[IndicatorKind::Obv]);
    match report.get(IndicatorKind::Obv) {
        Some(Ok(IndicatorOutput::Single(obv))) => assert_eq!(obv.last_value(), Some(2900.0)),
        other => panic!("unexpected result {:?}", other),
    }
}
