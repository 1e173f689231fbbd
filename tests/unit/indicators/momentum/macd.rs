//! Unit tests for MACD indicator

use crate::support::{series_from_closes, zigzag_closes};
use proptest::prelude::*;
use tickerlens::indicators::error::IndicatorError;
use tickerlens::indicators::momentum::{calculate_macd, calculate_macd_default};

#[test]
fn test_macd_components_are_aligned() {
    let series = series_from_closes(&zigzag_closes(100));
    let macd = calculate_macd_default(&series).unwrap();
    assert_eq!(macd.period, (12, 26, 9));
    assert_eq!(macd.macd.len(), 100);
    assert_eq!(macd.signal.len(), 100);
    assert_eq!(macd.histogram.len(), 100);
    assert_eq!(macd.macd.values[0], 0.0);
}

#[test]
fn test_macd_flat_series_is_zero() {
    let series = series_from_closes(&[123.45; 60]);
    let macd = calculate_macd_default(&series).unwrap();
    assert!(macd.macd.values.iter().all(|&v| v == 0.0));
    assert!(macd.signal.values.iter().all(|&v| v == 0.0));
    assert!(macd.histogram.values.iter().all(|&v| v == 0.0));
}

#[test]
fn test_macd_uptrend_is_positive() {
    let closes: Vec<f64> = (1..=60).map(f64::from).collect();
    let macd = calculate_macd_default(&series_from_closes(&closes)).unwrap();
    assert!(macd.macd.values[1..].iter().all(|&v| v > 0.0));
}

#[test]
fn test_macd_equal_periods_give_zero_line() {
    let series = series_from_closes(&zigzag_closes(40));
    let macd = calculate_macd(&series, 12, 12, 9).unwrap();
    assert!(macd.macd.values.iter().all(|&v| v == 0.0));
    assert!(macd.histogram.values.iter().all(|&v| v == 0.0));
}

#[test]
fn test_macd_accepts_swapped_periods() {
    let closes: Vec<f64> = (1..=60).map(f64::from).collect();
    let series = series_from_closes(&closes);
    let swapped = calculate_macd(&series, 26, 12, 9).unwrap();
    let normal = calculate_macd(&series, 12, 26, 9).unwrap();
    for t in 0..closes.len() {
        assert_eq!(swapped.macd.values[t], -normal.macd.values[t]);
    }
}

#[test]
fn test_macd_rejects_zero_period() {
    let series = series_from_closes(&zigzag_closes(40));
    assert!(matches!(
        calculate_macd(&series, 12, 26, 0),
        Err(IndicatorError::InvalidParameter(_))
    ));
}

proptest! {
    #[test]
    fn prop_histogram_is_exact_difference(closes in prop::collection::vec(1.0f64..500.0, 1..100)) {
        let macd = calculate_macd_default(&series_from_closes(&closes)).unwrap();
        for t in 0..closes.len() {
            prop_assert_eq!(macd.histogram.values[t], macd.macd.values[t] - macd.signal.values[t]);
        }
    }
}
