//! Unit tests for RSI indicator

use crate::support::{rising_thirty, series_from_closes};
use proptest::prelude::*;
use tickerlens::indicators::momentum::{calculate_rsi, RSI_NEUTRAL};

#[test]
fn test_rsi_warm_up_is_period() {
    let series = series_from_closes(&(1..=20).map(f64::from).collect::<Vec<_>>());
    let rsi = calculate_rsi(&series, 14).unwrap();
    assert_eq!(rsi.name, "rsi_14");
    assert_eq!(rsi.first_defined_index(), Some(14));
}

#[test]
fn test_rsi_only_gains_is_100() {
    let rsi = calculate_rsi(&rising_thirty(), 14).unwrap();
    assert!(rsi.values[14..].iter().all(|&v| v == 100.0));
}

#[test]
fn test_rsi_only_losses_is_0() {
    let closes: Vec<f64> = (1..=30).rev().map(f64::from).collect();
    let rsi = calculate_rsi(&series_from_closes(&closes), 14).unwrap();
    assert!(rsi.values[14..].iter().all(|&v| v == 0.0));
}

#[test]
fn test_rsi_flat_series_is_neutral() {
    let rsi = calculate_rsi(&series_from_closes(&[10.0; 30]), 14).unwrap();
    assert!(rsi.values[14..].iter().all(|&v| v == RSI_NEUTRAL));
}

#[test]
fn test_rsi_balanced_moves() {
    // Alternating +1 / -1 over a window of 2 gives RS = 1.
    let closes = [10.0, 11.0, 10.0, 11.0, 10.0];
    let rsi = calculate_rsi(&series_from_closes(&closes), 2).unwrap();
    assert_eq!(rsi.values[2], 50.0);
    assert_eq!(rsi.values[4], 50.0);
}

proptest! {
    #[test]
    fn prop_rsi_is_bounded(closes in prop::collection::vec(1.0f64..1_000.0, 2..120), period in 1usize..30) {
        let rsi = calculate_rsi(&series_from_closes(&closes), period).unwrap();
        for v in rsi.values.iter().filter(|v| !v.is_nan()) {
            prop_assert!((0.0..=100.0).contains(v));
        }
    }
}
