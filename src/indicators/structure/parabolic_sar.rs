//! Parabolic SAR (Stop And Reverse) indicator
//!
//! A left-to-right recurrence: every value depends on the previous SAR, the
//! extreme price of the current trend and an acceleration factor that grows
//! each time the trend makes a new extreme.

use crate::indicators::error::IndicatorResult;
use crate::indicators::validation::validate_sar_factors;
use crate::models::{Column, IndicatorSeries, PriceSeries};
use serde::Serialize;

pub const DEFAULT_SAR_INITIAL_AF: f64 = 0.02;
pub const DEFAULT_SAR_MAX_AF: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SarTrend {
    Up,
    Down,
}

/// Running state of the SAR recurrence within one pass over a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolicSarState {
    pub sar: f64,
    pub extreme_price: f64,
    pub acceleration_factor: f64,
    pub trend: SarTrend,
    initial_af: f64,
    max_af: f64,
}

impl ParabolicSarState {
    /// Seed from the first bar: uptrend, SAR and extreme price at its low.
    pub fn new(first_low: f64, initial_af: f64, max_af: f64) -> IndicatorResult<Self> {
        validate_sar_factors(initial_af, max_af)?;
        Ok(Self {
            sar: first_low,
            extreme_price: first_low,
            acceleration_factor: initial_af,
            trend: SarTrend::Up,
            initial_af,
            max_af,
        })
    }

    pub fn initial_af(&self) -> f64 {
        self.initial_af
    }

    pub fn max_af(&self) -> f64 {
        self.max_af
    }

    /// Advance one bar and return its SAR.
    ///
    /// Reversal needs the bar to pierce the SAR strictly (`low < sar` in an
    /// uptrend, `high > sar` in a downtrend). On reversal the SAR jumps to the
    /// old extreme price and the acceleration factor resets.
    pub fn step(&mut self, high: f64, low: f64) -> f64 {
        let mut sar = self.sar + self.acceleration_factor * (self.extreme_price - self.sar);

        match self.trend {
            SarTrend::Up => {
                if low < sar {
                    self.trend = SarTrend::Down;
                    sar = self.extreme_price;
                    self.acceleration_factor = self.initial_af;
                    self.extreme_price = high;
                } else if high > self.extreme_price {
                    self.extreme_price = high;
                    self.accelerate();
                }
            }
            SarTrend::Down => {
                if high > sar {
                    self.trend = SarTrend::Up;
                    sar = self.extreme_price;
                    self.acceleration_factor = self.initial_af;
                    self.extreme_price = low;
                } else if low < self.extreme_price {
                    self.extreme_price = low;
                    self.accelerate();
                }
            }
        }

        self.sar = sar;
        sar
    }

    fn accelerate(&mut self) {
        self.acceleration_factor = (self.acceleration_factor + self.initial_af).min(self.max_af);
    }
}

/// Calculate Parabolic SAR for every bar; SAR[0] is the first low.
pub fn calculate_parabolic_sar(
    series: &PriceSeries,
    initial_af: f64,
    max_af: f64,
) -> IndicatorResult<IndicatorSeries> {
    calculate_parabolic_sar_with_trend(series, initial_af, max_af).map(|(sar, _)| sar)
}

/// Parabolic SAR together with the trend in force after each bar.
pub fn calculate_parabolic_sar_with_trend(
    series: &PriceSeries,
    initial_af: f64,
    max_af: f64,
) -> IndicatorResult<(IndicatorSeries, Vec<SarTrend>)> {
    validate_sar_factors(initial_af, max_af)?;
    let [high, low] = series.columns([Column::High, Column::Low])?;

    let mut state = ParabolicSarState::new(low[0], initial_af, max_af)?;
    let mut values = Vec::with_capacity(high.len());
    let mut trends = Vec::with_capacity(high.len());
    values.push(state.sar);
    trends.push(state.trend);

    for i in 1..high.len() {
        values.push(state.step(high[i], low[i]));
        trends.push(state.trend);
    }

    Ok((IndicatorSeries::new("parabolic_sar", values), trends))
}

/// Calculate Parabolic SAR with default factors (0.02, 0.2)
pub fn calculate_parabolic_sar_default(series: &PriceSeries) -> IndicatorResult<IndicatorSeries> {
    calculate_parabolic_sar(series, DEFAULT_SAR_INITIAL_AF, DEFAULT_SAR_MAX_AF)
}
