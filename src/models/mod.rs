//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod series;

pub use indicators::{
    BollingerBands, DmiSeries, IndicatorOutput, IndicatorSeries, MacdSeries, UNDEFINED,
};
pub use series::{Candle, Column, PriceSeries};
