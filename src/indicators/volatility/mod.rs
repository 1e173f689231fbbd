//! Volatility indicators: true range, ATR, Bollinger Bands

pub mod bollinger;
pub mod atr;

pub use bollinger::*;
pub use atr::*;
