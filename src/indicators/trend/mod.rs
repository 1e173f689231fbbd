//! Trend indicators: SMA, EMA, DMI, ADX

pub mod sma;
pub mod ema;
pub mod dmi;
pub mod adx;

pub use sma::*;
pub use ema::*;
pub use dmi::*;
pub use adx::*;
