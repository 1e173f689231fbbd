//! Price-structure indicators: Parabolic SAR

pub mod parabolic_sar;

pub use parabolic_sar::*;
