//! Volume indicators: OBV, VROC

pub mod obv;
pub mod vroc;

pub use obv::*;
pub use vroc::*;
