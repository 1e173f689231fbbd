//! Market data collaborators

pub mod market_data;
pub mod polygon;

pub use market_data::*;
pub use polygon::*;
