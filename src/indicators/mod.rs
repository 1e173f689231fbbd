pub mod error;
pub mod params;
pub mod parser;
pub mod validation;
pub mod registry;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod structure;
pub mod volume;

pub use error::{ComputationError, DataError, IndicatorError, IndicatorResult};
pub use params::IndicatorParams;
pub use parser::*;
pub use validation::*;
pub use registry::*;
