//! Indicator error taxonomy.
//!
//! `DataError` covers problems with the input (or with a result's alignment to
//! it), `ComputationError` covers numeric failures that no explicit fallback
//! rule handles. Both are per-indicator: a batch records them and moves on.

use crate::models::series::Column;
use thiserror::Error;

/// Problems with the price data an indicator was given.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("required column `{0}` is missing")]
    MissingColumn(Column),

    #[error("price series is empty")]
    EmptySeries,

    #[error("`{name}` has {actual} values but the series has {expected} bars")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("timestamps are not strictly ascending at index {0}")]
    UnorderedTimestamps(usize),

    #[error("non-finite value in column `{column}` at index {index}")]
    NonFiniteValue { column: Column, index: usize },

    #[error("market data response contained no results")]
    NoResults,

    #[error("malformed market data: {0}")]
    Malformed(String),
}

/// Numeric failures not covered by a defined fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("`{name}` produced a non-finite value at index {index}")]
    NonFiniteOutput { name: String, index: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Computation(#[from] ComputationError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),
}

impl IndicatorError {
    pub fn is_data_error(&self) -> bool {
        matches!(self, IndicatorError::Data(_))
    }

    pub fn is_computation_error(&self) -> bool {
        matches!(self, IndicatorError::Computation(_))
    }

    pub fn missing_column(column: Column) -> Self {
        IndicatorError::Data(DataError::MissingColumn(column))
    }
}

pub type IndicatorResult<T> = Result<T, IndicatorError>;
