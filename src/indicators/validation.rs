use crate::indicators::error::{ComputationError, DataError, IndicatorError, IndicatorResult};
use crate::models::IndicatorOutput;

pub fn validate_period(indicator: &str, period: usize) -> IndicatorResult<()> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "{} period must be a positive integer",
            indicator
        )));
    }
    Ok(())
}

pub fn validate_macd_periods(fast: usize, slow: usize, signal: usize) -> IndicatorResult<()> {
    validate_period("MACD fast", fast)?;
    validate_period("MACD slow", slow)?;
    validate_period("MACD signal", signal)
}

pub fn validate_bollinger_period(period: usize) -> IndicatorResult<()> {
    if period < 2 {
        return Err(IndicatorError::InvalidParameter(format!(
            "Bollinger period must be at least 2, got {}",
            period
        )));
    }
    Ok(())
}

pub fn validate_sar_factors(initial_af: f64, max_af: f64) -> IndicatorResult<()> {
    if !initial_af.is_finite() || initial_af <= 0.0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "initial acceleration factor must be positive, got {}",
            initial_af
        )));
    }
    if !max_af.is_finite() || max_af <= 0.0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "maximum acceleration factor must be positive, got {}",
            max_af
        )));
    }
    if initial_af > max_af {
        return Err(IndicatorError::InvalidParameter(format!(
            "initial acceleration factor ({}) exceeds maximum ({})",
            initial_af, max_af
        )));
    }
    Ok(())
}

/// Every component of `output` must have exactly `expected` values.
pub fn validate_alignment(output: &IndicatorOutput, expected: usize) -> IndicatorResult<()> {
    for series in output.series() {
        if series.len() != expected {
            return Err(DataError::LengthMismatch {
                name: series.name.clone(),
                expected,
                actual: series.len(),
            }
            .into());
        }
    }
    Ok(())
}

/// Undefined (NaN) entries are allowed, infinities are not.
pub fn validate_finite(output: &IndicatorOutput) -> IndicatorResult<()> {
    for series in output.series() {
        if let Some(index) = series.values.iter().position(|v| v.is_infinite()) {
            return Err(ComputationError::NonFiniteOutput {
                name: series.name.clone(),
                index,
            }
            .into());
        }
    }
    Ok(())
}
