//! Indicator engine: computes requested indicators over one price series.
//!
//! A batch never aborts on a single failure. Each requested indicator gets
//! its own `Result`, and ATR is computed once per period and shared between
//! the ATR, DMI and ADX entries.

use crate::indicators::error::IndicatorResult;
use crate::indicators::params::IndicatorParams;
use crate::indicators::registry::IndicatorKind;
use crate::indicators::trend::{calculate_adx_with_atr, calculate_dmi_with_atr};
use crate::indicators::validation::{validate_alignment, validate_finite};
use crate::indicators::volatility::calculate_atr;
use crate::models::{IndicatorOutput, IndicatorSeries, PriceSeries};
use std::collections::HashMap;
use tracing::{debug, warn};

/// One entry of a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub kind: IndicatorKind,
    pub result: IndicatorResult<IndicatorOutput>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn get(&self, kind: IndicatorKind) -> Option<&IndicatorResult<IndicatorOutput>> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| &entry.result)
    }

    pub fn succeeded(&self) -> impl Iterator<Item = (IndicatorKind, &IndicatorOutput)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.result.as_ref().ok().map(|output| (entry.kind, output)))
    }

    pub fn failed(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|entry| entry.result.is_err())
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }
}

/// ATR results of one batch, keyed by period.
#[derive(Debug, Default)]
struct AtrCache {
    entries: HashMap<usize, IndicatorResult<IndicatorSeries>>,
}

impl AtrCache {
    fn get_or_compute(
        &mut self,
        series: &PriceSeries,
        period: usize,
    ) -> IndicatorResult<IndicatorSeries> {
        self.entries
            .entry(period)
            .or_insert_with(|| {
                debug!(period, "Computing shared ATR");
                calculate_atr(series, period)
            })
            .clone()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    params: IndicatorParams,
}

impl IndicatorEngine {
    pub fn new(params: IndicatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Compute one indicator with the engine's parameters.
    pub fn compute(
        &self,
        series: &PriceSeries,
        kind: IndicatorKind,
    ) -> IndicatorResult<IndicatorOutput> {
        let output = (kind.spec().compute)(series, &self.params)?;
        Self::check_output(series, output)
    }

    /// Compute every requested indicator, isolating failures per entry.
    pub fn compute_batch(&self, series: &PriceSeries, kinds: &[IndicatorKind]) -> BatchReport {
        self.compute_batch_with_cache(series, kinds, &mut AtrCache::default())
    }

    fn compute_batch_with_cache(
        &self,
        series: &PriceSeries,
        kinds: &[IndicatorKind],
        atr_cache: &mut AtrCache,
    ) -> BatchReport {
        let mut entries = Vec::with_capacity(kinds.len());

        for &kind in kinds {
            let result = if kind.uses_atr() {
                self.compute_with_shared_atr(series, kind, atr_cache)
            } else {
                self.compute(series, kind)
            };

            match &result {
                Ok(output) => debug!(
                    indicator = %kind,
                    series = output.series().len(),
                    "Computed indicator"
                ),
                Err(e) => warn!(indicator = %kind, error = %e, "Indicator computation failed"),
            }

            entries.push(BatchEntry { kind, result });
        }

        BatchReport { entries }
    }

    fn compute_with_shared_atr(
        &self,
        series: &PriceSeries,
        kind: IndicatorKind,
        atr_cache: &mut AtrCache,
    ) -> IndicatorResult<IndicatorOutput> {
        let period = match kind {
            IndicatorKind::Atr => self.params.atr_period,
            IndicatorKind::Adx => self.params.adx_period,
            _ => self.params.dmi_period,
        };

        let atr = atr_cache.get_or_compute(series, period)?;

        let output: IndicatorOutput = match kind {
            IndicatorKind::Atr => atr.into(),
            IndicatorKind::Adx => calculate_adx_with_atr(series, period, &atr.values)?.into(),
            _ => calculate_dmi_with_atr(series, period, &atr.values)?.into(),
        };
        Self::check_output(series, output)
    }

    fn check_output(series: &PriceSeries, output: IndicatorOutput) -> IndicatorResult<IndicatorOutput> {
        validate_alignment(&output, series.len())?;
        validate_finite(&output)?;
        Ok(output)
    }
}
