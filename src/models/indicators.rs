use serde::Serialize;

/// Sentinel for positions an indicator cannot define (warm-up, zero base).
pub const UNDEFINED: f64 = f64::NAN;

/// One named numeric series aligned index-for-index with its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl IndicatorSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().filter(|v| !v.is_nan())
    }

    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    pub fn is_all_undefined(&self) -> bool {
        self.values.iter().all(|v| v.is_nan())
    }

    pub fn first_defined_index(&self) -> Option<usize> {
        self.values.iter().position(|v| !v.is_nan())
    }

    /// Most recent defined value.
    pub fn last_value(&self) -> Option<f64> {
        self.values.iter().rev().copied().find(|v| !v.is_nan())
    }
}

/// MACD line, signal line and histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacdSeries {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
    pub period: (usize, usize, usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollingerBands {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
    pub period: usize,
    pub std_dev: f64,
}

/// Positive and negative directional indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DmiSeries {
    pub plus_di: IndicatorSeries,
    pub minus_di: IndicatorSeries,
    pub period: usize,
}

/// Result of one indicator call: one, two or three aligned series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorOutput {
    Single(IndicatorSeries),
    Pair(IndicatorSeries, IndicatorSeries),
    Triple(IndicatorSeries, IndicatorSeries, IndicatorSeries),
}

impl IndicatorOutput {
    pub fn series(&self) -> Vec<&IndicatorSeries> {
        match self {
            IndicatorOutput::Single(a) => vec![a],
            IndicatorOutput::Pair(a, b) => vec![a, b],
            IndicatorOutput::Triple(a, b, c) => vec![a, b, c],
        }
    }

    /// Every component is non-empty and has at least one defined value.
    pub fn is_fully_defined(&self) -> bool {
        self.series()
            .iter()
            .all(|s| !s.is_empty() && !s.is_all_undefined())
    }
}

impl From<IndicatorSeries> for IndicatorOutput {
    fn from(series: IndicatorSeries) -> Self {
        IndicatorOutput::Single(series)
    }
}

impl From<MacdSeries> for IndicatorOutput {
    fn from(macd: MacdSeries) -> Self {
        IndicatorOutput::Triple(macd.macd, macd.signal, macd.histogram)
    }
}

impl From<BollingerBands> for IndicatorOutput {
    fn from(bands: BollingerBands) -> Self {
        IndicatorOutput::Pair(bands.upper, bands.lower)
    }
}

impl From<DmiSeries> for IndicatorOutput {
    fn from(dmi: DmiSeries) -> Self {
        IndicatorOutput::Pair(dmi.plus_di, dmi.minus_di)
    }
}
