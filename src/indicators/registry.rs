//! Indicator registry: canonical names, compute functions and render styles

use crate::indicators::error::{IndicatorError, IndicatorResult};
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::params::IndicatorParams;
use crate::indicators::structure::calculate_parabolic_sar;
use crate::indicators::trend::{calculate_adx, calculate_dmi, calculate_ema, calculate_sma};
use crate::indicators::volatility::{calculate_atr, calculate_bollinger_bands};
use crate::indicators::volume::{calculate_obv, calculate_vroc};
use crate::models::{Column, IndicatorOutput, PriceSeries};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volatility,
    Volume,
    Structure,
}

/// Every indicator the engine can compute by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Sma,
    Ema,
    Rsi,
    Macd,
    Adx,
    Atr,
    BollingerBands,
    Obv,
    Dmi,
    ParabolicSar,
    Vroc,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 11] = [
        IndicatorKind::Sma,
        IndicatorKind::Ema,
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
        IndicatorKind::Adx,
        IndicatorKind::Atr,
        IndicatorKind::BollingerBands,
        IndicatorKind::Obv,
        IndicatorKind::Dmi,
        IndicatorKind::ParabolicSar,
        IndicatorKind::Vroc,
    ];

    /// Canonical lower-case name.
    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn category(&self) -> IndicatorCategory {
        self.spec().category
    }

    pub fn spec(&self) -> &'static IndicatorSpec {
        &INDICATOR_SPECS[*self as usize]
    }

    /// Columns this indicator reads.
    pub fn required_columns(&self) -> &'static [Column] {
        match self {
            IndicatorKind::Sma
            | IndicatorKind::Ema
            | IndicatorKind::Rsi
            | IndicatorKind::Macd
            | IndicatorKind::BollingerBands => &[Column::Close],
            IndicatorKind::Adx | IndicatorKind::Atr | IndicatorKind::Dmi => {
                &[Column::High, Column::Low, Column::Close]
            }
            IndicatorKind::ParabolicSar => &[Column::High, Column::Low],
            IndicatorKind::Obv => &[Column::Close, Column::Volume],
            IndicatorKind::Vroc => &[Column::Volume],
        }
    }

    /// Whether this indicator is ATR or built on it.
    pub fn uses_atr(&self) -> bool {
        matches!(self, IndicatorKind::Atr | IndicatorKind::Adx | IndicatorKind::Dmi)
    }

    /// Case-insensitive lookup by canonical name or alias.
    pub fn from_name(name: &str) -> IndicatorResult<Self> {
        let normalized = normalize_name(name);
        let kind = match normalized.as_str() {
            "sma" => IndicatorKind::Sma,
            "ema" => IndicatorKind::Ema,
            "rsi" => IndicatorKind::Rsi,
            "macd" => IndicatorKind::Macd,
            "adx" => IndicatorKind::Adx,
            "atr" => IndicatorKind::Atr,
            "bollinger bands" | "bollinger" | "bb" | "bbands" => IndicatorKind::BollingerBands,
            "obv" => IndicatorKind::Obv,
            "dmi" => IndicatorKind::Dmi,
            "parabolic sar" | "psar" | "sar" => IndicatorKind::ParabolicSar,
            "vroc" => IndicatorKind::Vroc,
            _ => return Err(IndicatorError::UnknownIndicator(name.trim().to_string())),
        };
        Ok(kind)
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndicatorKind {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndicatorKind::from_name(s)
    }
}

/// Lower-case, `_`/`-` as spaces, single spaces.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace(|c: char| c == '_' || c == '-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Where a renderer should draw an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// Overlaid on the price chart.
    Price,
    /// Separate panel below the price chart.
    Lower,
}

impl Panel {
    pub fn index(&self) -> u8 {
        match self {
            Panel::Price => 0,
            Panel::Lower => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    Scatter,
    Bar,
}

/// Computes an indicator with the given defaults.
pub type ComputeFn = fn(&PriceSeries, &IndicatorParams) -> IndicatorResult<IndicatorOutput>;

/// Static description of one indicator.
#[derive(Clone, Copy)]
pub struct IndicatorSpec {
    pub kind: IndicatorKind,
    pub name: &'static str,
    pub category: IndicatorCategory,
    pub compute: ComputeFn,
    pub panel: Panel,
    pub color: &'static str,
    pub style: LineStyle,
    /// Drawn as an upper/lower band pair.
    pub bands: bool,
}

impl fmt::Debug for IndicatorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndicatorSpec")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("panel", &self.panel)
            .field("color", &self.color)
            .field("style", &self.style)
            .field("bands", &self.bands)
            .finish()
    }
}

// Indexed by `IndicatorKind as usize`.
static INDICATOR_SPECS: [IndicatorSpec; 11] = [
    IndicatorSpec {
        kind: IndicatorKind::Sma,
        name: "sma",
        category: IndicatorCategory::Trend,
        compute: compute_sma,
        panel: Panel::Price,
        color: "blue",
        style: LineStyle::Solid,
        bands: false,
    },
    IndicatorSpec {
        kind: IndicatorKind::Ema,
        name: "ema",
        category: IndicatorCategory::Trend,
        compute: compute_ema,
        panel: Panel::Price,
        color: "green",
        style: LineStyle::Solid,
        bands: false,
    },
    IndicatorSpec {
        kind: IndicatorKind::Rsi,
        name: "rsi",
        category: IndicatorCategory::Momentum,
        compute: compute_rsi,
        panel: Panel::Lower,
        color: "red",
        style: LineStyle::Solid,
        bands: false,
    },
    IndicatorSpec {
        kind: IndicatorKind::Macd,
        name: "macd",
        category: IndicatorCategory::Momentum,
        compute: compute_macd,
        panel: Panel::Lower,
        color: "purple",
        style: LineStyle::Solid,
        bands: false,
    },
    IndicatorSpec {
        kind: IndicatorKind::Adx,
        name: "adx",
        category: IndicatorCategory::Trend,
        compute: compute_adx,
        panel: Panel::Lower,
        color: "green",
        style: LineStyle::Solid,
        bands: false,
    },
    IndicatorSpec {
        kind: IndicatorKind::Atr,
        name: "atr",
        category: IndicatorCategory::Volatility,
        compute: compute_atr,
        panel: Panel::Lower,
        color: "magenta",
        style: LineStyle::Solid,
        bands: false,
    },
    IndicatorSpec {
        kind: IndicatorKind::BollingerBands,
        name: "bollinger bands",
        category: IndicatorCategory::Volatility,
        compute: compute_bollinger_bands,
        panel: Panel::Price,
        color: "purple",
        style: LineStyle::Solid,
        bands: true,
    },
    IndicatorSpec {
        kind: IndicatorKind::Obv,
        name: "obv",
        category: IndicatorCategory::Volume,
        compute: compute_obv,
        panel: Panel::Lower,
        color: "orange",
        style: LineStyle::Solid,
        bands: false,
    },
    IndicatorSpec {
        kind: IndicatorKind::Dmi,
        name: "dmi",
        category: IndicatorCategory::Trend,
        compute: compute_dmi,
        panel: Panel::Lower,
        color: "blue",
        style: LineStyle::Solid,
        bands: false,
    },
    IndicatorSpec {
        kind: IndicatorKind::ParabolicSar,
        name: "parabolic sar",
        category: IndicatorCategory::Structure,
        compute: compute_parabolic_sar,
        panel: Panel::Lower,
        color: "green",
        style: LineStyle::Solid,
        bands: false,
    },
    IndicatorSpec {
        kind: IndicatorKind::Vroc,
        name: "vroc",
        category: IndicatorCategory::Volume,
        compute: compute_vroc,
        panel: Panel::Lower,
        color: "orange",
        style: LineStyle::Solid,
        bands: false,
    },
];

fn compute_sma(series: &PriceSeries, params: &IndicatorParams) -> IndicatorResult<IndicatorOutput> {
    calculate_sma(series, params.sma_period).map(Into::into)
}

fn compute_ema(series: &PriceSeries, params: &IndicatorParams) -> IndicatorResult<IndicatorOutput> {
    calculate_ema(series, params.ema_period).map(Into::into)
}

fn compute_rsi(series: &PriceSeries, params: &IndicatorParams) -> IndicatorResult<IndicatorOutput> {
    calculate_rsi(series, params.rsi_period).map(Into::into)
}

fn compute_macd(series: &PriceSeries, params: &IndicatorParams) -> IndicatorResult<IndicatorOutput> {
    calculate_macd(series, params.macd_fast, params.macd_slow, params.macd_signal).map(Into::into)
}

fn compute_adx(series: &PriceSeries, params: &IndicatorParams) -> IndicatorResult<IndicatorOutput> {
    calculate_adx(series, params.adx_period).map(Into::into)
}

fn compute_atr(series: &PriceSeries, params: &IndicatorParams) -> IndicatorResult<IndicatorOutput> {
    calculate_atr(series, params.atr_period).map(Into::into)
}

fn compute_bollinger_bands(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> IndicatorResult<IndicatorOutput> {
    calculate_bollinger_bands(series, params.bollinger_period).map(Into::into)
}

fn compute_obv(series: &PriceSeries, _params: &IndicatorParams) -> IndicatorResult<IndicatorOutput> {
    calculate_obv(series).map(Into::into)
}

fn compute_dmi(series: &PriceSeries, params: &IndicatorParams) -> IndicatorResult<IndicatorOutput> {
    calculate_dmi(series, params.dmi_period).map(Into::into)
}

fn compute_parabolic_sar(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> IndicatorResult<IndicatorOutput> {
    calculate_parabolic_sar(series, params.sar_initial_af, params.sar_max_af).map(Into::into)
}

fn compute_vroc(series: &PriceSeries, params: &IndicatorParams) -> IndicatorResult<IndicatorOutput> {
    calculate_vroc(series, params.vroc_period).map(Into::into)
}

/// Indicator registry for looking up specs by kind or category
pub struct IndicatorRegistry {
    specs: &'static [IndicatorSpec],
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        Self {
            specs: &INDICATOR_SPECS,
        }
    }

    pub fn specs(&self) -> &'static [IndicatorSpec] {
        self.specs
    }

    pub fn get(&self, kind: IndicatorKind) -> &'static IndicatorSpec {
        kind.spec()
    }

    pub fn by_category(&self, category: IndicatorCategory) -> Vec<&'static IndicatorSpec> {
        self.specs
            .iter()
            .filter(|spec| spec.category == category)
            .collect()
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
