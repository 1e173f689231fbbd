//! Chart planning: decides which computed series are renderable and how.
//!
//! The plan is pure data. Drawing is left to whoever consumes it.

use crate::core::engine::IndicatorEngine;
use crate::indicators::error::IndicatorError;
use crate::indicators::parser::ChartRequest;
use crate::indicators::registry::{IndicatorKind, LineStyle, Panel};
use crate::indicators::trend::{calculate_emas, calculate_smas};
use crate::models::{Column, IndicatorOutput, IndicatorSeries, PriceSeries};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

/// Moving-average periods drawn together, with one colour per member.
const SMA_GROUPS: &[&[(usize, &str)]] = &[
    &[(5, "blue"), (10, "green"), (20, "red")],
    &[(50, "purple"), (100, "orange")],
    &[(200, "brown")],
];

const EMA_GROUPS: &[&[(usize, &str)]] = &[
    &[(12, "blue"), (26, "green")],
    &[(50, "purple")],
    &[(200, "orange")],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Candle,
}

/// One series drawn on a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLine {
    pub label: String,
    pub panel: Panel,
    pub color: String,
    pub style: LineStyle,
    pub series: IndicatorSeries,
}

impl PlotLine {
    fn new(
        label: impl Into<String>,
        panel: Panel,
        color: &str,
        style: LineStyle,
        series: IndicatorSeries,
    ) -> Self {
        Self {
            label: label.into(),
            panel,
            color: color.to_string(),
            style,
            series,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub kind: ChartKind,
    pub lines: Vec<PlotLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedIndicator {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlan {
    pub ticker: String,
    pub timestamps: Vec<DateTime<Utc>>,
    /// Base price chart, absent when not requested.
    pub price_chart: Option<Chart>,
    /// One chart per renderable indicator group, in request order.
    pub charts: Vec<Chart>,
    /// Standalone volume chart, always last.
    pub volume_chart: Option<Chart>,
    pub skipped: Vec<SkippedIndicator>,
}

impl ChartPlan {
    /// Every chart in drawing order.
    pub fn all_charts(&self) -> impl Iterator<Item = &Chart> {
        self.price_chart
            .iter()
            .chain(self.charts.iter())
            .chain(self.volume_chart.iter())
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        self.skipped.iter().any(|s| s.name == name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChartPlanner {
    engine: IndicatorEngine,
}

impl ChartPlanner {
    pub fn new(engine: IndicatorEngine) -> Self {
        Self { engine }
    }

    pub fn plan(&self, ticker: &str, series: &PriceSeries, request: &ChartRequest) -> ChartPlan {
        let mut plan = ChartPlan {
            ticker: ticker.to_string(),
            timestamps: series.timestamps().to_vec(),
            price_chart: None,
            charts: Vec::new(),
            volume_chart: None,
            skipped: Vec::new(),
        };

        if request.price {
            plan.price_chart = Some(Chart {
                title: format!("{} Stock Price", ticker),
                kind: if request.candlestick {
                    ChartKind::Candle
                } else {
                    ChartKind::Line
                },
                lines: Vec::new(),
            });
        }

        let computed: Vec<IndicatorKind> = request
            .indicators
            .iter()
            .copied()
            .filter(|kind| !matches!(kind, IndicatorKind::Sma | IndicatorKind::Ema))
            .collect();
        let report = self.engine.compute_batch(series, &computed);

        for &kind in &request.indicators {
            let outcome = match kind {
                IndicatorKind::Sma | IndicatorKind::Ema => {
                    self.moving_average_charts(ticker, series, kind)
                }
                _ => match report.get(kind) {
                    Some(Ok(output)) => indicator_chart(ticker, kind, output, series.len()),
                    Some(Err(e)) => Err(e.to_string()),
                    None => Err("indicator was not computed".to_string()),
                },
            };

            match outcome {
                Ok(charts) => {
                    debug!(indicator = %kind, charts = charts.len(), "Planned indicator charts");
                    plan.charts.extend(charts);
                }
                Err(reason) => {
                    warn!(ticker, indicator = %kind, %reason, "Skipping indicator");
                    plan.skipped.push(SkippedIndicator {
                        name: kind.name().to_string(),
                        reason,
                    });
                }
            }
        }

        for name in &request.unknown {
            plan.skipped.push(SkippedIndicator {
                name: name.clone(),
                reason: IndicatorError::UnknownIndicator(name.clone()).to_string(),
            });
        }

        if request.volume {
            match series.column(Column::Volume) {
                Ok(_) => {
                    plan.volume_chart = Some(Chart {
                        title: format!("{} Volume", ticker),
                        kind: ChartKind::Line,
                        lines: Vec::new(),
                    })
                }
                Err(e) => plan.skipped.push(SkippedIndicator {
                    name: "volume".to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        plan
    }

    /// SMA/EMA period groups; a group is drawn only when every member has data.
    fn moving_average_charts(
        &self,
        ticker: &str,
        series: &PriceSeries,
        kind: IndicatorKind,
    ) -> Result<Vec<Chart>, String> {
        let (groups, label) = match kind {
            IndicatorKind::Sma => (SMA_GROUPS, "SMA"),
            _ => (EMA_GROUPS, "EMA"),
        };

        let mut charts = Vec::new();
        for group in groups {
            let periods: Vec<usize> = group.iter().map(|(period, _)| *period).collect();
            let computed = match kind {
                IndicatorKind::Sma => calculate_smas(series, &periods),
                _ => calculate_emas(series, &periods),
            }
            .map_err(|e| e.to_string())?;

            if computed.iter().any(|s| s.is_all_undefined()) {
                continue;
            }

            let lines = computed
                .into_iter()
                .zip(group.iter())
                .map(|(values, (period, color))| {
                    PlotLine::new(
                        format!("{}-day {}", period, label),
                        Panel::Price,
                        color,
                        LineStyle::Solid,
                        values,
                    )
                })
                .collect();

            charts.push(Chart {
                title: format!("{} {}-day {}s", ticker, join_periods(&periods), label),
                kind: ChartKind::Candle,
                lines,
            });
        }

        if charts.is_empty() {
            return Err(format!("not enough history for any {} period group", label));
        }
        Ok(charts)
    }
}

fn indicator_chart(
    ticker: &str,
    kind: IndicatorKind,
    output: &IndicatorOutput,
    expected_len: usize,
) -> Result<Vec<Chart>, String> {
    let spec = kind.spec();
    if let Some(bad) = output.series().iter().find(|s| s.len() != expected_len) {
        return Err(format!(
            "{} calculation mismatch: expected {} values, got {}",
            kind.name().to_uppercase(),
            expected_len,
            bad.len()
        ));
    }

    let (title, lines) = match (kind, output) {
        (IndicatorKind::Macd, IndicatorOutput::Triple(macd, signal, histogram)) => {
            if !output.is_fully_defined() {
                return Err("MACD components could not be calculated".to_string());
            }
            (
                format!("{} MACD", ticker),
                vec![
                    PlotLine::new("MACD Line", spec.panel, "blue", LineStyle::Solid, macd.clone()),
                    PlotLine::new("Signal Line", spec.panel, "red", LineStyle::Solid, signal.clone()),
                    PlotLine::new("Histogram", spec.panel, "grey", LineStyle::Bar, histogram.clone()),
                ],
            )
        }
        (IndicatorKind::BollingerBands, IndicatorOutput::Pair(upper, lower)) => (
            format!("{} Bollinger Bands", ticker),
            vec![
                PlotLine::new("Upper Band", spec.panel, spec.color, LineStyle::Dashed, upper.clone()),
                PlotLine::new("Lower Band", spec.panel, spec.color, LineStyle::Dashed, lower.clone()),
            ],
        ),
        (IndicatorKind::Dmi, IndicatorOutput::Pair(plus_di, minus_di)) => (
            format!("{} DMI (+DI / -DI)", ticker),
            vec![
                PlotLine::new("+DI", spec.panel, spec.color, spec.style, plus_di.clone()),
                PlotLine::new("-DI", spec.panel, "red", spec.style, minus_di.clone()),
            ],
        ),
        (IndicatorKind::ParabolicSar, IndicatorOutput::Single(sar)) => (
            format!("{} Parabolic SAR", ticker),
            vec![PlotLine::new("Parabolic SAR", spec.panel, "red", LineStyle::Scatter, sar.clone())],
        ),
        (_, IndicatorOutput::Single(values)) => {
            let upper = kind.name().to_uppercase();
            (
                format!("{} {}", ticker, upper),
                vec![PlotLine::new(upper, spec.panel, spec.color, spec.style, values.clone())],
            )
        }
        _ => return Err(format!("unexpected output shape for {}", kind.name())),
    };

    Ok(vec![Chart {
        title,
        kind: ChartKind::Line,
        lines,
    }])
}

fn join_periods(periods: &[usize]) -> String {
    let names: Vec<String> = periods.iter().map(|p| p.to_string()).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}
