//! Unit tests for chart planning

use crate::support::{rising_thirty, series_from_closes, series_with_spread, zigzag_closes};
use tickerlens::core::render::{ChartKind, ChartPlanner};
use tickerlens::indicators::parser::parse_indicator_list;
use tickerlens::indicators::registry::{LineStyle, Panel};

#[test]
fn test_empty_request_plans_price_line_only() {
    let plan = ChartPlanner::default().plan("AAPL", &rising_thirty(), &parse_indicator_list(""));
    let price = plan.price_chart.as_ref().unwrap();
    assert_eq!(price.title, "AAPL Stock Price");
    assert_eq!(price.kind, ChartKind::Line);
    assert!(plan.charts.is_empty());
    assert!(plan.volume_chart.is_none());
    assert_eq!(plan.timestamps.len(), 30);
}

#[test]
fn test_candlestick_and_volume() {
    let plan = ChartPlanner::default().plan(
        "MSFT",
        &rising_thirty(),
        &parse_indicator_list("Indicators: candlestick, rsi, volume"),
    );
    assert_eq!(plan.price_chart.as_ref().unwrap().kind, ChartKind::Candle);
    assert_eq!(plan.charts.len(), 1);
    assert_eq!(plan.charts[0].title, "MSFT RSI");
    assert_eq!(plan.volume_chart.as_ref().unwrap().title, "MSFT Volume");

    let titles: Vec<&str> = plan.all_charts().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["MSFT Stock Price", "MSFT RSI", "MSFT Volume"]);
}

#[test]
fn test_sma_groups_follow_history_length() {
    let planner = ChartPlanner::default();

    let short = planner.plan("X", &rising_thirty(), &parse_indicator_list("sma"));
    assert_eq!(short.charts.len(), 1);
    assert_eq!(short.charts[0].title, "X 5, 10 and 20-day SMAs");
    assert_eq!(short.charts[0].kind, ChartKind::Candle);
    let colors: Vec<&str> = short.charts[0].lines.iter().map(|l| l.color.as_str()).collect();
    assert_eq!(colors, vec!["blue", "green", "red"]);

    let long = planner.plan(
        "X",
        &series_with_spread(&zigzag_closes(210), 1.0, 10.0),
        &parse_indicator_list("sma"),
    );
    assert_eq!(long.charts.len(), 3);
    assert_eq!(long.charts[2].lines[0].color, "brown");
}

#[test]
fn test_ema_groups_are_defined_from_the_first_bar() {
    let plan = ChartPlanner::default().plan("X", &rising_thirty(), &parse_indicator_list("ema"));
    assert_eq!(plan.charts.len(), 3);
    assert_eq!(plan.charts[0].lines.len(), 2);
    assert_eq!(plan.charts[2].lines[0].label, "200-day EMA");
}

#[test]
fn test_too_short_for_any_sma_group_is_skipped() {
    let plan = ChartPlanner::default().plan(
        "X",
        &series_from_closes(&[1.0, 2.0, 3.0]),
        &parse_indicator_list("sma"),
    );
    assert!(plan.charts.is_empty());
    assert!(plan.is_skipped("sma"));
}

#[test]
fn test_macd_lines_and_histogram() {
    let plan = ChartPlanner::default().plan(
        "X",
        &series_from_closes(&zigzag_closes(60)),
        &parse_indicator_list("macd"),
    );
    let chart = &plan.charts[0];
    assert_eq!(chart.title, "X MACD");
    let styles: Vec<(&str, LineStyle)> = chart
        .lines
        .iter()
        .map(|l| (l.color.as_str(), l.style))
        .collect();
    assert_eq!(
        styles,
        vec![
            ("blue", LineStyle::Solid),
            ("red", LineStyle::Solid),
            ("grey", LineStyle::Bar)
        ]
    );
    assert!(chart.lines.iter().all(|l| l.panel == Panel::Lower));
}

#[test]
fn test_bollinger_dmi_and_sar_styles() {
    let plan = ChartPlanner::default().plan(
        "X",
        &series_with_spread(&zigzag_closes(60), 1.0, 10.0),
        &parse_indicator_list("bollinger bands, dmi, parabolic sar"),
    );
    assert_eq!(plan.charts.len(), 3);

    let bands = &plan.charts[0];
    assert!(bands.lines.iter().all(|l| l.style == LineStyle::Dashed && l.color == "purple"));
    assert!(bands.lines.iter().all(|l| l.panel == Panel::Price));

    let dmi = &plan.charts[1];
    assert_eq!(dmi.lines[0].color, "blue");
    assert_eq!(dmi.lines[1].color, "red");

    let sar = &plan.charts[2];
    assert_eq!(sar.lines[0].style, LineStyle::Scatter);
    assert_eq!(sar.lines[0].color, "red");
}

#[test]
fn test_failures_and_unknowns_are_reported_not_fatal() {
    let plan = ChartPlanner::default().plan(
        "X",
        &series_from_closes(&zigzag_closes(40)),
        &parse_indicator_list("price, obv, rsi, ichimoku"),
    );
    assert!(plan.price_chart.is_some());
    assert_eq!(plan.charts.len(), 1);
    assert!(plan.is_skipped("obv"));
    assert!(plan.is_skipped("ichimoku"));
    assert!(plan.skipped.iter().any(|s| s.reason.contains("Volume")));
}

#[test]
fn test_volume_without_column_is_skipped() {
    let plan = ChartPlanner::default().plan(
        "X",
        &series_from_closes(&zigzag_closes(10)),
        &parse_indicator_list("volume"),
    );
    assert!(plan.volume_chart.is_none());
    assert!(plan.is_skipped("volume"));
}

#[test]
fn test_plan_serializes_undefined_as_null() {
    let plan = ChartPlanner::default().plan("X", &rising_thirty(), &parse_indicator_list("rsi"));
    let json = serde_json::to_value(&plan).unwrap();
    let values = &json["charts"][0]["lines"][0]["series"]["values"];
    assert!(values[0].is_null());
    assert_eq!(values[29], serde_json::json!(100.0));
}
