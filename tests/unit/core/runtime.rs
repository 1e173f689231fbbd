//! Unit tests for the batch runtime

use crate::support::{rising_thirty, series_from_closes, series_with_spread, zigzag_closes};
use std::time::Duration;
use tickerlens::core::render::ChartPlanner;
use tickerlens::core::runtime::{BatchRuntime, RuntimeConfig, RuntimeError, TickerJob};
use tickerlens::indicators::parser::parse_indicator_list;

fn jobs(tickers: &[&str]) -> Vec<TickerJob> {
    tickers
        .iter()
        .enumerate()
        .map(|(i, ticker)| TickerJob {
            ticker: ticker.to_string(),
            series: if i % 2 == 0 {
                rising_thirty()
            } else {
                series_from_closes(&zigzag_closes(40))
            },
            request: parse_indicator_list("rsi, obv"),
        })
        .collect()
}

#[test]
fn test_runtime_config_default() {
    let config = RuntimeConfig::default();
    assert_eq!(config.max_concurrency, 4);
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[tokio::test]
async fn test_outcomes_follow_input_order() {
    let runtime = BatchRuntime::new(
        RuntimeConfig {
            max_concurrency: 1,
            timeout: Duration::from_secs(30),
        },
        ChartPlanner::default(),
    );
    let outcomes = runtime.run(jobs(&["AAPL", "MSFT", "NVDA", "TSLA"])).await;

    let tickers: Vec<&str> = outcomes.iter().map(|o| o.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["AAPL", "MSFT", "NVDA", "TSLA"]);
    assert!(outcomes.iter().all(|o| o.result.is_ok()));

    // Close-only series cannot produce OBV but still plans RSI.
    let msft = outcomes[1].result.as_ref().unwrap();
    assert!(msft.is_skipped("obv"));
    assert_eq!(msft.charts.len(), 1);
}

#[tokio::test]
async fn test_deadline_reports_unfinished_tickers() {
    let deadline = Duration::from_millis(1);
    let runtime = BatchRuntime::new(
        RuntimeConfig {
            max_concurrency: 1,
            timeout: deadline,
        },
        ChartPlanner::default(),
    );

    // Each plan over this many bars takes far longer than the deadline, and
    // with one permit the later tickers cannot even start before it passes.
    let series = series_with_spread(&zigzag_closes(400_000), 1.5, 1_000.0);
    let request = parse_indicator_list(
        "sma, ema, rsi, macd, bollinger bands, adx, dmi, parabolic sar, obv, vroc, volume",
    );
    let jobs: Vec<TickerJob> = ["AAPL", "MSFT", "NVDA"]
        .iter()
        .map(|ticker| TickerJob {
            ticker: ticker.to_string(),
            series: series.clone(),
            request: request.clone(),
        })
        .collect();

    let outcomes = runtime.run(jobs).await;

    let tickers: Vec<&str> = outcomes.iter().map(|o| o.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["AAPL", "MSFT", "NVDA"]);
    for outcome in &outcomes[1..] {
        assert_eq!(
            outcome.result.as_ref().unwrap_err(),
            &RuntimeError::TimedOut(deadline),
            "{}",
            outcome.ticker
        );
    }
    match &outcomes[0].result {
        Ok(plan) => assert_eq!(plan.ticker, "AAPL"),
        Err(e) => assert_eq!(e, &RuntimeError::TimedOut(deadline)),
    }
}

#[test]
fn test_single_job_blocking_entry() {
    let runtime = BatchRuntime::new(RuntimeConfig::default(), ChartPlanner::default());
    assert!(tokio_test::block_on(runtime.run(Vec::new())).is_empty());

    let outcomes = tokio_test::block_on(runtime.run(jobs(&["AAPL"])));
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].result.is_ok());
}
