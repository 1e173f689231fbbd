//! tickerlens CLI
//!
//! Loads Polygon-style aggregate JSON, computes the requested indicators and
//! prints the resulting chart plan as JSON.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;
use tickerlens::config::Config;
use tickerlens::core::engine::IndicatorEngine;
use tickerlens::core::render::ChartPlanner;
use tickerlens::core::runtime::{BatchRuntime, TickerJob};
use tickerlens::indicators::parser::parse_indicator_list;
use tickerlens::indicators::registry::IndicatorRegistry;
use tickerlens::logging;
use tickerlens::services::market_data::{JsonFileMarketDataProvider, MarketDataProvider};
use tickerlens::services::polygon::parse_aggregates;
use tracing::{info, warn};

#[derive(Parser)]
#[command(version, about = "Technical indicator chart planner")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Plan charts for one or more tickers
    Plan {
        /// Ticker symbols, read from `<data-dir>/<TICKER>.json`
        #[arg(long = "ticker", value_name = "TICKER")]
        tickers: Vec<String>,
        /// A single aggregate JSON file instead of tickers
        #[arg(long, value_name = "FILE", conflicts_with = "tickers")]
        file: Option<PathBuf>,
        /// Overrides TICKERLENS_DATA_DIR
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
        /// e.g. "Indicators: SMA, RSI, volume"
        #[arg(long, default_value = "")]
        indicators: String,
        #[arg(long)]
        pretty: bool,
    },
    /// List known indicators with their panel and colour
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::from_env();
    logging::init_logging(&config.logging);

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Plan {
            tickers,
            file,
            data_dir,
            indicators,
            pretty,
        } => {
            let request = parse_indicator_list(&indicators);
            for name in &request.unknown {
                warn!(indicator = %name, "Unknown indicator requested");
            }
            let planner = ChartPlanner::new(IndicatorEngine::new(config.params.clone()));

            let output = if let Some(path) = file {
                let body = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                let series = parse_aggregates(&body)
                    .with_context(|| format!("decoding {}", path.display()))?;
                let ticker = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("UNKNOWN")
                    .to_uppercase();
                serde_json::to_value(planner.plan(&ticker, &series, &request))?
            } else {
                if tickers.is_empty() {
                    bail!("pass --ticker at least once, or --file");
                }
                let provider =
                    JsonFileMarketDataProvider::new(data_dir.unwrap_or(config.data_dir.clone()));
                let mut jobs = Vec::with_capacity(tickers.len());
                for ticker in tickers {
                    let series = provider
                        .get_series(&ticker)
                        .with_context(|| format!("loading {}", ticker))?;
                    jobs.push(TickerJob {
                        ticker: ticker.to_uppercase(),
                        series,
                        request: request.clone(),
                    });
                }

                let runtime = BatchRuntime::new(config.runtime.clone(), planner);
                let mut plans = Vec::new();
                for outcome in runtime.run(jobs).await {
                    match outcome.result {
                        Ok(plan) => plans.push(plan),
                        Err(e) => warn!(ticker = %outcome.ticker, error = %e, "No chart plan"),
                    }
                }
                info!(plans = plans.len(), "Planning finished");
                serde_json::to_value(plans)?
            };

            let rendered = if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{}", rendered);
        }
        Cmd::List => {
            for spec in IndicatorRegistry::new().specs() {
                println!(
                    "{:<16} {:<11} {:<6} {}",
                    spec.name,
                    format!("{:?}", spec.category),
                    format!("{:?}", spec.panel),
                    spec.color
                );
            }
        }
    }

    Ok(())
}
