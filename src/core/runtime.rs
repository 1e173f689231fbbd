//! Concurrent multi-ticker planning on tokio's blocking pool

use crate::core::render::{ChartPlan, ChartPlanner};
use crate::indicators::parser::ChartRequest;
use crate::models::PriceSeries;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

pub const DEFAULT_MAX_CONCURRENCY: usize = 4;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the batch runtime
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub max_concurrency: usize,
    /// Deadline for the whole run, not per ticker.
    pub timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("timed out after {0:?}")]
    TimedOut(Duration),

    #[error("task failed: {0}")]
    TaskFailed(String),
}

/// One ticker to plan.
#[derive(Debug, Clone)]
pub struct TickerJob {
    pub ticker: String,
    pub series: PriceSeries,
    pub request: ChartRequest,
}

#[derive(Debug)]
pub struct TickerOutcome {
    pub ticker: String,
    pub result: Result<ChartPlan, RuntimeError>,
}

pub struct BatchRuntime {
    config: RuntimeConfig,
    planner: Arc<ChartPlanner>,
}

impl BatchRuntime {
    pub fn new(config: RuntimeConfig, planner: ChartPlanner) -> Self {
        Self {
            config,
            planner: Arc::new(planner),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Plan every job, returning one outcome per job in input order.
    ///
    /// Jobs still running when the deadline passes are reported as timed out.
    pub async fn run(&self, jobs: Vec<TickerJob>) -> Vec<TickerOutcome> {
        let order: Vec<String> = jobs.iter().map(|job| job.ticker.clone()).collect();
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrency.max(1)));
        let mut set = JoinSet::new();

        info!(
            jobs = order.len(),
            max_concurrency = self.config.max_concurrency,
            "BatchRuntime: starting"
        );

        for (index, job) in jobs.into_iter().enumerate() {
            let semaphore = semaphore.clone();
            let planner = self.planner.clone();
            set.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                let result = tokio::task::spawn_blocking(move || {
                    planner.plan(&job.ticker, &job.series, &job.request)
                })
                .await
                .map_err(|e| RuntimeError::TaskFailed(e.to_string()));
                (index, result)
            });
        }

        let mut finished: HashMap<usize, Result<ChartPlan, RuntimeError>> = HashMap::new();
        let collect = async {
            while let Some(joined) = set.join_next().await {
                match joined {
                    Ok((index, result)) => {
                        finished.insert(index, result);
                    }
                    Err(e) => warn!(error = %e, "BatchRuntime: worker task failed"),
                }
            }
        };
        let timed_out = tokio::time::timeout(self.config.timeout, collect).await.is_err();
        if timed_out {
            warn!(timeout = ?self.config.timeout, "BatchRuntime: deadline reached");
            set.abort_all();
        }

        let outcomes: Vec<TickerOutcome> = order
            .into_iter()
            .enumerate()
            .map(|(index, ticker)| {
                let result = finished.remove(&index).unwrap_or_else(|| {
                    if timed_out {
                        Err(RuntimeError::TimedOut(self.config.timeout))
                    } else {
                        Err(RuntimeError::TaskFailed("task did not report".to_string()))
                    }
                });
                TickerOutcome { ticker, result }
            })
            .collect();

        info!(
            succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count(),
            failed = outcomes.iter().filter(|o| o.result.is_err()).count(),
            "BatchRuntime: finished"
        );
        outcomes
    }
}
