//! Environment-driven configuration.
//!
//! Call `dotenvy::dotenv()` before reading so a local `.env` is honoured.

use crate::core::runtime::{RuntimeConfig, DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_SECS};
use crate::indicators::params::IndicatorParams;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const ENV_PREFIX: &str = "TICKERLENS_";
pub const DEFAULT_ENVIRONMENT: &str = "sandbox";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Deployment environment, `sandbox` unless `TICKERLENS_ENV` says otherwise.
pub fn get_environment() -> String {
    normalize_environment(env::var("TICKERLENS_ENV").ok())
}

fn normalize_environment(raw: Option<String>) -> String {
    raw.map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub environment: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl LoggingConfig {
    pub fn is_production(&self) -> bool {
        is_production(&self.environment)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub logging: LoggingConfig,
    pub data_dir: PathBuf,
    pub runtime: RuntimeConfig,
    pub params: IndicatorParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            runtime: RuntimeConfig::default(),
            params: IndicatorParams::default(),
        }
    }
}

impl Config {
    /// Build from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = IndicatorParams::default();
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        let environment = normalize_environment(var("ENV"));

        let params = IndicatorParams {
            sma_period: parse_or(&var, "SMA_PERIOD", defaults.sma_period),
            ema_period: parse_or(&var, "EMA_PERIOD", defaults.ema_period),
            rsi_period: parse_or(&var, "RSI_PERIOD", defaults.rsi_period),
            macd_fast: parse_or(&var, "MACD_FAST", defaults.macd_fast),
            macd_slow: parse_or(&var, "MACD_SLOW", defaults.macd_slow),
            macd_signal: parse_or(&var, "MACD_SIGNAL", defaults.macd_signal),
            atr_period: parse_or(&var, "ATR_PERIOD", defaults.atr_period),
            adx_period: parse_or(&var, "ADX_PERIOD", defaults.adx_period),
            dmi_period: parse_or(&var, "DMI_PERIOD", defaults.dmi_period),
            bollinger_period: parse_or(&var, "BOLLINGER_PERIOD", defaults.bollinger_period),
            vroc_period: parse_or(&var, "VROC_PERIOD", defaults.vroc_period),
            sar_initial_af: parse_or(&var, "SAR_INITIAL_AF", defaults.sar_initial_af),
            sar_max_af: parse_or(&var, "SAR_MAX_AF", defaults.sar_max_af),
        };

        Self {
            logging: LoggingConfig {
                environment,
                level: var("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
            data_dir: var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            runtime: RuntimeConfig {
                max_concurrency: parse_or(&var, "MAX_CONCURRENCY", DEFAULT_MAX_CONCURRENCY),
                timeout: Duration::from_secs(parse_or(&var, "TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            },
            params,
        }
    }
}

fn parse_or<T, F>(var: &F, name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(
                variable = %format!("{}{}", ENV_PREFIX, name),
                value = %raw,
                default = ?default,
                "Invalid configuration value, using default"
            );
            default
        }),
        None => default,
    }
}
