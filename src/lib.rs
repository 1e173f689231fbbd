//! tickerlens: technical-analysis indicator engine over OHLCV price series

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
