//! Default parameters used when an indicator is requested by name.

use crate::indicators::momentum::{
    DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL, DEFAULT_MACD_SLOW, DEFAULT_RSI_PERIOD,
};
use crate::indicators::structure::{DEFAULT_SAR_INITIAL_AF, DEFAULT_SAR_MAX_AF};
use crate::indicators::trend::{
    DEFAULT_ADX_PERIOD, DEFAULT_DMI_PERIOD, DEFAULT_EMA_PERIOD, DEFAULT_SMA_PERIOD,
};
use crate::indicators::volatility::{DEFAULT_ATR_PERIOD, DEFAULT_BOLLINGER_PERIOD};
use crate::indicators::volume::DEFAULT_VROC_PERIOD;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub sma_period: usize,
    pub ema_period: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub atr_period: usize,
    pub adx_period: usize,
    pub dmi_period: usize,
    pub bollinger_period: usize,
    pub vroc_period: usize,
    pub sar_initial_af: f64,
    pub sar_max_af: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_period: DEFAULT_SMA_PERIOD,
            ema_period: DEFAULT_EMA_PERIOD,
            rsi_period: DEFAULT_RSI_PERIOD,
            macd_fast: DEFAULT_MACD_FAST,
            macd_slow: DEFAULT_MACD_SLOW,
            macd_signal: DEFAULT_MACD_SIGNAL,
            atr_period: DEFAULT_ATR_PERIOD,
            adx_period: DEFAULT_ADX_PERIOD,
            dmi_period: DEFAULT_DMI_PERIOD,
            bollinger_period: DEFAULT_BOLLINGER_PERIOD,
            vroc_period: DEFAULT_VROC_PERIOD,
            sar_initial_af: DEFAULT_SAR_INITIAL_AF,
            sar_max_af: DEFAULT_SAR_MAX_AF,
        }
    }
}
