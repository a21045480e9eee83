// In crates/app-config/src/types.rs

use serde::Deserialize;
use strategies::types::MACrossoverSettings;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Settings for the Binance API.
    pub binance: BinanceSettings,
    /// Which market to scan and how much history to fetch.
    pub market: MarketSettings,
    pub strategies: StrategySettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BinanceSettings {
    /// The REST API base URL for Binance.
    pub rest_base_url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MarketSettings {
    pub symbol: String,
    pub interval: String,
    /// Number of candles to request (Binance caps this at 1000).
    pub limit: u16,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StrategySettings {
    pub ma_crossover: MACrossoverSettings,
}

fn default_log_level() -> String {
    "info".to_string()
}
