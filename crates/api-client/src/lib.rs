// In crates/api-client/src/lib.rs

use app_config::types::BinanceSettings;
use async_trait::async_trait;
use core_types::{Kline, Symbol};
use std::time::Duration;

pub mod error;
pub mod recorded;
pub mod source;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use recorded::RecordedSource;
pub use source::MarketDataSource;
pub use types::*;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

impl ApiClient {
    /// Constructs a new ApiClient from BinanceSettings.
    ///
    /// Only public endpoints are used, so no API keys are needed.
    pub fn new(settings: &BinanceSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::ClientBuildError(e.to_string()))?;

        Ok(ApiClient {
            http_client,
            base_url: settings.rest_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches historical kline (candlestick) data.
    ///
    /// This corresponds to the `GET /api/v3/klines` endpoint.
    ///
    /// # Arguments
    ///
    /// * `symbol`: The symbol to fetch klines for.
    /// * `interval`: The kline interval (e.g., "1m", "5m", "1h").
    /// * `limit`: Optional number of klines to return (max 1000, default 500).
    pub async fn get_historical_klines(
        &self,
        symbol: &Symbol,
        interval: &str,
        limit: Option<u16>,
    ) -> Result<Vec<Kline>> {
        let mut params = format!("symbol={}&interval={}", symbol.0, interval);

        if let Some(l) = limit {
            params.push_str(&format!("&limit={}", l));
        }

        let url = format!("{}/api/v3/klines?{}", self.base_url, params);
        tracing::debug!(url = %url, "Requesting klines.");

        let response_body = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(Error::RequestFailed)?
            .text()
            .await
            .map_err(Error::RequestFailed)?;

        let klines = parse_klines(&response_body)?;
        tracing::info!(symbol = %symbol, interval, count = klines.len(), "Fetched klines from Binance.");

        Ok(klines)
    }
}

#[async_trait]
impl MarketDataSource for ApiClient {
    fn name(&self) -> &'static str {
        "BinanceRest"
    }

    async fn fetch_candles(
        &self,
        symbol: &Symbol,
        interval: &str,
        limit: u16,
    ) -> Result<Vec<Kline>> {
        self.get_historical_klines(symbol, interval, Some(limit)).await
    }
}

// Free function to allow api_client::new usage
pub fn new(settings: &BinanceSettings) -> Result<ApiClient> {
    ApiClient::new(settings)
}
