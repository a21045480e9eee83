// In crates/api-client/src/source.rs

use crate::Result;
use async_trait::async_trait;
use core_types::{Kline, Symbol};

/// The universal interface for a provider of historical candles.
///
/// Implementations exist for the live Binance REST API (`ApiClient`) and for
/// recorded responses on disk (`RecordedSource`). The caller constructs one
/// explicitly and hands it to whatever needs market data.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// The name of the source (e.g., "BinanceRest", "Recorded").
    fn name(&self) -> &'static str;

    /// Fetches up to `limit` of the most recent klines, oldest first.
    ///
    /// # Arguments
    ///
    /// * `symbol`: The trading pair to fetch klines for.
    /// * `interval`: The kline interval (e.g., "1m", "5m", "1h").
    /// * `limit`: The number of klines to return.
    async fn fetch_candles(&self, symbol: &Symbol, interval: &str, limit: u16)
    -> Result<Vec<Kline>>;
}
