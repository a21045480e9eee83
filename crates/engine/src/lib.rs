// In crates/engine/src/lib.rs

pub mod error;

use api_client::MarketDataSource;
use app_config::MarketSettings;
use core_types::{Cross, Kline, SignalEvent, Symbol};
use strategies::{Strategy, closing_prices, compute_sma};

pub use error::{Error, Result};

/// The result of scanning one market with one strategy.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub symbol: Symbol,
    pub interval: String,
    pub strategy: &'static str,
    /// How many candles the source returned.
    pub candle_count: usize,
    pub events: Vec<SignalEvent>,
}

impl ScanReport {
    pub fn count(&self, cross: Cross) -> usize {
        self.events.iter().filter(|e| e.cross == cross).count()
    }
}

/// The latest moving average for a single period.
#[derive(Debug, Clone)]
pub struct SmaReading {
    pub period: i64,
    pub outcome: strategies::Result<f64>,
}

#[derive(Debug, Clone)]
pub struct SmaReport {
    pub symbol: Symbol,
    pub interval: String,
    pub candle_count: usize,
    pub last_close: Option<f64>,
    pub readings: Vec<SmaReading>,
}

/// Runs a single batch computation against one market.
///
/// The engine owns no client of its own; the data source is borrowed from the
/// caller for the duration of the run.
pub struct Engine<'a> {
    source: &'a dyn MarketDataSource,
    symbol: Symbol,
    interval: String,
    limit: u16,
}

impl<'a> Engine<'a> {
    pub fn new(source: &'a dyn MarketDataSource, market: &MarketSettings) -> Self {
        Self {
            source,
            symbol: Symbol(market.symbol.clone()),
            interval: market.interval.clone(),
            limit: market.limit,
        }
    }

    /// Fetches the configured window of klines. Failures are not retried.
    pub async fn fetch_klines(&self) -> Result<Vec<Kline>> {
        tracing::info!(
            source = self.source.name(),
            symbol = %self.symbol,
            interval = %self.interval,
            limit = self.limit,
            "Fetching klines..."
        );

        let klines = self
            .source
            .fetch_candles(&self.symbol, &self.interval, self.limit)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch klines."))?;

        tracing::info!(count = klines.len(), "Klines received.");
        Ok(klines)
    }

    /// Fetches the window and runs `strategy` over it.
    pub async fn scan(&self, strategy: &dyn Strategy) -> Result<ScanReport> {
        let klines = self.fetch_klines().await?;

        tracing::info!(strategy = strategy.name(), "Scanning for crossover signals...");
        let events = strategy.scan(&klines)?;

        for event in &events {
            tracing::debug!(index = event.index, cross = %event.cross, "Signal detected.");
        }
        tracing::info!(signals = events.len(), "Scan complete.");

        Ok(ScanReport {
            symbol: self.symbol.clone(),
            interval: self.interval.clone(),
            strategy: strategy.name(),
            candle_count: klines.len(),
            events,
        })
    }

    /// Fetches the window and computes the most recent SMA for each period.
    ///
    /// A period that cannot be computed is logged and reported in its reading;
    /// it does not fail the run.
    pub async fn latest_averages(&self, periods: &[i64]) -> Result<SmaReport> {
        let klines = self.fetch_klines().await?;
        let closes = closing_prices(&klines);

        let readings = periods
            .iter()
            .map(|&period| {
                let outcome = compute_sma(&closes, period);
                if let Err(e) = &outcome {
                    tracing::warn!(period, error = %e, "Skipping moving average.");
                }
                SmaReading { period, outcome }
            })
            .collect();

        Ok(SmaReport {
            symbol: self.symbol.clone(),
            interval: self.interval.clone(),
            candle_count: klines.len(),
            last_close: closes.last().copied(),
            readings,
        })
    }
}
