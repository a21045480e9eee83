// In crates/core-types/src/types.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trading pair as the exchange names it (e.g., "BTCUSDT").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single candlestick bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kline {
    /// The time the bar opened.
    pub open_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// The direction of a moving-average crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cross {
    /// The fast average moved from below to above the slow average.
    Golden,
    /// The fast average moved from above to below the slow average.
    Death,
}

impl Cross {
    /// The trading action this cross suggests.
    pub fn action(&self) -> &'static str {
        match self {
            Cross::Golden => "BUY",
            Cross::Death => "SELL",
        }
    }
}

impl fmt::Display for Cross {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cross::Golden => f.write_str("golden cross"),
            Cross::Death => f.write_str("death cross"),
        }
    }
}

/// A crossover detected at a specific candle of a scanned series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEvent {
    /// Index of the candle in the scanned sequence.
    pub index: usize,
    pub open_time: DateTime<Utc>,
    /// The closing price of the candle the cross was detected on.
    pub close: f64,
    pub fast_ma: f64,
    pub slow_ma: f64,
    pub cross: Cross,
}
