// In crates/strategies/src/lib.rs

use core_types::{Kline, SignalEvent};
pub mod error;
pub mod ma_crossover;
pub mod sma;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use ma_crossover::MACrossover;
pub use sma::{closing_prices, compute_sma};

/// The universal interface for a signal-producing strategy.
///
/// A strategy looks at a complete, chronologically ordered window of klines and
/// reports every signal it finds in it. It carries no state between scans.
pub trait Strategy {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    fn scan(&self, klines: &[Kline]) -> Result<Vec<SignalEvent>>;
}
