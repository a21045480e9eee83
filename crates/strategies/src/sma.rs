// In crates/strategies/src/sma.rs

use crate::{Error, Result};
use core_types::Kline;
use ta::indicators::SimpleMovingAverage as Sma;
use ta::Next;

/// Computes the `period`-bar simple moving average at the end of `prices`.
///
/// Only the last `period` values take part in the mean, so passing a longer
/// history gives the same answer as passing just its tail.
///
/// # Errors
///
/// * `Error::InvalidPeriod` if `period` is zero or negative.
/// * `Error::InsufficientData` if `prices` holds fewer than `period` values.
pub fn compute_sma(prices: &[f64], period: i64) -> Result<f64> {
    if period <= 0 {
        return Err(Error::InvalidPeriod(period));
    }
    let window = usize::try_from(period).map_err(|_| Error::InvalidPeriod(period))?;

    if prices.len() < window {
        return Err(Error::InsufficientData {
            required: window,
            available: prices.len(),
        });
    }

    let mut sma = Sma::new(window).map_err(|_| Error::InvalidPeriod(period))?;
    let tail = &prices[prices.len() - window..];

    // After exactly `window` inputs the indicator holds the mean of all of them.
    Ok(tail.iter().fold(0.0, |_, &price| sma.next(price)))
}

/// Extracts the closing prices, index-aligned with `klines`.
pub fn closing_prices(klines: &[Kline]) -> Vec<f64> {
    klines.iter().map(|k| k.close).collect()
}
