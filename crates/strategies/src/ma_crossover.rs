// In crates/strategies/src/ma_crossover.rs

use crate::sma::{closing_prices, compute_sma};
use crate::types::MACrossoverSettings;
use crate::{Error, Result, Strategy};
use core_types::{Cross, Kline, SignalEvent};

/// Simple moving-average crossover over a fixed history window.
#[derive(Debug, Clone)]
pub struct MACrossover {
    /// The configuration for this strategy instance.
    settings: MACrossoverSettings,
}

impl MACrossover {
    /// Creates a new `MACrossover` strategy, rejecting unusable periods up front.
    pub fn new(settings: MACrossoverSettings) -> Result<Self> {
        validate_periods(settings.fast_period, settings.slow_period)?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &MACrossoverSettings {
        &self.settings
    }
}

impl Strategy for MACrossover {
    fn name(&self) -> &'static str {
        "SMACrossover"
    }

    fn scan(&self, klines: &[Kline]) -> Result<Vec<SignalEvent>> {
        scan(klines, self.settings.fast_period, self.settings.slow_period)
    }
}

fn validate_periods(fast_period: i64, slow_period: i64) -> Result<()> {
    if fast_period <= 0 {
        return Err(Error::InvalidPeriod(fast_period));
    }
    if slow_period <= 0 {
        return Err(Error::InvalidPeriod(slow_period));
    }
    if fast_period >= slow_period {
        return Err(Error::InvalidPeriodOrdering {
            fast: fast_period,
            slow: slow_period,
        });
    }
    Ok(())
}

/// Scans `klines` for crossovers of the fast SMA over the slow SMA.
///
/// Every candle from index `slow_period` onward is compared with the one before
/// it. A golden cross is reported when the fast average goes from strictly below
/// to strictly above the slow one, a death cross for the opposite move. Touching
/// (equal averages) is never a cross.
///
/// Returns an empty list when there are not enough candles to compare two
/// consecutive slow averages.
pub fn scan(klines: &[Kline], fast_period: i64, slow_period: i64) -> Result<Vec<SignalEvent>> {
    validate_periods(fast_period, slow_period)?;

    let closes = closing_prices(klines);
    let first = usize::try_from(slow_period).map_err(|_| Error::InvalidPeriod(slow_period))?;
    let mut events = Vec::new();

    for i in first..closes.len() {
        // Everything known at candle `i`, and one candle earlier.
        let prices_so_far = &closes[..=i];
        let prices_prev = &closes[..i];

        let fast_ma = compute_sma(prices_so_far, fast_period)?;
        let slow_ma = compute_sma(prices_so_far, slow_period)?;
        let prev_fast_ma = compute_sma(prices_prev, fast_period)?;
        let prev_slow_ma = compute_sma(prices_prev, slow_period)?;

        let cross = if prev_fast_ma < prev_slow_ma && fast_ma > slow_ma {
            Some(Cross::Golden)
        } else if prev_fast_ma > prev_slow_ma && fast_ma < slow_ma {
            Some(Cross::Death)
        } else {
            None
        };

        if let Some(cross) = cross {
            let kline = &klines[i];
            events.push(SignalEvent {
                index: i,
                open_time: kline.open_time,
                close: kline.close,
                fast_ma,
                slow_ma,
                cross,
            });
        }
    }

    Ok(events)
}
