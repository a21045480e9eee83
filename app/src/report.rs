// In app/src/report.rs

use chrono::{DateTime, Utc};
use core_types::{Cross, SignalEvent};
use engine::{ScanReport, SmaReport};
use strategies::types::MACrossoverSettings;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn format_time(time: &DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// One human-readable line per signal.
pub fn format_event(event: &SignalEvent) -> String {
    format!(
        "[{}] {} at {} | close: {:.2} | fast MA: {:.2} | slow MA: {:.2}",
        event.cross.action(),
        event.cross,
        format_time(&event.open_time),
        event.close,
        event.fast_ma,
        event.slow_ma,
    )
}

/// Prints every signal of a scan followed by a summary line.
pub fn print_scan_report(report: &ScanReport, settings: &MACrossoverSettings) {
    println!("\n--- {} {} | {} ---", report.symbol, report.interval, report.strategy);

    for event in &report.events {
        println!("{}", format_event(event));
    }

    println!(
        "Summary: {} golden cross(es), {} death cross(es) in {} candles (SMA {} / {}).",
        report.count(Cross::Golden),
        report.count(Cross::Death),
        report.candle_count,
        settings.fast_period,
        settings.slow_period,
    );
}

/// Prints the latest moving average per requested period.
pub fn print_sma_report(report: &SmaReport) {
    println!(
        "\n--- {} {} | {} candles ---",
        report.symbol, report.interval, report.candle_count
    );

    if let Some(close) = report.last_close {
        println!("Last close: {:.2}", close);
    }

    for reading in &report.readings {
        match &reading.outcome {
            Ok(value) => println!("SMA({}): {:.2}", reading.period, value),
            Err(e) => println!("SMA({}): unavailable ({})", reading.period, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn golden_cross_line() {
        let event = SignalEvent {
            index: 5,
            open_time: Utc.with_ymd_and_hms(2024, 7, 1, 5, 0, 0).unwrap(),
            close: 61000.0,
            fast_ma: 60800.0,
            slow_ma: 60775.0,
            cross: Cross::Golden,
        };

        assert_eq!(
            format_event(&event),
            "[BUY] golden cross at 2024-07-01 05:00 | close: 61000.00 | fast MA: 60800.00 | slow MA: 60775.00"
        );
    }

    #[test]
    fn death_cross_line() {
        let event = SignalEvent {
            index: 9,
            open_time: Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap(),
            close: 59876.543,
            fast_ma: 60000.0,
            slow_ma: 60100.1,
            cross: Cross::Death,
        };

        assert_eq!(
            format_event(&event),
            "[SELL] death cross at 2024-07-01 09:30 | close: 59876.54 | fast MA: 60000.00 | slow MA: 60100.10"
        );
    }
}
