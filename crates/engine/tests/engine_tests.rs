use api_client::MarketDataSource;
use app_config::MarketSettings;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use core_types::{Cross, Kline, Symbol};
use engine::{Engine, Error};
use std::sync::Mutex;
use strategies::MACrossover;
use strategies::types::MACrossoverSettings;

/// Serves a fixed series and remembers what it was asked for.
struct MockSource {
    klines: Vec<Kline>,
    requests: Mutex<Vec<(String, String, u16)>>,
}

impl MockSource {
    fn with_closes(closes: &[f64]) -> Self {
        let klines = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Kline {
                open_time: Utc.timestamp_opt(1_719_792_000 + i as i64 * 3600, 0).unwrap(),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1.0,
            })
            .collect();
        Self {
            klines,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MarketDataSource for MockSource {
    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn fetch_candles(
        &self,
        symbol: &Symbol,
        interval: &str,
        limit: u16,
    ) -> api_client::Result<Vec<Kline>> {
        self.requests
            .lock()
            .unwrap()
            .push((symbol.0.clone(), interval.to_string(), limit));
        Ok(self.klines.clone())
    }
}

struct FailingSource;

#[async_trait]
impl MarketDataSource for FailingSource {
    fn name(&self) -> &'static str {
        "Failing"
    }

    async fn fetch_candles(&self, _: &Symbol, _: &str, _: u16) -> api_client::Result<Vec<Kline>> {
        Err(api_client::Error::ApiError {
            code: -1003,
            msg: "Too many requests.".to_string(),
        })
    }
}

fn market() -> MarketSettings {
    MarketSettings {
        symbol: "BTCUSDT".to_string(),
        interval: "1h".to_string(),
        limit: 8,
    }
}

fn crossover(fast_period: i64, slow_period: i64) -> MACrossover {
    MACrossover::new(MACrossoverSettings {
        fast_period,
        slow_period,
    })
    .unwrap()
}

#[tokio::test]
async fn scan_reports_the_golden_cross() {
    let source = MockSource::with_closes(&[10.0, 9.0, 8.0, 7.0, 6.0, 10.0, 12.0, 14.0]);
    let engine = Engine::new(&source, &market());

    let report = engine.scan(&crossover(2, 4)).await.unwrap();

    assert_eq!(report.symbol, Symbol("BTCUSDT".to_string()));
    assert_eq!(report.interval, "1h");
    assert_eq!(report.strategy, "SMACrossover");
    assert_eq!(report.candle_count, 8);
    assert_eq!(report.count(Cross::Golden), 1);
    assert_eq!(report.count(Cross::Death), 0);
    assert_eq!(report.events[0].index, 5);

    let requests = source.requests.lock().unwrap();
    assert_eq!(*requests, vec![("BTCUSDT".to_string(), "1h".to_string(), 8)]);
}

#[tokio::test]
async fn data_source_failure_aborts_the_scan() {
    let engine = Engine::new(&FailingSource, &market());

    let err = engine.scan(&crossover(2, 4)).await.unwrap_err();
    assert!(
        matches!(err, Error::DataSource(api_client::Error::ApiError { code: -1003, .. })),
        "got {err:?}"
    );

    assert!(matches!(
        engine.latest_averages(&[5]).await,
        Err(Error::DataSource(_))
    ));
}

#[tokio::test]
async fn latest_averages_keep_going_past_bad_periods() {
    let closes = [
        67100.0, 67300.0, 67500.0, 67400.0, 67800.0, 68200.0, 68500.0, 68300.0, 69000.0, 69300.0,
    ];
    let source = MockSource::with_closes(&closes);
    let engine = Engine::new(&source, &market());

    let report = engine.latest_averages(&[5, 10, 20, 0]).await.unwrap();

    assert_eq!(report.candle_count, 10);
    assert_eq!(report.last_close, Some(69300.0));
    assert_eq!(report.readings.len(), 4);

    let sma5 = report.readings[0].outcome.clone().unwrap();
    let sma10 = report.readings[1].outcome.clone().unwrap();
    assert!((sma5 - 68660.0).abs() < 1e-9);
    assert!((sma10 - 68040.0).abs() < 1e-9);

    assert_eq!(
        report.readings[2].outcome,
        Err(strategies::Error::InsufficientData {
            required: 20,
            available: 10
        })
    );
    assert_eq!(report.readings[3].outcome, Err(strategies::Error::InvalidPeriod(0)));
}

#[tokio::test]
async fn empty_history_produces_an_empty_report() {
    let source = MockSource::with_closes(&[]);
    let engine = Engine::new(&source, &market());

    let report = engine.scan(&crossover(5, 20)).await.unwrap();
    assert_eq!(report.candle_count, 0);
    assert!(report.events.is_empty());
}
