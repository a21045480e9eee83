// In app/src/main.rs

use anyhow::Result;
use api_client::{MarketDataSource, RecordedSource};
use app_config::{MarketSettings, Settings};
use clap::{Args, Parser, Subcommand};
use engine::Engine;
use std::path::PathBuf;
use std::str::FromStr;
use strategies::MACrossover;
use strategies::types::MACrossoverSettings;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;
mod report;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Scans Binance candles for moving-average crossover signals."
)]
struct Cli {
    /// Directory holding `base.toml` and the environment overlays.
    #[arg(long, global = true, default_value = app_config::DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,

    /// Reads klines from a recorded Binance response instead of the live API.
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Overrides `app.log_level` (e.g., "debug", "warn").
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the `[market]` section of the configuration.
#[derive(Args, Debug)]
struct MarketArgs {
    /// The trading symbol (e.g., "BTCUSDT").
    #[arg(short, long)]
    symbol: Option<String>,

    /// The kline interval (e.g., "5m", "1h").
    #[arg(short, long)]
    interval: Option<String>,

    /// How many of the most recent klines to fetch.
    #[arg(short, long)]
    limit: Option<u16>,
}

impl MarketArgs {
    fn apply(self, configured: &MarketSettings) -> MarketSettings {
        MarketSettings {
            symbol: self.symbol.unwrap_or_else(|| configured.symbol.clone()),
            interval: self.interval.unwrap_or_else(|| configured.interval.clone()),
            limit: self.limit.unwrap_or(configured.limit),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scans the fetched window for golden and death crosses.
    Scan {
        #[command(flatten)]
        market: MarketArgs,

        /// The fast SMA period.
        #[arg(long, allow_negative_numbers = true)]
        fast: Option<i64>,

        /// The slow SMA period.
        #[arg(long, allow_negative_numbers = true)]
        slow: Option<i64>,
    },

    /// Prints the latest simple moving average for each period.
    Sma {
        #[command(flatten)]
        market: MarketArgs,

        /// Periods to compute. Defaults to the configured fast and slow periods.
        #[arg(allow_negative_numbers = true)]
        periods: Vec<i64>,
    },
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings_from(&cli.config_dir)?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&settings.app.log_level))?;

    tracing::info!("Starting cross-scan");

    // The one data source for this run, handed down by reference.
    let source: Box<dyn MarketDataSource> = match cli.fixture {
        Some(path) => Box::new(RecordedSource::new(path)),
        None => Box::new(api_client::new(&settings.binance)?),
    };

    match cli.command {
        Commands::Scan { market, fast, slow } => {
            let market = market.apply(&settings.market);
            handle_scan(source.as_ref(), &settings, &market, fast, slow).await?;
        }
        Commands::Sma { market, periods } => {
            let market = market.apply(&settings.market);
            handle_sma(source.as_ref(), &settings, &market, periods).await?;
        }
    }

    tracing::info!("cross-scan has finished successfully.");

    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let level = tracing::Level::from_str(level)
        .map_err(|e| anyhow::anyhow!("Invalid log level {:?}: {}", level, e))?;

    // Logs go to stderr; stdout carries the report.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(
            Targets::new()
                .with_target("hyper", tracing::Level::WARN)
                .with_target("reqwest", tracing::Level::WARN)
                .with_default(level),
        );
    tracing_subscriber::registry().with(fmt_layer).init();

    Ok(())
}

// --- "Scan" Subcommand Logic ---

async fn handle_scan(
    source: &dyn MarketDataSource,
    settings: &Settings,
    market: &MarketSettings,
    fast: Option<i64>,
    slow: Option<i64>,
) -> Result<()> {
    let configured = settings.strategies.ma_crossover;
    let crossover = MACrossoverSettings {
        fast_period: fast.unwrap_or(configured.fast_period),
        slow_period: slow.unwrap_or(configured.slow_period),
    };

    // Bad periods are rejected before anything is fetched.
    let strategy = MACrossover::new(crossover)?;

    println!(
        "Scanning {} {} for SMA({}) / SMA({}) crossovers...",
        market.symbol, market.interval, crossover.fast_period, crossover.slow_period
    );

    let engine = Engine::new(source, market);
    let report = engine.scan(&strategy).await?;

    report::print_scan_report(&report, &crossover);
    Ok(())
}

// --- "Sma" Subcommand Logic ---

async fn handle_sma(
    source: &dyn MarketDataSource,
    settings: &Settings,
    market: &MarketSettings,
    periods: Vec<i64>,
) -> Result<()> {
    let periods = if periods.is_empty() {
        let configured = settings.strategies.ma_crossover;
        vec![configured.fast_period, configured.slow_period]
    } else {
        periods
    };

    let engine = Engine::new(source, market);
    let report = engine.latest_averages(&periods).await?;

    report::print_sma_report(&report);
    Ok(())
}
