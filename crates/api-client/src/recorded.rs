// In crates/api-client/src/recorded.rs

use crate::source::MarketDataSource;
use crate::types::parse_klines;
use crate::{Error, Result};
use async_trait::async_trait;
use core_types::{Kline, Symbol};
use std::path::{Path, PathBuf};

/// Serves klines from a saved `GET /api/v3/klines` response.
///
/// The file holds a single symbol and interval; the ones passed to
/// `fetch_candles` are only logged.
#[derive(Debug, Clone)]
pub struct RecordedSource {
    path: PathBuf,
}

impl RecordedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MarketDataSource for RecordedSource {
    fn name(&self) -> &'static str {
        "Recorded"
    }

    async fn fetch_candles(
        &self,
        symbol: &Symbol,
        interval: &str,
        limit: u16,
    ) -> Result<Vec<Kline>> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| Error::FixtureRead {
                path: self.path.display().to_string(),
                source,
            })?;

        let mut klines = parse_klines(&body)?;

        // Keep only the most recent `limit`, like the live endpoint does.
        let limit = usize::from(limit);
        if klines.len() > limit {
            klines.drain(..klines.len() - limit);
        }

        tracing::info!(
            path = %self.path.display(),
            symbol = %symbol,
            interval,
            count = klines.len(),
            "Loaded recorded klines."
        );

        Ok(klines)
    }
}
