// In crates/engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data source failed: {0}")]
    DataSource(#[from] api_client::Error),

    #[error("Strategy failed: {0}")]
    Strategy(#[from] strategies::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
