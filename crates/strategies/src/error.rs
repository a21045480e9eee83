// In crates/strategies/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Period must be greater than zero, got {0}")]
    InvalidPeriod(i64),

    #[error("Insufficient data: need {required} prices, but only {available} available")]
    InsufficientData { required: usize, available: usize },

    #[error("Fast period ({fast}) must be shorter than slow period ({slow})")]
    InvalidPeriodOrdering { fast: i64, slow: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
