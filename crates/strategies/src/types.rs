// In crates/strategies/src/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MACrossoverSettings {
    // Non-positive values are rejected by `MACrossover::new`.
    pub fast_period: i64,
    pub slow_period: i64,
}
