//! Sample struct for decoded time-series data.

use serde::{Deserialize, Serialize};

/// One decoded time-series sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Unix timestamp in seconds
    pub ts: u64,
    /// Sample value
    pub value: f64,
}
