//! Error types for scenario generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for generation operations.
pub type DrillResult<T> = Result<T, DrillError>;

/// Errors that can occur while loading settings or generating a briefing.
#[derive(Debug, Error)]
pub enum DrillError {
    /// Settings are missing, malformed, or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A numeric range was requested with `min > max`.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound as requested.
        min: f64,
        /// Upper bound as requested.
        max: f64,
    },

    /// A range holds no value at the requested decimal precision.
    #[error("no value with {decimals} decimal places lies between {min} and {max}")]
    NoValueAtPrecision {
        /// Lower bound as requested.
        min: f64,
        /// Upper bound as requested.
        max: f64,
        /// Requested decimal places.
        decimals: u32,
    },

    /// A pick was requested from an empty pool.
    #[error("cannot pick from an empty pool")]
    EmptyPool,

    /// More distinct values were requested than the pool holds.
    #[error("cannot pick {requested} distinct values from a pool of {available}")]
    InsufficientPool {
        /// Number of distinct values requested.
        requested: usize,
        /// Number of values in the pool.
        available: usize,
    },

    /// The settings file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ConfigRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
