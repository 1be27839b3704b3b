// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the search pipeline.
//!
//! Argument validation happens before any enumeration starts, so an
//! [`InvalidArgument`] always means no work was performed. Numeric clamping
//! inside the cooker is a domain rule and never surfaces here.

use crate::model::ItemId;
use thiserror::Error;

/// A request was rejected before the search started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("Combination size {k} is outside the supported range {min}..={max}")]
    CombinationSize { k: usize, min: usize, max: usize },

    #[error("Item pool is empty")]
    EmptyPool,

    #[error("Item pool has {pool} items, fewer than the combination size {k}")]
    PoolTooSmall { pool: usize, k: usize },

    #[error("Rank range ends at {end}, past the {total} available combinations")]
    RankRange { end: u64, total: u64 },

    #[error("Top-K capacity must be at least 1")]
    ZeroTopK,

    #[error("Cooking duration must be at least 1 second")]
    ZeroDuration,

    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    #[error("Item appears more than once in the pool: {0}")]
    DuplicateItem(ItemId),
}

/// Errors reported by the search, planning and loading layers.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Search worker for partition {partition} panicked")]
    WorkerPanicked { partition: usize },

    #[error("Item table error: {0}")]
    Table(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SearchError {
    fn from(err: toml::de::Error) -> Self {
        SearchError::Table(err.to_string())
    }
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        SearchError::Config(err.to_string())
    }
}

impl SearchError {
    /// True when the request itself was malformed.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SearchError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = SearchError::from(InvalidArgument::CombinationSize { k: 5, min: 2, max: 4 });
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid argument: Combination size 5 is outside the supported range 2..=4"
        );
    }

    #[test]
    fn test_worker_panic_is_not_invalid_argument() {
        let err = SearchError::WorkerPanicked { partition: 3 };
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().contains("partition 3"));
    }
}
