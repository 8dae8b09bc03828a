//! Configuration error types
//!
//! The pipeline itself has no runtime failure modes: sampling, append/evict,
//! projection, and trend fitting all succeed on any valid state, and an
//! under-determined trend is a normal displayable result rather than an
//! error. What can go wrong is the startup configuration, so this module is
//! one small enum checked once when a [`Dashboard`](crate::Dashboard) is
//! built.

use thiserror::Error;

/// Result alias for startup validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fatal configuration errors reported at startup.
///
/// None of these are recoverable at runtime; a host that sees one should
/// refuse to start rather than run with a broken pipeline.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The history must be able to hold at least one reading.
    #[error("history capacity must be at least 1")]
    ZeroCapacity,

    /// The sampling period must be a positive number of seconds.
    #[error("update interval must be greater than 0 seconds")]
    ZeroInterval,
}
