//! Dashboard settings and startup validation
//!
//! Two settings govern the whole pipeline: how often a sample is drawn and
//! how many readings the history retains. Both are fixed at startup; there
//! is no runtime reconfiguration. The defaults keep ten readings at a
//! three-second cadence, so the chart always shows the last half minute.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};

/// Default seconds between samples.
///
/// Each tick schedules the next one from its own start time, so this is the
/// period between tick starts, not a pause inserted after the work finishes.
pub const UPDATE_INTERVAL_SECS: u64 = 3;

/// Default maximum number of readings retained in the history.
///
/// Appending beyond this evicts the oldest reading first.
pub const DEQUE_SIZE: usize = 10;

/// Startup settings for one dashboard instance.
///
/// Construct with struct literal syntax or [`Config::default`], then hand to
/// [`Dashboard::new`](crate::Dashboard::new), which validates before any
/// state is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// History capacity in readings. Must be at least 1.
    pub deque_size: usize,
    /// Sampling period in whole seconds. Must be greater than 0.
    pub update_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deque_size: DEQUE_SIZE,
            update_interval_secs: UPDATE_INTERVAL_SECS,
        }
    }
}

impl Config {
    /// Checks the invariants the pipeline cannot run without.
    ///
    /// Violations are fatal at startup, not recoverable later; see
    /// [`ConfigError`].
    pub fn validate(&self) -> ConfigResult<()> {
        if self.deque_size == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.update_interval_secs == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Sampling period as a [`Duration`], for driving a
    /// [`TickTimer`](crate::TickTimer).
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_secs)
    }
}
