//! The temperature observation record
//!
//! A [`Reading`] is one (temperature, timestamp) pair. Readings are
//! immutable once created: the sampler stamps them, the history stores
//! them, and the display layer formats them, but nothing edits one in
//! place.
//!
//! Timestamps are wall-clock [`NaiveDateTime`]s truncated to whole seconds,
//! the resolution the dashboard displays. Keeping the truncation in the
//! constructor means two readings that render identically also compare
//! equal.

use chrono::{NaiveDateTime, Timelike};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Display pattern for reading timestamps: `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One temperature observation.
///
/// `Copy` on purpose: readings flow through snapshots, tables, and frames
/// by value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Reading {
    /// Temperature in degrees Celsius, rounded to one decimal place by the
    /// sampler.
    pub temperature_c: f64,
    /// Wall-clock time of the observation, truncated to whole seconds.
    pub timestamp: NaiveDateTime,
}

impl Reading {
    /// Builds a reading, truncating the timestamp to whole seconds.
    pub fn new(temperature_c: f64, timestamp: NaiveDateTime) -> Self {
        // with_nanosecond(0) is only None for out-of-range inputs
        let timestamp = timestamp.with_nanosecond(0).unwrap_or(timestamp);
        Self {
            temperature_c,
            timestamp,
        }
    }

    /// Timestamp formatted for display, e.g. `"2025-01-15 09:30:00"`.
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Temperature formatted for the value box, e.g. `"-15.3 °C"`.
    pub fn temperature_display(&self) -> String {
        format!("{:.1} °C", self.temperature_c)
    }
}
