//! Core pipeline for the Frostline live temperature dashboard
//!
//! The dashboard UI is a thin shell; everything with state or math lives
//! here: a timer-paced synthetic sampler, a bounded FIFO history, a tabular
//! projection, a least-squares trend fit, and the presentation frame a
//! renderer pulls.
//!
//! The crate is deliberately pull-based. The host loop owns a [`Dashboard`]
//! and a [`Sampler`], ticks them on a [`TickTimer`], and reads frames when
//! it wants to draw:
//!
//! ```
//! use frostline_core::{Config, Dashboard, FrameCache, Sampler};
//!
//! # fn main() -> Result<(), frostline_core::ConfigError> {
//! let mut dashboard = Dashboard::new(Config::default())?;
//! let mut sampler = Sampler::new();
//! let mut cache = FrameCache::new();
//!
//! dashboard.tick(&mut sampler);
//!
//! let frame = cache.frame(&dashboard);
//! if let Some(latest) = frame.latest {
//!     println!("{} at {}", latest.temperature_display(), latest.timestamp_display());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod buffer;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod reading;
pub mod sampler;
pub mod table;
pub mod time;
pub mod trend;

// Public API
pub use buffer::HistoryBuffer;
pub use config::{Config, DEQUE_SIZE, UPDATE_INTERVAL_SECS};
pub use dashboard::{
    ChartModel, Dashboard, DashboardFrame, FrameCache, TrendSeries,
    INSUFFICIENT_VARIATION_NOTE, NOT_ENOUGH_DATA_NOTE,
};
pub use errors::{ConfigError, ConfigResult};
pub use reading::{Reading, TIMESTAMP_FORMAT};
pub use sampler::{Sampler, TEMP_MAX_C, TEMP_MIN_C};
pub use table::{Table, TableRow};
pub use time::{Clock, FixedClock, TickTimer, WallClock};
pub use trend::{estimate, TrendLine};

/// Crate version from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
