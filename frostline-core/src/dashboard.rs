//! Owned dashboard state and the presentation frame
//!
//! ## Overview
//!
//! [`Dashboard`] is the single owner of pipeline state: the validated
//! settings, the bounded history, and an append counter. There is no global
//! cell and no hidden reactivity. The timer loop calls
//! [`tick`](Dashboard::tick) with a sampler; renderers pull whichever view
//! they need:
//!
//! - [`latest_reading`](Dashboard::latest_reading) for the value box,
//! - [`table`](Dashboard::table) for the data panel,
//! - [`chart_model`](Dashboard::chart_model) for the scatter chart,
//! - [`frame`](Dashboard::frame) for all three derived from one snapshot.
//!
//! ## Consistency and caching
//!
//! A frame is computed from a single history snapshot, so its channels can
//! never disagree with each other. Every append bumps
//! [`version`](Dashboard::version), and [`FrameCache`] memoizes the last
//! frame keyed on that counter. That cache is the only caching layer in the
//! crate; nothing is invalidated behind the caller's back.
//!
//! ## Sharing
//!
//! All mutation goes through `&mut Dashboard`, which enforces the
//! single-writer model on one loop. Hosts serving several sessions should
//! either clone a `Dashboard` per session or guard one behind a `Mutex`
//! and read frames under the lock.

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::buffer::HistoryBuffer;
use crate::config::Config;
use crate::errors::ConfigResult;
use crate::reading::Reading;
use crate::sampler::Sampler;
use crate::table::Table;
use crate::time::Clock;
use crate::trend::{self, TrendLine};

/// Chart title shown above the scatter plot.
pub const CHART_TITLE: &str = "Temperature Readings with Trend Line";

/// X-axis label.
pub const X_AXIS_LABEL: &str = "Time";

/// Y-axis label.
pub const Y_AXIS_LABEL: &str = "Temperature (°C)";

/// Legend name of the fitted overlay series.
pub const TREND_SERIES_NAME: &str = "Trend Line";

/// Annotation shown when the history holds fewer than two readings.
pub const NOT_ENOUGH_DATA_NOTE: &str = "Not enough data to calculate trends";

/// Annotation shown when every stored temperature is identical.
pub const INSUFFICIENT_VARIATION_NOTE: &str = "No trend line: Insufficient variation in data";

/// Fitted overlay: the line plus its value at every scatter row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TrendSeries {
    /// The fitted line.
    pub line: TrendLine,
    /// `line` evaluated at each row index, aligned with the scatter points.
    pub fitted: Vec<f64>,
}

/// Everything a renderer needs to draw the chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChartModel {
    /// Scatter points, one per reading, oldest first.
    pub scatter: Table,
    /// Fitted overlay, absent when no trend can be shown.
    pub trend: Option<TrendSeries>,
    /// Human-readable note shown in place of the line when `trend` is
    /// `None`.
    pub annotation: Option<&'static str>,
}

/// One consistent view of the dashboard, derived from a single snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DashboardFrame {
    /// Version of the history this frame was computed at.
    pub version: u64,
    /// Most recent reading, if any.
    pub latest: Option<Reading>,
    /// Tabular projection of the snapshot.
    pub table: Table,
    /// Chart input for the same snapshot.
    pub chart: ChartModel,
}

/// Owned pipeline state: settings, history, and the append counter.
///
/// Constructing one validates the settings; everything after that is
/// infallible. The struct is `Clone`, so a host can give each session its
/// own independent history.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: Config,
    history: HistoryBuffer,
    version: u64,
}

impl Dashboard {
    /// Builds a dashboard from validated settings.
    ///
    /// Fails fast on bad settings; see [`Config::validate`].
    pub fn new(config: Config) -> ConfigResult<Self> {
        config.validate()?;
        debug!(
            "dashboard starting: capacity {} readings, tick every {}s",
            config.deque_size, config.update_interval_secs
        );
        Ok(Self {
            config,
            history: HistoryBuffer::new(config.deque_size),
            version: 0,
        })
    }

    /// Dashboard with the stock settings: ten readings, three-second ticks.
    pub fn with_defaults() -> Self {
        let config = Config::default();
        Self {
            history: HistoryBuffer::new(config.deque_size),
            config,
            version: 0,
        }
    }

    /// The settings this dashboard runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of appends so far. Keys the frame cache.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of readings currently held.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// One timer tick: draw a sample and record it.
    ///
    /// Returns the recorded reading so drivers can log or display it
    /// without pulling a whole frame.
    pub fn tick<C: Clock>(&mut self, sampler: &mut Sampler<C>) -> Reading {
        let reading = sampler.sample();
        self.record(reading);
        reading
    }

    /// Records one reading: append (evicting the oldest when full) and bump
    /// the version.
    ///
    /// Public so hosts can feed non-random sources through the same
    /// pipeline.
    pub fn record(&mut self, reading: Reading) {
        self.history.append(reading);
        self.version += 1;
        debug!(
            "recorded {:.1} °C at {} (history {}/{}, version {})",
            reading.temperature_c,
            reading.timestamp,
            self.history.len(),
            self.history.capacity(),
            self.version
        );
    }

    /// Most recent reading, for the value box.
    pub fn latest_reading(&self) -> Option<Reading> {
        self.history.last().copied()
    }

    /// Current tabular projection.
    pub fn table(&self) -> Table {
        Table::project(&self.history.snapshot())
    }

    /// Current chart model.
    pub fn chart_model(&self) -> ChartModel {
        Self::chart_from(self.table())
    }

    /// Computes a full frame from one snapshot of the current state.
    ///
    /// All channels of the returned frame agree with each other; between
    /// appends they also agree with the single-channel accessors.
    pub fn frame(&self) -> DashboardFrame {
        trace!("computing frame at version {}", self.version);
        let snapshot = self.history.snapshot();
        let latest = snapshot.last().copied();
        let table = Table::project(&snapshot);
        let chart = Self::chart_from(table.clone());

        DashboardFrame {
            version: self.version,
            latest,
            table,
            chart,
        }
    }

    fn chart_from(scatter: Table) -> ChartModel {
        match trend::estimate(&scatter) {
            Some(line) => ChartModel {
                trend: Some(TrendSeries {
                    line,
                    fitted: line.overlay(scatter.len()),
                }),
                scatter,
                annotation: None,
            },
            None => {
                let annotation = if scatter.len() < 2 {
                    NOT_ENOUGH_DATA_NOTE
                } else {
                    INSUFFICIENT_VARIATION_NOTE
                };
                ChartModel {
                    scatter,
                    trend: None,
                    annotation: Some(annotation),
                }
            }
        }
    }
}

/// Explicit memoization of the last computed frame.
///
/// Keyed on the dashboard version: while the version is unchanged the
/// cached frame is returned as-is, and the first call after an append
/// recomputes. Dropping the cache simply loses the memoization.
#[derive(Debug, Clone, Default)]
pub struct FrameCache {
    cached: Option<DashboardFrame>,
}

impl FrameCache {
    /// Empty cache; the first call always computes.
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// The frame for the dashboard's current version, recomputing only if
    /// the version moved since the last call.
    pub fn frame(&mut self, dashboard: &Dashboard) -> &DashboardFrame {
        let version = dashboard.version();
        // Take first: returning a borrow from a guarded arm would pin
        // `cached` for the caller's lifetime.
        match self.cached.take() {
            Some(frame) if frame.version == version => self.cached.insert(frame),
            _ => {
                trace!("frame cache miss at version {}", version);
                self.cached.insert(dashboard.frame())
            }
        }
    }
}
