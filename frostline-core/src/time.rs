//! Clock abstraction and tick scheduling
//!
//! ## Overview
//!
//! Two separate time concerns live here:
//!
//! - **What time is it?** The [`Clock`] trait stamps new readings with
//!   wall-clock time. Production code uses [`WallClock`]; tests use
//!   [`FixedClock`] so timestamps stay deterministic.
//! - **When does the next tick run?** [`TickTimer`] owns the sampling
//!   cadence. Each tick schedules the following one from its own start
//!   time, so the period measures tick start to tick start and slow ticks
//!   shift the schedule instead of queueing missed deadlines.
//!
//! The timer is pull-based: [`TickTimer::wait`] blocks the calling loop
//! until the next deadline, and [`TickTimer::deadline`] exposes that
//! instant for hosts that multiplex their own event loop.

use std::thread;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};

/// Source of wall-clock timestamps for new readings.
///
/// Implementations must be cheap; the sampler calls this once per tick.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local time.
///
/// Local rather than UTC because the timestamps are shown to a person
/// sitting at the dashboard, not correlated across machines.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually controlled clock for tests and replay.
///
/// Starts at a caller-chosen instant and only moves when told to.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock frozen at `start`.
    pub fn new(start: NaiveDateTime) -> Self {
        Self { now: start }
    }

    /// Jumps to an absolute time.
    pub fn set(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    /// Moves forward by `secs` seconds.
    pub fn advance_secs(&mut self, secs: u64) {
        self.now = self.now + chrono::Duration::seconds(secs as i64);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

/// Self-rescheduling periodic timer for the sampling loop.
///
/// The first [`wait`](TickTimer::wait) returns immediately; after that each
/// wait sleeps until one period past the previous tick's start. There is no
/// background thread and no queue of missed deadlines.
#[derive(Debug, Clone)]
pub struct TickTimer {
    period: Duration,
    next_deadline: Instant,
}

impl TickTimer {
    /// Creates a timer firing every `period`, with the first fire due
    /// immediately.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_deadline: Instant::now(),
        }
    }

    /// The tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// The instant the next tick is due.
    ///
    /// Hosts running their own event loop can poll this instead of calling
    /// [`wait`](TickTimer::wait).
    pub fn deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Blocks until the next tick is due, then schedules the one after.
    ///
    /// Returns the instant this tick started; the next deadline is exactly
    /// that instant plus the period.
    pub fn wait(&mut self) -> Instant {
        let now = Instant::now();
        if let Some(remaining) = self.next_deadline.checked_duration_since(now) {
            thread::sleep(remaining);
        }

        let started = Instant::now();
        self.next_deadline = started + self.period;
        started
    }
}
