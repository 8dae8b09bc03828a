//! Synthetic temperature source
//!
//! There is no real sensor behind the dashboard; every tick draws a
//! synthetic reading instead. Samples are uniform over a fixed sub-zero
//! band and rounded to one decimal place, so the value box, the table, and
//! the chart all agree on what was "measured".

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::reading::Reading;
use crate::time::{Clock, WallClock};

/// Lower bound of the synthetic temperature band, inclusive (°C).
pub const TEMP_MIN_C: f64 = -20.0;

/// Upper bound of the synthetic temperature band, inclusive (°C).
pub const TEMP_MAX_C: f64 = -10.0;

/// Draws one synthetic [`Reading`] per call.
///
/// Owns its rng and its clock, so sampling never fails and never blocks.
/// The clock is generic to keep timestamps testable; production code uses
/// [`Sampler::new`] and never thinks about it.
#[derive(Debug, Clone)]
pub struct Sampler<C: Clock> {
    clock: C,
    rng: StdRng,
}

impl Sampler<WallClock> {
    /// Wall-clock sampler seeded from the operating system.
    pub fn new() -> Self {
        Self::with_clock(WallClock)
    }
}

impl Default for Sampler<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Sampler<C> {
    /// Sampler with a caller-supplied clock, seeded from the operating
    /// system.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sampler for tests and reproducible demos.
    pub fn seeded(clock: C, seed: u64) -> Self {
        Self {
            clock,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Mutable access to the clock, for advancing a
    /// [`FixedClock`](crate::time::FixedClock) between samples.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Draws the next reading: temperature uniform between [`TEMP_MIN_C`]
    /// and [`TEMP_MAX_C`] inclusive, rounded to one decimal place, stamped
    /// with the clock's current time.
    pub fn sample(&mut self) -> Reading {
        let raw: f64 = self.rng.random_range(TEMP_MIN_C..=TEMP_MAX_C);
        let temperature_c = (raw * 10.0).round() / 10.0;
        Reading::new(temperature_c, self.clock.now())
    }
}
