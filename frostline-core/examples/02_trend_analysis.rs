//! Trend Analysis Example
//!
//! A deterministic tour of the trend estimator: a seeded sampler fills the
//! history while a fixed clock advances one tick period per sample, then
//! the two absent-trend states are shown with hand-fed readings.
//!
//! ## What You'll Learn
//!
//! - Seeding the sampler and fixing the clock for reproducible output
//! - Reading the fitted overlay out of the chart model
//! - The difference between "not enough data" and "insufficient variation"
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_trend_analysis
//! ```

use chrono::NaiveDate;

use frostline_core::{
    dashboard::{CHART_TITLE, TREND_SERIES_NAME, X_AXIS_LABEL, Y_AXIS_LABEL},
    Dashboard, FixedClock, FrameCache, Reading, Sampler, TIMESTAMP_FORMAT,
    UPDATE_INTERVAL_SECS,
};

fn main() {
    println!("Frostline Trend Analysis Example");
    println!("================================\n");

    let start = NaiveDate::from_ymd_opt(2025, 1, 15)
        .expect("valid date")
        .and_hms_opt(9, 30, 0)
        .expect("valid time");

    // Seeded rng + fixed clock: this output never changes between runs.
    let mut sampler = Sampler::seeded(FixedClock::new(start), 42);
    let mut dashboard = Dashboard::with_defaults();
    let mut cache = FrameCache::new();

    for _ in 0..dashboard.config().deque_size {
        dashboard.tick(&mut sampler);
        sampler.clock_mut().advance_secs(UPDATE_INTERVAL_SECS);
    }

    let frame = cache.frame(&dashboard);

    println!("{}", CHART_TITLE);
    println!("y: {}   x: {}\n", Y_AXIS_LABEL, X_AXIS_LABEL);

    match &frame.chart.trend {
        Some(series) => {
            println!(
                "{}: y = {:+.4}·x + {:.4}\n",
                TREND_SERIES_NAME, series.line.slope, series.line.intercept
            );
            println!("  row  timestamp            measured   fitted");
            println!("  ---  -------------------  ---------  ---------");
            for (i, row) in frame.table.rows().iter().enumerate() {
                println!(
                    "  {:>3}  {}  {:>6.1} °C  {:>6.2} °C",
                    i,
                    row.timestamp.format(TIMESTAMP_FORMAT),
                    row.temperature_c,
                    series.fitted[i]
                );
            }
        }
        None => {
            if let Some(note) = frame.chart.annotation {
                println!("{}", note);
            }
        }
    }

    // The two states a chart shows when no line can be fitted.
    println!("\nAbsent-trend states");
    println!("-------------------");

    let mut sparse = Dashboard::with_defaults();
    sparse.record(Reading::new(-15.0, start));
    if let Some(note) = sparse.chart_model().annotation {
        println!("  1 reading:      {}", note);
    }

    let mut flat = Dashboard::with_defaults();
    for i in 0..3i64 {
        flat.record(Reading::new(-15.0, start + chrono::Duration::seconds(3 * i)));
    }
    if let Some(note) = flat.chart_model().annotation {
        println!("  flat readings:  {}", note);
    }
}
