//! Live Dashboard Example
//!
//! Drives the whole pipeline in real time: a wall-clock sampler ticks on a
//! timer, each tick records one reading, and a frame is pulled after every
//! tick the way a renderer would.
//!
//! ## What You'll Learn
//!
//! - Building a `Dashboard` from settings
//! - Driving ticks with the self-rescheduling `TickTimer`
//! - Pulling consistent frames through a `FrameCache`
//! - How the chart annotation flips to a fitted trend once the history
//!   has enough variation
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_live_dashboard
//! ```
//!
//! The tick period is shortened to one second so the demo finishes in about
//! twelve; the stock settings tick every three.

use frostline_core::{Config, Dashboard, FrameCache, Sampler, TickTimer, TIMESTAMP_FORMAT};

fn main() {
    println!("Frostline Live Dashboard Example");
    println!("================================\n");

    let config = Config {
        deque_size: 10,
        update_interval_secs: 1,
    };
    let mut dashboard = Dashboard::new(config).expect("demo settings are valid");
    let mut sampler = Sampler::new();
    let mut cache = FrameCache::new();
    let mut timer = TickTimer::new(config.update_interval());

    println!(
        "Sampling every {}s into a {}-slot history...\n",
        config.update_interval_secs, config.deque_size
    );

    for _ in 0..12 {
        timer.wait();
        let reading = dashboard.tick(&mut sampler);
        let frame = cache.frame(&dashboard);

        println!(
            "[v{:02}] {} at {}  ({} readings)",
            frame.version,
            reading.temperature_display(),
            reading.timestamp_display(),
            frame.table.len()
        );

        match &frame.chart.trend {
            Some(series) => println!(
                "      trend: {:+.3} °C/sample, intercept {:.1} °C",
                series.line.slope, series.line.intercept
            ),
            None => {
                if let Some(note) = frame.chart.annotation {
                    println!("      {}", note);
                }
            }
        }
    }

    println!("\nFinal table (oldest first):");
    println!("---------------------------");
    let frame = cache.frame(&dashboard);
    for row in frame.table.rows() {
        println!(
            "  {}  {:>6.1} °C",
            row.timestamp.format(TIMESTAMP_FORMAT),
            row.temperature_c
        );
    }
}
