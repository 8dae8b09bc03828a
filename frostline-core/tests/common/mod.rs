//! Common helpers for integration tests
//!
//! Readings in these tests use a fixed base instant so assertions can name
//! exact timestamps instead of comparing against the host clock.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};

use frostline_core::{Reading, Table};

/// Base instant for generated timestamps.
pub fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

/// `secs` seconds past the base instant.
pub fn at(secs: u64) -> NaiveDateTime {
    base_time() + Duration::seconds(secs as i64)
}

/// Reading with the given temperature, `secs` past the base instant.
pub fn reading(temperature_c: f64, secs: u64) -> Reading {
    Reading::new(temperature_c, at(secs))
}

/// Table over the given temperatures, one reading every three seconds.
pub fn table_of(temps: &[f64]) -> Table {
    let readings: Vec<Reading> = temps
        .iter()
        .enumerate()
        .map(|(i, &t)| reading(t, (i as u64) * 3))
        .collect();
    Table::project(&readings)
}
