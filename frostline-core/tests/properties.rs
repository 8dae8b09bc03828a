//! Property tests for the history, projection, and trend invariants

mod common;

use proptest::prelude::*;

use frostline_core::{
    estimate, FixedClock, HistoryBuffer, Sampler, Table, TEMP_MAX_C, TEMP_MIN_C,
};

use common::{base_time, reading, table_of};

proptest! {
    /// However many readings are appended, the buffer never exceeds its
    /// capacity and retains exactly the newest ones, in append order.
    #[test]
    fn history_retains_the_newest_readings(
        temps in prop::collection::vec(-40.0f64..40.0, 0..40),
        capacity in 1usize..16,
    ) {
        let mut buffer = HistoryBuffer::new(capacity);
        for (i, &t) in temps.iter().enumerate() {
            buffer.append(reading(t, i as u64));
        }

        prop_assert_eq!(buffer.len(), temps.len().min(capacity));

        let expected: Vec<f64> = temps
            .iter()
            .copied()
            .skip(temps.len().saturating_sub(capacity))
            .collect();
        let actual: Vec<f64> = buffer.snapshot().iter().map(|r| r.temperature_c).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Projection is deterministic and preserves snapshot order.
    #[test]
    fn projection_is_pure(
        temps in prop::collection::vec(-40.0f64..40.0, 0..40),
    ) {
        let snapshot: Vec<_> = temps
            .iter()
            .enumerate()
            .map(|(i, &t)| reading(t, i as u64))
            .collect();

        let table = Table::project(&snapshot);
        prop_assert_eq!(table.len(), snapshot.len());
        for (row, original) in table.rows().iter().zip(&snapshot) {
            prop_assert_eq!(row.temperature_c, original.temperature_c);
            prop_assert_eq!(row.timestamp, original.timestamp);
        }

        prop_assert_eq!(table, Table::project(&snapshot));
    }

    /// A least-squares fit leaves residuals that sum to zero.
    #[test]
    fn fitted_residuals_sum_to_zero(
        temps in prop::collection::vec(-40.0f64..40.0, 2..30),
    ) {
        let table = table_of(&temps);
        if let Some(line) = estimate(&table) {
            let residual_sum: f64 = table
                .temperatures()
                .enumerate()
                .map(|(i, y)| y - line.fitted_at(i))
                .sum();
            prop_assert!(residual_sum.abs() < 1e-6, "residual sum {}", residual_sum);
        }
    }

    /// The estimator declines exactly the under-determined tables.
    #[test]
    fn flat_tables_never_fit(value in -40.0f64..40.0, rows in 2usize..20) {
        let temps = vec![value; rows];
        prop_assert!(estimate(&table_of(&temps)).is_none());
    }
}

/// Every sample over a long run stays inside the configured band and on the
/// one-decimal grid.
#[test]
fn test_sample_range_bound_over_ten_thousand_draws() {
    let mut sampler = Sampler::seeded(FixedClock::new(base_time()), 99);

    for _ in 0..10_000 {
        let sample = sampler.sample();
        let t = sample.temperature_c;
        assert!(
            (TEMP_MIN_C..=TEMP_MAX_C).contains(&t),
            "{} outside [{}, {}]",
            t,
            TEMP_MIN_C,
            TEMP_MAX_C
        );

        let tenths = t * 10.0;
        assert!(
            (tenths - tenths.round()).abs() < 1e-9,
            "{} is not rounded to one decimal",
            t
        );
    }
}
