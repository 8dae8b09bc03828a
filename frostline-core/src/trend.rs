//! Least-squares trend fitting over the table
//!
//! The chart overlays a straight line fitted to temperature against row
//! position: the oldest reading is x = 0, the next x = 1, and so on. Row
//! index is the x-axis rather than the timestamp because samples arrive on
//! a fixed period, which makes the two equivalent up to scale.
//!
//! The fit is the textbook closed form. With x̄ and ȳ the column means:
//!
//! ```text
//! slope     = Σ((xᵢ - x̄)(yᵢ - ȳ)) / Σ((xᵢ - x̄)²)
//! intercept = ȳ - slope·x̄
//! ```
//!
//! A fit needs at least two rows (one point determines no slope) and at
//! least two distinct temperatures (a flat column has no trend worth
//! drawing). Both shortfalls are normal displayable states, not errors; the
//! chart model turns them into annotations.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::table::Table;

/// Fitted regression line for the trend overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TrendLine {
    /// Temperature change per row step (°C per sample).
    pub slope: f64,
    /// Fitted temperature at row 0 (°C).
    pub intercept: f64,
}

impl TrendLine {
    /// Fitted value at a row index.
    pub fn fitted_at(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }

    /// Fitted values for `rows` consecutive indices starting at 0, aligned
    /// with the scatter points they overlay.
    pub fn overlay(&self, rows: usize) -> Vec<f64> {
        (0..rows).map(|i| self.fitted_at(i)).collect()
    }
}

/// Fits temperature against row index, if the table supports a fit.
///
/// Returns `None` for fewer than two rows or fewer than two distinct
/// temperature values. The denominator is otherwise guaranteed nonzero, so
/// the arithmetic needs no NaN or infinity handling.
pub fn estimate(table: &Table) -> Option<TrendLine> {
    if table.len() < 2 {
        return None;
    }

    // Temperatures are rounded to one decimal, so exact equality is the
    // right distinctness test.
    let mut temps = table.temperatures();
    let first = temps.next()?;
    if temps.all(|t| t == first) {
        return None;
    }

    let n = table.len() as f64;
    let x_mean = (n - 1.0) / 2.0; // mean of 0..len-1
    let y_mean = table.temperatures().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, y) in table.temperatures().enumerate() {
        let dx = i as f64 - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    let slope = numerator / denominator;
    Some(TrendLine {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Reading;
    use chrono::NaiveDate;

    fn table_of(temps: &[f64]) -> Table {
        let base = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let readings: Vec<Reading> = temps
            .iter()
            .enumerate()
            .map(|(i, &t)| Reading::new(t, base + chrono::Duration::seconds(3 * i as i64)))
            .collect();
        Table::project(&readings)
    }

    #[test]
    fn empty_table_has_no_trend() {
        assert_eq!(estimate(&table_of(&[])), None);
    }

    #[test]
    fn single_row_has_no_trend() {
        assert_eq!(estimate(&table_of(&[-15.0])), None);
    }

    #[test]
    fn identical_temperatures_have_no_trend() {
        assert_eq!(estimate(&table_of(&[-15.0, -15.0, -15.0])), None);
    }

    #[test]
    fn two_point_fit_passes_through_both_points() {
        let line = estimate(&table_of(&[-20.0, -10.0])).unwrap();
        assert_eq!(line.slope, 10.0);
        assert_eq!(line.intercept, -20.0);
        assert_eq!(line.fitted_at(0), -20.0);
        assert_eq!(line.fitted_at(1), -10.0);
    }

    #[test]
    fn closed_form_matches_hand_computation() {
        // x = [0, 1, 2], y = [5, 5, 7]: x̄ = 1, ȳ = 17/3,
        // slope = 2/2 = 1, intercept = 17/3 - 1 = 14/3
        let line = estimate(&table_of(&[5.0, 5.0, 7.0])).unwrap();
        assert!((line.slope - 1.0).abs() < 1e-9);
        assert!((line.intercept - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn overlay_aligns_with_row_indices() {
        let line = estimate(&table_of(&[-18.0, -14.0, -13.0, -11.0])).unwrap();
        let overlay = line.overlay(4);

        assert_eq!(overlay.len(), 4);
        for (i, fitted) in overlay.iter().enumerate() {
            assert_eq!(*fitted, line.fitted_at(i));
        }
    }

    #[test]
    fn residuals_sum_to_zero() {
        let table = table_of(&[-19.2, -12.4, -15.0, -10.8, -17.3]);
        let line = estimate(&table).unwrap();

        let residual_sum: f64 = table
            .temperatures()
            .enumerate()
            .map(|(i, y)| y - line.fitted_at(i))
            .sum();
        assert!(residual_sum.abs() < 1e-9);
    }

    #[test]
    fn downward_trend_has_negative_slope() {
        let line = estimate(&table_of(&[-10.0, -12.0, -14.0, -16.0])).unwrap();
        assert!((line.slope - (-2.0)).abs() < 1e-9);
        assert!((line.intercept - (-10.0)).abs() < 1e-9);
    }
}
