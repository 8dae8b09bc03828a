//! Tabular projection of a history snapshot
//!
//! The data panel of the dashboard shows raw readings; the chart wants the
//! same rows as typed columns. [`Table::project`] is the one projection
//! both go through: a pure rebuild from a snapshot, one row per reading,
//! insertion order preserved. A table is never mutated after it is built.

use chrono::NaiveDateTime;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::reading::Reading;

/// One display row: a reading flattened into columns.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TableRow {
    /// Temperature column (°C).
    pub temperature_c: f64,
    /// Timestamp column, kept as a temporal type so consumers can sort and
    /// scale axes without re-parsing display strings.
    pub timestamp: NaiveDateTime,
}

impl From<Reading> for TableRow {
    fn from(reading: Reading) -> Self {
        Self {
            temperature_c: reading.temperature_c,
            timestamp: reading.timestamp,
        }
    }
}

/// Ordered, read-only projection of one history snapshot.
///
/// Two projections of the same snapshot are equal; consumers compare tables
/// rather than tracking dirty flags themselves.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Table {
    rows: Vec<TableRow>,
}

impl Table {
    /// Builds the projection. An empty snapshot yields an empty table,
    /// never an error.
    pub fn project(snapshot: &[Reading]) -> Self {
        Self {
            rows: snapshot.iter().copied().map(TableRow::from).collect(),
        }
    }

    /// All rows, oldest first.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Temperature column, oldest first.
    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.temperature_c)
    }

    /// Timestamp column, oldest first.
    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.rows.iter().map(|row| row.timestamp)
    }
}
