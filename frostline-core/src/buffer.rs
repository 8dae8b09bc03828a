//! Bounded FIFO history of temperature readings
//!
//! ## Overview
//!
//! The dashboard only ever shows the most recent readings, so history
//! storage is a fixed-capacity ring: appending to a full buffer evicts the
//! oldest entry. Capacity is chosen once at startup (see
//! [`Config`](crate::Config)) and never changes afterwards.
//!
//! ## Design
//!
//! The ring keeps `Option<Reading>` slots in one boxed slice plus a write
//! position and a length:
//!
//! - `append()` is O(1): write the slot, advance the position modulo the
//!   capacity, saturate the length.
//! - `last()` is O(1): the slot just behind the write position.
//! - `iter()` walks oldest to newest by mapping logical indices onto
//!   physical slots.
//!
//! Capacity is a runtime value rather than a const generic because it is an
//! operator setting validated at startup, not a compile-time constant.
//!
//! Once the ring has wrapped, the physical layout no longer matches the
//! logical order:
//!
//! ```text
//! Physical slots:  [D, E, A, B, C]   (write_pos = 2)
//! Logical order:   [A, B, C, D, E]   (oldest to newest)
//!
//! logical[i] = physical[(write_pos + i) % capacity]
//! ```
//!
//! ## Thread safety
//!
//! Not thread-safe on its own. The single-loop tick model needs no locking;
//! hosts that share one history across sessions should wrap the owning
//! [`Dashboard`](crate::Dashboard) in a mutex.

use crate::reading::Reading;

/// Fixed-capacity FIFO ring of [`Reading`]s.
///
/// Appending to a full buffer silently evicts the oldest reading; recent
/// data is the only data the dashboard shows.
///
/// ## Invariants
///
/// - `write_pos < capacity`
/// - `len <= capacity`
/// - `iter()` yields readings in append order
///
/// Capacity must be at least 1;
/// [`Config::validate`](crate::Config::validate) enforces this before any
/// buffer is built.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    /// Slot storage; `None` marks a slot never written.
    slots: Box<[Option<Reading>]>,
    /// Index of the next write, wraps at capacity.
    write_pos: usize,
    /// Number of readings currently held, saturates at capacity.
    len: usize,
}

impl HistoryBuffer {
    /// Creates an empty buffer holding at most `capacity` readings.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "history capacity must be at least 1");
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            write_pos: 0,
            len: 0,
        }
    }

    /// Appends a reading, evicting the oldest when the buffer is full.
    pub fn append(&mut self, reading: Reading) {
        self.slots[self.write_pos] = Some(reading);
        self.write_pos = (self.write_pos + 1) % self.slots.len();

        if self.len < self.slots.len() {
            self.len += 1;
        }
    }

    /// Maximum number of readings the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of readings currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no readings.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next append will evict.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// The most recently appended reading.
    pub fn last(&self) -> Option<&Reading> {
        if self.is_empty() {
            return None;
        }

        // Most recent sits one slot behind the write position
        let idx = if self.write_pos == 0 {
            self.slots.len() - 1
        } else {
            self.write_pos - 1
        };

        self.slots[idx].as_ref()
    }

    /// Iterates over readings from oldest to newest.
    pub fn iter(&self) -> HistoryIter<'_> {
        HistoryIter {
            buffer: self,
            index: 0,
        }
    }

    /// Copies the current contents in append order.
    ///
    /// This is the read side of the pipeline: projections and trend fits
    /// work on a snapshot, never on the live ring.
    pub fn snapshot(&self) -> Vec<Reading> {
        self.iter().copied().collect()
    }

    /// Drops all readings, keeping the capacity.
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }

    /// Reading at a logical index (0 = oldest, `len - 1` = newest).
    ///
    /// Until the buffer wraps, logical and physical indices coincide; after
    /// that the oldest reading sits at `write_pos` and the index is offset
    /// from there.
    fn get(&self, index: usize) -> Option<&Reading> {
        if index >= self.len {
            return None;
        }

        let physical = if self.len < self.slots.len() {
            index
        } else {
            (self.write_pos + index) % self.slots.len()
        };

        self.slots[physical].as_ref()
    }
}

/// Iterator over buffer contents, oldest first.
pub struct HistoryIter<'a> {
    buffer: &'a HistoryBuffer,
    index: usize,
}

impl<'a> Iterator for HistoryIter<'a> {
    type Item = &'a Reading;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(secs: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
            + chrono::Duration::seconds(i64::from(secs))
    }

    fn reading(temperature_c: f64, secs: u32) -> Reading {
        Reading::new(temperature_c, at(secs))
    }

    #[test]
    fn empty_buffer() {
        let buffer = HistoryBuffer::new(5);
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 5);
        assert!(buffer.last().is_none());
        assert!(buffer.snapshot().is_empty());
    }

    #[test]
    fn append_and_retrieve() {
        let mut buffer = HistoryBuffer::new(5);

        buffer.append(reading(-15.0, 0));
        assert_eq!(buffer.len(), 1);
        assert!(!buffer.is_empty());

        let last = buffer.last().unwrap();
        assert_eq!(last.temperature_c, -15.0);
        assert_eq!(last.timestamp, at(0));
    }

    #[test]
    fn fifo_eviction() {
        let mut buffer = HistoryBuffer::new(3);

        for i in 0..5 {
            buffer.append(reading(f64::from(i), i as u32));
        }

        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());

        // Oldest two were evicted
        let temps: Vec<f64> = buffer.iter().map(|r| r.temperature_c).collect();
        assert_eq!(temps, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn iterator_order_matches_append_order() {
        let mut buffer = HistoryBuffer::new(4);

        for i in 0..4 {
            buffer.append(reading(-11.0, i));
        }

        let stamps: Vec<NaiveDateTime> = buffer.iter().map(|r| r.timestamp).collect();
        assert_eq!(stamps, vec![at(0), at(1), at(2), at(3)]);
    }

    #[test]
    fn last_tracks_wraparound() {
        let mut buffer = HistoryBuffer::new(2);

        buffer.append(reading(-10.0, 0));
        buffer.append(reading(-11.0, 1));
        buffer.append(reading(-12.0, 2));

        assert_eq!(buffer.last().unwrap().temperature_c, -12.0);
    }

    #[test]
    fn snapshot_copies_in_order() {
        let mut buffer = HistoryBuffer::new(3);
        for i in 0..4 {
            buffer.append(reading(f64::from(i), i as u32));
        }

        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].temperature_c, 1.0);
        assert_eq!(snapshot[2].temperature_c, 3.0);

        // Snapshot is a copy, not a view
        buffer.append(reading(9.0, 9));
        assert_eq!(snapshot[0].temperature_c, 1.0);
    }

    #[test]
    fn capacity_one_keeps_newest() {
        let mut buffer = HistoryBuffer::new(1);
        for i in 0..3 {
            buffer.append(reading(f64::from(i), i as u32));
        }

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.last().unwrap().temperature_c, 2.0);
    }

    #[test]
    fn clear_empties_without_shrinking() {
        let mut buffer = HistoryBuffer::new(3);
        buffer.append(reading(-15.0, 0));
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 3);
        assert!(buffer.last().is_none());

        buffer.append(reading(-12.0, 5));
        assert_eq!(buffer.snapshot().len(), 1);
    }
}
