//! Bounded average-temperature history.
//!
//! A small in-memory record of `(timestamp, average_temp)` samples backing
//! the status API's history view.  Oldest entries are dropped once the
//! configured cap is reached; the buffer is process-lifetime only and is
//! not part of the persisted snapshot.

/// One history sample: unix seconds and the average temperature (°F).
pub type HistoryEntry = (u64, f64);

pub struct TemperatureHistory {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl TemperatureHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Append a sample, dropping the oldest entries beyond the cap.
    pub fn push(&mut self, now: u64, average_temp: f64) {
        self.entries.push((now, average_temp));
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
