//! Ticket Store Module
//!
//! Holds the most recent successful refresh, keyed by ticket id.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::TicketRecord;
use crate::error::{CacheError, Result};

/// Store handle shared between the scheduler tasks and the HTTP handlers.
pub type SharedStore = Arc<RwLock<TicketStore>>;

// == Ticket Store ==
/// Ticket table with full-replace writes.
///
/// Every mutation swaps or empties the whole table, so a caller holding the
/// lock never sees a mix of two refreshes.
#[derive(Debug)]
pub struct TicketStore {
    /// Records keyed by ticket id
    records: BTreeMap<i64, TicketRecord>,
    /// Maximum number of records a replace may install
    max_records: usize,
}

impl TicketStore {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `max_records` - Upper bound on the size of a single replace
    pub fn new(max_records: usize) -> Self {
        Self {
            records: BTreeMap::new(),
            max_records,
        }
    }

    /// Wraps the store for sharing across tasks.
    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    // == Replace All ==
    /// Discards every stored record and installs `records` in their place.
    ///
    /// The new table is built before anything is discarded. On error the
    /// previous content is left untouched. When an id repeats, the first
    /// occurrence is kept.
    ///
    /// Returns the number of records now stored.
    pub fn replace_all(&mut self, records: Vec<TicketRecord>) -> Result<usize> {
        let mut table = BTreeMap::new();

        for record in records {
            if let Entry::Vacant(slot) = table.entry(record.id) {
                slot.insert(record);
            }
        }

        if table.len() > self.max_records {
            return Err(CacheError::StoreUnavailable(format!(
                "refresh holds {} tickets, store capacity is {}",
                table.len(),
                self.max_records
            )));
        }

        self.records = table;
        Ok(self.records.len())
    }

    // == Read All ==
    /// Returns a snapshot of every stored record, ordered by id.
    pub fn read_all(&self) -> Vec<TicketRecord> {
        self.records.values().cloned().collect()
    }

    // == Clear ==
    /// Removes all records.
    ///
    /// Returns the number of records removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
