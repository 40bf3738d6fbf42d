//! Daily Purge
//!
//! Empties the ticket store.

use tracing::info;

use crate::cache::{SharedStats, SharedStore};
use crate::error::Result;

/// Clears the ticket store.
#[derive(Clone)]
pub struct Purger {
    store: SharedStore,
    stats: SharedStats,
}

impl Purger {
    /// Creates a purger for `store`.
    pub fn new(store: SharedStore, stats: SharedStats) -> Self {
        Self { store, stats }
    }

    /// Removes every cached ticket.
    ///
    /// Returns the number of tickets removed.
    pub async fn run(&self) -> Result<usize> {
        info!("Purging cached tickets");

        let removed = {
            let mut store = self.store.write().await;
            store.clear()
        };

        self.stats.write().await.record_purge();
        info!("Purge removed {} tickets", removed);

        Ok(removed)
    }
}
