//! Refresh Statistics Module
//!
//! Tracks the outcome of scheduled refreshes and purges.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

/// Statistics handle shared between the scheduler tasks and the HTTP handlers.
pub type SharedStats = Arc<RwLock<RefreshStats>>;

// == Refresh Stats ==
/// Counters and timestamps describing the refresh lifecycle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RefreshStats {
    /// Refreshes that replaced the store
    pub successful_refreshes: u64,
    /// Refreshes that left the store untouched because of an error
    pub failed_refreshes: u64,
    /// Refreshes skipped because the previous one was still running
    pub skipped_refreshes: u64,
    /// Daily purges performed
    pub purges: u64,
    /// Tickets stored by the last successful refresh
    pub last_refresh_count: usize,
    /// Completion time of the last successful refresh
    pub last_refresh_at: Option<DateTime<Utc>>,
    /// Time of the last failed refresh
    pub last_failure_at: Option<DateTime<Utc>>,
    /// Message of the last failed refresh
    pub last_error: Option<String>,
    /// Time of the last purge
    pub last_purge_at: Option<DateTime<Utc>>,
}

impl RefreshStats {
    // == Constructor ==
    /// Creates a new RefreshStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the stats for sharing across tasks.
    pub fn shared(self) -> SharedStats {
        Arc::new(RwLock::new(self))
    }

    // == Record Success ==
    /// Records a refresh that stored `count` tickets.
    pub fn record_success(&mut self, count: usize) {
        self.successful_refreshes += 1;
        self.last_refresh_count = count;
        self.last_refresh_at = Some(Utc::now());
    }

    // == Record Failure ==
    /// Records a refresh that failed with `error`.
    pub fn record_failure(&mut self, error: impl Into<String>) {
        self.failed_refreshes += 1;
        self.last_failure_at = Some(Utc::now());
        self.last_error = Some(error.into());
    }

    // == Record Skip ==
    /// Records a refresh skipped because another was in flight.
    pub fn record_skip(&mut self) {
        self.skipped_refreshes += 1;
    }

    // == Record Purge ==
    /// Records a completed purge.
    pub fn record_purge(&mut self) {
        self.purges += 1;
        self.last_purge_at = Some(Utc::now());
    }
}
