//! Response DTOs for the dashboard API
//!
//! Defines the structure of outgoing HTTP response bodies. Ticket listings are
//! served as [`crate::cache::TicketRecord`] directly.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{RefreshStats, TicketRecord};

/// Bucket for tickets whose status or priority is missing.
pub const UNDEFINED_BUCKET: &str = "Undefined";

/// Response body for the refresh status endpoint (GET /api/refresh-status)
#[derive(Debug, Clone, Serialize)]
pub struct RefreshStatusResponse {
    /// Refreshes that replaced the store
    pub successful_refreshes: u64,
    /// Refreshes that failed and left the store untouched
    pub failed_refreshes: u64,
    /// Refreshes skipped because one was already running
    pub skipped_refreshes: u64,
    /// Daily purges performed
    pub purges: u64,
    /// Tickets stored by the last successful refresh
    pub last_refresh_count: usize,
    /// Tickets currently cached
    pub cached_tickets: usize,
    /// Last successful refresh, RFC 3339
    pub last_refresh_at: Option<String>,
    /// Last failed refresh, RFC 3339
    pub last_failure_at: Option<String>,
    /// Message of the last failed refresh
    pub last_error: Option<String>,
    /// Last purge, RFC 3339
    pub last_purge_at: Option<String>,
}

impl RefreshStatusResponse {
    /// Creates a new RefreshStatusResponse from refresh statistics
    pub fn new(stats: RefreshStats, cached_tickets: usize) -> Self {
        Self {
            successful_refreshes: stats.successful_refreshes,
            failed_refreshes: stats.failed_refreshes,
            skipped_refreshes: stats.skipped_refreshes,
            purges: stats.purges,
            last_refresh_count: stats.last_refresh_count,
            cached_tickets,
            last_refresh_at: stats.last_refresh_at.as_ref().map(rfc3339),
            last_failure_at: stats.last_failure_at.as_ref().map(rfc3339),
            last_error: stats.last_error,
            last_purge_at: stats.last_purge_at.as_ref().map(rfc3339),
        }
    }
}

fn rfc3339(at: &DateTime<Utc>) -> String {
    at.to_rfc3339()
}

/// Response body for the dashboard summary endpoint (GET /api/dashboard-summary)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummaryResponse {
    /// Tickets currently cached
    pub total: usize,
    /// Ticket count per status
    pub by_status: BTreeMap<String, usize>,
    /// Ticket count per priority
    pub by_priority: BTreeMap<String, usize>,
}

impl DashboardSummaryResponse {
    /// Counts the given tickets by status and priority.
    pub fn from_records(records: &[TicketRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            *summary
                .by_status
                .entry(bucket(&record.status))
                .or_insert(0) += 1;
            *summary
                .by_priority
                .entry(bucket(&record.priority))
                .or_insert(0) += 1;
        }

        summary
    }
}

fn bucket(value: &Option<String>) -> String {
    value.as_deref().unwrap_or(UNDEFINED_BUCKET).to_string()
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
