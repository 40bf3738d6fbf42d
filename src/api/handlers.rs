//! API Handlers
//!
//! HTTP request handlers for each dashboard endpoint.

use axum::{extract::State, Json};

use crate::cache::{RefreshStats, SharedStats, SharedStore, TicketRecord, TicketStore};
use crate::config::Config;
use crate::error::Result;
use crate::models::{DashboardSummaryResponse, HealthResponse, RefreshStatusResponse};

/// Application state shared across all handlers and background tasks.
///
/// Built once at startup; the ticket store and refresh statistics are each
/// wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe ticket store
    pub store: SharedStore,
    /// Refresh and purge statistics
    pub stats: SharedStats,
}

impl AppState {
    /// Creates a new AppState with the given ticket store.
    pub fn new(store: TicketStore) -> Self {
        Self {
            store: store.shared(),
            stats: RefreshStats::new().shared(),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(TicketStore::new(config.max_tickets))
    }
}

/// Handler for GET /api/dashboard-data
///
/// Returns every cached ticket as a JSON array. Never mutates state.
pub async fn dashboard_data_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TicketRecord>>> {
    let store = state.store.read().await;
    Ok(Json(store.read_all()))
}

/// Handler for GET /api/dashboard-summary
///
/// Counts the cached tickets by status and by priority. Never mutates state.
pub async fn dashboard_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummaryResponse>> {
    let store = state.store.read().await;
    Ok(Json(DashboardSummaryResponse::from_records(&store.read_all())))
}

/// Handler for GET /api/refresh-status
///
/// Reports refresh and purge outcomes along with the cached ticket count.
pub async fn refresh_status_handler(State(state): State<AppState>) -> Json<RefreshStatusResponse> {
    let cached_tickets = state.store.read().await.len();
    let stats = state.stats.read().await.clone();

    Json(RefreshStatusResponse::new(stats, cached_tickets))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
