//! API Module
//!
//! HTTP handlers and routing for the dashboard REST API.
//!
//! # Endpoints
//! - `GET /api/dashboard-data` - Cached tickets as a JSON array
//! - `GET /api/dashboard-summary` - Ticket counts by status and priority
//! - `GET /api/refresh-status` - Refresh and purge statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
