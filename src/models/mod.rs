//! Response models for the dashboard API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing HTTP response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    DashboardSummaryResponse, ErrorResponse, HealthResponse, RefreshStatusResponse,
};
