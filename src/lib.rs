//! Helpdesk Cache - Scheduled ticket cache for a dashboard
//!
//! Pulls tickets from a helpdesk API on a fixed interval, keeps the latest
//! listing in a local store, serves it over HTTP and purges it once a day.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::{spawn_scheduler, Fetcher, Purger, SchedulerSettings};
pub use upstream::TicketClient;
