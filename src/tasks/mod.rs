//! Background Tasks Module
//!
//! Contains the jobs that run during server operation and the loop that drives them.
//!
//! # Tasks
//! - Refresh: replaces the ticket store with the upstream listing at a fixed interval
//! - Purge: empties the ticket store once a day at a fixed local time

mod fetcher;
mod purger;
mod schedule;
mod scheduler;

pub use fetcher::Fetcher;
pub use purger::Purger;
pub use schedule::Schedule;
pub use scheduler::{spawn_scheduler, SchedulerSettings};
