//! Cache Module
//!
//! Local ticket table refreshed from the helpdesk API, plus refresh statistics.

mod record;
mod stats;
mod store;


// Re-export public types
pub use record::TicketRecord;
pub use stats::{RefreshStats, SharedStats};
pub use store::{SharedStore, TicketStore};
