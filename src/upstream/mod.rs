//! Upstream Module
//!
//! HTTP client and wire types for the helpdesk ticket API.

mod client;
mod ticket;

pub use client::TicketClient;
pub use ticket::UpstreamTicket;
