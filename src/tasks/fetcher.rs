//! Ticket Refresh
//!
//! Pulls the ticket listing from the helpdesk and replaces the store with it.

use tracing::{error, info, warn};

use crate::cache::{SharedStats, SharedStore, TicketRecord};
use crate::error::Result;
use crate::upstream::TicketClient;

/// Runs one refresh cycle against the upstream API.
#[derive(Clone)]
pub struct Fetcher {
    client: TicketClient,
    store: SharedStore,
    stats: SharedStats,
}

impl Fetcher {
    /// Creates a fetcher writing into `store` and reporting into `stats`.
    pub fn new(client: TicketClient, store: SharedStore, stats: SharedStats) -> Self {
        Self {
            client,
            store,
            stats,
        }
    }

    /// Fetches the listing and replaces the whole store with it.
    ///
    /// On any error the store keeps its previous content and the failure is
    /// logged and recorded; the caller decides nothing further.
    ///
    /// Returns the number of tickets stored.
    pub async fn run(&self) -> Result<usize> {
        info!("Fetching tickets from {}", self.client.api_url());

        match self.refresh().await {
            Ok(stored) => {
                self.stats.write().await.record_success(stored);
                info!("Ticket refresh stored {} tickets", stored);
                Ok(stored)
            }
            Err(e) => {
                self.stats.write().await.record_failure(e.to_string());
                error!("Ticket refresh skipped: {}", e);
                Err(e)
            }
        }
    }

    async fn refresh(&self) -> Result<usize> {
        // Network round-trip happens before the store lock is taken
        let tickets = self.client.fetch_tickets().await?;
        let received = tickets.len();

        let records: Vec<TicketRecord> = tickets
            .into_iter()
            .filter_map(|ticket| ticket.into_record())
            .collect();

        let dropped = received - records.len();
        if dropped > 0 {
            warn!("Dropped {} tickets without an id", dropped);
        }

        let mut store = self.store.write().await;
        store.replace_all(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{RefreshStats, TicketStore};
    use crate::error::CacheError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_tickets() {
        let store = TicketStore::new(10).shared();
        let stats = RefreshStats::new().shared();
        store
            .write()
            .await
            .replace_all(vec![TicketRecord::new(1).with_subject("cached")])
            .unwrap();

        let client =
            TicketClient::new("http://127.0.0.1:9/tickets", "t", Duration::from_secs(2)).unwrap();
        let fetcher = Fetcher::new(client, store.clone(), stats.clone());

        let error = tokio_test::assert_err!(fetcher.run().await);

        assert!(matches!(error, CacheError::UpstreamUnavailable(_)));
        let records = store.read().await.read_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject.as_deref(), Some("cached"));

        let stats = stats.read().await;
        assert_eq!(stats.failed_refreshes, 1);
        assert!(stats.last_error.is_some());
    }
}
