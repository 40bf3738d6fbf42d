//! Upstream ticket shape
//!
//! Only the fields the dashboard needs are decoded; anything else the
//! helpdesk sends is ignored.

use serde::Deserialize;

use crate::cache::TicketRecord;

/// A ticket as returned by the helpdesk listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamTicket {
    /// Ticket id; tickets without one are not cached
    #[serde(default)]
    pub id: Option<i64>,
    /// Ticket subject line
    #[serde(default)]
    pub subject: Option<String>,
    /// Status label
    #[serde(default)]
    pub status: Option<String>,
    /// Creation date as sent (`createdDate`)
    #[serde(default)]
    pub created_date: Option<String>,
    /// Urgency label (`urgencyName`), cached as the priority
    #[serde(default)]
    pub urgency_name: Option<String>,
    /// SLA agreement name (`slaAgreement`)
    #[serde(default)]
    pub sla_agreement: Option<String>,
}

impl UpstreamTicket {
    /// Converts into the cached form. Returns `None` when the ticket has no id.
    pub fn into_record(self) -> Option<TicketRecord> {
        Some(TicketRecord {
            id: self.id?,
            subject: self.subject,
            status: self.status,
            created_date: self.created_date,
            priority: self.urgency_name,
            sla_agreement: self.sla_agreement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_ticket() {
        let json = r#"{"id":1,"subject":"A","status":"Open","createdDate":"2024-01-01",
                       "urgencyName":"High","slaAgreement":"OK","ownerTeam":"Support"}"#;
        let ticket: UpstreamTicket = serde_json::from_str(json).unwrap();

        let record = ticket.into_record().unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.priority.as_deref(), Some("High"));
        assert_eq!(record.created_date.as_deref(), Some("2024-01-01"));
        assert_eq!(record.sla_agreement.as_deref(), Some("OK"));
    }

    #[test]
    fn test_missing_and_null_fields_become_none() {
        let ticket: UpstreamTicket =
            serde_json::from_str(r#"{"id":9,"subject":null}"#).unwrap();

        let record = ticket.into_record().unwrap();
        assert_eq!(record, TicketRecord::new(9));
    }

    #[test]
    fn test_ticket_without_id_is_dropped() {
        let ticket: UpstreamTicket = serde_json::from_str(r#"{"subject":"orphan"}"#).unwrap();
        assert!(ticket.into_record().is_none());
    }
}
