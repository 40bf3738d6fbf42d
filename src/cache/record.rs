//! Ticket Record Module
//!
//! Defines the locally cached form of an upstream ticket.

use serde::Serialize;

// == Ticket Record ==
/// One upstream ticket as stored in the cache and served to the dashboard.
///
/// Text fields are optional: a field the upstream omits is stored and
/// served as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketRecord {
    /// Upstream ticket id, unique within the store
    pub id: i64,
    /// Ticket subject line
    pub subject: Option<String>,
    /// Upstream status label
    pub status: Option<String>,
    /// Creation date exactly as the upstream formats it
    pub created_date: Option<String>,
    /// Upstream urgency name
    pub priority: Option<String>,
    /// SLA agreement name
    pub sla_agreement: Option<String>,
}

impl TicketRecord {
    // == Constructor ==
    /// Creates a record with only the id set.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            subject: None,
            status: None,
            created_date: None,
            priority: None,
            sla_agreement: None,
        }
    }

    /// Sets the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the status.
    #[cfg(test)]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the priority.
    #[cfg(test)]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_stored_field_names() {
        let record = TicketRecord {
            id: 1,
            subject: Some("A".to_string()),
            status: Some("Open".to_string()),
            created_date: Some("2024-01-01".to_string()),
            priority: Some("High".to_string()),
            sla_agreement: Some("OK".to_string()),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "subject": "A",
                "status": "Open",
                "created_date": "2024-01-01",
                "priority": "High",
                "sla_agreement": "OK"
            })
        );
    }

    #[test]
    fn test_missing_fields_serialize_as_null() {
        let json = serde_json::to_value(TicketRecord::new(7)).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json["subject"].is_null());
        assert!(json["sla_agreement"].is_null());
    }

    #[test]
    fn test_builders_set_only_their_field() {
        let record = TicketRecord::new(3).with_status("Open").with_priority("Low");

        assert_eq!(record.status.as_deref(), Some("Open"));
        assert_eq!(record.priority.as_deref(), Some("Low"));
        assert!(record.subject.is_none());
        assert!(record.created_date.is_none());
    }
}
