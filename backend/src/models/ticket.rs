//! Ticket records and the normalized table built from them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::time::CalendarFields;

/// A support ticket as submitted by the caller.
///
/// `created_at` stays a string here; it is parsed by the normalizer so that a
/// bad timestamp can be reported with the record it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(default)]
    pub id: Option<i64>,
    pub status: String,
    pub priority: String,
    pub created_at: String,
    #[serde(default)]
    pub subject: Option<String>,
}

impl Ticket {
    pub fn new(
        id: i64,
        status: impl Into<String>,
        priority: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            status: status.into(),
            priority: priority.into(),
            created_at: created_at.into(),
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

/// Demonstration tickets served by the sample-data endpoint.
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(1, "open", "high", "2024-03-15T10:00:00Z")
            .with_subject("Problem with the system"),
        Ticket::new(2, "pending", "medium", "2024-03-15T11:30:00Z")
            .with_subject("Support request"),
    ]
}

/// One validated ticket with its derived calendar columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTicket {
    pub id: Option<i64>,
    pub status: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub date: NaiveDate,
    pub hour: u8,
    pub weekday: u8,
}

impl NormalizedTicket {
    pub fn new(
        id: Option<i64>,
        status: String,
        priority: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let CalendarFields {
            date,
            hour,
            weekday,
        } = CalendarFields::from_datetime(&created_at);
        Self {
            id,
            status,
            priority,
            created_at,
            date,
            hour,
            weekday,
        }
    }
}

/// Row view over a fully validated ticket batch, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    rows: Vec<NormalizedTicket>,
}

impl NormalizedTable {
    pub fn new(rows: Vec<NormalizedTicket>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[NormalizedTicket] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedTicket> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows created at or after `since`, as a new table.
    pub fn created_since(&self, since: DateTime<Utc>) -> NormalizedTable {
        NormalizedTable::new(
            self.rows
                .iter()
                .filter(|row| row.created_at >= since)
                .cloned()
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a NormalizedTable {
    type Item = &'a NormalizedTicket;
    type IntoIter = std::slice::Iter<'a, NormalizedTicket>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
