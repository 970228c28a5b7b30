//! Record normalizer.
//!
//! Turns raw ticket records into a [`NormalizedTable`]. The first invalid
//! record aborts the batch; partial tables are never returned.

use serde_json::{Map, Value};

use crate::error::{AnalyticsError, AnalyticsResult, RecordContext};
use crate::models::{parse_timestamp, NormalizedTable, NormalizedTicket, Ticket};

/// Normalize untyped JSON records.
pub fn normalize_records(records: &[Value]) -> AnalyticsResult<NormalizedTable> {
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let ticket = ticket_from_value(index, record)?;
            normalize_ticket(index, ticket)
        })
        .collect::<AnalyticsResult<Vec<_>>>()?;

    log::debug!("Normalized {} ticket records", rows.len());
    Ok(NormalizedTable::new(rows))
}

/// Normalize already-typed tickets.
pub fn normalize_tickets(tickets: &[Ticket]) -> AnalyticsResult<NormalizedTable> {
    let rows = tickets
        .iter()
        .enumerate()
        .map(|(index, ticket)| normalize_ticket(index, ticket.clone()))
        .collect::<AnalyticsResult<Vec<_>>>()?;

    log::debug!("Normalized {} tickets", rows.len());
    Ok(NormalizedTable::new(rows))
}

/// Validate one JSON record into a [`Ticket`].
pub fn ticket_from_value(index: usize, record: &Value) -> AnalyticsResult<Ticket> {
    let object = record.as_object().ok_or_else(|| AnalyticsError::Validation {
        message: "ticket record must be a JSON object".to_string(),
        context: RecordContext::new().with_index(index),
    })?;

    let id = match object.get("id") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            value
                .as_i64()
                .ok_or_else(|| AnalyticsError::invalid_field(index, "id", "expected an integer"))?,
        ),
    };

    let subject = object
        .get("subject")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Ticket {
        id,
        status: required_string(object, index, "status")?,
        priority: required_string(object, index, "priority")?,
        created_at: required_string(object, index, "created_at")?,
        subject,
    })
}

fn required_string(object: &Map<String, Value>, index: usize, field: &str) -> AnalyticsResult<String> {
    match object.get(field) {
        None | Some(Value::Null) => Err(AnalyticsError::missing_field(index, field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(AnalyticsError::invalid_field(index, field, "expected a string")),
    }
}

fn normalize_ticket(index: usize, ticket: Ticket) -> AnalyticsResult<NormalizedTicket> {
    let created_at = parse_timestamp(&ticket.created_at)
        .map_err(|e| AnalyticsError::invalid_field(index, "created_at", e))?;

    Ok(NormalizedTicket::new(
        ticket.id,
        ticket.status,
        ticket.priority,
        created_at,
    ))
}
