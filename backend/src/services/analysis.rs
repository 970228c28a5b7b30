//! Analysis entry point: normalize, aggregate, project, assemble.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::api::{AnalysisResult, CategoricalField, DateCounts};
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{NormalizedTable, Ticket};
use crate::services::distributions::compute_distribution;
use crate::services::normalizer::{normalize_records, normalize_tickets};
use crate::services::projection::project;
use crate::services::temporal::compute_temporal_aggregates;

/// Analyze a batch of raw JSON ticket records using the current time.
pub fn analyze(records: &[Value], config: &AnalyticsConfig) -> AnalyticsResult<AnalysisResult> {
    analyze_at(records, Utc::now(), config)
}

/// Analyze raw JSON ticket records as of `now`.
///
/// `now` only affects the flat-mean projection, whose recency window is
/// measured back from it.
pub fn analyze_at(
    records: &[Value],
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> AnalyticsResult<AnalysisResult> {
    ensure_not_empty(records.len())?;
    let table = normalize_records(records)?;
    analyze_table(&table, now, config)
}

/// Analyze typed tickets as of `now`.
pub fn analyze_tickets(
    tickets: &[Ticket],
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> AnalyticsResult<AnalysisResult> {
    ensure_not_empty(tickets.len())?;
    let table = normalize_tickets(tickets)?;
    analyze_table(&table, now, config)
}

/// Run every aggregation over an already normalized table.
pub fn analyze_table(
    table: &NormalizedTable,
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> AnalyticsResult<AnalysisResult> {
    let status_distribution = compute_distribution(table, CategoricalField::Status);
    let priority_distribution = compute_distribution(table, CategoricalField::Priority);
    let temporal = compute_temporal_aggregates(table);
    let projection = project(&temporal.daily, table, now, &config.projection)?;

    log::debug!(
        "Analyzed {} tickets over {} days (projection: {})",
        table.len(),
        temporal.daily.len(),
        projection
            .as_ref()
            .map(|p| p.strategy.as_str())
            .unwrap_or("none")
    );

    Ok(AnalysisResult {
        total_tickets: table.len(),
        status_distribution,
        priority_distribution,
        tickets_by_date: DateCounts::from(&temporal.daily),
        daily_statistics: temporal.daily.statistics(),
        hourly_distribution: temporal.hourly,
        weekday_distribution: temporal.weekday,
        projection,
    })
}

fn ensure_not_empty(len: usize) -> AnalyticsResult<()> {
    if len == 0 {
        return Err(AnalyticsError::validation("No ticket data provided"));
    }
    Ok(())
}
