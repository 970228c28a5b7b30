//! Public API surface for the analytics engine.
//!
//! This file consolidates the result types returned by [`crate::services::analyze`].
//! Field names match the JSON consumed by the dashboard front end.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub use crate::config::ProjectionStrategy;
pub use crate::models::Ticket;

/// Categorical ticket fields that can be counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    Status,
    Priority,
}

impl CategoricalField {
    /// Field name as it appears in ticket records and in the JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            CategoricalField::Status => "status",
            CategoricalField::Priority => "priority",
        }
    }
}

/// Category counts in descending frequency order.
///
/// Serializes as `{"<field>": [...categories], "count": [...counts]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionResult {
    pub field: CategoricalField,
    pub categories: Vec<String>,
    pub counts: Vec<usize>,
}

impl DistributionResult {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Serialize for DistributionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.field.name(), &self.categories)?;
        map.serialize_entry("count", &self.counts)?;
        map.end()
    }
}

/// Ticket counts per calendar date, ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateCounts {
    pub date: Vec<NaiveDate>,
    pub count: Vec<usize>,
}

/// Summary statistics over a series of group counts.
///
/// `std` is the sample standard deviation and is `None` for fewer than two
/// samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
}

/// Ticket counts per hour of day (0-23). Hours without tickets are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyDistribution {
    pub hours: Vec<u8>,
    pub counts: Vec<usize>,
    pub statistics: Option<SummaryStatistics>,
}

/// Ticket counts per weekday (Monday = 0). Weekdays without tickets are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayDistribution {
    pub weekdays: Vec<u8>,
    pub counts: Vec<usize>,
    pub statistics: Option<SummaryStatistics>,
}

/// Symmetric band around the forecast values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceBand {
    pub upper: Vec<f64>,
    /// Never negative
    pub lower: Vec<f64>,
}

/// Forecast of daily ticket volume for the days after the observed series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
    pub confidence: ConfidenceBand,
    pub strategy: ProjectionStrategy,
}

/// Complete result of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub total_tickets: usize,
    pub status_distribution: DistributionResult,
    pub priority_distribution: DistributionResult,
    pub tickets_by_date: DateCounts,
    pub hourly_distribution: HourlyDistribution,
    pub weekday_distribution: WeekdayDistribution,
    pub daily_statistics: Option<SummaryStatistics>,
    pub projection: Option<Projection>,
}
