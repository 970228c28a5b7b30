//! Temporal aggregation by calendar date, hour of day and weekday.
//!
//! Groups are keyed through `BTreeMap`s so every output is sorted ascending by
//! key. Keys with no tickets are absent; nothing is zero-filled.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::api::{DateCounts, HourlyDistribution, SummaryStatistics, WeekdayDistribution};
use crate::models::{NormalizedTable, NormalizedTicket};
use crate::services::statistics::compute_count_stats;

/// Ticket counts per calendar date, ascending, without gap filling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailySeries {
    points: Vec<(NaiveDate, usize)>,
}

impl DailySeries {
    pub fn from_table(table: &NormalizedTable) -> Self {
        let grouped = group_counts(table, |row| row.date);
        Self {
            points: grouped.into_iter().collect(),
        }
    }

    /// Build a series from arbitrary points; duplicate dates are summed.
    pub fn from_points(points: impl IntoIterator<Item = (NaiveDate, usize)>) -> Self {
        let mut grouped = BTreeMap::new();
        for (date, count) in points {
            *grouped.entry(date).or_insert(0) += count;
        }
        Self {
            points: grouped.into_iter().collect(),
        }
    }

    pub fn points(&self) -> &[(NaiveDate, usize)] {
        &self.points
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|(date, _)| *date).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.points.iter().map(|(_, count)| *count).collect()
    }

    /// Counts as floats, for the projector.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, count)| *count as f64).collect()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(date, _)| *date)
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total(&self) -> usize {
        self.points.iter().map(|(_, count)| count).sum()
    }

    /// Statistics over the per-day counts.
    pub fn statistics(&self) -> Option<SummaryStatistics> {
        compute_count_stats(&self.counts())
    }
}

impl From<&DailySeries> for DateCounts {
    fn from(series: &DailySeries) -> Self {
        DateCounts {
            date: series.dates(),
            count: series.counts(),
        }
    }
}

/// All temporal groupings of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalAggregates {
    pub daily: DailySeries,
    pub hourly: HourlyDistribution,
    pub weekday: WeekdayDistribution,
}

fn group_counts<K, F>(table: &NormalizedTable, key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&NormalizedTicket) -> K,
{
    let mut groups = BTreeMap::new();
    for row in table {
        *groups.entry(key(row)).or_insert(0) += 1;
    }
    groups
}

/// Counts per hour of day with statistics over those per-hour counts.
pub fn compute_hourly_distribution(table: &NormalizedTable) -> HourlyDistribution {
    let (hours, counts): (Vec<u8>, Vec<usize>) =
        group_counts(table, |row| row.hour).into_iter().unzip();
    let statistics = compute_count_stats(&counts);
    HourlyDistribution {
        hours,
        counts,
        statistics,
    }
}

/// Counts per weekday (Monday = 0) with statistics over those per-weekday counts.
pub fn compute_weekday_distribution(table: &NormalizedTable) -> WeekdayDistribution {
    let (weekdays, counts): (Vec<u8>, Vec<usize>) =
        group_counts(table, |row| row.weekday).into_iter().unzip();
    let statistics = compute_count_stats(&counts);
    WeekdayDistribution {
        weekdays,
        counts,
        statistics,
    }
}

pub fn compute_temporal_aggregates(table: &NormalizedTable) -> TemporalAggregates {
    let aggregates = TemporalAggregates {
        daily: DailySeries::from_table(table),
        hourly: compute_hourly_distribution(table),
        weekday: compute_weekday_distribution(table),
    };
    log::debug!(
        "Temporal aggregation: {} dates, {} hours, {} weekdays",
        aggregates.daily.len(),
        aggregates.hourly.hours.len(),
        aggregates.weekday.weekdays.len()
    );
    aggregates
}
