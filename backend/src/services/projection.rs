//! Short-horizon projection of daily ticket volume.
//!
//! Two strategies are available, selected through [`ProjectionConfig`]:
//!
//! - **Linear trend**: ordinary least squares over the whole daily series
//!   (`t = 0..n-1`), extrapolated to `t = n..n+h-1`. Requires strictly more
//!   than `min_history_days` distinct dates.
//! - **Flat mean**: the mean of the daily counts inside the trailing recency
//!   window (relative to the request time), repeated for every forecast day.
//!
//! In both cases the band is `value ± std` of the daily counts the strategy
//! used, with the lower bound clamped at zero. Forecast values themselves are
//! not clamped: a steep downward trend may forecast negative volume.

use chrono::{DateTime, Days, Duration, NaiveDate, Utc};

use crate::api::{ConfidenceBand, Projection};
use crate::config::{ProjectionConfig, ProjectionStrategy};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::NormalizedTable;
use crate::services::statistics::{mean, sample_std};
use crate::services::temporal::DailySeries;

/// Least-squares line `count = slope * t + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, t: f64) -> f64 {
        self.slope * t + self.intercept
    }
}

/// Fit a line through `values` indexed `0..n`. Needs at least two points.
pub fn fit_linear_trend(values: &[f64]) -> Option<LinearFit> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_x2: f64 = (0..values.len()).map(|i| (i * i) as f64).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Some(LinearFit { slope, intercept })
}

/// Project the daily series according to the configured strategy.
///
/// `Ok(None)` means there was not enough history, which is a normal outcome.
pub fn project(
    daily: &DailySeries,
    table: &NormalizedTable,
    now: DateTime<Utc>,
    config: &ProjectionConfig,
) -> AnalyticsResult<Option<Projection>> {
    match config.strategy {
        ProjectionStrategy::LinearTrend => project_linear_trend(daily, config),
        ProjectionStrategy::FlatMean => project_flat_mean(table, now, config),
    }
}

pub fn project_linear_trend(
    daily: &DailySeries,
    config: &ProjectionConfig,
) -> AnalyticsResult<Option<Projection>> {
    if daily.len() <= config.min_history_days {
        log::debug!(
            "Skipping linear projection: {} days of history, need more than {}",
            daily.len(),
            config.min_history_days
        );
        return Ok(None);
    }

    let values = daily.values();
    let Some(fit) = fit_linear_trend(&values) else {
        log::debug!("Skipping linear projection: {} points cannot be fitted", values.len());
        return Ok(None);
    };
    if !fit.slope.is_finite() || !fit.intercept.is_finite() {
        return Err(AnalyticsError::computation(
            "linear_trend",
            format!("non-finite fit (slope={}, intercept={})", fit.slope, fit.intercept),
        ));
    }

    let last_date = daily
        .last_date()
        .ok_or_else(|| AnalyticsError::computation("linear_trend", "empty daily series"))?;
    let n = values.len();
    let forecast = (n..n + config.horizon_days as usize)
        .map(|t| fit.predict(t as f64))
        .collect();
    let band = sample_std(&values).unwrap_or(0.0);

    log::debug!(
        "Linear projection: slope={:.4}, intercept={:.4}, band={:.4}",
        fit.slope,
        fit.intercept,
        band
    );
    build_projection(last_date, forecast, band, ProjectionStrategy::LinearTrend).map(Some)
}

pub fn project_flat_mean(
    table: &NormalizedTable,
    now: DateTime<Utc>,
    config: &ProjectionConfig,
) -> AnalyticsResult<Option<Projection>> {
    let since = now - Duration::days(i64::from(config.recency_window_days));
    let recent = DailySeries::from_table(&table.created_since(since));

    let Some(last_date) = recent.last_date() else {
        log::debug!("Skipping flat projection: no tickets since {}", since);
        return Ok(None);
    };

    let values = recent.values();
    let average = mean(&values);
    let band = sample_std(&values).unwrap_or(0.0);
    let forecast = vec![average; config.horizon_days as usize];

    log::debug!(
        "Flat projection over {} recent days: mean={:.4}, band={:.4}",
        recent.len(),
        average,
        band
    );
    build_projection(last_date, forecast, band, ProjectionStrategy::FlatMean).map(Some)
}

fn build_projection(
    last_date: NaiveDate,
    values: Vec<f64>,
    band: f64,
    strategy: ProjectionStrategy,
) -> AnalyticsResult<Projection> {
    let dates = (1..=values.len() as u64)
        .map(|offset| {
            last_date.checked_add_days(Days::new(offset)).ok_or_else(|| {
                AnalyticsError::computation(
                    strategy.as_str(),
                    format!("forecast date overflow after {}", last_date),
                )
            })
        })
        .collect::<AnalyticsResult<Vec<_>>>()?;

    let upper = values.iter().map(|v| v + band).collect();
    let lower = values.iter().map(|v| (v - band).max(0.0)).collect();

    Ok(Projection {
        dates,
        values,
        confidence: ConfidenceBand { upper, lower },
        strategy,
    })
}
