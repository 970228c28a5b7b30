//! Summary statistics over group counts.

use crate::api::SummaryStatistics;

/// Compute mean, sample std, min, max, median and quartiles for a set of values.
///
/// Returns `None` for an empty slice. The standard deviation divides by n-1
/// and is `None` for a single value.
pub fn compute_stats(values: &[f64]) -> Option<SummaryStatistics> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    Some(SummaryStatistics {
        mean: mean(values),
        std: sample_std(values),
        min,
        max,
        median: quantile_sorted(&sorted, 0.5),
        q1: quantile_sorted(&sorted, 0.25),
        q3: quantile_sorted(&sorted, 0.75),
    })
}

/// Same as [`compute_stats`] for integer counts.
pub fn compute_count_stats(counts: &[usize]) -> Option<SummaryStatistics> {
    let values: Vec<f64> = counts.iter().map(|&c| c as f64).collect();
    compute_stats(&values)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator).
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - m;
            diff * diff
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Quantile with linear interpolation at position `q * (n - 1)`.
///
/// `sorted` must be ascending and non-empty.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let weight = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
