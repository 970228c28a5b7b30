//! Frequency counts of categorical ticket fields.

use std::collections::HashMap;

use crate::api::{CategoricalField, DistributionResult};
use crate::models::{NormalizedTable, NormalizedTicket};

impl CategoricalField {
    fn value<'a>(&self, row: &'a NormalizedTicket) -> &'a str {
        match self {
            CategoricalField::Status => &row.status,
            CategoricalField::Priority => &row.priority,
        }
    }
}

/// Count rows per value of `field`, most frequent first.
///
/// Equal counts keep the order in which the values first appear in the table.
pub fn value_counts(table: &NormalizedTable, field: CategoricalField) -> Vec<(String, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for row in table {
        let value = field.value(row);
        match positions.get(value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    // Stable sort preserves first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Compute the distribution of a categorical field.
pub fn compute_distribution(table: &NormalizedTable, field: CategoricalField) -> DistributionResult {
    let (categories, counts): (Vec<String>, Vec<usize>) =
        value_counts(table, field).into_iter().unzip();
    let result = DistributionResult {
        field,
        categories,
        counts,
    };
    log::debug!(
        "{} distribution: {} categories over {} tickets",
        field.name(),
        result.categories.len(),
        result.total()
    );
    result
}
