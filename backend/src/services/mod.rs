//! Service layer for ticket analytics.
//!
//! Each stage is a pure function of its input: the normalizer builds a
//! [`crate::models::NormalizedTable`], the aggregators summarize it, and the
//! projector extrapolates the daily series. [`analysis`] wires them together.

pub mod analysis;

pub mod distributions;

pub mod normalizer;

pub mod projection;

pub mod statistics;

pub mod temporal;

pub use analysis::{analyze, analyze_at, analyze_table, analyze_tickets};
pub use distributions::compute_distribution;
pub use normalizer::{normalize_records, normalize_tickets};
pub use projection::project;
pub use temporal::{compute_temporal_aggregates, DailySeries, TemporalAggregates};
