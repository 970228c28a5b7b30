//! # Ticket Analytics
//!
//! Descriptive and predictive statistics over batches of support tickets.
//!
//! The caller submits a complete ticket batch; the engine validates it and
//! returns categorical distributions, temporal aggregates (per date, hour and
//! weekday) and a short-horizon forecast of daily ticket volume. Nothing is
//! persisted and no state is kept between calls.
//!
//! ## Architecture
//!
//! - [`models`]: Ticket records, the normalized table and timestamp parsing
//! - [`services`]: Normalizer, aggregators, trend projector and the
//!   [`services::analyze`] entry point
//! - [`api`]: Serializable result types
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server (feature `http-server`)
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use ticket_analytics::config::AnalyticsConfig;
//! use ticket_analytics::services::analyze;
//!
//! let records = vec![
//!     json!({"id": 1, "status": "open", "priority": "high", "created_at": "2024-03-15T10:00:00Z"}),
//!     json!({"id": 2, "status": "pending", "priority": "medium", "created_at": "2024-03-15T11:30:00Z"}),
//! ];
//! let result = analyze(&records, &AnalyticsConfig::default()).unwrap();
//! assert_eq!(result.total_tickets, 2);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{AnalyticsError, AnalyticsResult};
