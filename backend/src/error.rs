//! Error types for the analytics engine.
//!
//! Every failure is returned as an [`AnalyticsError`]; the engine never panics on
//! malformed input. A single bad record aborts the whole batch.

use std::fmt;

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Location of a validation failure inside the submitted batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordContext {
    /// Zero-based position of the offending record
    pub index: Option<usize>,
    /// Name of the offending field
    pub field: Option<String>,
}

impl RecordContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl fmt::Display for RecordContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(index) = self.index {
            parts.push(format!("record={}", index));
        }
        if let Some(ref field) = self.field {
            parts.push(format!("field={}", field));
        }
        if parts.is_empty() {
            return Ok(());
        }
        write!(f, " [{}]", parts.join(", "))
    }
}

/// Error type for analytics operations
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// Malformed or incomplete ticket records. Maps to a client fault.
    #[error("Validation error: {message}{context}")]
    Validation {
        message: String,
        context: RecordContext,
    },

    /// Unexpected failure while aggregating or projecting. Maps to a server fault.
    #[error("Computation error in {operation}: {message}")]
    Computation { operation: String, message: String },
}

impl AnalyticsError {
    /// Batch-level validation failure with no record attached.
    pub fn validation(message: impl Into<String>) -> Self {
        AnalyticsError::Validation {
            message: message.into(),
            context: RecordContext::new(),
        }
    }

    pub fn missing_field(index: usize, field: &str) -> Self {
        AnalyticsError::Validation {
            message: format!("missing required field '{}'", field),
            context: RecordContext::new().with_index(index).with_field(field),
        }
    }

    pub fn invalid_field(index: usize, field: &str, message: impl Into<String>) -> Self {
        AnalyticsError::Validation {
            message: format!("invalid value for '{}': {}", field, message.into()),
            context: RecordContext::new().with_index(index).with_field(field),
        }
    }

    pub fn computation(operation: impl Into<String>, message: impl Into<String>) -> Self {
        AnalyticsError::Computation {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether the error was caused by the submitted data.
    pub fn is_validation(&self) -> bool {
        matches!(self, AnalyticsError::Validation { .. })
    }

    /// Offending field, if the error points at one.
    pub fn field(&self) -> Option<&str> {
        match self {
            AnalyticsError::Validation { context, .. } => context.field.as_deref(),
            AnalyticsError::Computation { .. } => None,
        }
    }
}
