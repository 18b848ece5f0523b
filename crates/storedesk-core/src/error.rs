//! # Error Types
//!
//! Domain-specific error types for storedesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storedesk-core errors (this file)                                     │
//! │  ├── CoreError        - Record lookups, export rendering               │
//! │  └── ValidationError  - Single-record edit failures                    │
//! │                                                                         │
//! │  storedesk app errors (separate crate)                                 │
//! │  └── AppError         - Config, file delivery, wraps CoreError         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → caller notice          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Most list operations never produce an error at all: empty selections,
//! unknown tabs and unparseable dates degrade to no-ops or safe defaults.
//! These types only cover the few paths where the caller must react.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core list-engine errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A single-record update referenced an id that is not in the collection.
    ///
    /// ## When This Occurs
    /// - The record was removed by a bulk delete while an edit was open
    /// - The caller passed an id from a different list view
    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: String, id: String },

    /// The escaped CSV writer failed to render the export.
    #[error("Export failed: {0}")]
    Export(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a RecordNotFound error for a given record kind and id.
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        CoreError::RecordNotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

impl From<csv::Error> for CoreError {
    fn from(err: csv::Error) -> Self {
        CoreError::Export(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for single-record edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is below its minimum.
    #[error("{field} must be at least {min}")]
    TooSmall { field: String, min: i64 },

    /// Invalid format (e.g., malformed email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
