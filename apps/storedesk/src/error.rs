//! # App Error Type
//!
//! Unified error type for the session layer and CLI.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Storedesk                              │
//! │                                                                         │
//! │  DeskConfig::load ──── io / toml ─────────────┐                         │
//! │                                               │                         │
//! │  ListSession::update_one ── ValidationError ──┼──► AppError ──► caller  │
//! │                                               │         │               │
//! │  DownloadSink::deliver ──── io ───────────────┘         ▼               │
//! │                                                  tracing::warn!         │
//! │                                                  + destructive Notice   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! List operations that have nothing to do (empty selection, unknown id)
//! are not errors; they simply leave state unchanged.

use serde::Serialize;
use storedesk_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the app crate.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the config file or writing an export failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A loaded config value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No explicit path and no platform config directory.
    #[error("No config path available")]
    NoConfigPath,

    /// Error from the list engine (lookup, validation, export rendering).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

/// Machine-readable category for an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    ConfigError,
    ExportError,
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Core(CoreError::RecordNotFound { .. }) => ErrorCode::NotFound,
            AppError::Core(CoreError::Validation(_)) => ErrorCode::ValidationError,
            AppError::Core(CoreError::Export(_)) | AppError::Io(_) => ErrorCode::ExportError,
            AppError::ConfigParse(_)
            | AppError::ConfigSerialize(_)
            | AppError::InvalidConfig(_)
            | AppError::NoConfigPath => ErrorCode::ConfigError,
        }
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
