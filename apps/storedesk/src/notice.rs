//! # Notices
//!
//! Short user-facing messages raised by session actions (the browser shows
//! them as toasts).

use serde::{Deserialize, Serialize};
use storedesk_core::RecordKind;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// A titled message with a display variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            variant: NoticeVariant::Destructive,
            ..Notice::new(title, description)
        }
    }

    /// "2 orders marked as shipped".
    pub fn bulk_applied(kind: RecordKind, count: usize, action: &str) -> Self {
        Notice::new("Success", format!("{} {} {}", count, kind, action))
    }

    /// "2 orders deleted successfully".
    pub fn bulk_deleted(kind: RecordKind, count: usize) -> Self {
        Notice::new("Success", format!("{} {} deleted successfully", count, kind))
    }

    /// "Order deleted successfully".
    pub fn deleted(kind: RecordKind) -> Self {
        Notice::new(
            "Success",
            format!("{} deleted successfully", kind.singular()),
        )
    }

    /// "Order updated successfully".
    pub fn updated(kind: RecordKind) -> Self {
        Notice::new(
            "Success",
            format!("{} updated successfully", kind.singular()),
        )
    }

    /// "Failed to delete order".
    pub fn failed(kind: RecordKind, verb: &str) -> Self {
        Notice::destructive(
            "Error",
            format!("Failed to {} {}", verb, kind.singular().to_lowercase()),
        )
    }

    pub fn reset_complete() -> Self {
        Notice::new("Reset Complete", "All filters and settings have been reset")
    }

    pub fn export_started() -> Self {
        Notice::new("Export Started", "Preparing CSV file for download...")
    }

    pub fn export_complete(filename: &str) -> Self {
        Notice::new("Export Complete", format!("{} downloaded successfully", filename))
    }
}
