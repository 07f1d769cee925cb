// SPDX-License-Identifier: MPL-2.0
//! Notification records as consumed by the notification list.

use serde::{Deserialize, Serialize};

/// One entry of a notification list.
///
/// Both fields are lenient when deserialized: a missing `message` becomes an
/// empty string so a malformed entry still renders, as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationRecord {
    #[serde(default)]
    pub message: String,

    /// Human-readable time label ("2 min ago", "09:41").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl NotificationRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: None,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// The timestamp as displayed; absent timestamps display as empty text.
    #[must_use]
    pub fn timestamp_label(&self) -> &str {
        self.timestamp.as_deref().unwrap_or_default()
    }
}
