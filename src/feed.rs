// SPDX-License-Identifier: MPL-2.0
//! Notification feeds: the records handed to the notification list.
//!
//! A feed file is TOML with one `[[notifications]]` table per record:
//!
//! ```toml
//! [[notifications]]
//! message = "New message from John"
//! timestamp = "2 min ago"
//! ```

use crate::error::{Error, Result};
use crate::ui::notifications::NotificationRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ordered records for a notification list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationFeed {
    #[serde(default)]
    pub notifications: Vec<NotificationRecord>,
}

impl NotificationFeed {
    /// Records shown when no feed file is given.
    pub fn sample() -> Self {
        Self {
            notifications: vec![
                NotificationRecord::new("New message from John").with_timestamp("2 min ago"),
                NotificationRecord::new("Server restarted").with_timestamp("10 min ago"),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

/// Reads a feed file. Record order is preserved.
pub fn load_from_path(path: &Path) -> Result<NotificationFeed> {
    let content = fs::read_to_string(path)
        .map_err(|err| Error::Io(format!("{}: {err}", path.display())))?;
    let feed: NotificationFeed = toml::from_str(&content)
        .map_err(|err| Error::Feed(format!("{}: {err}", path.display())))?;
    log::debug!(
        "loaded {} notification(s) from {}",
        feed.notifications.len(),
        path.display()
    );
    Ok(feed)
}
