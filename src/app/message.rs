// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::gallery;
use crate::ui::notifications::list;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    List(list::Message),
    Gallery(gallery::Message),
    /// Animation frame; only subscribed to while a transition is running.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional TOML feed for the notification list. The built-in sample
    /// feed is used when absent.
    pub feed_path: Option<PathBuf>,
}
