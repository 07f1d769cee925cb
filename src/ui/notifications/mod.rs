// SPDX-License-Identifier: MPL-2.0
//! Notification components.
//!
//! Two independent building blocks:
//!
//! - [`NotificationCard`] - one severity-tinted card with an optional dismiss button
//! - [`list`] - a panel listing caller-supplied records behind a Hide/Show toggle
//!
//! The list does not render cards and records carry no severity; the two only
//! share design tokens and the [`transition`] helper.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{list, NotificationCard};
//!
//! // A card whose dismissal is reported to the parent
//! let card = NotificationCard::new("Server restarted")
//!     .kind("warning")
//!     .timestamp("10 min ago")
//!     .on_close(Message::CardDismissed(id));
//!
//! // A list that owns only its visibility flag
//! let panel = list::view(list::ViewContext {
//!     i18n: &self.i18n,
//!     state: &self.list,
//!     notifications: &self.feed.notifications,
//!     now: self.now,
//! })
//! .map(Message::List);
//! ```

mod card;
pub mod list;
mod record;
mod severity;
pub mod transition;

pub use card::{CardContents, NotificationCard};
pub use record::NotificationRecord;
pub use severity::{ClassColors, Severity, StyleClass, Variant};
pub use transition::Transition;
