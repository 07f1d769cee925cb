// SPDX-License-Identifier: MPL-2.0
//! Card gallery: the parent that owns a set of dismissible notification cards.
//!
//! Cards never hide themselves. A dismiss press reaches [`update`], which
//! starts the card's exit transition; [`Gallery::prune`] drops it from the
//! collection once that transition has finished.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{motion, spacing, typography};
use crate::ui::notifications::transition::Direction;
use crate::ui::notifications::{NotificationCard, Transition};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, Column, Row, Text},
    Element, Font, Length,
};
use std::time::Instant;

/// Identifier of a card within the gallery.
pub type CardId = usize;

/// Cards shown on startup and after a reset: type tag, message key, timestamp key.
const DEFAULT_CARDS: [(&str, &str, Option<&str>); 5] = [
    ("info", "gallery-card-info", Some("gallery-timestamp-now")),
    ("success", "gallery-card-success", None),
    ("warning", "gallery-card-warning", Some("gallery-timestamp-minutes")),
    ("error", "gallery-card-error", Some("gallery-timestamp-hour")),
    ("urgent", "gallery-card-unknown", None),
];

/// One card owned by the gallery, with its text already localized.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: CardId,
    /// Raw type tag, resolved by the card itself.
    pub tag: String,
    pub message: String,
    pub timestamp: Option<String>,
    transition: Transition,
}

impl Entry {
    /// Whether the card has been dismissed and is playing its exit.
    pub fn is_leaving(&self) -> bool {
        self.transition.direction() == Direction::Exit
    }
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    entries: Vec<Entry>,
    next_id: CardId,
}

impl Gallery {
    /// Creates a gallery with the default cards entering at `now`.
    pub fn new(i18n: &I18n, now: Instant) -> Self {
        let mut gallery = Self::default();
        gallery.reset(i18n, now);
        gallery
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Appends a card entering at `now` and returns its id.
    pub fn push(
        &mut self,
        tag: &str,
        message: impl Into<String>,
        timestamp: Option<String>,
        now: Instant,
    ) -> CardId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            tag: tag.to_string(),
            message: message.into(),
            timestamp,
            transition: Transition::entering(now, motion::CARD),
        });
        id
    }

    /// Starts the exit of card `id`. Returns `false` for unknown cards and
    /// for cards already leaving.
    pub fn dismiss(&mut self, id: CardId, now: Instant) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id && !entry.is_leaving())
        {
            Some(entry) => {
                entry.transition = Transition::exiting(now, motion::CARD);
                log::debug!("dismissed card {id}");
                true
            }
            None => false,
        }
    }

    /// Replaces every card with the default set.
    pub fn reset(&mut self, i18n: &I18n, now: Instant) {
        self.entries.clear();
        for (tag, message_key, timestamp_key) in DEFAULT_CARDS {
            let timestamp = timestamp_key.map(|key| i18n.tr(key));
            self.push(tag, i18n.tr(message_key), timestamp, now);
        }
    }

    /// Drops cards whose exit transition has finished.
    pub fn prune(&mut self, now: Instant) {
        self.entries
            .retain(|entry| !(entry.is_leaving() && entry.transition.is_finished(now)));
    }

    /// Whether any card is mid-transition or waiting to be pruned.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.is_leaving() || entry.transition.is_animating(now))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss(CardId),
    Reset,
}

pub fn update(gallery: &mut Gallery, i18n: &I18n, message: Message, now: Instant) {
    match message {
        Message::Dismiss(id) => {
            gallery.dismiss(id, now);
        }
        Message::Reset => gallery.reset(i18n, now),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("gallery-title"))
        .size(typography::TITLE)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        })
        .style(styles::text::primary(1.0))
        .width(Length::Fill);

    let reset = button(Text::new(ctx.i18n.tr("gallery-reset")).size(typography::BODY))
        .on_press(Message::Reset)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::toggle);

    let header = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(title)
        .push(reset);

    let cards = ctx.gallery.entries.iter().map(|entry| {
        NotificationCard::new(&entry.message)
            .kind(&entry.tag)
            .timestamp_maybe(entry.timestamp.as_deref())
            .on_close(Message::Dismiss(entry.id))
            .transition(entry.transition, ctx.now)
            .view()
    });

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(Column::with_children(cards).spacing(spacing::SM))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::notifications::Severity;
    use std::time::Duration;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn default_cards_cover_every_severity_and_an_unknown_tag() {
        let gallery = Gallery::new(&english(), Instant::now());
        let severities: Vec<Severity> = gallery
            .entries()
            .iter()
            .map(|entry| Severity::from_tag(Some(&entry.tag)))
            .collect();
        assert_eq!(
            severities,
            [
                Severity::Info,
                Severity::Success,
                Severity::Warning,
                Severity::Error,
                Severity::Info,
            ]
        );
    }

    #[test]
    fn dismiss_plays_exit_then_prunes() {
        let now = Instant::now();
        let mut gallery = Gallery::new(&english(), now);
        let id = gallery.entries()[1].id;

        assert!(gallery.dismiss(id, now));
        assert!(gallery.entries()[1].is_leaving());

        gallery.prune(now + Duration::from_millis(100));
        assert_eq!(gallery.entries().len(), 5);

        gallery.prune(now + motion::CARD.duration);
        assert_eq!(gallery.entries().len(), 4);
        assert!(gallery.entries().iter().all(|entry| entry.id != id));
    }

    #[test]
    fn repeated_dismiss_is_ignored_while_leaving() {
        let now = Instant::now();
        let mut gallery = Gallery::new(&english(), now);
        let id = gallery.entries()[0].id;

        assert!(gallery.dismiss(id, now));
        assert!(!gallery.dismiss(id, now + Duration::from_millis(50)));
        assert!(!gallery.dismiss(999, now));
    }

    #[test]
    fn reset_restores_dismissed_cards_with_fresh_ids() {
        let i18n = english();
        let now = Instant::now();
        let mut gallery = Gallery::new(&i18n, now);
        let first_ids: Vec<CardId> = gallery.entries().iter().map(|e| e.id).collect();

        update(&mut gallery, &i18n, Message::Dismiss(first_ids[0]), now);
        gallery.prune(now + motion::CARD.duration);
        assert_eq!(gallery.entries().len(), 4);

        update(&mut gallery, &i18n, Message::Reset, now);
        assert_eq!(gallery.entries().len(), 5);
        assert!(gallery
            .entries()
            .iter()
            .all(|entry| !first_ids.contains(&entry.id)));
    }

    #[test]
    fn animating_until_entries_settle() {
        let now = Instant::now();
        let gallery = Gallery::new(&english(), now);
        assert!(gallery.is_animating(now));
        assert!(!gallery.is_animating(now + motion::CARD.duration));
    }

    #[test]
    fn timestamps_follow_the_default_table() {
        let gallery = Gallery::new(&english(), Instant::now());
        let with_timestamp = gallery
            .entries()
            .iter()
            .filter(|entry| entry.timestamp.is_some())
            .count();
        assert_eq!(with_timestamp, 3);
    }
}
