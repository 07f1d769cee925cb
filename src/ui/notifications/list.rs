// SPDX-License-Identifier: MPL-2.0
//! Notification list panel with a show/hide toggle.
//!
//! The caller owns the records and passes them in on every render; the list
//! only owns its visibility flag. Records are shown exactly in the order
//! given: nothing is sorted, merged, or filtered.

use super::record::NotificationRecord;
use super::transition::{Direction, Transition};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, Column, Container, Row, Text},
    Element, Font, Length,
};
use std::time::Instant;

/// Local state of a notification list.
#[derive(Debug, Clone)]
pub struct State {
    is_visible: bool,
    /// Most recent body transition, kept until replaced.
    body_transition: Option<Transition>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Creates a list state with the body visible and fading in from now.
    pub fn new() -> Self {
        Self::mounted_at(Instant::now())
    }

    /// Creates a list state whose body starts its entry at `now`.
    pub fn mounted_at(now: Instant) -> Self {
        Self {
            is_visible: true,
            body_transition: Some(Transition::entering(now, motion::LIST_BODY)),
        }
    }

    /// Whether the body is currently shown.
    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Flips visibility and starts the matching body transition at `now`.
    ///
    /// A transition still running is reversed from its current point.
    pub fn toggle_visibility(&mut self, now: Instant) {
        self.is_visible = !self.is_visible;
        self.body_transition = Some(match self.body_transition {
            Some(running) if running.is_animating(now) => running.reversed(now),
            _ if self.is_visible => Transition::entering(now, motion::LIST_BODY),
            _ => Transition::exiting(now, motion::LIST_BODY),
        });
        log::debug!("notification list visible: {}", self.is_visible);
    }

    /// Whether a body transition is still running at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.body_transition
            .is_some_and(|transition| transition.is_animating(now))
    }

    /// i18n key of the toggle button label.
    pub fn toggle_label_key(&self) -> &'static str {
        if self.is_visible {
            "notification-list-hide"
        } else {
            "notification-list-show"
        }
    }
}

/// Messages emitted by the notification list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleVisibility,
}

/// Process a list message at time `now`.
pub fn update(state: &mut State, message: Message, now: Instant) {
    match message {
        Message::ToggleVisibility => state.toggle_visibility(now),
    }
}

/// What the list body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body<'r> {
    /// Visibility is off; only the header renders.
    Hidden,
    /// Visible with no records: the placeholder message.
    Empty,
    /// Visible with records, in input order.
    Items(Vec<Item<'r>>),
}

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<'r> {
    /// Render identity: timestamp and position, never a semantic id.
    pub key: String,
    pub message: &'r str,
    pub timestamp: &'r str,
}

/// Identity of the record at `index`.
pub fn item_key(record: &NotificationRecord, index: usize) -> String {
    format!("{}-{}", record.timestamp_label(), index)
}

/// Resolves the body for the current state.
pub fn body<'r>(state: &State, notifications: &'r [NotificationRecord]) -> Body<'r> {
    if state.is_visible {
        contents(notifications)
    } else {
        Body::Hidden
    }
}

fn contents(notifications: &[NotificationRecord]) -> Body<'_> {
    if notifications.is_empty() {
        return Body::Empty;
    }

    Body::Items(
        notifications
            .iter()
            .enumerate()
            .map(|(index, record)| Item {
                key: item_key(record, index),
                message: &record.message,
                timestamp: record.timestamp_label(),
            })
            .collect(),
    )
}

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub notifications: &'a [NotificationRecord],
    /// Instant of the last tick, for transitions.
    pub now: Instant,
}

/// Render the notification list.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("notification-list-title"))
        .size(typography::TITLE)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        })
        .style(styles::text::primary(1.0))
        .width(Length::Fill);

    let toggle = button(Text::new(ctx.i18n.tr(ctx.state.toggle_label_key())).size(typography::BODY))
        .on_press(Message::ToggleVisibility)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::toggle);

    let header = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(title)
        .push(toggle);

    let mut panel = Column::new().spacing(spacing::MD).push(header);

    // An exiting body keeps rendering, fading out, until its transition ends.
    let shown = match (ctx.state.is_visible, ctx.state.body_transition) {
        (true, transition) => Some(transition),
        (false, Some(transition))
            if transition.direction() == Direction::Exit && transition.is_animating(ctx.now) =>
        {
            Some(Some(transition))
        }
        (false, _) => None,
    };

    if let Some(transition) = shown {
        panel = panel.push(view_body(
            ctx.i18n,
            contents(ctx.notifications),
            transition,
            ctx.now,
        ));
    }

    Container::new(panel)
        .padding(spacing::MD)
        .max_width(sizing::LIST_MAX_WIDTH)
        .width(Length::Fill)
        .style(styles::container::list_panel)
        .into()
}

fn view_body<'a>(
    i18n: &I18n,
    body: Body<'a>,
    transition: Option<Transition>,
    now: Instant,
) -> Element<'a, Message> {
    let (alpha, padding) = match transition {
        Some(transition) => (transition.opacity(now), transition.slide_padding(now)),
        None => (1.0, iced::Padding::ZERO),
    };

    let content: Element<'a, Message> = match body {
        Body::Hidden => Column::new().into(),
        Body::Empty => Text::new(i18n.tr("notification-list-empty"))
            .size(typography::BODY)
            .style(styles::text::secondary(alpha))
            .into(),
        Body::Items(items) => Column::with_children(
            items.into_iter().map(|item| view_item(item, alpha)),
        )
        .spacing(spacing::SM)
        .into(),
    };

    Container::new(content).padding(padding).into()
}

fn view_item<'a>(item: Item<'a>, alpha: f32) -> Element<'a, Message> {
    let divider = Container::new(Column::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::list_divider(alpha));

    Column::new()
        .spacing(spacing::XS)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(item.message)
                        .size(typography::BODY)
                        .style(styles::text::primary(alpha)),
                )
                .push(
                    Text::new(item.timestamp)
                        .size(typography::CAPTION)
                        .style(styles::text::secondary(alpha)),
                ),
        )
        .push(divider)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn record(message: &str, timestamp: &str) -> NotificationRecord {
        NotificationRecord::new(message).with_timestamp(timestamp)
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &crate::config::Config::default())
    }

    #[test]
    fn list_starts_visible_with_hide_label() {
        let state = State::new();
        assert!(state.is_visible());
        assert_eq!(state.toggle_label_key(), "notification-list-hide");
    }

    #[test]
    fn toggle_hides_then_restores() {
        let now = Instant::now();
        let mut state = State::new();
        let records = vec![record("A", "t1")];

        update(&mut state, Message::ToggleVisibility, now);
        assert!(!state.is_visible());
        assert_eq!(state.toggle_label_key(), "notification-list-show");
        assert_eq!(body(&state, &records), Body::Hidden);

        update(&mut state, Message::ToggleVisibility, now);
        assert!(state.is_visible());
        assert_eq!(state.toggle_label_key(), "notification-list-hide");
        assert!(matches!(body(&state, &records), Body::Items(_)));
    }

    #[test]
    fn toggle_labels_resolve_to_hide_and_show() {
        let i18n = english();
        let mut state = State::new();
        assert_eq!(i18n.tr(state.toggle_label_key()), "Hide");
        state.toggle_visibility(Instant::now());
        assert_eq!(i18n.tr(state.toggle_label_key()), "Show");
    }

    #[test]
    fn empty_visible_list_shows_only_placeholder() {
        let state = State::new();
        assert_eq!(body(&state, &[]), Body::Empty);
    }

    #[test]
    fn items_keep_input_order_and_fields() {
        let state = State::new();
        let records = vec![record("A", "t1"), record("B", "t2")];

        let Body::Items(items) = body(&state, &records) else {
            panic!("expected items");
        };
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].message, items[0].timestamp), ("A", "t1"));
        assert_eq!((items[1].message, items[1].timestamp), ("B", "t2"));
    }

    #[test]
    fn duplicate_timestamps_render_as_distinct_items() {
        let state = State::new();
        let records = vec![record("C", "now"), record("A", "now"), record("B", "now")];

        let Body::Items(items) = body(&state, &records) else {
            panic!("expected items");
        };
        let messages: Vec<&str> = items.iter().map(|i| i.message).collect();
        assert_eq!(messages, ["C", "A", "B"]);

        let keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, ["now-0", "now-1", "now-2"]);
    }

    #[test]
    fn malformed_records_render_as_empty_text() {
        let state = State::new();
        let records = vec![NotificationRecord::default()];

        let Body::Items(items) = body(&state, &records) else {
            panic!("expected items");
        };
        assert_eq!(items[0].message, "");
        assert_eq!(items[0].timestamp, "");
        assert_eq!(items[0].key, "-0");
    }

    #[test]
    fn body_fades_in_on_mount() {
        let now = Instant::now();
        let state = State::mounted_at(now);
        assert!(state.is_visible());
        assert!(state.is_animating(now));
        assert!(!state.is_animating(now + motion::LIST_BODY.duration));
    }

    #[test]
    fn toggling_animates_for_the_body_duration() {
        let now = Instant::now();
        let mut state = State::mounted_at(now);
        let settled = now + motion::LIST_BODY.duration;
        assert!(!state.is_animating(settled));

        state.toggle_visibility(settled);
        assert!(state.is_animating(settled + Duration::from_millis(100)));
        assert!(!state.is_animating(settled + motion::LIST_BODY.duration));
    }

    #[test]
    fn reshowing_mid_hide_keeps_current_opacity() {
        let now = Instant::now();
        let mut state = State::mounted_at(now);
        let settled = now + motion::LIST_BODY.duration;

        state.toggle_visibility(settled);
        let at = settled + Duration::from_millis(100);
        let before = state.body_transition.map(|t| t.opacity(at)).unwrap_or_default();

        state.toggle_visibility(at);
        let after = state.body_transition.map(|t| t.opacity(at)).unwrap_or_default();

        assert!(state.is_visible());
        assert!((before - 0.6).abs() < 1e-3);
        assert!((after - before).abs() < 1e-3);
    }

    #[test]
    fn list_view_renders_in_every_state() {
        let i18n = english();
        let now = Instant::now();
        let records = vec![record("A", "t1")];
        let mut state = State::new();

        for _ in 0..2 {
            let _ = view(ViewContext {
                i18n: &i18n,
                state: &state,
                notifications: &records,
                now,
            });
            let _ = view(ViewContext {
                i18n: &i18n,
                state: &state,
                notifications: &[],
                now: now + Duration::from_secs(1),
            });
            state.toggle_visibility(now);
        }
    }
}
