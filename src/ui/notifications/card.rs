// SPDX-License-Identifier: MPL-2.0
//! Single notification card.
//!
//! A card shows a severity icon, a message, an optional timestamp, and an
//! optional dismiss button. It owns no state: pressing the dismiss button only
//! publishes the caller's `on_close` message, and the parent decides whether
//! the card keeps being rendered.

use super::severity::{Severity, Variant};
use super::transition::Transition;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, font, Element, Font, Length};
use std::time::Instant;

/// Glyph of the dismiss button.
const DISMISS_GLYPH: &str = "✕";

/// Builder for a notification card.
///
/// ```
/// use toastboard::ui::notifications::NotificationCard;
///
/// #[derive(Debug, Clone)]
/// enum Message { Close }
///
/// let card = NotificationCard::new("Your report was successfully uploaded!")
///     .kind("success")
///     .timestamp("2 minutes ago")
///     .on_close(Message::Close);
///
/// assert!(card.contents().dismiss.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct NotificationCard<'a, Message> {
    severity: Severity,
    message: &'a str,
    timestamp: Option<&'a str>,
    on_close: Option<Message>,
    transition: Option<(Transition, Instant)>,
}

/// What a card renders, resolved from its props.
///
/// [`NotificationCard::view`] builds its widget tree from this and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContents<'c, M> {
    pub variant: Variant,
    pub message: &'c str,
    /// Present only for a non-empty timestamp.
    pub timestamp: Option<&'c str>,
    /// Message published by the dismiss button; `None` means no button.
    pub dismiss: Option<M>,
}

impl<'a, Message> NotificationCard<'a, Message> {
    /// Creates an `info` card with the given message.
    pub fn new(message: &'a str) -> Self {
        Self {
            severity: Severity::default(),
            message,
            timestamp: None,
            on_close: None,
            transition: None,
        }
    }

    /// Sets the severity from a type tag; unrecognized tags mean `info`.
    #[must_use]
    pub fn kind(self, tag: &str) -> Self {
        self.severity(Severity::from_tag(Some(tag)))
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn timestamp(self, timestamp: &'a str) -> Self {
        self.timestamp_maybe(Some(timestamp))
    }

    #[must_use]
    pub fn timestamp_maybe(mut self, timestamp: Option<&'a str>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Adds a dismiss button publishing `message` when pressed.
    #[must_use]
    pub fn on_close(self, message: Message) -> Self {
        self.on_close_maybe(Some(message))
    }

    #[must_use]
    pub fn on_close_maybe(mut self, message: Option<Message>) -> Self {
        self.on_close = message;
        self
    }

    /// Renders the card at the point `now` of an enter or exit transition.
    #[must_use]
    pub fn transition(mut self, transition: Transition, now: Instant) -> Self {
        self.transition = Some((transition, now));
        self
    }

    #[must_use]
    pub fn contents(&self) -> CardContents<'a, &Message> {
        self.resolve(self.on_close.as_ref())
    }

    /// Consumes the card into its contents and transition state.
    fn into_parts(mut self) -> (CardContents<'a, Message>, Option<(Transition, Instant)>) {
        let dismiss = self.on_close.take();
        (self.resolve(dismiss), self.transition)
    }

    fn resolve<M>(&self, dismiss: Option<M>) -> CardContents<'a, M> {
        CardContents {
            variant: self.severity.variant(),
            message: self.message,
            timestamp: self.timestamp.filter(|t| !t.is_empty()),
            dismiss,
        }
    }
}

impl<'a, Message> NotificationCard<'a, Message>
where
    Message: Clone + 'a,
{
    /// Builds the widget tree.
    pub fn view(self) -> Element<'a, Message> {
        let (contents, transition) = self.into_parts();
        let (alpha, padding) = match transition {
            Some((transition, now)) => (transition.opacity(now), transition.slide_padding(now)),
            None => (1.0, iced::Padding::ZERO),
        };
        let variant = contents.variant;

        let icon = Text::new(variant.icon)
            .size(typography::ICON)
            .shaping(text::Shaping::Advanced);

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill).push(
            Text::new(contents.message)
                .size(typography::BODY)
                .font(Font {
                    weight: font::Weight::Medium,
                    ..Font::DEFAULT
                }),
        );

        if let Some(timestamp) = contents.timestamp {
            body = body.push(
                Text::new(timestamp)
                    .size(typography::CAPTION)
                    .style(styles::text::card_timestamp(alpha)),
            );
        }

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(icon)
            .push(body);

        if let Some(on_close) = contents.dismiss {
            content = content.push(
                button(
                    Text::new(DISMISS_GLYPH)
                        .size(sizing::ICON_SM)
                        .shaping(text::Shaping::Advanced),
                )
                .on_press(on_close)
                .padding(0.0)
                .style(styles::button::dismiss(alpha)),
            );
        }

        let card = Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::card(variant.class, alpha));

        container(card).padding(padding).into()
    }
}

impl<'a, Message> From<NotificationCard<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(card: NotificationCard<'a, Message>) -> Self {
        card.view()
    }
}
