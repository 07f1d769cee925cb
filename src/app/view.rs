// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::gallery::{self, Gallery};
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{list, NotificationRecord};
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub list: &'a list::State,
    pub notifications: &'a [NotificationRecord],
    pub now: Instant,
}

/// Renders the card gallery above the notification list.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let cards = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
        now: ctx.now,
    })
    .map(Message::Gallery);

    let notifications = list::view(list::ViewContext {
        i18n: ctx.i18n,
        state: ctx.list,
        notifications: ctx.notifications,
        now: ctx.now,
    })
    .map(Message::List);

    let column = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::LIST_MAX_WIDTH)
        .push(cards)
        .push(notifications);

    let content = Container::new(column)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
