// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Every handler advances the shared clock before acting, so transitions
//! started here line up with the ticks that animate them.

use super::gallery::{self, Gallery};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::list;
use std::time::Instant;

/// Mutable application state borrowed by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub list: &'a mut list::State,
    pub gallery: &'a mut Gallery,
    pub now: &'a mut Instant,
}

impl UpdateContext<'_> {
    /// Moves the clock forward to `now`; it never runs backwards.
    fn advance(&mut self, now: Instant) -> Instant {
        *self.now = (*self.now).max(now);
        *self.now
    }
}

pub fn handle_list_message(ctx: &mut UpdateContext<'_>, message: list::Message, now: Instant) {
    let now = ctx.advance(now);
    list::update(ctx.list, message, now);
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
    now: Instant,
) {
    let now = ctx.advance(now);
    gallery::update(ctx.gallery, ctx.i18n, message, now);
}

/// Drops cards whose exit has finished.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    let now = ctx.advance(now);
    ctx.gallery.prune(now);
}
