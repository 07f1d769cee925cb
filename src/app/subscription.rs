// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::config::ANIMATION_TICK_MS;
use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Emits `Tick` at the animation frame rate while something is animating,
/// and nothing otherwise.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
