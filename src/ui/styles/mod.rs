// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the notification components.
//!
//! Every style takes an `alpha` factor so the same function serves the
//! resting state and the fade of an enter/exit transition.

pub mod button;
pub mod container;
pub mod text;

use iced::Color;

/// Scales a color's alpha channel by `alpha`.
#[must_use]
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}
