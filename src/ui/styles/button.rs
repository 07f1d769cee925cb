// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Pill-shaped header button of the notification list (Hide/Show).
pub fn toggle(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.surface_hover,
        _ => colors.surface_raised,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_primary,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Borderless close button in the corner of a card.
pub fn dismiss(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::GRAY_700,
            _ => palette::GRAY_500,
        };

        button::Style {
            background: None,
            text_color: Color {
                a: alpha,
                ..text_color
            },
            border: Border::default(),
            shadow: shadow::NONE,
            ..button::Style::default()
        }
    }
}
