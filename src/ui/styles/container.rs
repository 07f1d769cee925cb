// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::faded;
use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::notifications::StyleClass;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Shadow, Theme};

/// Tinted card surface for a severity class.
pub fn card(class: StyleClass, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let colors = class.colors();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(colors.background, alpha))),
        text_color: Some(faded(colors.text, alpha)),
        border: Border {
            color: faded(colors.border, alpha),
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: Shadow {
            color: faded(shadow::SM.color, alpha),
            ..shadow::SM
        },
        ..Default::default()
    }
}

/// Rounded panel hosting the notification list.
pub fn list_panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::XXL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Thin divider drawn under each list item.
pub fn list_divider(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(faded(colors.divider, alpha))),
            ..Default::default()
        }
    }
}
