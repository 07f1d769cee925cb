// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use super::faded;
use crate::ui::design_tokens::palette;
use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

/// Primary text of the list panel.
pub fn primary(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(faded(ColorScheme::for_theme(theme).text_primary, alpha)),
    }
}

/// Muted text: list timestamps and the empty placeholder.
pub fn secondary(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(faded(ColorScheme::for_theme(theme).text_secondary, alpha)),
    }
}

/// Timestamp line inside a card. Cards keep a light tint in every theme, so
/// this does not follow the theme.
pub fn card_timestamp(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(faded(palette::GRAY_600, alpha)),
    }
}
