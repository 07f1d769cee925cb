// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the notification components.

## Organization

- **Palette**: Neutral grays and the four severity hues (50/200/800 steps)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Enter/exit transition durations and slide distances

## Examples

```
use toastboard::ui::design_tokens::{palette, spacing};

let tint = palette::BLUE_50;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Grayscale
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // #f3f4f6
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // #e5e7eb
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.835, 0.859); // #d1d5db
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9ca3af
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.447, 0.502); // #6b7280
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4b5563
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1f2937
    pub const GRAY_900: Color = Color::from_rgb(0.0667, 0.0941, 0.153); // #111827

    // Info
    pub const BLUE_50: Color = Color::from_rgb(0.937, 0.965, 1.0); // #eff6ff
    pub const BLUE_200: Color = Color::from_rgb(0.749, 0.859, 0.996); // #bfdbfe
    pub const BLUE_800: Color = Color::from_rgb(0.118, 0.251, 0.686); // #1e40af

    // Success
    pub const GREEN_50: Color = Color::from_rgb(0.941, 0.992, 0.957); // #f0fdf4
    pub const GREEN_200: Color = Color::from_rgb(0.733, 0.969, 0.816); // #bbf7d0
    pub const GREEN_800: Color = Color::from_rgb(0.0863, 0.396, 0.204); // #166534

    // Warning
    pub const YELLOW_50: Color = Color::from_rgb(0.996, 0.988, 0.91); // #fefce8
    pub const YELLOW_200: Color = Color::from_rgb(0.996, 0.941, 0.541); // #fef08a
    pub const YELLOW_800: Color = Color::from_rgb(0.522, 0.302, 0.0549); // #854d0e

    // Error
    pub const RED_50: Color = Color::from_rgb(0.996, 0.949, 0.949); // #fef2f2
    pub const RED_200: Color = Color::from_rgb(0.996, 0.792, 0.792); // #fecaca
    pub const RED_800: Color = Color::from_rgb(0.6, 0.106, 0.106); // #991b1b
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.08;
    pub const SHADOW_STRONG: f32 = 0.15;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    /// Maximum width of the notification list panel (28rem).
    pub const LIST_MAX_WIDTH: f32 = 448.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes mirroring the usual xl / sm / xs steps.

    /// Panel title
    pub const TITLE: f32 = 20.0;

    /// Card icon glyph
    pub const ICON: f32 = 20.0;

    /// Messages, button labels
    pub const BODY: f32 = 14.0;

    /// Timestamps, placeholder hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const LG: f32 = 8.0;
    pub const XL: f32 = 12.0;
    pub const XXL: f32 = 16.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW_STRONG,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 6.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// A fade-and-slide transition: opacity runs 0 to 1 while the content
    /// travels `offset` logical pixels back to its resting position.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Motion {
        pub duration: Duration,
        /// Vertical displacement at the transparent end. Positive is downward.
        pub offset: f32,
    }

    /// Notification card: rises 10px into place.
    pub const CARD: Motion = Motion {
        duration: Duration::from_millis(300),
        offset: 10.0,
    };

    /// Notification list body: drops 8px into place.
    pub const LIST_BODY: Motion = Motion {
        duration: Duration::from_millis(250),
        offset: -8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
    }

    #[test]
    fn severity_tints_are_lighter_than_their_text() {
        for (tint, text) in [
            (palette::BLUE_50, palette::BLUE_800),
            (palette::GREEN_50, palette::GREEN_800),
            (palette::YELLOW_50, palette::YELLOW_800),
            (palette::RED_50, palette::RED_800),
        ] {
            assert!(tint.r + tint.g + tint.b > text.r + text.g + text.b);
        }
    }

    #[test]
    fn motions_are_short_and_slide_in_opposite_directions() {
        assert!(motion::CARD.duration.as_millis() < 1000);
        assert!(motion::LIST_BODY.duration.as_millis() < 1000);
        assert!(motion::CARD.offset > 0.0);
        assert!(motion::LIST_BODY.offset < 0.0);
    }
}
