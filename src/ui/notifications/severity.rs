// SPDX-License-Identifier: MPL-2.0
//! Severity levels and their fixed visual variants.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Severity level of a notification card.
///
/// Unknown tags never fail: they resolve to [`Severity::Info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// All severities in display order.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    /// Resolves a type tag. Matching is exact; anything else, including a
    /// missing tag, is `Info`.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("info") => Severity::Info,
            Some("success") => Severity::Success,
            Some("warning") => Severity::Warning,
            Some("error") => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// The tag this severity is selected by.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Looks up the style class and icon for this severity.
    #[must_use]
    pub fn variant(self) -> Variant {
        match self {
            Severity::Info => Variant {
                class: StyleClass::Info,
                icon: "ℹ️",
            },
            Severity::Success => Variant {
                class: StyleClass::Success,
                icon: "✅",
            },
            Severity::Warning => Variant {
                class: StyleClass::Warning,
                icon: "⚠️",
            },
            Severity::Error => Variant {
                class: StyleClass::Error,
                icon: "❌",
            },
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A (style class, icon) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub class: StyleClass,
    pub icon: &'static str,
}

/// Named color treatment of a card container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Info,
    Success,
    Warning,
    Error,
}

impl StyleClass {
    /// Background, border, and text colors for the class.
    #[must_use]
    pub fn colors(self) -> ClassColors {
        match self {
            StyleClass::Info => ClassColors {
                background: palette::BLUE_50,
                border: palette::BLUE_200,
                text: palette::BLUE_800,
            },
            StyleClass::Success => ClassColors {
                background: palette::GREEN_50,
                border: palette::GREEN_200,
                text: palette::GREEN_800,
            },
            StyleClass::Warning => ClassColors {
                background: palette::YELLOW_50,
                border: palette::YELLOW_200,
                text: palette::YELLOW_800,
            },
            StyleClass::Error => ClassColors {
                background: palette::RED_50,
                border: palette::RED_200,
                text: palette::RED_800,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassColors {
    pub background: Color,
    pub border: Color,
    pub text: Color,
}
