//! Tip theme - semantic colors and styling.
//!
//! The card never queries ambient global state for colors; the host passes a
//! [`Theme`] in at construction time. The default palette is a dark scheme.

use crate::primitives::Color;

/// Semantic colors and default styling for a [`crate::TipCard`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Container background when the configuration supplies none.
    pub background_secondary: Color,
    /// Title text color.
    pub label: Color,
    /// Message text color.
    pub label_secondary: Color,
    /// Close glyph color.
    pub label_quaternary: Color,
    /// Action label and image tint color.
    pub tint: Color,
    /// Separator hairline color.
    pub separator: Color,
    /// Container corner radius when the configuration supplies none.
    pub corner_radius: f32,
}

impl Theme {
    // Default dark palette.
    pub const BG_SECONDARY: Color = Color::rgb(0.12, 0.12, 0.14);
    pub const FG_PRIMARY: Color = Color::rgb(0.9, 0.9, 0.9);
    pub const FG_SECONDARY: Color = Color::rgb(0.6, 0.6, 0.6);
    pub const FG_MUTED: Color = Color::rgb(0.4, 0.4, 0.4);
    pub const ACCENT_PRIMARY: Color = Color::rgb(0.2, 0.6, 1.0);
    pub const BORDER_DEFAULT: Color = Color::rgb(0.2, 0.2, 0.22);

    pub const DEFAULT_CORNER_RADIUS: f32 = 12.0;
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_secondary: Self::BG_SECONDARY,
            label: Self::FG_PRIMARY,
            label_secondary: Self::FG_SECONDARY,
            label_quaternary: Self::FG_MUTED,
            tint: Self::ACCENT_PRIMARY,
            separator: Self::BORDER_DEFAULT,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
        }
    }
}
