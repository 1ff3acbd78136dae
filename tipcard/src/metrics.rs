//! Deterministic text metrics and fitted-size measurement.
//!
//! The card is renderer-agnostic: it never talks to a font shaper. Text is
//! measured with a character-metric model (base advance width and line
//! height, scaled linearly per text style) so that layout geometry is exactly
//! reproducible. A host that renders with a real font can substitute its own
//! measurements by adjusting the container width it feeds in.

use unicode_width::UnicodeWidthChar;

use crate::primitives::Size;

// Base metrics at the default font size. Line height includes leading.
pub const CHAR_WIDTH: f32 = 8.4;
pub const LINE_HEIGHT: f32 = 18.0;
pub const BASE_FONT_SIZE: f32 = 14.0;

/// Semantic text style of a child element.
///
/// Mirrors the styles the tip layout uses: a headline title, a subheadline
/// message, body action labels, and a footnote-sized close glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Headline,
    Subheadline,
    Body,
    Footnote,
}

impl TextStyle {
    /// Font size for this style.
    pub fn font_size(self) -> f32 {
        match self {
            TextStyle::Headline => 17.0,
            TextStyle::Subheadline => 15.0,
            TextStyle::Body => 17.0,
            TextStyle::Footnote => 13.0,
        }
    }

    /// Character advance width at this style's font size.
    ///
    /// Metrics scale linearly with font size, so this is a fixed multiple of
    /// the base advance width.
    pub fn char_width(self) -> f32 {
        CHAR_WIDTH * self.font_size() / BASE_FONT_SIZE
    }

    /// Line height at this style's font size.
    pub fn line_height(self) -> f32 {
        LINE_HEIGHT * self.font_size() / BASE_FONT_SIZE
    }
}

/// Estimate display width in cell units (1 for Latin, 2 for CJK, 0 for combining marks).
pub(crate) fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

/// Measure a single line of text with no wrapping.
pub fn line_size(text: &str, style: TextStyle) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }
    Size::new(
        unicode_display_width(text) * style.char_width(),
        style.line_height(),
    )
}

/// Measure text wrapped to fit within `max_width`.
///
/// Returns the minimum size needed to render the wrapped text: the width of
/// the widest produced line and the total height of all lines. Empty text
/// measures as [`Size::ZERO`]. A `max_width` too small for even one column
/// still yields one column per line rather than an empty layout.
pub fn fitted_text_size(text: &str, style: TextStyle, max_width: f32) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }

    let char_width = style.char_width();
    let max_columns = if max_width <= char_width {
        1
    } else {
        (max_width / char_width).floor() as usize
    };

    let lines = textwrap::wrap(text, max_columns);
    let widest = lines
        .iter()
        .map(|line| unicode_display_width(line))
        .fold(0.0, f32::max);

    Size::new(
        widest * char_width,
        lines.len() as f32 * style.line_height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_metrics_scale_linearly() {
        let headline = TextStyle::Headline;
        assert_eq!(headline.char_width(), CHAR_WIDTH * 17.0 / 14.0);
        assert_eq!(headline.line_height(), LINE_HEIGHT * 17.0 / 14.0);

        // Body and headline share a font size in this model.
        assert_eq!(TextStyle::Body.char_width(), headline.char_width());
    }

    #[test]
    fn empty_text_is_zero_sized() {
        assert_eq!(fitted_text_size("", TextStyle::Headline, 300.0), Size::ZERO);
        assert_eq!(line_size("", TextStyle::Footnote), Size::ZERO);
    }

    #[test]
    fn single_line_fits() {
        let size = fitted_text_size("Hello", TextStyle::Headline, 300.0);
        assert_eq!(size.width, 5.0 * TextStyle::Headline.char_width());
        assert_eq!(size.height, TextStyle::Headline.line_height());
    }

    #[test]
    fn narrow_width_forces_wrap() {
        let style = TextStyle::Subheadline;
        // Room for ~6 columns: "hello world" must break into two lines.
        let size = fitted_text_size("hello world", style, style.char_width() * 6.5);
        assert_eq!(size.height, 2.0 * style.line_height());
        assert_eq!(size.width, 5.0 * style.char_width());
    }

    #[test]
    fn wrap_height_grows_with_text() {
        let style = TextStyle::Subheadline;
        let short = fitted_text_size("one line", style, 120.0);
        let long = fitted_text_size(
            "this message is long enough that it has to wrap over several lines",
            style,
            120.0,
        );
        assert!(long.height > short.height);
        let lines = long.height / style.line_height();
        assert!((lines - lines.round()).abs() < 1e-4);
    }

    #[test]
    fn degenerate_width_still_measures() {
        let size = fitted_text_size("hi", TextStyle::Body, 0.0);
        assert!(size.width > 0.0);
        assert!(size.height >= TextStyle::Body.line_height());
    }

    #[test]
    fn cjk_counts_double_width() {
        let ascii = line_size("ab", TextStyle::Body);
        let cjk = line_size("\u{4f60}", TextStyle::Body); // one CJK char, 2 cells
        assert_eq!(ascii.width, cjk.width);
    }
}
