//! Leaf child elements of the tip card.
//!
//! These are the "atoms" the layout pass positions: a close button, an image,
//! two text elements, action buttons, and separators. Unlike a retained view
//! tree there is no hierarchy here; each element is a descriptor plus the
//! frame the most recent layout pass computed for it.

use crate::image::TipImage;
use crate::metrics::{self, TextStyle};
use crate::primitives::{Color, Rect, Size};

// =========================================================================
// TextElement
// =========================================================================

/// A multi-line text element (title or message).
pub struct TextElement {
    text: String,
    style: TextStyle,
    color: Color,
    frame: Rect,
}

impl TextElement {
    /// Create an empty text element with a style and color.
    pub fn new(style: TextStyle, color: Color) -> Self {
        Self {
            text: String::new(),
            style,
            color,
            frame: Rect::ZERO,
        }
    }

    /// Replace the text content.
    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text style.
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Text color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Minimum size needed to render the content wrapped within `max_width`.
    pub fn fitted_size(&self, max_width: f32) -> Size {
        metrics::fitted_text_size(&self.text, self.style, max_width)
    }

    /// Frame computed by the most recent layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

// =========================================================================
// CloseButton
// =========================================================================

/// Horizontal padding around the close glyph.
const CLOSE_PADDING_X: f32 = 4.0;
/// Vertical padding around the close glyph.
const CLOSE_PADDING_Y: f32 = 2.0;

/// The dismiss button in the card's top-right corner.
///
/// Pressing it runs whatever handler the host attached, and nothing else:
/// the card performs no dismissal of its own. This is an intentional hook,
/// not an omission.
pub struct CloseButton {
    glyph: &'static str,
    color: Color,
    frame: Rect,
    handler: Option<Box<dyn FnMut()>>,
}

impl CloseButton {
    pub(crate) fn new(color: Color) -> Self {
        Self {
            glyph: "\u{2715}",
            color,
            frame: Rect::ZERO,
            handler: None,
        }
    }

    /// The glyph rendered on the button.
    pub fn glyph(&self) -> &str {
        self.glyph
    }

    /// Glyph color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Natural fitted size of the button given the available size.
    pub fn fitted_size(&self, _available: Size) -> Size {
        let glyph = metrics::line_size(self.glyph, TextStyle::Footnote);
        Size::new(
            glyph.width + 2.0 * CLOSE_PADDING_X,
            glyph.height + 2.0 * CLOSE_PADDING_Y,
        )
    }

    /// Frame computed by the most recent layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_handler(&mut self, handler: Option<Box<dyn FnMut()>>) {
        self.handler = handler;
    }

    /// Invoke the attached handler, if any.
    pub(crate) fn press(&mut self) {
        if let Some(handler) = self.handler.as_mut() {
            handler();
        }
    }
}

// =========================================================================
// ImageElement
// =========================================================================

/// The leading image slot.
pub struct ImageElement {
    bitmap: Option<TipImage>,
    tint: Color,
    frame: Rect,
}

impl ImageElement {
    pub(crate) fn new(tint: Color) -> Self {
        Self {
            bitmap: None,
            tint,
            frame: Rect::ZERO,
        }
    }

    pub(crate) fn set_bitmap(&mut self, bitmap: Option<TipImage>) {
        self.bitmap = bitmap;
    }

    /// The bitmap currently shown, if any.
    pub fn bitmap(&self) -> Option<&TipImage> {
        self.bitmap.as_ref()
    }

    /// Tint color multiplied with the image.
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Frame computed by the most recent layout pass. [`Rect::ZERO`] when no
    /// bitmap is set.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

// =========================================================================
// ActionButton
// =========================================================================

/// A full-width action row. Purely visual; the handler lives on the
/// corresponding [`crate::Action`] in the card's configuration.
pub struct ActionButton {
    title: String,
    color: Color,
    frame: Rect,
}

impl ActionButton {
    pub(crate) fn new(title: impl Into<String>, color: Color) -> Self {
        Self {
            title: title.into(),
            color,
            frame: Rect::ZERO,
        }
    }

    /// The button's label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Label color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Natural size of the label content (single line, body style).
    pub fn content_size(&self) -> Size {
        metrics::line_size(&self.title, TextStyle::Body)
    }

    /// Frame computed by the most recent layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

// =========================================================================
// Separator
// =========================================================================

/// A decorative hairline rendered at the top edge of an action row. Takes no
/// part in hit-testing.
pub struct Separator {
    color: Color,
    frame: Rect,
}

impl Separator {
    pub(crate) fn new(color: Color) -> Self {
        Self {
            color,
            frame: Rect::ZERO,
        }
    }

    /// Hairline color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Frame computed by the most recent layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}
