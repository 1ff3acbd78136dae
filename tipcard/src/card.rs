//! The tip card component.
//!
//! [`TipCard`] owns its child elements and lays them out manually in a fixed
//! dependency chain: close button, image, title, message, action buttons,
//! separators. Each step reads only frames computed by earlier steps. The
//! pass runs synchronously whenever the configuration or the bounds change,
//! and ends by recomputing the intrinsic content size.

use tracing::{debug, trace};

use crate::config::Configuration;
use crate::elements::{ActionButton, CloseButton, ImageElement, Separator, TextElement};
use crate::metrics::TextStyle;
use crate::primitives::{Color, Point, Rect, Size};
use crate::theme::Theme;

// Layout constants, in container coordinates (origin top-left, y downward).
const CLOSE_INSET_RIGHT: f32 = 13.0;
const CLOSE_INSET_TOP: f32 = 15.0;
const IMAGE_ORIGIN: Point = Point::new(9.0, 15.0);
const IMAGE_WIDTH: f32 = 52.333;
const TITLE_ORIGIN: Point = Point::new(13.0, 14.0);
const TITLE_IMAGE_GAP: f32 = 8.0;
const TITLE_IMAGE_RAISE: f32 = 1.0;
const TITLE_TRAILING_ALLOWANCE: f32 = 28.0;
const MESSAGE_TRAILING_INSET: f32 = 12.0;
const MESSAGE_TOP_GAP: f32 = 4.0;
const ACTIONS_TOP_GAP: f32 = 9.0;
const ACTION_VERTICAL_PADDING: f32 = 10.0;
const SEPARATOR_HEIGHT: f32 = 1.0 / 3.0;

// Bottom padding added to the intrinsic height, chosen by which element
// extends furthest down.
const IMAGE_BOTTOM_PADDING: f32 = 18.0;
const TITLE_BOTTOM_PADDING: f32 = 16.0;
const CLOSE_BOTTOM_PADDING: f32 = 15.0;
const MESSAGE_BOTTOM_PADDING: f32 = 16.0;
const ROW_BOTTOM_PADDING: f32 = 2.0;

/// Result of dispatching a press into the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// The point hit nothing interactive.
    Ignored,
    /// The close button was pressed. Whatever handler the host attached has
    /// already run; the card itself takes no action.
    Close,
    /// The action row at this index was pressed and its handler invoked.
    Action(usize),
}

/// A tip popover: image, title, message, close button, and a stack of action
/// rows with hairline separators, sized to fit content.
///
/// The card is purely presentational. The host inserts it into its own view
/// tree, forwards bounds changes via [`set_bounds`](Self::set_bounds) and
/// presses via [`handle_press`](Self::handle_press), and reads
/// [`intrinsic_content_size`](Self::intrinsic_content_size) back to size it.
pub struct TipCard {
    bounds: Rect,
    window_width: Option<f32>,
    theme: Theme,
    configuration: Option<Configuration>,

    background_color: Color,
    corner_radius: f32,

    close_button: CloseButton,
    image: ImageElement,
    title: TextElement,
    message: TextElement,
    action_buttons: Vec<ActionButton>,
    separators: Vec<Separator>,

    /// Content height computed by the most recent layout pass.
    content_height: f32,
}

impl TipCard {
    /// Create a card with an initial frame and an explicit theme.
    pub fn new(bounds: Rect, theme: Theme) -> Self {
        let mut card = Self {
            bounds,
            window_width: None,
            theme,
            configuration: None,
            background_color: theme.background_secondary,
            corner_radius: theme.corner_radius,
            close_button: CloseButton::new(theme.label_quaternary),
            image: ImageElement::new(theme.tint),
            title: TextElement::new(TextStyle::Headline, theme.label),
            message: TextElement::new(TextStyle::Subheadline, theme.label_secondary),
            action_buttons: Vec::new(),
            separators: Vec::new(),
            content_height: 0.0,
        };
        card.layout();
        card
    }

    // =====================================================================
    // Configuration reconciliation
    // =====================================================================

    /// Replace the visible content.
    ///
    /// Prior visual state is replaced wholesale: the action button and
    /// separator lists are discarded and rebuilt (value-replaced, never
    /// mutated in place), and a full layout pass runs before this returns.
    pub fn set_configuration(&mut self, configuration: Option<Configuration>) {
        self.image
            .set_bitmap(configuration.as_ref().and_then(|c| c.image.clone()));
        self.title.set_text(
            configuration
                .as_ref()
                .map(|c| c.title.clone())
                .unwrap_or_default(),
        );
        self.message.set_text(
            configuration
                .as_ref()
                .and_then(|c| c.message.clone())
                .unwrap_or_default(),
        );

        let tint = self.theme.tint;
        let separator_color = self.theme.separator;
        self.action_buttons = configuration
            .as_ref()
            .map(|c| {
                c.actions
                    .iter()
                    .map(|action| ActionButton::new(action.title(), tint))
                    .collect()
            })
            .unwrap_or_default();
        self.separators = self
            .action_buttons
            .iter()
            .map(|_| Separator::new(separator_color))
            .collect();

        let background = configuration.as_ref().and_then(|c| c.background);
        self.background_color = background
            .map(|b| b.color)
            .unwrap_or(self.theme.background_secondary);
        self.corner_radius = background
            .map(|b| b.corner_radius)
            .unwrap_or(self.theme.corner_radius);

        debug!(
            actions = self.action_buttons.len(),
            has_image = self.image.bitmap().is_some(),
            has_message = configuration
                .as_ref()
                .is_some_and(|c| c.message.is_some()),
            "reconciled tip configuration"
        );

        self.configuration = configuration;
        self.layout();
    }

    /// The current configuration, if any.
    pub fn configuration(&self) -> Option<&Configuration> {
        self.configuration.as_ref()
    }

    // =====================================================================
    // Host callbacks
    // =====================================================================

    /// Update the card's bounds. Triggers a full layout pass.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout();
    }

    /// Current bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Record the width of the window the card is attached to, or `None`
    /// when detached. Feeds the intrinsic width.
    pub fn set_window_width(&mut self, width: Option<f32>) {
        self.window_width = width;
    }

    /// Intrinsic content size.
    ///
    /// Width is the attached window's width, or `-1.0` when detached (a
    /// sentinel meaning "unknown", not a valid size). Height is the bottom
    /// edge of the bottommost child plus a padding that depends on which
    /// kind of element that is.
    pub fn intrinsic_content_size(&self) -> Size {
        Size::new(self.window_width.unwrap_or(-1.0), self.content_height)
    }

    /// Attach the host's dismiss behavior to the close button.
    pub fn set_close_handler(&mut self, handler: impl FnMut() + 'static) {
        self.close_button.set_handler(Some(Box::new(handler)));
    }

    /// Dispatch a press at `point` (container coordinates).
    ///
    /// Hit-tests the close button first, then the action rows in display
    /// order, and invokes the matching handler synchronously, exactly once.
    /// Handlers are reentrant-unsafe: one that mutates this card from inside
    /// its own invocation gets no guard.
    pub fn handle_press(&mut self, point: Point) -> Press {
        if self.close_button.frame().contains(point) {
            self.close_button.press();
            return Press::Close;
        }
        let hit = self
            .action_buttons
            .iter()
            .position(|button| button.frame().contains(point));
        if let Some(index) = hit {
            if let Some(config) = self.configuration.as_mut() {
                if let Some(action) = config.actions.get_mut(index) {
                    action.invoke();
                }
            }
            return Press::Action(index);
        }
        Press::Ignored
    }

    // =====================================================================
    // Element accessors
    // =====================================================================

    /// The close button handle. Read-only; attach behavior via
    /// [`set_close_handler`](Self::set_close_handler).
    pub fn close_button(&self) -> &CloseButton {
        &self.close_button
    }

    /// The image element.
    pub fn image(&self) -> &ImageElement {
        &self.image
    }

    /// The title element.
    pub fn title(&self) -> &TextElement {
        &self.title
    }

    /// The message element.
    pub fn message(&self) -> &TextElement {
        &self.message
    }

    /// Action buttons, in display order.
    pub fn action_buttons(&self) -> &[ActionButton] {
        &self.action_buttons
    }

    /// Separators, one per action button.
    pub fn separators(&self) -> &[Separator] {
        &self.separators
    }

    /// Effective container background color.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Effective container corner radius.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// The theme the card was created with.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // =====================================================================
    // Layout
    // =====================================================================

    /// Run the full layout pass and recompute the intrinsic height.
    fn layout(&mut self) {
        self.layout_close_button();
        self.layout_image();
        self.layout_title();
        self.layout_message();
        self.layout_action_buttons();
        self.layout_separators();
        self.content_height = self.compute_content_height();
        trace!(
            width = self.bounds.width,
            content_height = self.content_height,
            "tip layout pass"
        );
    }

    fn layout_close_button(&mut self) {
        let size = self.close_button.fitted_size(self.bounds.size());
        let x = self.bounds.width - size.width - CLOSE_INSET_RIGHT;
        self.close_button
            .set_frame(Rect::from_origin_size(Point::new(x, CLOSE_INSET_TOP), size));
    }

    fn layout_image(&mut self) {
        let frame = match self.image.bitmap() {
            Some(bitmap) => {
                let height = IMAGE_WIDTH / bitmap.aspect_ratio();
                Rect::new(IMAGE_ORIGIN.x, IMAGE_ORIGIN.y, IMAGE_WIDTH, height)
            }
            None => Rect::ZERO,
        };
        self.image.set_frame(frame);
    }

    fn layout_title(&mut self) {
        let close_width = self.close_button.frame().width;
        let frame = if self.image.bitmap().is_some() {
            let image_frame = self.image.frame();
            let max_width =
                self.bounds.width - image_frame.right() - close_width - TITLE_TRAILING_ALLOWANCE;
            let size = self.title.fitted_size(max_width);
            Rect::from_origin_size(
                Point::new(
                    image_frame.right() + TITLE_IMAGE_GAP,
                    image_frame.y - TITLE_IMAGE_RAISE,
                ),
                size,
            )
        } else {
            let max_width = self.bounds.width - close_width - TITLE_TRAILING_ALLOWANCE;
            let size = self.title.fitted_size(max_width);
            Rect::from_origin_size(TITLE_ORIGIN, size)
        };
        self.title.set_frame(frame);
    }

    fn layout_message(&mut self) {
        let title_frame = self.title.frame();
        let frame = if self.has_message() {
            let max_width = self.bounds.width - title_frame.x - MESSAGE_TRAILING_INSET;
            let size = self.message.fitted_size(max_width);
            Rect::from_origin_size(
                Point::new(title_frame.x, title_frame.bottom() + MESSAGE_TOP_GAP),
                size,
            )
        } else {
            // Zero-sized but anchored at the title's bottom edge, so its
            // bottom equals its top and the vertical chain continues from
            // the title.
            Rect::new(title_frame.x, title_frame.bottom(), 0.0, 0.0)
        };
        self.message.set_frame(frame);
    }

    fn layout_action_buttons(&mut self) {
        let x = self.title.frame().x;
        let max_width = self.bounds.width - x;
        let mut y = self.message.frame().bottom() + ACTIONS_TOP_GAP;
        for button in &mut self.action_buttons {
            let height = button.content_size().height + ACTION_VERTICAL_PADDING;
            button.set_frame(Rect::new(x, y, max_width, height));
            y += height;
        }
    }

    fn layout_separators(&mut self) {
        let x = self.title.frame().x;
        let width = self.bounds.width - x;
        for (separator, button) in self.separators.iter_mut().zip(self.action_buttons.iter()) {
            separator.set_frame(Rect::new(x, button.frame().y, width, SEPARATOR_HEIGHT));
        }
    }

    /// Bottom edge of the bottommost child plus its kind's padding.
    ///
    /// Candidates are compared in a fixed priority order (image, title,
    /// close button, message, then rows in display order); a later candidate
    /// wins only with a strictly greater bottom edge, which makes exact ties
    /// deterministic.
    fn compute_content_height(&self) -> f32 {
        let mut candidates = vec![
            (self.image.frame().bottom(), IMAGE_BOTTOM_PADDING),
            (self.title.frame().bottom(), TITLE_BOTTOM_PADDING),
            (self.close_button.frame().bottom(), CLOSE_BOTTOM_PADDING),
            (self.message.frame().bottom(), MESSAGE_BOTTOM_PADDING),
        ];
        candidates.extend(
            self.action_buttons
                .iter()
                .map(|b| (b.frame().bottom(), ROW_BOTTOM_PADDING)),
        );
        candidates.extend(
            self.separators
                .iter()
                .map(|s| (s.frame().bottom(), ROW_BOTTOM_PADDING)),
        );

        let (mut bottom, mut padding) = candidates[0];
        for (candidate, pad) in candidates.into_iter().skip(1) {
            if candidate > bottom {
                bottom = candidate;
                padding = pad;
            }
        }
        bottom + padding
    }

    fn has_message(&self) -> bool {
        self.configuration
            .as_ref()
            .is_some_and(|c| c.message.is_some())
    }
}
