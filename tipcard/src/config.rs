//! Tip content configuration.
//!
//! A [`Configuration`] describes everything a [`crate::TipCard`] shows:
//! optional image, required title, optional message, ordered actions, and an
//! optional background override. Assigning one to a card replaces the prior
//! visual state wholesale; there is no diffing.

use crate::image::TipImage;
use crate::primitives::Color;

/// An actionable row in the tip: a label plus the handler invoked when the
/// row is pressed.
///
/// Handlers run synchronously, exactly once per activation, with no
/// debouncing. They are also reentrant-unsafe: a handler that mutates the
/// owning card mid-dispatch gets no guard rails. That matches the host-UI
/// model this component targets (single-threaded, caller-driven).
pub struct Action {
    title: String,
    handler: Box<dyn FnMut()>,
}

impl Action {
    /// Create an action with a label and a press handler.
    pub fn new(title: impl Into<String>, handler: impl FnMut() + 'static) -> Self {
        Self {
            title: title.into(),
            handler: Box::new(handler),
        }
    }

    /// The action's display label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Invoke the handler once.
    pub(crate) fn invoke(&mut self) {
        (self.handler)()
    }
}

/// Container background override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub color: Color,
    pub corner_radius: f32,
}

/// Content of a tip card.
///
/// Only the title is required; absent optional fields collapse their layout
/// region to zero size. Action order is display order.
pub struct Configuration {
    pub image: Option<TipImage>,
    pub title: String,
    pub message: Option<String>,
    pub actions: Vec<Action>,
    pub background: Option<Background>,
}

impl Configuration {
    /// Create a configuration with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            image: None,
            title: title.into(),
            message: None,
            actions: Vec::new(),
            background: None,
        }
    }

    /// Set the image shown at the leading edge.
    pub fn image(mut self, image: TipImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the message shown under the title.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Append an action row. Insertion order is display order.
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Override the container background.
    pub fn background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }
}
