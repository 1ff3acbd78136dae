//! tipcard: a framework-independent tip popover widget
//!
//! One component, [`TipCard`], renders an on-screen tip: an optional image, a
//! title, an optional message, a close button, and a stack of action rows
//! with hairline separators, all manually laid out and sized to fit content.
//!
//! # Architecture
//!
//! ```text
//! host sets Configuration -> reconcile child elements -> layout pass -> intrinsic size
//! ```
//!
//! The card holds no reference to any UI framework: it is a layout-owning
//! object the host composes into its own view tree. The host forwards bounds
//! changes ([`TipCard::set_bounds`]) and presses ([`TipCard::handle_press`]),
//! and reads computed frames and [`TipCard::intrinsic_content_size`] back to
//! render and size the card. All geometry is deterministic: text is measured
//! with a character-metric model rather than a font shaper.
//!
//! # Usage
//!
//! ```
//! use tipcard::{Action, Configuration, Rect, Theme, TipCard};
//!
//! let mut card = TipCard::new(Rect::new(0.0, 0.0, 300.0, 0.0), Theme::default());
//! card.set_close_handler(|| { /* host dismisses the tip */ });
//! card.set_configuration(Some(
//!     Configuration::new("Save your work")
//!         .message("Your edits are kept locally until you sync.")
//!         .action(Action::new("Sync now", || { /* host starts a sync */ })),
//! ));
//!
//! let size = card.intrinsic_content_size();
//! assert!(size.height > 0.0);
//! ```

// Core primitives
pub mod primitives;

// Text metrics and measurement
pub mod metrics;

// Bitmap content
pub mod image;

// Styling
pub mod theme;

// Content configuration
pub mod config;

// Child element descriptors
pub mod elements;

// The component
pub mod card;

// Re-export core types
pub use card::{Press, TipCard};
pub use config::{Action, Background, Configuration};
pub use elements::{ActionButton, CloseButton, ImageElement, Separator, TextElement};
pub use image::{ImageError, TipImage};
pub use metrics::TextStyle;
pub use primitives::{Color, Point, Rect, Size};
pub use theme::Theme;
