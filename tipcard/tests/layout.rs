//! End-to-end layout tests for the tip card.
//!
//! These drive the component the way a host would: construct, assign a
//! configuration, read frames and intrinsic size back.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use tipcard::{
    Action, Configuration, Point, Press, Rect, Size, TextStyle, Theme, TipCard, TipImage,
};

const WIDTH: f32 = 300.0;

fn card() -> TipCard {
    TipCard::new(Rect::new(0.0, 0.0, WIDTH, 0.0), Theme::default())
}

fn square_image() -> TipImage {
    TipImage::from_rgba(40, 40, vec![0x80; 40 * 40 * 4]).unwrap()
}

/// Collect every computed frame, in the fixed layout order.
fn frames(card: &TipCard) -> Vec<Rect> {
    let mut all = vec![
        card.close_button().frame(),
        card.image().frame(),
        card.title().frame(),
        card.message().frame(),
    ];
    all.extend(card.action_buttons().iter().map(|b| b.frame()));
    all.extend(card.separators().iter().map(|s| s.frame()));
    all
}

// =========================================================================
// Scenario A: title only
// =========================================================================

#[test]
fn title_only_layout() {
    let mut card = card();
    card.set_configuration(Some(Configuration::new("Hello")));

    let title = card.title().frame();
    assert_eq!(title.origin(), Point::new(13.0, 14.0));
    assert_eq!(title.width, 5.0 * TextStyle::Headline.char_width());

    // Title fits within the close-button allowance.
    let close = card.close_button().frame();
    assert!(title.width <= WIDTH - close.width - 28.0);

    // Message, action, and separator regions are zero-sized.
    assert_eq!(card.message().frame().size(), Size::ZERO);
    assert_eq!(card.image().frame(), Rect::ZERO);
    assert!(card.action_buttons().is_empty());
    assert!(card.separators().is_empty());

    // Title is the bottommost element.
    assert_eq!(card.intrinsic_content_size().height, title.bottom() + 16.0);
}

// =========================================================================
// Scenario B: title + square image
// =========================================================================

#[test]
fn square_image_shifts_title() {
    let mut card = card();
    card.set_configuration(Some(Configuration::new("Hello").image(square_image())));

    let image = card.image().frame();
    assert_eq!(image.origin(), Point::new(9.0, 15.0));
    assert_eq!(image.width, 52.333);
    assert_eq!(image.height, 52.333); // 1:1 aspect ratio

    let title = card.title().frame();
    assert_eq!(title.x, image.right() + 8.0);
    assert!((title.x - 69.333).abs() < 1e-3);
    assert_eq!(title.y, 14.0);

    // The image extends furthest down.
    assert_eq!(card.intrinsic_content_size().height, image.bottom() + 18.0);
}

// =========================================================================
// Scenario C: two actions
// =========================================================================

#[test]
fn two_actions_stack_without_gaps() {
    let mut card = card();
    card.set_configuration(Some(
        Configuration::new("Title")
            .action(Action::new("A1", || {}))
            .action(Action::new("A2", || {})),
    ));

    assert_eq!(card.action_buttons().len(), 2);
    assert_eq!(card.separators().len(), 2);
    assert_eq!(card.action_buttons()[0].title(), "A1");
    assert_eq!(card.action_buttons()[1].title(), "A2");

    let title = card.title().frame();
    let b0 = card.action_buttons()[0].frame();
    let b1 = card.action_buttons()[1].frame();

    // No message: the chain continues from the title's bottom edge.
    assert_eq!(b0.y, title.bottom() + 9.0);
    assert_eq!(b1.y, b0.bottom());
    assert_eq!(b0.height, TextStyle::Body.line_height() + 10.0);

    // Separators sit at the top edge of their rows and span the same width.
    for (separator, button) in card.separators().iter().zip(card.action_buttons()) {
        let s = separator.frame();
        let b = button.frame();
        assert_eq!(s.y, b.y);
        assert_eq!(s.x, b.x);
        assert_eq!(s.width, b.width);
        assert!((s.height - 1.0 / 3.0).abs() < 1e-6);
    }

    // A row is the bottommost element.
    assert_eq!(card.intrinsic_content_size().height, b1.bottom() + 2.0);
}

// =========================================================================
// Scenario D: wrapping message pushes actions down
// =========================================================================

#[test]
fn message_growth_moves_first_action_down() {
    let long_message = "This explanation is deliberately long enough that it cannot \
                        possibly fit on a single line at this container width.";

    let mut short_card = card();
    short_card.set_configuration(Some(
        Configuration::new("Title")
            .message("Short note.")
            .action(Action::new("Go", || {})),
    ));
    let short_message = short_card.message().frame();
    let short_button_y = short_card.action_buttons()[0].frame().y;
    assert_eq!(short_button_y, short_message.bottom() + 9.0);

    let mut long_card = card();
    long_card.set_configuration(Some(
        Configuration::new("Title")
            .message(long_message)
            .action(Action::new("Go", || {})),
    ));
    let long_message_frame = long_card.message().frame();
    let long_button_y = long_card.action_buttons()[0].frame().y;

    assert!(long_message_frame.height > short_message.height);
    assert_eq!(long_button_y, long_message_frame.bottom() + 9.0);

    // The button moved down by exactly the message height growth.
    let height_growth = long_message_frame.height - short_message.height;
    assert!((long_button_y - short_button_y - height_growth).abs() < 1e-3);
}

// =========================================================================
// Vertical extent without actions
// =========================================================================

#[test]
fn zero_actions_extent_ends_at_message() {
    let mut card = card();
    card.set_configuration(Some(
        Configuration::new("Title").message("Something helpful."),
    ));

    let message = card.message().frame();
    assert_eq!(message.y, card.title().frame().bottom() + 4.0);
    assert_eq!(card.intrinsic_content_size().height, message.bottom() + 16.0);
}

// =========================================================================
// Round-trip and idempotence
// =========================================================================

#[test]
fn reconfiguring_after_clear_leaves_no_residue() {
    let build = || {
        Configuration::new("Title")
            .image(square_image())
            .message("A message")
            .action(Action::new("One", || {}))
            .action(Action::new("Two", || {}))
    };

    let mut once = card();
    once.set_configuration(Some(build()));

    let mut round_trip = card();
    round_trip.set_configuration(Some(build()));
    round_trip.set_configuration(None);
    round_trip.set_configuration(Some(build()));

    assert_eq!(frames(&once), frames(&round_trip));
    assert_eq!(
        once.intrinsic_content_size(),
        round_trip.intrinsic_content_size()
    );
}

#[test]
fn relayout_without_changes_is_idempotent() {
    let mut card = card();
    card.set_configuration(Some(
        Configuration::new("Title")
            .message("A message")
            .action(Action::new("One", || {})),
    ));

    let before = frames(&card);
    card.set_bounds(card.bounds());
    card.set_bounds(card.bounds());
    assert_eq!(before, frames(&card));
}

#[test]
fn bounds_change_relayouts() {
    let mut card = card();
    card.set_configuration(Some(Configuration::new("Title")));

    let close_before = card.close_button().frame();
    card.set_bounds(Rect::new(0.0, 0.0, 500.0, 0.0));
    let close_after = card.close_button().frame();

    assert_eq!(close_after.width, close_before.width);
    assert!((close_after.right() - (500.0 - 13.0)).abs() < 1e-3);
}

// =========================================================================
// Press dispatch
// =========================================================================

#[test]
fn action_press_invokes_handler_once_per_activation() {
    let count = Rc::new(Cell::new(0u32));
    let seen = count.clone();

    let mut card = card();
    card.set_configuration(Some(
        Configuration::new("Title")
            .action(Action::new("First", move || seen.set(seen.get() + 1)))
            .action(Action::new("Second", || {})),
    ));

    let b0 = card.action_buttons()[0].frame();
    let inside = Point::new(b0.x + 5.0, b0.y + 5.0);

    assert_eq!(card.handle_press(inside), Press::Action(0));
    assert_eq!(count.get(), 1);

    // No debouncing: every activation invokes the handler again.
    assert_eq!(card.handle_press(inside), Press::Action(0));
    assert_eq!(count.get(), 2);

    let b1 = card.action_buttons()[1].frame();
    assert_eq!(
        card.handle_press(Point::new(b1.x + 5.0, b1.y + 5.0)),
        Press::Action(1)
    );
    assert_eq!(count.get(), 2);
}

#[test]
fn close_press_runs_attached_handler() {
    let closed = Rc::new(Cell::new(false));
    let seen = closed.clone();

    let mut card = card();
    card.set_close_handler(move || seen.set(true));
    card.set_configuration(Some(Configuration::new("Title")));

    let close = card.close_button().frame();
    let press = card.handle_press(Point::new(close.x + 1.0, close.y + 1.0));
    assert_eq!(press, Press::Close);
    assert!(closed.get());

    assert_eq!(card.handle_press(Point::new(0.5, 0.5)), Press::Ignored);
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #[test]
    fn derived_lists_stay_paired_and_aligned(
        title in "[a-zA-Z ]{1,40}",
        message in proptest::option::of("[a-zA-Z ]{1,120}"),
        action_count in 0usize..5,
        width in 120.0f32..420.0,
    ) {
        let mut card = TipCard::new(Rect::new(0.0, 0.0, width, 0.0), Theme::default());

        let mut config = Configuration::new(title);
        if let Some(message) = message {
            config = config.message(message);
        }
        for i in 0..action_count {
            config = config.action(Action::new(format!("Action {i}"), || {}));
        }
        card.set_configuration(Some(config));

        // One separator per button, always.
        prop_assert_eq!(card.separators().len(), card.action_buttons().len());
        prop_assert_eq!(card.action_buttons().len(), action_count);

        // Buttons and separators share left edge and width; separators sit
        // at their button's top edge.
        for (button, separator) in card.action_buttons().iter().zip(card.separators()) {
            prop_assert_eq!(button.frame().x, separator.frame().x);
            prop_assert_eq!(button.frame().width, separator.frame().width);
            prop_assert_eq!(button.frame().y, separator.frame().y);
        }

        // Rows stack with no gap.
        for pair in card.action_buttons().windows(2) {
            prop_assert!((pair[1].frame().y - pair[0].frame().bottom()).abs() < 1e-4);
        }

        // Relayout with unchanged inputs is idempotent.
        let before = frames(&card);
        card.set_bounds(card.bounds());
        prop_assert_eq!(before, frames(&card));

        // The card always reports a positive content height.
        prop_assert!(card.intrinsic_content_size().height > 0.0);
    }
}
