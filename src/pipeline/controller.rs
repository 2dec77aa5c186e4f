//! Controller - input events to component operations.
//!
//! Routing is two steps so each can be tested alone: `action_for` decides
//! what an event means given the current focus and the last painted frame,
//! `apply` performs it against the component tree.

use super::input::{InputEvent, KeyboardEvent, MouseAction, MouseButton, MouseEvent};
use super::view::{Frame, HitTarget};
use crate::components::{App, Tab, TextField};
use crate::review::{Rating, Recommendation};
use crate::state::focus::{FocusState, FormControl};

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One thing the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectVariant(usize),
    NextVariant,
    PreviousVariant,
    AddToCart,
    RemoveFromCart,
    SelectTab(Tab),
    ToggleTab,
    Focus(FormControl),
    FocusNext,
    FocusPrevious,
    Blur,
    Type(TextField, char),
    Backspace(TextField),
    CycleRecommend,
    SetRecommend(Recommendation),
    RatingUp,
    RatingDown,
    SetRating(Rating),
    Submit,
    Quit,
}

/// Route one event: decide, then apply.
pub fn route_event(app: &App, focus: &FocusState, frame: &Frame, event: &InputEvent) -> Flow {
    match action_for(app, focus, frame, event) {
        Some(action) => apply(app, focus, action),
        None => Flow::Continue,
    }
}

/// What `event` means right now, if anything.
pub fn action_for(
    app: &App,
    focus: &FocusState,
    frame: &Frame,
    event: &InputEvent,
) -> Option<Action> {
    match event {
        InputEvent::Key(key) if key.is_press() => key_action(app, focus, key),
        InputEvent::Mouse(mouse) => mouse_action(frame, mouse),
        _ => None,
    }
}

fn key_action(app: &App, focus: &FocusState, key: &KeyboardEvent) -> Option<Action> {
    if key.modifiers.ctrl && key.key == "c" {
        return Some(Action::Quit);
    }

    let Some(control) = focus.focused() else {
        return match key.key.as_str() {
            "ArrowLeft" => Some(Action::PreviousVariant),
            "ArrowRight" => Some(Action::NextVariant),
            "a" => Some(Action::AddToCart),
            "r" => Some(Action::RemoveFromCart),
            "t" => Some(Action::ToggleTab),
            "q" => Some(Action::Quit),
            "Tab" if app.product().tabs().is_showing(Tab::MakeAReview) => {
                Some(Action::Focus(FormControl::ORDER[0]))
            }
            _ => None,
        };
    };

    match key.key.as_str() {
        "Tab" if key.modifiers.shift => return Some(Action::FocusPrevious),
        "Tab" => return Some(Action::FocusNext),
        "BackTab" => return Some(Action::FocusPrevious),
        "Escape" => return Some(Action::Blur),
        "Enter" => return Some(Action::Submit),
        _ => {}
    }

    match control {
        FormControl::Name | FormControl::Review => {
            let field = if control == FormControl::Name {
                TextField::Name
            } else {
                TextField::Review
            };
            if key.key == "Backspace" {
                Some(Action::Backspace(field))
            } else if key.modifiers.ctrl || key.modifiers.alt {
                None
            } else {
                key.char().map(|c| Action::Type(field, c))
            }
        }
        FormControl::Recommend => match key.key.as_str() {
            "ArrowLeft" | "ArrowRight" | " " => Some(Action::CycleRecommend),
            _ => None,
        },
        // Choices are drawn 5..1 left to right.
        FormControl::Rating => match key.key.as_str() {
            "ArrowLeft" => Some(Action::RatingUp),
            "ArrowRight" => Some(Action::RatingDown),
            _ => None,
        },
        FormControl::Submit => None,
    }
}

fn mouse_action(frame: &Frame, mouse: &MouseEvent) -> Option<Action> {
    let target = frame.hit_test(mouse.x, mouse.y)?;
    match mouse.action {
        MouseAction::Move => match target {
            HitTarget::Swatch(index) => Some(Action::SelectVariant(index)),
            _ => None,
        },
        MouseAction::Down if mouse.button == MouseButton::Left => Some(match target {
            HitTarget::Swatch(index) => Action::SelectVariant(index),
            HitTarget::AddToCart => Action::AddToCart,
            HitTarget::RemoveFromCart => Action::RemoveFromCart,
            HitTarget::Tab(tab) => Action::SelectTab(tab),
            HitTarget::Control(FormControl::Submit) => Action::Submit,
            HitTarget::Control(control) => Action::Focus(control),
            HitTarget::Recommend(choice) => Action::SetRecommend(choice),
            HitTarget::Rating(choice) => Action::SetRating(choice),
        }),
        _ => None,
    }
}

/// Perform `action` against the tree.
pub fn apply(app: &App, focus: &FocusState, action: Action) -> Flow {
    let product = app.product();
    let tabs = product.tabs();
    let form = tabs.form();

    match action {
        Action::SelectVariant(index) => {
            if let Err(err) = product.select_variant(index) {
                tracing::debug!(%err, "ignored variant selection");
            }
        }
        Action::NextVariant => product.select_next_variant(),
        Action::PreviousVariant => product.select_previous_variant(),
        Action::AddToCart => {
            product.add_to_cart();
        }
        Action::RemoveFromCart => product.remove_from_cart(),
        Action::SelectTab(tab) => tabs.select_tab(tab),
        Action::ToggleTab => tabs.toggle_tab(),
        Action::Focus(control) => focus.focus(control),
        Action::FocusNext => focus.focus_next(),
        Action::FocusPrevious => focus.focus_previous(),
        Action::Blur => focus.blur(),
        Action::Type(field, c) => form.push_char(field, c),
        Action::Backspace(field) => form.pop_char(field),
        Action::CycleRecommend => form.cycle_recommend(),
        Action::SetRecommend(choice) => form.set_recommend(Some(choice)),
        Action::RatingUp => form.rating_up(),
        Action::RatingDown => form.rating_down(),
        Action::SetRating(choice) => form.set_rating(Some(choice)),
        Action::Submit => {
            // Errors are stored on the form and rendered from there.
            let _ = form.submit();
        }
        Action::Quit => return Flow::Quit,
    }

    // Focus never outlives the form it points into.
    if !tabs.is_showing(Tab::MakeAReview) && focus.has_focus() {
        focus.blur();
    }
    Flow::Continue
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::pipeline::input::Modifiers;
    use crate::pipeline::view::render_app;

    fn setup() -> (App, FocusState) {
        (App::demo(&StoreConfig::default()).unwrap(), FocusState::new())
    }

    fn press(app: &App, focus: &FocusState, key: &str) -> Flow {
        let frame = render_app(app, focus);
        route_event(app, focus, &frame, &InputEvent::Key(KeyboardEvent::new(key)))
    }

    fn type_text(app: &App, focus: &FocusState, text: &str) {
        for c in text.chars() {
            press(app, focus, &c.to_string());
        }
    }

    fn region_of(frame: &Frame, target: HitTarget) -> (u16, u16) {
        let region = frame
            .hit_regions()
            .into_iter()
            .find(|r| r.target == target)
            .unwrap();
        (region.x, region.y)
    }

    #[test]
    fn test_quit_keys() {
        let (app, focus) = setup();
        assert_eq!(press(&app, &focus, "q"), Flow::Quit);

        let frame = render_app(&app, &focus);
        let ctrl_c = InputEvent::Key(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert_eq!(route_event(&app, &focus, &frame, &ctrl_c), Flow::Quit);
    }

    #[test]
    fn test_storefront_shortcuts() {
        let (app, focus) = setup();

        press(&app, &focus, "ArrowRight");
        assert_eq!(app.product().selected_index(), 1);
        press(&app, &focus, "ArrowLeft");
        assert_eq!(app.product().selected_index(), 0);

        press(&app, &focus, "a");
        press(&app, &focus, "a");
        assert_eq!(app.cart_count(), 2);
        press(&app, &focus, "r");
        assert_eq!(app.cart_count(), 0);

        press(&app, &focus, "t");
        assert!(app.product().tabs().is_showing(Tab::MakeAReview));
    }

    #[test]
    fn test_release_ignored() {
        let (app, focus) = setup();
        let frame = render_app(&app, &focus);
        let mut event = KeyboardEvent::new("a");
        event.state = crate::pipeline::input::KeyState::Release;
        assert_eq!(action_for(&app, &focus, &frame, &InputEvent::Key(event)), None);
    }

    #[test]
    fn test_tab_needs_visible_form() {
        let (app, focus) = setup();
        press(&app, &focus, "Tab");
        assert!(!focus.has_focus());

        press(&app, &focus, "t");
        press(&app, &focus, "Tab");
        assert_eq!(focus.focused(), Some(FormControl::Name));
    }

    #[test]
    fn test_keyboard_review_submission() {
        let (app, focus) = setup();
        press(&app, &focus, "t");
        press(&app, &focus, "Tab");

        type_text(&app, &focus, "Alicee");
        press(&app, &focus, "Backspace");
        press(&app, &focus, "Tab");
        type_text(&app, &focus, "Great!");
        press(&app, &focus, "Tab");
        press(&app, &focus, "ArrowRight");
        press(&app, &focus, "Tab");
        press(&app, &focus, "ArrowLeft");
        assert_eq!(focus.focused(), Some(FormControl::Rating));

        // Shortcut letters are text while a field has focus.
        assert_eq!(app.cart_count(), 0);

        assert_eq!(press(&app, &focus, "Enter"), Flow::Continue);

        let reviews = app.product().reviews();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].name, "Alice");
        assert_eq!(reviews[0].review, "Great!");
        assert_eq!(reviews[0].recommend, Recommendation::Yes);
        assert_eq!(reviews[0].rating.value(), 5);
        assert_eq!(app.product().tabs().form().name(), "");
    }

    #[test]
    fn test_chorded_letters_do_not_type() {
        let (app, focus) = setup();
        press(&app, &focus, "t");
        press(&app, &focus, "Tab");

        let frame = render_app(&app, &focus);
        let alt = Modifiers { alt: true, ..Modifiers::default() };
        for event in [
            KeyboardEvent::with_modifiers("a", Modifiers::ctrl()),
            KeyboardEvent::with_modifiers("r", alt),
        ] {
            assert_eq!(action_for(&app, &focus, &frame, &InputEvent::Key(event)), None);
        }

        let shifted = KeyboardEvent::with_modifiers("A", Modifiers::shift());
        route_event(&app, &focus, &frame, &InputEvent::Key(shifted));
        assert_eq!(app.product().tabs().form().name(), "A");
    }

    #[test]
    fn test_rating_arrows_follow_display_order() {
        let (app, focus) = setup();
        press(&app, &focus, "t");
        focus.focus(FormControl::Rating);

        press(&app, &focus, "ArrowRight");
        assert_eq!(app.product().tabs().form().rating().map(Rating::value), Some(5));
        press(&app, &focus, "ArrowRight");
        assert_eq!(app.product().tabs().form().rating().map(Rating::value), Some(4));
        press(&app, &focus, "ArrowLeft");
        assert_eq!(app.product().tabs().form().rating().map(Rating::value), Some(5));
    }

    #[test]
    fn test_escape_blurs() {
        let (app, focus) = setup();
        press(&app, &focus, "t");
        press(&app, &focus, "Tab");
        press(&app, &focus, "Escape");
        assert!(!focus.has_focus());

        // Back to shortcuts.
        press(&app, &focus, "a");
        assert_eq!(app.cart_count(), 1);
    }

    #[test]
    fn test_enter_with_empty_draft_sets_errors() {
        let (app, focus) = setup();
        press(&app, &focus, "t");
        press(&app, &focus, "Tab");
        press(&app, &focus, "Enter");

        assert!(app.product().reviews().is_empty());
        assert_eq!(app.product().tabs().form().errors().len(), 4);
    }

    #[test]
    fn test_hover_selects_swatch() {
        let (app, focus) = setup();
        let frame = render_app(&app, &focus);
        let (x, y) = region_of(&frame, HitTarget::Swatch(1));

        let flow = route_event(&app, &focus, &frame, &InputEvent::Mouse(MouseEvent::move_to(x, y)));
        assert_eq!(flow, Flow::Continue);
        assert_eq!(app.product().selected_index(), 1);
        assert_eq!(app.product().image(), "./images/vmSocks-blue.png");
    }

    #[test]
    fn test_hover_elsewhere_does_nothing() {
        let (app, focus) = setup();
        let frame = render_app(&app, &focus);
        let (x, y) = region_of(&frame, HitTarget::AddToCart);

        let event = InputEvent::Mouse(MouseEvent::move_to(x, y));
        assert_eq!(action_for(&app, &focus, &frame, &event), None);
        assert_eq!(app.cart_count(), 0);
    }

    #[test]
    fn test_click_buttons() {
        let (app, focus) = setup();
        let frame = render_app(&app, &focus);

        let (x, y) = region_of(&frame, HitTarget::AddToCart);
        route_event(&app, &focus, &frame, &InputEvent::Mouse(MouseEvent::down(MouseButton::Left, x, y)));
        assert_eq!(app.cart_count(), 1);

        let (x, y) = region_of(&frame, HitTarget::RemoveFromCart);
        route_event(&app, &focus, &frame, &InputEvent::Mouse(MouseEvent::down(MouseButton::Left, x, y)));
        assert_eq!(app.cart_count(), 0);

        let (x, y) = region_of(&frame, HitTarget::Tab(Tab::MakeAReview));
        let right = InputEvent::Mouse(MouseEvent::down(MouseButton::Right, x, y));
        assert_eq!(action_for(&app, &focus, &frame, &right), None);
    }

    #[test]
    fn test_click_form_controls() {
        let (app, focus) = setup();
        app.product().tabs().select_tab(Tab::MakeAReview);
        let frame = render_app(&app, &focus);

        let click = |target| {
            let (x, y) = region_of(&frame, target);
            route_event(&app, &focus, &frame, &InputEvent::Mouse(MouseEvent::down(MouseButton::Left, x, y)))
        };

        click(HitTarget::Control(FormControl::Review));
        assert_eq!(focus.focused(), Some(FormControl::Review));

        click(HitTarget::Recommend(Recommendation::No));
        assert_eq!(app.product().tabs().form().recommend(), Some(Recommendation::No));

        let three = Rating::new(3).unwrap();
        click(HitTarget::Rating(three));
        assert_eq!(app.product().tabs().form().rating(), Some(three));

        click(HitTarget::Control(FormControl::Submit));
        assert_eq!(
            app.product().tabs().form().errors().len(),
            2,
            "name and review still missing"
        );
    }

    #[test]
    fn test_leaving_form_tab_drops_focus() {
        let (app, focus) = setup();
        press(&app, &focus, "t");
        press(&app, &focus, "Tab");
        assert!(focus.has_focus());

        apply(&app, &focus, Action::SelectTab(Tab::Reviews));
        assert!(!focus.has_focus());
    }
}
