//! Focus System - Keyboard navigation through the review form
//!
//! Only the review form takes keyboard focus. With nothing focused, keys are
//! storefront shortcuts; with a form control focused, keys edit it.
//!
//! # Example
//!
//! ```ignore
//! let focus = FocusState::new();
//! focus.focus_next();                 // Name
//! focus.focus_next();                 // Review
//! focus.focus_previous();             // Name
//! focus.blur();                       // nothing focused
//! ```

use spark_signals::{signal, Signal};

/// Focusable controls of the review form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormControl {
    Name,
    Review,
    Recommend,
    Rating,
    Submit,
}

impl FormControl {
    /// Tab order.
    pub const ORDER: [FormControl; 5] = [
        FormControl::Name,
        FormControl::Review,
        FormControl::Recommend,
        FormControl::Rating,
        FormControl::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }
}

/// Which form control has focus, if any.
#[derive(Clone)]
pub struct FocusState {
    focused: Signal<Option<FormControl>>,
}

impl FocusState {
    pub fn new() -> Self {
        Self {
            focused: signal(None),
        }
    }

    /// Currently focused control.
    pub fn focused(&self) -> Option<FormControl> {
        self.focused.get()
    }

    pub fn has_focus(&self) -> bool {
        self.focused.get().is_some()
    }

    pub fn is_focused(&self, control: FormControl) -> bool {
        self.focused.get() == Some(control)
    }

    /// Focus a specific control.
    pub fn focus(&self, control: FormControl) {
        self.focused.set(Some(control));
    }

    /// Clear focus.
    pub fn blur(&self) {
        self.focused.set(None);
    }

    /// Move to the next control (Tab), wrapping. Starts at the first.
    pub fn focus_next(&self) {
        let next = match self.focused.get() {
            Some(current) => FormControl::ORDER[(current.position() + 1) % FormControl::ORDER.len()],
            None => FormControl::ORDER[0],
        };
        self.focused.set(Some(next));
    }

    /// Move to the previous control (Shift+Tab), wrapping. Starts at the last.
    pub fn focus_previous(&self) {
        let len = FormControl::ORDER.len();
        let prev = match self.focused.get() {
            Some(current) => FormControl::ORDER[(current.position() + len - 1) % len],
            None => FormControl::ORDER[len - 1],
        };
        self.focused.set(Some(prev));
    }
}

impl Default for FocusState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let focus = FocusState::new();
        assert!(!focus.has_focus());
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn test_focus_next_cycles() {
        let focus = FocusState::new();
        for expected in FormControl::ORDER {
            focus.focus_next();
            assert_eq!(focus.focused(), Some(expected));
        }
        focus.focus_next();
        assert_eq!(focus.focused(), Some(FormControl::Name));
    }

    #[test]
    fn test_focus_previous_wraps() {
        let focus = FocusState::new();
        focus.focus_previous();
        assert_eq!(focus.focused(), Some(FormControl::Submit));

        focus.focus(FormControl::Name);
        focus.focus_previous();
        assert_eq!(focus.focused(), Some(FormControl::Submit));
    }

    #[test]
    fn test_blur() {
        let focus = FocusState::new();
        focus.focus(FormControl::Rating);
        assert!(focus.is_focused(FormControl::Rating));
        focus.blur();
        assert!(!focus.has_focus());
    }
}
