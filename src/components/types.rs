//! Component types - Props values, callbacks and cleanup.
//!
//! Props support static values, signals, and getters so a parent can hand a
//! child live state without the child owning it.

use std::rc::Rc;

use spark_signals::Signal;

use crate::catalog::VariantId;

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by subscriptions and mounts.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Callback Types
// =============================================================================

/// Add-to-cart request: (variant id, variant stock quantity).
///
/// Rc so the same callback can be cloned into several closures.
pub type AddToCartCallback = Rc<dyn Fn(VariantId, u32)>;

/// Remove-from-cart request: variant id.
pub type RemoveFromCartCallback = Rc<dyn Fn(VariantId)>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Reading through `get()` inside an effect or derived keeps the reactive
/// dependency, so pass signals through as-is instead of reading them first.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }

    /// Build a getter prop from a closure.
    pub fn getter(f: impl Fn() -> T + 'static) -> Self {
        PropValue::Getter(Rc::new(f))
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl<T: Clone + PartialEq + std::fmt::Debug + 'static> std::fmt::Debug for PropValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropValue::Static(v) => f.debug_tuple("Static").field(v).finish(),
            PropValue::Signal(s) => f.debug_tuple("Signal").field(&s.get()).finish(),
            PropValue::Getter(_) => f.write_str("Getter(..)"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_static_prop() {
        let prop: PropValue<bool> = true.into();
        assert!(prop.get());
    }

    #[test]
    fn test_signal_prop_tracks_updates() {
        let flag = signal(true);
        let prop: PropValue<bool> = flag.clone().into();
        assert!(prop.get());

        flag.set(false);
        assert!(!prop.get());
    }

    #[test]
    fn test_getter_prop() {
        let count = signal(2);
        let count_clone = count.clone();
        let prop = PropValue::getter(move || count_clone.get() * 10);
        assert_eq!(prop.get(), 20);

        count.set(3);
        assert_eq!(prop.get(), 30);
    }

    #[test]
    fn test_default_is_static_default() {
        let prop: PropValue<Vec<u8>> = PropValue::default();
        assert!(prop.get().is_empty());
    }
}
