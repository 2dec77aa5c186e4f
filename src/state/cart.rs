//! Cart Module - Cart contents and the inventory-availability gate
//!
//! Owned by the application root. The product asks for changes through its
//! add/remove callbacks; nothing else writes here.
//!
//! # API
//!
//! - `increase_cart(id, quantity)` - Add one unit, or close inventory
//! - `decrease_cart(id)` - Remove every unit of `id`, reopen inventory
//! - `items` / `count` - Current cart contents
//! - `inventory` / `inventory_signal` - Inventory-availability flag
//!
//! `increase_cart` compares the whole cart length with the quantity of the
//! variant being added, not a per-variant count. Two colours share one
//! budget: with 5 green socks in the cart, a blue sock (stock 5) cannot be
//! added. Kept as observed.

use spark_signals::{signal, Signal};

use crate::catalog::VariantId;

/// Result of `increase_cart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// One unit appended.
    Added,
    /// Cart already held `quantity` units; inventory flag cleared instead.
    InventoryExhausted,
}

/// Cart contents plus the inventory-availability flag.
///
/// Cheap to clone: clones share the same signals.
#[derive(Clone)]
pub struct CartState {
    items: Signal<Vec<VariantId>>,
    inventory: Signal<bool>,
}

impl CartState {
    /// Empty cart with the given starting inventory flag.
    pub fn new(inventory: bool) -> Self {
        Self {
            items: signal(Vec::new()),
            inventory: signal(inventory),
        }
    }

    /// Current cart contents in insertion order.
    pub fn items(&self) -> Vec<VariantId> {
        self.items.get()
    }

    /// Number of units in the cart.
    pub fn count(&self) -> usize {
        self.items.get().len()
    }

    /// Inventory-availability flag.
    pub fn inventory(&self) -> bool {
        self.inventory.get()
    }

    /// The flag as a signal, for binding to the product's `inventory` prop.
    pub fn inventory_signal(&self) -> Signal<bool> {
        self.inventory.clone()
    }

    /// Add one unit of `id` if the cart holds fewer than `quantity` units,
    /// otherwise mark inventory unavailable.
    pub fn increase_cart(&self, id: VariantId, quantity: u32) -> CartOutcome {
        let mut items = self.items.get();
        if items.len() < quantity as usize {
            items.push(id);
            let count = items.len();
            self.items.set(items);
            tracing::debug!(%id, quantity, count, "cart increased");
            CartOutcome::Added
        } else {
            self.inventory.set(false);
            tracing::info!(%id, quantity, count = items.len(), "inventory exhausted");
            CartOutcome::InventoryExhausted
        }
    }

    /// Remove every unit of `id`, then mark inventory available.
    ///
    /// The flag is reset even when the cart was empty or held no `id`.
    /// Returns how many entries were removed.
    pub fn decrease_cart(&self, id: VariantId) -> usize {
        let mut removed = 0;
        let mut items = self.items.get();
        if !items.is_empty() {
            for i in (0..items.len()).rev() {
                if items[i] == id {
                    items.remove(i);
                    removed += 1;
                }
            }
            if removed > 0 {
                self.items.set(items);
            }
        }
        self.inventory.set(true);
        tracing::debug!(%id, removed, count = self.count(), "cart decreased");
        removed
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(true)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: VariantId = VariantId(2234);
    const BLUE: VariantId = VariantId(2235);

    #[test]
    fn test_initial_state() {
        let cart = CartState::default();
        assert_eq!(cart.count(), 0);
        assert!(cart.inventory());

        let closed = CartState::new(false);
        assert!(!closed.inventory());
    }

    #[test]
    fn test_increase_until_quantity_then_exhaust() {
        let cart = CartState::new(true);

        for expected in 1..=10 {
            assert_eq!(cart.increase_cart(GREEN, 10), CartOutcome::Added);
            assert_eq!(cart.count(), expected);
            assert!(cart.inventory());
        }

        assert_eq!(cart.increase_cart(GREEN, 10), CartOutcome::InventoryExhausted);
        assert_eq!(cart.count(), 10);
        assert!(!cart.inventory());
    }

    #[test]
    fn test_increase_compares_total_cart_length() {
        let cart = CartState::new(true);
        for _ in 0..5 {
            cart.increase_cart(GREEN, 10);
        }

        // Blue has stock 5, and the cart already holds 5 units of green.
        assert_eq!(cart.increase_cart(BLUE, 5), CartOutcome::InventoryExhausted);
        assert!(!cart.items().contains(&BLUE));
    }

    #[test]
    fn test_increase_with_zero_quantity() {
        let cart = CartState::new(true);
        assert_eq!(cart.increase_cart(GREEN, 0), CartOutcome::InventoryExhausted);
        assert_eq!(cart.count(), 0);
        assert!(!cart.inventory());
    }

    #[test]
    fn test_decrease_removes_every_occurrence() {
        let cart = CartState::new(true);
        cart.increase_cart(GREEN, 10);
        cart.increase_cart(BLUE, 10);
        cart.increase_cart(GREEN, 10);

        assert_eq!(cart.decrease_cart(GREEN), 2);
        assert_eq!(cart.items(), vec![BLUE]);
        assert!(cart.inventory());
    }

    #[test]
    fn test_decrease_reopens_inventory() {
        let cart = CartState::new(true);
        cart.increase_cart(GREEN, 1);
        cart.increase_cart(GREEN, 1);
        assert!(!cart.inventory());

        cart.decrease_cart(GREEN);
        assert!(cart.inventory());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_decrease_on_empty_cart_still_sets_inventory() {
        let cart = CartState::new(false);
        assert_eq!(cart.decrease_cart(GREEN), 0);
        assert!(cart.inventory());
    }

    #[test]
    fn test_decrease_missing_id_keeps_items() {
        let cart = CartState::new(true);
        cart.increase_cart(BLUE, 10);
        assert_eq!(cart.decrease_cart(GREEN), 0);
        assert_eq!(cart.items(), vec![BLUE]);
    }

    #[test]
    fn test_clones_share_state() {
        let cart = CartState::new(true);
        let other = cart.clone();
        other.increase_cart(GREEN, 10);
        assert_eq!(cart.count(), 1);
    }
}
