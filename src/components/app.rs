//! App - root of the component tree.
//!
//! Owns the cart, the inventory flag and the premium flag, plus the one
//! event bus every component shares. The product gets the flags as signal
//! props and reports cart changes through its callbacks.

use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::product::{Product, ProductProps};
use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::review::Review;
use crate::state::bus::EventBus;
use crate::state::cart::CartState;

/// Application root.
pub struct App {
    premium: Signal<bool>,
    cart: CartState,
    bus: EventBus<Review>,
    product: Product,
}

impl App {
    /// Build the tree for `catalog` and mount it.
    pub fn new(catalog: Catalog, config: &StoreConfig) -> Result<Self, StoreError> {
        let premium = signal(config.premium());
        let cart = CartState::new(config.inventory());
        let bus = EventBus::new();

        let cart_for_add = cart.clone();
        let cart_for_remove = cart.clone();
        let product = Product::new(
            catalog,
            ProductProps {
                premium: premium.clone().into(),
                inventory: cart.inventory_signal().into(),
                on_add_to_cart: Some(Rc::new(move |id, quantity| {
                    cart_for_add.increase_cart(id, quantity);
                })),
                on_remove_from_cart: Some(Rc::new(move |id| {
                    cart_for_remove.decrease_cart(id);
                })),
            },
            bus.clone(),
        )?;
        product.mount();

        tracing::info!(premium = config.premium(), inventory = config.inventory(), "app mounted");
        Ok(Self {
            premium,
            cart,
            bus,
            product,
        })
    }

    /// The demo storefront with the socks fixture.
    pub fn demo(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::new(Catalog::socks(), config)
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn bus(&self) -> &EventBus<Review> {
        &self.bus
    }

    pub fn premium(&self) -> bool {
        self.premium.get()
    }

    pub fn set_premium(&self, premium: bool) {
        self.premium.set(premium);
    }

    /// Units in the cart, for the header counter.
    pub fn cart_count(&self) -> usize {
        self.cart.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VariantId;
    use crate::review::{Rating, Recommendation};
    use crate::state::bus::REVIEW_SUBMITTED;

    fn setup() -> App {
        App::demo(&StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let app = setup();
        assert!(app.premium());
        assert_eq!(app.cart_count(), 0);
        assert!(app.cart().inventory());
        assert!(app.product().is_mounted());
        assert_eq!(app.bus().subscriber_count(REVIEW_SUBMITTED), 1);
    }

    #[test]
    fn test_add_to_cart_flows_to_root() {
        let app = setup();
        app.product().add_to_cart();
        app.product().add_to_cart();
        assert_eq!(app.cart().items(), vec![VariantId(2234), VariantId(2234)]);
    }

    #[test]
    fn test_exhausting_inventory_disables_add() {
        let app = setup();
        // Blue has stock 5.
        app.product().select_variant(1).unwrap();
        for _ in 0..5 {
            assert!(app.product().add_to_cart());
        }
        assert!(app.product().in_stock());

        // Sixth request reaches the root and closes inventory.
        assert!(app.product().add_to_cart());
        assert!(!app.cart().inventory());
        assert!(!app.product().in_stock());

        // Now the button is disabled.
        assert!(!app.product().add_to_cart());
        assert_eq!(app.cart_count(), 5);
    }

    #[test]
    fn test_remove_reopens_inventory() {
        let app = setup();
        app.product().select_variant(1).unwrap();
        for _ in 0..6 {
            app.product().add_to_cart();
        }
        assert!(!app.product().in_stock());

        app.product().remove_from_cart();
        assert_eq!(app.cart_count(), 0);
        assert!(app.product().in_stock());
    }

    #[test]
    fn test_premium_toggles_shipping() {
        let app = setup();
        assert_eq!(app.product().shipping_cost(), "Free");
        app.set_premium(false);
        assert_eq!(app.product().shipping_cost(), "$2.99");
    }

    #[test]
    fn test_config_controls_initial_flags() {
        let config = StoreConfig::default().with_premium(false).with_inventory(false);
        let app = App::demo(&config).unwrap();
        assert!(!app.premium());
        assert!(!app.product().in_stock());
    }

    #[test]
    fn test_review_reaches_product_list() {
        let app = setup();
        let form = app.product().tabs().form();
        form.set_name("Alice");
        form.set_review("Great!");
        form.set_recommend(Some(Recommendation::Yes));
        form.set_rating(Some(Rating::new(5).unwrap()));
        form.submit().unwrap();

        assert_eq!(app.product().tabs().reviews().len(), 1);
        assert_eq!(app.product().reviews()[0].name, "Alice");
    }
}
