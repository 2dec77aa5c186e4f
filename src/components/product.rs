//! Product - catalog display, variant selection and the review list.
//!
//! # Reactivity
//!
//! `premium` and `inventory` come in as props and are usually signals owned
//! by the app root. Derived values (`title`, `image`, `in_stock`,
//! `sale_message`, `shipping_cost`) are plain methods that read the signals
//! on every call, so they pick up changes inside any effect or derived that
//! calls them.
//!
//! # Reviews
//!
//! The product never sees the review form directly. `mount()` subscribes to
//! [`REVIEW_SUBMITTED`] and appends each review it hears about; that is the
//! only writer of the review list.
//!
//! # Example
//!
//! ```ignore
//! let bus = EventBus::new();
//! let product = Product::new(Catalog::socks(), ProductProps {
//!     premium: true.into(),
//!     inventory: cart.inventory_signal().into(),
//!     on_add_to_cart: Some(Rc::new(move |id, qty| { cart.increase_cart(id, qty); })),
//!     on_remove_from_cart: None,
//! }, bus)?;
//! product.mount();
//! ```

use std::cell::RefCell;

use spark_signals::{signal, Signal};

use super::product_details::{ProductDetails, ProductDetailsProps};
use super::review_tabs::{ReviewTabs, ReviewTabsProps};
use super::types::{AddToCartCallback, Cleanup, PropValue, RemoveFromCartCallback};
use crate::catalog::{Catalog, Variant};
use crate::error::StoreError;
use crate::review::Review;
use crate::state::bus::{EventBus, REVIEW_SUBMITTED};

/// Shown next to the title while the selected variant is on sale.
pub const SALE_MESSAGE: &str = "On sale for limited time!";

/// Shipping label for premium customers.
pub const FREE_SHIPPING: &str = "Free";

/// Shipping label for everyone else.
pub const STANDARD_SHIPPING: &str = "$2.99";

/// Props for [`Product`].
#[derive(Clone, Default)]
pub struct ProductProps {
    /// Premium customers ship for free.
    pub premium: PropValue<bool>,
    /// Inventory-availability flag from the cart owner.
    pub inventory: PropValue<bool>,
    /// Called with (variant id, stock quantity) on add to cart.
    pub on_add_to_cart: Option<AddToCartCallback>,
    /// Called with the variant id on remove from cart.
    pub on_remove_from_cart: Option<RemoveFromCartCallback>,
}

/// The product component.
pub struct Product {
    catalog: Catalog,
    props: ProductProps,
    selected_variant: Signal<usize>,
    reviews: Signal<Vec<Review>>,
    details: ProductDetails,
    tabs: ReviewTabs,
    bus: EventBus<Review>,
    subscription: RefCell<Option<Cleanup>>,
}

impl Product {
    /// Build the product on `catalog`, selecting the first variant.
    ///
    /// Fails when the catalog has no variants.
    pub fn new(
        catalog: Catalog,
        props: ProductProps,
        bus: EventBus<Review>,
    ) -> Result<Self, StoreError> {
        if catalog.variants().is_empty() {
            return Err(StoreError::EmptyCatalog);
        }

        let reviews = signal(Vec::new());
        let details = ProductDetails::new(ProductDetailsProps {
            details: catalog.details().to_vec().into(),
        });
        let tabs = ReviewTabs::new(
            ReviewTabsProps {
                reviews: reviews.clone().into(),
            },
            bus.clone(),
        );

        Ok(Self {
            catalog,
            props,
            selected_variant: signal(0),
            reviews,
            details,
            tabs,
            bus,
            subscription: RefCell::new(None),
        })
    }

    /// Start listening for submitted reviews. Mounting twice is a no-op.
    pub fn mount(&self) {
        let mut subscription = self.subscription.borrow_mut();
        if subscription.is_some() {
            return;
        }

        let reviews = self.reviews.clone();
        let cleanup = self.bus.subscribe(REVIEW_SUBMITTED, move |review: &mut Review| {
            let mut list = reviews.get();
            list.push(review.clone());
            reviews.set(list);
        });
        *subscription = Some(Box::new(cleanup));
        tracing::debug!("product mounted");
    }

    /// Stop listening for reviews. Reviews already received are kept.
    pub fn unmount(&self) {
        if let Some(cleanup) = self.subscription.borrow_mut().take() {
            cleanup();
            tracing::debug!("product unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    pub fn tabs(&self) -> &ReviewTabs {
        &self.tabs
    }

    pub fn selected_index(&self) -> usize {
        self.selected_variant.get()
    }

    /// The variant under the current selection.
    pub fn selected_variant(&self) -> &Variant {
        // The index only ever holds values checked against this catalog.
        &self.catalog.variants()[self.selected_variant.get()]
    }

    /// Submitted reviews, oldest first.
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.get()
    }

    pub fn premium(&self) -> bool {
        self.props.premium.get()
    }

    pub fn inventory(&self) -> bool {
        self.props.inventory.get()
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Brand and product name.
    pub fn title(&self) -> String {
        format!("{} {}", self.catalog.brand(), self.catalog.name())
    }

    /// Image of the selected variant.
    pub fn image(&self) -> &str {
        &self.selected_variant().image
    }

    /// False when the selected variant has no stock or inventory is closed.
    pub fn in_stock(&self) -> bool {
        self.selected_variant().quantity != 0 && self.props.inventory.get()
    }

    /// Sale banner for the selected variant, if it is on sale.
    pub fn sale_message(&self) -> Option<&'static str> {
        self.selected_variant().on_sale.then_some(SALE_MESSAGE)
    }

    pub fn shipping_cost(&self) -> &'static str {
        if self.props.premium.get() {
            FREE_SHIPPING
        } else {
            STANDARD_SHIPPING
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Select the variant at `index` (hovering its swatch).
    pub fn select_variant(&self, index: usize) -> Result<(), StoreError> {
        let variant = self.catalog.variant(index)?;
        if self.selected_variant.get() != index {
            tracing::debug!(index, color = %variant.color, "variant selected");
            self.selected_variant.set(index);
        }
        Ok(())
    }

    /// Select the next variant, wrapping around.
    pub fn select_next_variant(&self) {
        let len = self.catalog.variants().len();
        self.selected_variant.set((self.selected_variant.get() + 1) % len);
    }

    /// Select the previous variant, wrapping around.
    pub fn select_previous_variant(&self) {
        let len = self.catalog.variants().len();
        self.selected_variant.set((self.selected_variant.get() + len - 1) % len);
    }

    /// Ask the parent to add one unit of the selected variant.
    ///
    /// Does nothing while out of stock. Returns whether a request was sent.
    pub fn add_to_cart(&self) -> bool {
        if !self.in_stock() {
            tracing::debug!("add to cart ignored: out of stock");
            return false;
        }
        let variant = self.selected_variant();
        if let Some(on_add) = &self.props.on_add_to_cart {
            on_add(variant.id, variant.quantity);
        }
        true
    }

    /// Ask the parent to remove the selected variant from the cart.
    pub fn remove_from_cart(&self) {
        let id = self.selected_variant().id;
        if let Some(on_remove) = &self.props.on_remove_from_cart {
            on_remove(id);
        }
    }
}

impl Drop for Product {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// TESTS
// =============================================================================
