//! Storefront components.
//!
//! Leaves first:
//! - [`ProductDetails`] - static detail list
//! - [`ReviewForm`] - draft review, validation, publishes on the bus
//! - [`ReviewTabs`] - list/form tab switch, owns the form
//! - [`Product`] - catalog display, variant selection, review list
//! - [`App`] - root: cart, inventory and premium flags
//!
//! # Architecture
//!
//! Each component is a struct holding its state in signals and its inputs in
//! a typed props struct. Parents pass live state down as `PropValue::Signal`
//! and receive requests back through `Rc<dyn Fn>` callbacks. The one
//! exception is review submission, which goes over the [`EventBus`] so the
//! tabs in between stay out of it.
//!
//! [`EventBus`]: crate::state::bus::EventBus

mod app;
mod product;
mod product_details;
mod review_form;
mod review_tabs;
mod types;

pub use app::App;
pub use product::{Product, ProductProps, FREE_SHIPPING, SALE_MESSAGE, STANDARD_SHIPPING};
pub use product_details::{ProductDetails, ProductDetailsProps};
pub use review_form::{ReviewForm, TextField};
pub use review_tabs::{ReviewTabs, ReviewTabsProps, Tab, NO_REVIEWS_MESSAGE};
pub use types::*;
