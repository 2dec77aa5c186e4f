//! # spark-storefront
//!
//! Reactive terminal storefront built on
//! [spark-signals](https://github.com/RLabs-Inc/spark-signals).
//!
//! A single product page with colour variants, a cart counter and a
//! product-review section with a validated submission form.
//!
//! ## Architecture
//!
//! Components are plain structs whose state lives in signals. Parents pass
//! state down as props and get requests back through callbacks; submitted
//! reviews travel over a topic-based [`EventBus`]. The front end renders the
//! tree from one derived and paints it from one effect:
//!
//! ```text
//! App → Product → ReviewTabs → ReviewForm      (signals)
//!          ↓
//! view::render_app (derived) → LineRenderer (effect) → terminal
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Product catalog and variants
//! - [`review`] - Review, rating and recommendation types
//! - [`state`] - Event bus, cart and focus state
//! - [`components`] - App, Product, ProductDetails, ReviewTabs, ReviewForm
//! - [`pipeline`] - View, renderer, input, controller and mount
//! - [`config`] / [`logging`] - Command-line settings and tracing setup

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod review;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use catalog::{Catalog, Variant, VariantId};
pub use components::{
    App, Product, ProductDetails, ProductDetailsProps, ProductProps, PropValue, ReviewForm,
    ReviewTabs, ReviewTabsProps, Tab, TextField,
};
pub use config::StoreConfig;
pub use error::{DraftError, LogError, StoreError};
pub use review::{Rating, Recommendation, Review};
pub use state::{CartOutcome, CartState, EventBus, FocusState, FormControl, REVIEW_SUBMITTED};
pub use types::{Attr, Rgba, Style};
