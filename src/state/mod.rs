//! State Module - Shared runtime state
//!
//! - **Bus** - Topic-based publish/subscribe between components
//! - **Cart** - Cart contents and the inventory-availability flag
//! - **Focus** - Keyboard focus inside the review form

pub mod bus;
pub mod cart;
pub mod focus;

pub use bus::{BusHandler, EventBus, REVIEW_SUBMITTED};
pub use cart::{CartOutcome, CartState};
pub use focus::{FocusState, FormControl};
