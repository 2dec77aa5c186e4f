//! Event Bus - Topic-based publish/subscribe channel
//!
//! Lets a component notify another one without a prop/callback path between
//! them. The review form publishes on [`REVIEW_SUBMITTED`] and the product
//! listens, with the review tabs in between knowing nothing about it.
//!
//! The bus is an explicit value, not a global: create one at startup and
//! hand clones to the components that need it. Clones share one registry.
//!
//! # API
//!
//! - `subscribe(topic, handler)` - Register a handler, returns cleanup
//! - `publish(topic, &mut payload)` - Run every handler for the topic
//! - `subscriber_count(topic)` - Number of live handlers for a topic
//!
//! # Example
//!
//! ```ignore
//! use spark_storefront::state::bus::{EventBus, REVIEW_SUBMITTED};
//!
//! let bus: EventBus<Review> = EventBus::new();
//!
//! let cleanup = bus.subscribe(REVIEW_SUBMITTED, |review| {
//!     println!("{} says {}", review.name, review.review);
//! });
//!
//! bus.publish(REVIEW_SUBMITTED, &mut review);
//! cleanup();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// =============================================================================
// TYPES
// =============================================================================

/// Topic announcing a freshly submitted review. Payload: `Review`.
pub const REVIEW_SUBMITTED: &str = "review-submitted";

/// Handler for bus payloads. May mutate the payload in place.
///
/// Rc so `publish` can snapshot the handler list and release the registry
/// before running anything.
pub type BusHandler<P> = Rc<dyn Fn(&mut P)>;

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry<P> {
    topics: HashMap<String, Vec<(usize, BusHandler<P>)>>,
    next_id: usize,
}

impl<P> HandlerRegistry<P> {
    fn new() -> Self {
        Self {
            topics: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// =============================================================================
// EVENT BUS
// =============================================================================

/// Publish/subscribe channel carrying payloads of type `P`.
pub struct EventBus<P> {
    registry: Rc<RefCell<HandlerRegistry<P>>>,
}

impl<P> Clone for EventBus<P> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<P: 'static> Default for EventBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: 'static> EventBus<P> {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(HandlerRegistry::new())),
        }
    }

    /// Subscribe to a topic.
    /// Handlers run in registration order.
    /// Returns cleanup function.
    pub fn subscribe<F>(&self, topic: &str, handler: F) -> impl FnOnce() + 'static
    where
        F: Fn(&mut P) + 'static,
    {
        let topic = topic.to_string();
        let id = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.next_id();
            reg.topics
                .entry(topic.clone())
                .or_default()
                .push((id, Rc::new(handler)));
            id
        };
        tracing::debug!(topic = %topic, id, "bus subscribe");

        let registry = Rc::downgrade(&self.registry);
        move || {
            // Bus already gone: nothing left to unregister.
            let Some(registry) = registry.upgrade() else {
                return;
            };
            let mut reg = registry.borrow_mut();
            if let Some(handlers) = reg.topics.get_mut(&topic) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.topics.remove(&topic);
                }
            }
        }
    }

    /// Publish a payload to every handler of `topic`.
    ///
    /// Each handler finishes before the next one starts and all of them
    /// finish before this returns. Handlers added while publishing are not
    /// called for this payload. Returns the number of handlers run; zero
    /// when nobody listens.
    pub fn publish(&self, topic: &str, payload: &mut P) -> usize {
        let handlers: Vec<BusHandler<P>> = {
            let reg = self.registry.borrow();
            match reg.topics.get(topic) {
                Some(handlers) => handlers.iter().map(|(_, h)| h.clone()).collect(),
                None => Vec::new(),
            }
        };

        for handler in &handlers {
            handler(payload);
        }

        tracing::debug!(topic, handlers = handlers.len(), "bus publish");
        handlers.len()
    }

    /// Number of handlers currently registered for `topic`.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.registry
            .borrow()
            .topics
            .get(topic)
            .map_or(0, Vec::len)
    }

    /// Drop every handler on every topic.
    pub fn clear(&self) {
        self.registry.borrow_mut().topics.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================
