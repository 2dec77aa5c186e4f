//! ReviewForm - draft review, validation and submission.
//!
//! The form is always in the editing state. A successful `submit()` publishes
//! the review on the bus and clears the draft right away, so the submitted
//! state never outlives the call.
//!
//! Every field is a signal so the view re-renders as the user types.
//!
//! # Validation
//!
//! A draft is complete when the name and review text are non-empty and a
//! recommendation and rating were chosen. A failed submit replaces the error
//! list with one entry per missing field (name, review, recommendation,
//! rating) and leaves the draft alone so only the gaps need filling.

use spark_signals::{batch, signal, Signal};

use crate::error::DraftError;
use crate::review::{Rating, Recommendation, Review};
use crate::state::bus::{EventBus, REVIEW_SUBMITTED};

/// Review form state.
///
/// Clones share the same draft.
#[derive(Clone)]
pub struct ReviewForm {
    name: Signal<String>,
    review: Signal<String>,
    recommend: Signal<Option<Recommendation>>,
    rating: Signal<Option<Rating>>,
    errors: Signal<Vec<DraftError>>,
    bus: EventBus<Review>,
}

impl ReviewForm {
    /// Empty draft publishing on `bus`.
    pub fn new(bus: EventBus<Review>) -> Self {
        Self {
            name: signal(String::new()),
            review: signal(String::new()),
            recommend: signal(None),
            rating: signal(None),
            errors: signal(Vec::new()),
            bus,
        }
    }

    // -------------------------------------------------------------------------
    // Draft accessors
    // -------------------------------------------------------------------------

    pub fn name(&self) -> String {
        self.name.get()
    }

    pub fn review(&self) -> String {
        self.review.get()
    }

    pub fn recommend(&self) -> Option<Recommendation> {
        self.recommend.get()
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating.get()
    }

    /// Errors from the last failed submit, empty otherwise.
    pub fn errors(&self) -> Vec<DraftError> {
        self.errors.get()
    }

    // -------------------------------------------------------------------------
    // Draft editing
    // -------------------------------------------------------------------------

    pub fn set_name(&self, name: impl Into<String>) {
        self.name.set(name.into());
    }

    pub fn set_review(&self, review: impl Into<String>) {
        self.review.set(review.into());
    }

    pub fn set_recommend(&self, recommend: Option<Recommendation>) {
        self.recommend.set(recommend);
    }

    pub fn set_rating(&self, rating: Option<Rating>) {
        self.rating.set(rating);
    }

    /// Append a character to a text field.
    pub fn push_char(&self, field: TextField, c: char) {
        let sig = self.text_signal(field);
        let mut value = sig.get();
        value.push(c);
        sig.set(value);
    }

    /// Delete the last character of a text field.
    pub fn pop_char(&self, field: TextField) {
        let sig = self.text_signal(field);
        let mut value = sig.get();
        if value.pop().is_some() {
            sig.set(value);
        }
    }

    /// Flip the recommendation; picks Yes when nothing is chosen yet.
    pub fn cycle_recommend(&self) {
        let next = match self.recommend.get() {
            Some(r) => r.toggled(),
            None => Recommendation::Yes,
        };
        self.recommend.set(Some(next));
    }

    /// Step the rating up (wrapping); picks 5 when nothing is chosen yet.
    pub fn rating_up(&self) {
        let next = match self.rating.get() {
            Some(r) => r.next(),
            None => Rating::CHOICES[0],
        };
        self.rating.set(Some(next));
    }

    /// Step the rating down (wrapping); picks 5 when nothing is chosen yet.
    pub fn rating_down(&self) {
        let next = match self.rating.get() {
            Some(r) => r.prev(),
            None => Rating::CHOICES[0],
        };
        self.rating.set(Some(next));
    }

    fn text_signal(&self, field: TextField) -> &Signal<String> {
        match field {
            TextField::Name => &self.name,
            TextField::Review => &self.review,
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validate the draft without touching any state.
    pub fn validate(&self) -> Result<Review, Vec<DraftError>> {
        let name = self.name.get();
        let review = self.review.get();
        let recommend = self.recommend.get();
        let rating = self.rating.get();

        match (name.is_empty(), review.is_empty(), recommend, rating) {
            (false, false, Some(recommend), Some(rating)) => {
                Ok(Review::new(name, review, recommend, rating))
            }
            (no_name, no_review, recommend, rating) => {
                let mut errors = Vec::with_capacity(4);
                if no_name {
                    errors.push(DraftError::MissingName);
                }
                if no_review {
                    errors.push(DraftError::MissingReview);
                }
                if recommend.is_none() {
                    errors.push(DraftError::MissingRecommendation);
                }
                if rating.is_none() {
                    errors.push(DraftError::MissingRating);
                }
                Err(errors)
            }
        }
    }

    /// Submit the draft.
    ///
    /// On success the review is published on [`REVIEW_SUBMITTED`], the draft
    /// and error list are cleared, and the published review is returned.
    /// On failure nothing is published and the error list is replaced.
    pub fn submit(&self) -> Result<Review, Vec<DraftError>> {
        match self.validate() {
            Ok(review) => {
                let mut payload = review.clone();
                let delivered = self.bus.publish(REVIEW_SUBMITTED, &mut payload);
                tracing::info!(name = %review.name, rating = %review.rating, delivered, "review submitted");
                self.clear();
                Ok(review)
            }
            Err(errors) => {
                tracing::debug!(missing = errors.len(), "review rejected");
                self.errors.set(errors.clone());
                Err(errors)
            }
        }
    }

    /// Reset every draft field and the error list.
    ///
    /// One batch, so observers see a single change.
    pub fn clear(&self) {
        batch(|| {
            self.name.set(String::new());
            self.review.set(String::new());
            self.recommend.set(None);
            self.rating.set(None);
            self.errors.set(Vec::new());
        });
    }
}

/// The free-text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Review,
}

// =============================================================================
// TESTS
// =============================================================================
