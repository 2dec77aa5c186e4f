//! ReviewTabs - switch between the review list and the review form.
//!
//! Both branches live for as long as the tabs do. Switching tabs only
//! changes which one the view draws, so a half-written draft is still there
//! when the user comes back to the form.

use spark_signals::{signal, Signal};

use super::review_form::ReviewForm;
use super::types::PropValue;
use crate::review::Review;
use crate::state::bus::EventBus;

/// Shown in place of the list when nobody has reviewed yet.
pub const NO_REVIEWS_MESSAGE: &str = "There are no reviews yet.";

/// The two tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Reviews,
    MakeAReview,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Tab; 2] = [Tab::Reviews, Tab::MakeAReview];

    pub fn label(self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::MakeAReview => "Make a Review",
        }
    }

    /// The other tab.
    pub fn toggled(self) -> Self {
        match self {
            Self::Reviews => Self::MakeAReview,
            Self::MakeAReview => Self::Reviews,
        }
    }
}

/// Props for [`ReviewTabs`].
#[derive(Clone, Debug, Default)]
pub struct ReviewTabsProps {
    /// Reviews to list, owned by the parent.
    pub reviews: PropValue<Vec<Review>>,
}

/// Tab selector owning the review form.
pub struct ReviewTabs {
    selected: Signal<Tab>,
    reviews: PropValue<Vec<Review>>,
    form: ReviewForm,
}

impl ReviewTabs {
    pub fn new(props: ReviewTabsProps, bus: EventBus<Review>) -> Self {
        Self {
            selected: signal(Tab::default()),
            reviews: props.reviews,
            form: ReviewForm::new(bus),
        }
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected.get()
    }

    /// Select a tab. Selecting the current tab changes nothing.
    pub fn select_tab(&self, tab: Tab) {
        if self.selected.get() != tab {
            tracing::debug!(tab = tab.label(), "tab selected");
            self.selected.set(tab);
        }
    }

    pub fn toggle_tab(&self) {
        self.select_tab(self.selected.get().toggled());
    }

    /// Whether `tab` is the one being drawn.
    pub fn is_showing(&self, tab: Tab) -> bool {
        self.selected.get() == tab
    }

    /// Reviews received from the parent.
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.get()
    }

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }
}
