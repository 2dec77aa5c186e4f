//! Error types.
//!
//! Two enums cover the two kinds of failure the storefront knows about:
//! - `StoreError` - construction and configuration mistakes (bad fixture,
//!   out-of-range variant index, rating outside 1..=5)
//! - `DraftError` - user-input validation errors on the review form
//! - `LogError` - logging setup failures (bad filter, unwritable log file)
//!
//! `DraftError`'s Display text is the message shown next to the form.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;

use crate::catalog::VariantId;

/// Errors from building or driving the store components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("catalog must contain at least one variant")]
    EmptyCatalog,

    #[error("duplicate variant id {0}")]
    DuplicateVariant(VariantId),

    #[error("variant index {index} out of range ({len} variants)")]
    VariantOutOfRange { index: usize, len: usize },

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

/// A missing field on the review draft.
///
/// Variants are declared in the order the form reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum DraftError {
    #[error("Name required.")]
    MissingName,

    #[error("Review required.")]
    MissingReview,

    #[error("Recommendation required.")]
    MissingRecommendation,

    #[error("Rating required.")]
    MissingRating,
}

/// Logging could not be set up as configured.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid log filter {filter:?}: {source}")]
    Filter {
        filter: String,
        #[source]
        source: ParseError,
    },

    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
