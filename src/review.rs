//! Review types.
//!
//! A `Review` only exists once every field of the form draft was filled in,
//! so its fields are plain values rather than options.

use std::fmt;

use crate::error::StoreError;

/// Would the reviewer recommend the product?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    Yes,
    No,
}

impl Recommendation {
    pub const ALL: [Recommendation; 2] = [Recommendation::Yes, Recommendation::No];

    /// Display label ("Yes" / "No").
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// The other choice.
    pub fn toggled(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Star rating from the closed choice set 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Choices in the order the form offers them (highest first).
    pub const CHOICES: [Rating; 5] = [Rating(5), Rating(4), Rating(3), Rating(2), Rating(1)];

    pub fn new(value: u8) -> Result<Self, StoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(StoreError::InvalidRating(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Next choice up, wrapping 5 -> 1.
    pub fn next(self) -> Self {
        if self.0 >= Self::MAX { Self(Self::MIN) } else { Self(self.0 + 1) }
    }

    /// Next choice down, wrapping 1 -> 5.
    pub fn prev(self) -> Self {
        if self.0 <= Self::MIN { Self(Self::MAX) } else { Self(self.0 - 1) }
    }
}

impl TryFrom<u8> for Rating {
    type Error = StoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted review. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub name: String,
    pub review: String,
    pub recommend: Recommendation,
    pub rating: Rating,
}

impl Review {
    pub fn new(
        name: impl Into<String>,
        review: impl Into<String>,
        recommend: Recommendation,
        rating: Rating,
    ) -> Self {
        Self {
            name: name.into(),
            review: review.into(),
            recommend,
            rating,
        }
    }
}
