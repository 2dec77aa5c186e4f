//! Catalog fixture - the product and its variants.
//!
//! The catalog is static for the life of the process. It is validated once
//! at construction so components can index into it without re-checking.

use std::collections::HashSet;
use std::fmt;

use crate::error::StoreError;

// =============================================================================
// VariantId
// =============================================================================

/// Identifier of a purchasable variant. Cart entries are variant ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantId(pub u32);

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VariantId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// =============================================================================
// Variant
// =============================================================================

/// A colour of the product with its own stock and sale status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub id: VariantId,
    pub color: String,
    /// Image path, resolved by whoever displays it.
    pub image: String,
    pub quantity: u32,
    pub on_sale: bool,
}

impl Variant {
    pub fn new(
        id: u32,
        color: impl Into<String>,
        image: impl Into<String>,
        quantity: u32,
        on_sale: bool,
    ) -> Self {
        Self {
            id: VariantId(id),
            color: color.into(),
            image: image.into(),
            quantity,
            on_sale,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Product fixture: copy, details, variants and sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    brand: String,
    name: String,
    description: String,
    link: String,
    alt_text: String,
    details: Vec<String>,
    variants: Vec<Variant>,
    sizes: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty variant list or duplicate ids.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brand: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        alt_text: impl Into<String>,
        details: Vec<String>,
        variants: Vec<Variant>,
        sizes: Vec<String>,
    ) -> Result<Self, StoreError> {
        if variants.is_empty() {
            return Err(StoreError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(variants.len());
        for variant in &variants {
            if !seen.insert(variant.id) {
                return Err(StoreError::DuplicateVariant(variant.id));
            }
        }

        Ok(Self {
            brand: brand.into(),
            name: name.into(),
            description: description.into(),
            link: link.into(),
            alt_text: alt_text.into(),
            details,
            variants,
            sizes,
        })
    }

    /// The demo fixture: a pair of socks in green and blue.
    pub fn socks() -> Self {
        Self {
            brand: "Vue Mastery".to_string(),
            name: "Socks".to_string(),
            description: "warm, fuzzy socks!".to_string(),
            link: "https://www.vuemastery.com".to_string(),
            alt_text: "A pair of socks".to_string(),
            details: vec![
                "80% cotton".to_string(),
                "20% polyester".to_string(),
                "Gender-neutral".to_string(),
            ],
            variants: vec![
                Variant::new(2234, "green", "./images/vmSocks-green.png", 10, true),
                Variant::new(2235, "blue", "./images/vmSocks-blue.png", 5, false),
            ],
            sizes: vec![
                "Small".to_string(),
                "Medium".to_string(),
                "Large".to_string(),
            ],
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    /// Variant at `index`, or `VariantOutOfRange`.
    pub fn variant(&self, index: usize) -> Result<&Variant, StoreError> {
        self.variants.get(index).ok_or(StoreError::VariantOutOfRange {
            index,
            len: self.variants.len(),
        })
    }

    /// Position of the variant with the given id.
    pub fn index_of(&self, id: VariantId) -> Option<usize> {
        self.variants.iter().position(|v| v.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::socks()
    }
}

// =============================================================================
// TESTS
// =============================================================================
