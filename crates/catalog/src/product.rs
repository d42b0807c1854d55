//! Product and variant data model.
//!
//! Shapes mirror the upstream content service: a product optionally defines
//! ordered variant axes (e.g. color, size), each with a closed list of
//! options, and a flat list of variants keyed by option combinations.

use serde::{Deserialize, Serialize};

use storefront_core::{AxisId, OptionId, PriceBook, ProductId, VariantId};

use crate::rating::Rating;

/// Publication lifecycle of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Published,
    Archived,
}

/// A single choosable value on an axis (e.g. "Red" on the color axis).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub id: OptionId,
    pub label: String,
}

/// A configurable product dimension with its options, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAxis {
    pub id: AxisId,
    /// Machine key, also the query-parameter name (e.g. `color`).
    pub name: String,
    /// Display name (e.g. "Color").
    pub label: String,
    #[serde(default)]
    pub options: Vec<VariantOption>,
}

impl VariantAxis {
    pub fn option(&self, id: OptionId) -> Option<&VariantOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Whether this axis contributes to selection at all.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

/// A concrete, purchasable combination of one option per axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    /// One option id per axis. The combination key of this variant.
    #[serde(default)]
    pub option_ids: Vec<OptionId>,
    #[serde(default)]
    pub inventory: i64,
    #[serde(default)]
    pub prices: PriceBook,
}

impl Variant {
    pub fn in_stock(&self) -> bool {
        self.inventory > 0
    }
}

/// A catalog product as supplied by the content service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProductStatus,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub prices: PriceBook,
    /// When false, `variant_axes`/`variants` are ignored and the product's own
    /// `inventory` and `prices` apply.
    #[serde(default)]
    pub enable_variants: bool,
    #[serde(default)]
    pub inventory: i64,
    /// Axis order drives selection order and tie-breaking, so it is preserved.
    #[serde(default)]
    pub variant_axes: Vec<VariantAxis>,
    /// Enumeration order is the match tie-break order.
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

impl Product {
    /// Whether variant resolution applies to this product.
    pub fn has_variants(&self) -> bool {
        self.enable_variants && !self.variants.is_empty()
    }

    /// Axes that actually carry options; empty axes contribute nothing.
    pub fn selectable_axes(&self) -> impl Iterator<Item = &VariantAxis> {
        self.variant_axes.iter().filter(|axis| axis.has_options())
    }

    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.variant_axes.iter().find(|axis| axis.name == name)
    }

    pub fn variant(&self, id: VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Visibility under the caller's draft mode.
    pub fn is_visible(&self, draft: bool) -> bool {
        match self.status {
            ProductStatus::Published => true,
            ProductStatus::Draft => draft,
            ProductStatus::Archived => false,
        }
    }
}
