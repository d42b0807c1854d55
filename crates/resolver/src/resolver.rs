//! Variant matching, availability, price aggregation, stock classification.
//!
//! All functions are pure: same product + selection in, same view models out.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::trace;

use storefront_catalog::{Product, Variant};
use storefront_core::{CurrencyCode, OptionId, VariantId};

use crate::selection::SelectedOptions;

/// Quantities above this threshold display as plainly in stock; at or below
/// it the remaining count is surfaced.
const LOW_STOCK_THRESHOLD: i64 = 10;

/// Find the variant identified by the current selection.
///
/// Matching is strict: every axis with options must have a selection, and the
/// variant's option set must equal the selected set exactly. A partial
/// selection identifies nothing, and a variant covering fewer axes than the
/// product never matches. Axes are read in the product's axis order and
/// variants in enumeration order, so the result is deterministic.
pub fn match_variant<'a>(product: &'a Product, selection: &SelectedOptions) -> Option<&'a Variant> {
    if !product.has_variants() {
        return None;
    }

    let mut required: BTreeSet<OptionId> = BTreeSet::new();
    let mut axis_count = 0usize;
    for axis in product.selectable_axes() {
        required.insert(selection.get(&axis.name)?);
        axis_count += 1;
    }
    if axis_count == 0 {
        return None;
    }

    product.variants.iter().find(|variant| {
        let options: BTreeSet<OptionId> = variant.option_ids.iter().copied().collect();
        options == required
    })
}

/// Would choosing `option_id` on `axis_name` (holding other axes fixed) lead
/// to an in-stock variant?
///
/// When the hypothetical combination has no variant record at all the answer
/// defaults to `true`: a combination without an explicit variant is assumed
/// orderable, which keeps options clickable while the selection is still
/// partial. Never errors.
pub fn is_option_available(
    product: &Product,
    axis_name: &str,
    option_id: OptionId,
    selection: &SelectedOptions,
) -> bool {
    let hypothetical = selection.with_option(axis_name, option_id);
    match match_variant(product, &hypothetical) {
        Some(variant) => variant.in_stock(),
        None => true,
    }
}

/// One option as the selector renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionState {
    pub option_id: OptionId,
    pub label: String,
    pub available: bool,
    /// Selected *and* available; an out-of-stock choice is never highlighted.
    pub active: bool,
}

/// One axis row of the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisOptions {
    pub axis_name: String,
    pub label: String,
    pub options: Vec<OptionState>,
}

/// Per-axis, per-option availability for the whole selector, in axis order.
/// Axes without options are skipped.
pub fn option_availability(product: &Product, selection: &SelectedOptions) -> Vec<AxisOptions> {
    if !product.has_variants() {
        return Vec::new();
    }

    product
        .selectable_axes()
        .map(|axis| AxisOptions {
            axis_name: axis.name.clone(),
            label: axis.label.clone(),
            options: axis
                .options
                .iter()
                .map(|option| {
                    let available =
                        is_option_available(product, &axis.name, option.id, selection);
                    OptionState {
                        option_id: option.id,
                        label: option.label.clone(),
                        available,
                        active: available && selection.get(&axis.name) == Some(option.id),
                    }
                })
                .collect(),
        })
        .collect()
}

/// The price to display: a single amount, or a low-high range across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PriceView {
    Single { amount: u64 },
    Range { lowest: u64, highest: u64 },
}

/// Aggregate the product's prices for `currency`.
///
/// Non-variant products yield their own effective amount (0 when no usable
/// price exists). Variant products yield the low-high range over variants
/// with a usable effective price; `{0, 0}` when none qualifies. Callers
/// render a single value when `lowest == highest`.
pub fn resolve_price(product: &Product, currency: CurrencyCode) -> PriceView {
    if !product.has_variants() {
        return PriceView::Single {
            amount: product.prices.effective(currency).unwrap_or(0),
        };
    }

    let mut priced: Vec<u64> = product
        .variants
        .iter()
        .filter_map(|variant| variant.prices.effective(currency))
        .collect();

    if priced.is_empty() {
        return PriceView::Range {
            lowest: 0,
            highest: 0,
        };
    }

    // Stable sort keeps enumeration order for equal amounts.
    priced.sort();
    PriceView::Range {
        lowest: priced[0],
        highest: priced[priced.len() - 1],
    }
}

/// Stock classification levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Plentiful,
    Low,
    #[serde(rename = "none")]
    Out,
}

/// Inventory status of the product or resolved variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockView {
    pub level: StockLevel,
    pub quantity: i64,
    /// Per-unit price of the resolved variant, when one is resolved.
    pub unit_price: Option<u64>,
}

impl StockView {
    fn classify(quantity: i64, unit_price: Option<u64>) -> Self {
        let level = if quantity > LOW_STOCK_THRESHOLD {
            StockLevel::Plentiful
        } else if quantity > 0 {
            StockLevel::Low
        } else {
            StockLevel::Out
        };
        Self {
            level,
            quantity,
            unit_price,
        }
    }

    pub fn label(&self) -> String {
        match self.level {
            StockLevel::Plentiful => "In Stock".to_string(),
            StockLevel::Low => format!("Only {} left", self.quantity),
            StockLevel::Out => "Out of Stock".to_string(),
        }
    }
}

/// Classify inventory for display.
///
/// When variants are enabled the quantity comes from the resolved variant;
/// with no variant resolved the result is `None` and nothing is rendered —
/// stock text is never shown against product-level inventory once the
/// product opts into variants, even if its variant list is empty.
pub fn resolve_stock(
    product: &Product,
    selected: Option<&Variant>,
    currency: CurrencyCode,
) -> Option<StockView> {
    if product.enable_variants {
        let variant = selected?;
        return Some(StockView::classify(
            variant.inventory,
            variant.prices.effective(currency),
        ));
    }
    Some(StockView::classify(product.inventory, None))
}

/// Resolve the selection to a concrete variant.
///
/// A variant hint from the query state is honored when it names one of the
/// product's variants; otherwise the selection is matched strictly.
pub fn selected_variant<'a>(
    product: &'a Product,
    selection: &SelectedOptions,
) -> Option<&'a Variant> {
    if !product.has_variants() {
        return None;
    }
    selection
        .variant_hint()
        .and_then(|id| product.variant(id))
        .or_else(|| match_variant(product, selection))
}

/// The full view model for one render of a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProduct {
    pub variant_id: Option<VariantId>,
    pub price: PriceView,
    pub axes: Vec<AxisOptions>,
    pub stock: Option<StockView>,
}

/// One synchronous recomputation of everything the product page derives from
/// (product, selection, currency).
pub fn resolve(
    product: &Product,
    selection: &SelectedOptions,
    currency: CurrencyCode,
) -> ResolvedProduct {
    let variant = selected_variant(product, selection);
    trace!(
        product = %product.id,
        variant = ?variant.map(|v| v.id),
        %currency,
        "resolved selection"
    );
    ResolvedProduct {
        variant_id: variant.map(|v| v.id),
        price: resolve_price(product, currency),
        axes: option_availability(product, selection),
        stock: resolve_stock(product, variant, currency),
    }
}
