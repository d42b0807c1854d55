//! Selection state derived from query parameters.

use std::collections::BTreeMap;

use storefront_catalog::Product;
use storefront_core::{OptionId, VariantId};

/// Transient query key carrying the resolved variant id. UI state, not a
/// matching constraint.
pub const VARIANT_PARAM: &str = "variant";

/// Transient query key carrying the gallery image index. UI state only.
pub const IMAGE_PARAM: &str = "image";

/// The caller's current axis choices, keyed by axis name.
///
/// May be partial or empty. Built from flat query pairs: keys naming no axis
/// on the product and values that fail to parse as option ids are dropped, so
/// stale or foreign parameters simply contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedOptions {
    by_axis: BTreeMap<String, OptionId>,
    variant_hint: Option<VariantId>,
}

impl SelectedOptions {
    /// Parse query pairs against a product's axes.
    ///
    /// The `variant` key is captured as a hint (validated later against the
    /// product's variants); the `image` key is discarded.
    pub fn from_query_pairs<'a, I>(product: &Product, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut selection = Self::default();
        for (key, value) in pairs {
            if key == IMAGE_PARAM {
                continue;
            }
            if key == VARIANT_PARAM {
                selection.variant_hint = value.parse().ok();
                continue;
            }
            let Some(axis) = product.axis(key) else {
                continue;
            };
            if let Ok(option_id) = value.parse::<OptionId>() {
                // Only accept options that actually exist on this axis; an
                // unknown id would just fail every match anyway.
                if axis.option(option_id).is_some() {
                    selection.by_axis.insert(key.to_string(), option_id);
                }
            }
        }
        selection
    }

    pub fn get(&self, axis_name: &str) -> Option<OptionId> {
        self.by_axis.get(axis_name).copied()
    }

    pub fn select(&mut self, axis_name: impl Into<String>, option_id: OptionId) {
        self.by_axis.insert(axis_name.into(), option_id);
    }

    /// The selection as it would be after choosing `option_id` on `axis_name`,
    /// holding every other axis fixed. The variant hint is cleared: it
    /// describes the previous combination, not the hypothetical one.
    pub fn with_option(&self, axis_name: &str, option_id: OptionId) -> Self {
        let mut next = self.clone();
        next.by_axis.insert(axis_name.to_string(), option_id);
        next.variant_hint = None;
        next
    }

    pub fn variant_hint(&self) -> Option<VariantId> {
        self.variant_hint
    }

    pub fn set_variant_hint(&mut self, hint: Option<VariantId>) {
        self.variant_hint = hint;
    }

    pub fn is_empty(&self) -> bool {
        self.by_axis.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, OptionId)> {
        self.by_axis.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{ProductStatus, VariantAxis, VariantOption};
    use storefront_core::{AxisId, PriceBook, ProductId};

    fn product_with_color_axis() -> (Product, OptionId) {
        let red = OptionId::new();
        let product = Product {
            id: ProductId::new(),
            slug: "tee".into(),
            title: "Tee".into(),
            description: None,
            status: ProductStatus::Published,
            categories: vec![],
            prices: PriceBook::usd(1500),
            enable_variants: true,
            inventory: 0,
            variant_axes: vec![VariantAxis {
                id: AxisId::new(),
                name: "color".into(),
                label: "Color".into(),
                options: vec![VariantOption {
                    id: red,
                    label: "Red".into(),
                }],
            }],
            variants: vec![],
            ratings: vec![],
        };
        (product, red)
    }

    #[test]
    fn captures_axis_values_and_drops_transient_keys() {
        let (product, red) = product_with_color_axis();
        let variant_id = VariantId::new();
        let red_str = red.to_string();
        let variant_str = variant_id.to_string();
        let pairs = vec![
            ("color", red_str.as_str()),
            ("image", "2"),
            ("variant", variant_str.as_str()),
        ];

        let selection = SelectedOptions::from_query_pairs(&product, pairs);
        assert_eq!(selection.get("color"), Some(red));
        assert_eq!(selection.variant_hint(), Some(variant_id));
        assert_eq!(selection.iter().count(), 1);
    }

    #[test]
    fn unknown_keys_and_bad_ids_are_dropped() {
        let (product, _red) = product_with_color_axis();
        let stray = OptionId::new().to_string();
        let pairs = vec![
            ("size", stray.as_str()),
            ("color", "not-a-uuid"),
            ("utm_source", "newsletter"),
        ];

        let selection = SelectedOptions::from_query_pairs(&product, pairs);
        assert!(selection.is_empty());
        assert_eq!(selection.variant_hint(), None);
    }

    #[test]
    fn options_not_on_the_axis_are_dropped() {
        let (product, _red) = product_with_color_axis();
        let foreign = OptionId::new().to_string();
        let selection =
            SelectedOptions::from_query_pairs(&product, vec![("color", foreign.as_str())]);
        assert!(selection.is_empty());
    }

    #[test]
    fn with_option_clears_the_variant_hint() {
        let (product, red) = product_with_color_axis();
        let red_str = red.to_string();
        let hint = VariantId::new().to_string();
        let selection = SelectedOptions::from_query_pairs(
            &product,
            vec![("color", red_str.as_str()), ("variant", hint.as_str())],
        );
        assert!(selection.variant_hint().is_some());

        let hypothetical = selection.with_option("color", red);
        assert_eq!(hypothetical.variant_hint(), None);
        assert_eq!(hypothetical.get("color"), Some(red));
    }
}
