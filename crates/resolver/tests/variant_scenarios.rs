//! End-to-end scenarios: repository lookup, query-state parsing, resolution.

use storefront_catalog::{
    CatalogRepository, InMemoryCatalog, Product, ProductStatus, Variant, VariantAxis,
    VariantOption,
};
use storefront_core::{AxisId, CurrencyCode, OptionId, PriceBook, ProductId, VariantId};
use storefront_resolver::{
    match_variant, resolve, PriceView, SelectedOptions, StockLevel,
};

struct Shop {
    catalog: InMemoryCatalog,
    red: OptionId,
    blue: OptionId,
    small: OptionId,
    medium: OptionId,
}

/// A tee with Color in {Red, Blue} and Size in {S, M}; variants
/// (Red,S,inv=0,$10), (Red,M,inv=5,$15), (Blue,S,inv=20,$20).
fn shop() -> Shop {
    let red = OptionId::new();
    let blue = OptionId::new();
    let small = OptionId::new();
    let medium = OptionId::new();

    let axis = |name: &str, label: &str, options: Vec<(OptionId, &str)>| VariantAxis {
        id: AxisId::new(),
        name: name.into(),
        label: label.into(),
        options: options
            .into_iter()
            .map(|(id, label)| VariantOption {
                id,
                label: label.into(),
            })
            .collect(),
    };

    let variant = |options: Vec<OptionId>, inventory: i64, usd: u64| Variant {
        id: VariantId::new(),
        option_ids: options,
        inventory,
        prices: PriceBook::usd(usd),
    };

    let tee = Product {
        id: ProductId::new(),
        slug: "classic-tee".into(),
        title: "Classic Tee".into(),
        description: Some("A classic cotton tee".into()),
        status: ProductStatus::Published,
        categories: vec!["apparel".into()],
        prices: PriceBook::usd(999),
        enable_variants: true,
        inventory: 100,
        variant_axes: vec![
            axis("color", "Color", vec![(red, "Red"), (blue, "Blue")]),
            axis("size", "Size", vec![(small, "S"), (medium, "M")]),
        ],
        variants: vec![
            variant(vec![red, small], 0, 1000),
            variant(vec![red, medium], 5, 1500),
            variant(vec![blue, small], 20, 2000),
        ],
        ratings: vec![],
    };

    Shop {
        catalog: InMemoryCatalog::new(vec![tee]),
        red,
        blue,
        small,
        medium,
    }
}

fn query(pairs: &[(&str, String)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[test]
fn red_small_is_out_of_stock() {
    let shop = shop();
    let product = shop
        .catalog
        .find_by_slug("classic-tee", false)
        .unwrap()
        .unwrap();

    let pairs = query(&[
        ("color", shop.red.to_string()),
        ("size", shop.small.to_string()),
    ]);
    let selection = SelectedOptions::from_query_pairs(
        &product,
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    );

    let view = resolve(&product, &selection, CurrencyCode::Usd);
    let stock = view.stock.expect("full selection resolves stock");
    assert_eq!(stock.level, StockLevel::Out);
    assert_eq!(stock.label(), "Out of Stock");
}

#[test]
fn blue_small_is_plentiful() {
    let shop = shop();
    let product = shop
        .catalog
        .find_by_slug("classic-tee", false)
        .unwrap()
        .unwrap();

    let pairs = query(&[
        ("color", shop.blue.to_string()),
        ("size", shop.small.to_string()),
    ]);
    let selection = SelectedOptions::from_query_pairs(
        &product,
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    );

    let view = resolve(&product, &selection, CurrencyCode::Usd);
    let stock = view.stock.expect("full selection resolves stock");
    assert_eq!(stock.level, StockLevel::Plentiful);
    assert_eq!(stock.label(), "In Stock");
    assert_eq!(stock.unit_price, Some(2000));
}

#[test]
fn price_range_spans_all_variants_regardless_of_selection() {
    let shop = shop();
    let product = shop
        .catalog
        .find_by_slug("classic-tee", false)
        .unwrap()
        .unwrap();

    let view = resolve(&product, &SelectedOptions::default(), CurrencyCode::Usd);
    assert_eq!(
        view.price,
        PriceView::Range {
            lowest: 1000,
            highest: 2000
        }
    );
}

#[test]
fn color_alone_identifies_no_variant() {
    let shop = shop();
    let product = shop
        .catalog
        .find_by_slug("classic-tee", false)
        .unwrap()
        .unwrap();

    let pairs = query(&[("color", shop.red.to_string())]);
    let selection = SelectedOptions::from_query_pairs(
        &product,
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    );

    assert!(match_variant(&product, &selection).is_none());
    let view = resolve(&product, &selection, CurrencyCode::Usd);
    assert_eq!(view.variant_id, None);
    assert!(view.stock.is_none());
}

#[test]
fn transient_params_do_not_disturb_matching() {
    let shop = shop();
    let product = shop
        .catalog
        .find_by_slug("classic-tee", false)
        .unwrap()
        .unwrap();

    let expected = product.variants[1].id;
    let pairs = query(&[
        ("color", shop.red.to_string()),
        ("size", shop.medium.to_string()),
        ("image", "3".to_string()),
        ("variant", expected.to_string()),
    ]);
    let selection = SelectedOptions::from_query_pairs(
        &product,
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    );

    let view = resolve(&product, &selection, CurrencyCode::Usd);
    assert_eq!(view.variant_id, Some(expected));
}

#[test]
fn eur_falls_back_to_usd_prices() {
    let shop = shop();
    let product = shop
        .catalog
        .find_by_slug("classic-tee", false)
        .unwrap()
        .unwrap();

    let view = resolve(&product, &SelectedOptions::default(), CurrencyCode::Eur);
    assert_eq!(
        view.price,
        PriceView::Range {
            lowest: 1000,
            highest: 2000
        }
    );
}
