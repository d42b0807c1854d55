//! Storefront resolver CLI.
//!
//! Loads a catalog snapshot from JSON, constructs the repository explicitly
//! (the process entry point owns the client lifecycle), and resolves product
//! views against query-style selection parameters.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use storefront_catalog::{
    CatalogRepository, InMemoryCatalog, Product, ProductQuery, ProductSort,
};
use storefront_core::CurrencyCode;
use storefront_resolver::{resolve, resolve_price, PriceView, SelectedOptions};

#[derive(Parser)]
#[command(name = "storefront", about = "Resolve variants, prices and stock from a catalog snapshot")]
struct Cli {
    /// Path to a JSON catalog snapshot (an array of products).
    #[arg(long, env = "STOREFRONT_CATALOG")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one product page view.
    Show {
        #[arg(long)]
        slug: String,

        /// Display currency (usd, eur, gbp).
        #[arg(long, default_value = "usd")]
        currency: String,

        /// Include draft products (preview mode).
        #[arg(long)]
        draft: bool,

        /// Query parameters as key=value pairs: axis selections plus the
        /// transient `variant`/`image` keys. Repeatable.
        #[arg(long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,
    },

    /// List published catalog products.
    List {
        /// Substring search over title and description.
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Sort by title descending instead of ascending.
        #[arg(long)]
        desc: bool,
    },
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{s}`"))
}

fn load_catalog(path: &PathBuf) -> Result<InMemoryCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog snapshot {}", path.display()))?;
    let products: Vec<Product> =
        serde_json::from_str(&raw).context("catalog snapshot is not a valid product array")?;
    info!(products = products.len(), "catalog snapshot loaded");
    Ok(InMemoryCatalog::new(products))
}

fn format_price(view: PriceView) -> String {
    let cents = |amount: u64| format!("{}.{:02}", amount / 100, amount % 100);
    match view {
        PriceView::Single { amount } => cents(amount),
        PriceView::Range { lowest, highest } if lowest == highest => cents(lowest),
        PriceView::Range { lowest, highest } => format!("{} - {}", cents(lowest), cents(highest)),
    }
}

fn main() -> Result<()> {
    storefront_observability::init();
    let cli = Cli::parse();
    let catalog = load_catalog(&cli.catalog)?;

    match cli.command {
        Command::Show {
            slug,
            currency,
            draft,
            params,
        } => {
            let currency: CurrencyCode = currency.parse()?;
            let product = catalog
                .find_by_slug(&slug, draft)?
                .with_context(|| format!("no product with slug `{slug}`"))?;

            let selection = SelectedOptions::from_query_pairs(
                &product,
                params.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            );
            let view = resolve(&product, &selection, currency);

            if let Some(stock) = &view.stock {
                info!(label = stock.label(), "stock");
            }
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Command::List {
            search,
            category,
            desc,
        } => {
            let query = ProductQuery {
                search,
                category,
                sort: if desc {
                    ProductSort::TitleDesc
                } else {
                    ProductSort::TitleAsc
                },
            };
            for product in catalog.find_all(&query)? {
                let price = format_price(resolve_price(&product, CurrencyCode::Usd));
                println!("{}\t{}\t{}", product.slug, product.title, price);
            }
        }
    }

    Ok(())
}
