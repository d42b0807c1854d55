//! Variant resolution.
//!
//! Pure, render-scoped computation: given a product and the current option
//! selection (derived from query state), derive the matched variant, per-option
//! availability, the display price, and the stock indicator. No IO, no shared
//! state; every call recomputes from scratch.

pub mod resolver;
pub mod selection;

pub use resolver::{
    is_option_available, match_variant, option_availability, resolve, resolve_price, resolve_stock,
    selected_variant, AxisOptions, OptionState, PriceView, ResolvedProduct, StockLevel, StockView,
};
pub use selection::SelectedOptions;
