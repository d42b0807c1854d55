//! Currency codes and per-currency price books.
//!
//! The supported currency set is closed on purpose: price lookup goes through
//! an explicit accessor per code rather than dynamic field names, so an
//! unsupported code is rejected at the boundary instead of silently reading a
//! missing field.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Supported display currencies.
///
/// USD is the canonical reference currency: every other currency falls back
/// to the USD amount when its own amount is missing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Gbp,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
        }
    }
}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::Usd),
            "EUR" => Ok(CurrencyCode::Eur),
            "GBP" => Ok(CurrencyCode::Gbp),
            other => Err(DomainError::unsupported_currency(other)),
        }
    }
}

/// Per-currency amounts in the smallest currency unit (e.g. cents).
///
/// A missing or zero amount means "no price in this currency". Amounts are
/// unsigned, so the unusable-price rule reduces to absent-or-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceBook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eur: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gbp: Option<u64>,
}

impl PriceBook {
    /// A price book carrying only a USD amount.
    pub fn usd(amount: u64) -> Self {
        Self {
            usd: Some(amount),
            ..Self::default()
        }
    }

    /// The raw amount recorded for `code`, if any.
    pub fn amount_in(&self, code: CurrencyCode) -> Option<u64> {
        match code {
            CurrencyCode::Usd => self.usd,
            CurrencyCode::Eur => self.eur,
            CurrencyCode::Gbp => self.gbp,
        }
    }

    /// The amount to display for `code`, applying the USD fallback.
    ///
    /// Returns the currency's own amount when present and non-zero; otherwise,
    /// for non-USD currencies, the USD amount when present and non-zero.
    /// Never returns `Some(0)`.
    pub fn effective(&self, code: CurrencyCode) -> Option<u64> {
        if let Some(amount) = self.amount_in(code).filter(|a| *a > 0) {
            return Some(amount);
        }
        if code != CurrencyCode::Usd {
            return self.usd.filter(|a| *a > 0);
        }
        None
    }
}
