//! Type-safe price representation using decimal arithmetic.
//!
//! Marketplace listings are priced in USD, so `Price` wraps a single
//! [`Decimal`] amount rather than carrying a currency code. Display
//! formatting matches the storefront convention: dollar sign, thousands
//! separators, and exactly two decimal places (e.g., `$2,847.50`).

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A USD price or monetary total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal dollar amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount in dollars.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2).abs();
        let text = rounded.to_string();
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "0"));

        let sign = if self.0.is_sign_negative() { "-" } else { "" };
        write!(f, "{sign}${}.{frac_part:0<2}", group_thousands(int_part))
    }
}

/// Insert comma separators into a string of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
