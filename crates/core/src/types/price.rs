//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog service sends prices as plain JSON numbers with no currency.
//! The storefront sells in Thai baht, so every catalog price is a [`Price`]
//! in [`CurrencyCode::THB`] unless stated otherwise.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// Most fraction digits shown when formatting an amount.
const MAX_FRACTION_DIGITS: u32 = 3;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., baht, not satang).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in Thai baht.
    #[must_use]
    pub const fn thb(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::THB)
    }

    /// Format for display with grouped digits and the currency code suffix.
    ///
    /// ```rust
    /// # use rust_decimal::Decimal;
    /// # use wish_purr_core::Price;
    /// assert_eq!(Price::thb(Decimal::new(100, 0)).display(), "100 THB");
    /// assert_eq!(Price::thb(Decimal::new(12995, 1)).display(), "1,299.5 THB");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {}",
            group_thousands(self.amount),
            self.currency_code.code()
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurrencyCode {
    #[default]
    THB,
}

impl CurrencyCode {
    /// The code as shown next to amounts.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::THB => "THB",
        }
    }
}

/// Render a decimal with `,` thousands separators.
///
/// Rounds half away from zero to at most three fraction digits and drops
/// trailing zeros.
fn group_thousands(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let len = integer.len();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn thb(s: &str) -> String {
        Price::thb(s.parse().unwrap()).display()
    }

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(thb("0"), "0 THB");
        assert_eq!(thb("100"), "100 THB");
        assert_eq!(thb("999"), "999 THB");
    }

    #[test]
    fn test_thousands_are_grouped() {
        assert_eq!(thb("1000"), "1,000 THB");
        assert_eq!(thb("1299.5"), "1,299.5 THB");
        assert_eq!(thb("1234567"), "1,234,567 THB");
    }

    #[test]
    fn test_trailing_zeros_dropped() {
        assert_eq!(thb("250.00"), "250 THB");
        assert_eq!(thb("19.90"), "19.9 THB");
    }

    #[test]
    fn test_rounds_to_three_fraction_digits() {
        assert_eq!(thb("1.23456"), "1.235 THB");
        assert_eq!(thb("0.0005"), "0.001 THB");
        assert_eq!(thb("0.0004"), "0 THB");
    }

    #[test]
    fn test_negative_amounts_keep_sign() {
        assert_eq!(thb("-1500"), "-1,500 THB");
    }

    #[test]
    fn test_display_trait_matches_display_method() {
        let price = Price::new(Decimal::new(4200, 0), CurrencyCode::THB);
        assert_eq!(price.to_string(), price.display());
        assert_eq!(price.to_string(), "4,200 THB");
    }
}
