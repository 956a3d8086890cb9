use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Mul};

/// An amount of money held in cents.
///
/// Prices enter the site as decimal strings in markup and as floats in
/// configuration; both are converted once at the boundary so sums and tax
/// never accumulate float error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Convert a major-unit amount (e.g. `299.0` dollars). Non-finite input is zero.
    pub fn from_major(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::ZERO;
        }
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// Parse a major-unit amount from a markup attribute such as `data-price="25"`.
    /// Empty or malformed text prices at zero.
    pub fn parse_major(text: &str) -> Self {
        text.trim()
            .parse::<f64>()
            .map(Self::from_major)
            .unwrap_or(Self::ZERO)
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Multiply by a rate (tax, discount), rounding to the nearest cent.
    pub fn scale(&self, rate: f64) -> Self {
        Self::from_cents((self.cents as f64 * rate).round() as i64)
    }

    /// Render with the currency prefix and exactly two decimals, e.g. `$762.45`.
    pub fn format(&self, symbol: &str) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money::from_cents(self.cents.saturating_mul(i64::from(rhs)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}
