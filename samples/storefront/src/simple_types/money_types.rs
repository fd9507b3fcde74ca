//! Monetary types
//!
//! `Money` and `Percentage`. All arithmetic is done in `rust_decimal::Decimal`
//! so totals are exact; results are rounded to cents with banker's rounding.

use duality::outcome::Outcome;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use super::constrained_type;
use super::error::ValidationError;

/// Number of fractional digits kept for amounts
const CENT_SCALE: u32 = 2;

fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointNearestEven)
}

// =============================================================================
// Money
// =============================================================================

/// An amount between 0 and 1,000,000.00 with at most two fractional digits
///
/// The upper bound keeps every total an order can reach (a maximal price
/// times the maximal quantity, summed over any number of lines) far inside
/// the range of `Decimal`, so arithmetic on valid amounts cannot overflow.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use storefront_sample::simple_types::Money;
///
/// let price = Money::create(Decimal::from_str("19.99").unwrap()).unwrap_or_default();
/// assert_eq!(price.to_string(), "19.99");
///
/// assert!(Money::create(Decimal::from_str("-1").unwrap()).is_err());
/// assert!(Money::create(Decimal::from_str("0.001").unwrap()).is_err());
/// assert!(Money::create(Decimal::MAX).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    const FIELD_NAME: &'static str = "amount";
    const MAX_UNITS: i64 = 1_000_000;

    /// The zero amount
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Validates an amount: within range, then at most two fractional digits.
    pub fn create(value: Decimal) -> Outcome<Self> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            std::convert::identity,
            Decimal::ZERO,
            Decimal::from(Self::MAX_UNITS),
            value,
        )
        .bind(|amount| {
            if amount.normalize().scale() > CENT_SCALE {
                ValidationError::new(
                    Self::FIELD_NAME,
                    &format!("must not have more than {CENT_SCALE} decimal places, got {amount}"),
                )
                .into_outcome()
            } else {
                Outcome::ok(Self(amount))
            }
        })
    }

    /// Returns the amount
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Multiplies the amount by a unit count.
    #[must_use]
    pub fn times(&self, count: Decimal) -> Self {
        Self(round_to_cents(self.0 * count))
    }

    /// Adds two amounts.
    #[must_use]
    pub fn plus(&self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// Subtracts `other`, never going below zero.
    #[must_use]
    pub fn minus(&self, other: Self) -> Self {
        Self((self.0 - other.0).max(Decimal::ZERO))
    }

    /// Sums a sequence of amounts.
    pub fn sum<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        amounts.into_iter().fold(Self::ZERO, |total, amount| total.plus(amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.2}", self.0)
    }
}

// =============================================================================
// Percentage
// =============================================================================

/// A percentage between 0 and 100 inclusive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Percentage(Decimal);

impl Percentage {
    const FIELD_NAME: &'static str = "discount percentage";

    /// Validates a percentage
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use storefront_sample::simple_types::Percentage;
    ///
    /// let rejected = Percentage::create(Decimal::from(150));
    /// assert!(rejected.error().unwrap_or_default().contains("between 0 and 100"));
    /// ```
    pub fn create(value: Decimal) -> Outcome<Self> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            Self,
            Decimal::ZERO,
            Decimal::ONE_HUNDRED,
            value,
        )
    }

    /// Returns the percentage value, e.g. `20` for 20 %
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns this percentage of `amount`, rounded to cents.
    #[must_use]
    pub fn of(&self, amount: Money) -> Money {
        Money(round_to_cents(amount.0 * self.0 / Decimal::ONE_HUNDRED))
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}%", self.0.normalize())
    }
}
