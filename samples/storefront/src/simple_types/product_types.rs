//! Product line types
//!
//! `ProductName` and `Quantity`.

use duality::outcome::Outcome;
use rust_decimal::Decimal;

use super::constrained_type;

/// Product name, up to 100 characters
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProductName(String);

impl ProductName {
    const FIELD_NAME: &'static str = "product name";
    const MAX_LENGTH: usize = 100;

    /// Validates a product name
    pub fn create(value: &str) -> Outcome<Self> {
        constrained_type::create_string(Self::FIELD_NAME, Self, Self::MAX_LENGTH, value)
    }

    /// Returns the name
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Ordered unit count, 1 to 1000
///
/// # Examples
///
/// ```
/// use storefront_sample::simple_types::Quantity;
///
/// assert!(Quantity::create(3).is_ok());
/// assert!(Quantity::create(0).is_err());
/// assert!(Quantity::create(1001).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quantity(u32);

impl Quantity {
    const FIELD_NAME: &'static str = "quantity";
    const MIN_VALUE: u32 = 1;
    const MAX_VALUE: u32 = 1000;

    /// Validates a quantity
    pub fn create(value: u32) -> Outcome<Self> {
        constrained_type::create_integer(
            Self::FIELD_NAME,
            Self,
            Self::MIN_VALUE,
            Self::MAX_VALUE,
            value,
        )
    }

    /// Returns the count
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the count as a decimal, for price arithmetic
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}
