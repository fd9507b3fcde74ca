//! Discounts applied to whole orders

use duality::optional::Optional;
use duality::outcome::Outcome;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::LazyLock;

use crate::simple_types::constrained_type;
use crate::simple_types::{Money, Percentage};

/// Promotion code, 3 to 20 upper-case letters or digits
///
/// Input is upper-cased before matching, so `"spring20"` is accepted as
/// `"SPRING20"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DiscountCode(String);

static DISCOUNT_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9]{3,20}$").expect("Invalid discount code regex pattern")
});

impl DiscountCode {
    const FIELD_NAME: &'static str = "discount code";

    /// Validates a discount code; an empty input means no code.
    pub fn create_optional(value: &str) -> Outcome<Optional<Self>> {
        constrained_type::create_like_optional(
            Self::FIELD_NAME,
            Self,
            &DISCOUNT_CODE_PATTERN,
            "a valid discount code",
            &value.to_uppercase(),
        )
    }

    /// Returns the code
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// A percentage taken off an order subtotal, optionally tied to a code
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use storefront_sample::ordering::Discount;
///
/// let rejected = Discount::create("", Decimal::from(150));
/// assert!(rejected.error().unwrap_or_default().contains("between 0 and 100"));
///
/// let twenty = Discount::create("SPRING", Decimal::from(20)).into_value();
/// assert_eq!(twenty.map(|d| d.percentage().value()).unwrap_or_default(), Decimal::from(20));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discount {
    code: Optional<DiscountCode>,
    percentage: Percentage,
}

impl Discount {
    /// Builds a discount, checking the code before the percentage.
    pub fn create(code: &str, percentage: Decimal) -> Outcome<Self> {
        DiscountCode::create_optional(code).bind(|code| {
            Percentage::create(percentage).on_success(|percentage| {
                tracing::trace!(%percentage, has_code = code.is_present(), "discount created");
                Self { code, percentage }
            })
        })
    }

    /// Returns the promotion code, if the discount has one
    #[must_use]
    pub const fn code(&self) -> Optional<&DiscountCode> {
        self.code.as_ref()
    }

    /// Returns the percentage
    #[must_use]
    pub const fn percentage(&self) -> Percentage {
        self.percentage
    }

    /// Returns how much this discount takes off `amount`.
    #[must_use]
    pub fn amount_off(&self, amount: Money) -> Money {
        self.percentage.of(amount)
    }

    /// Returns `amount` after the discount.
    #[must_use]
    pub fn apply(&self, amount: Money) -> Money {
        amount.minus(self.amount_off(amount))
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.code().fold(
            |code| format!("{} ({})", code.value(), self.percentage),
            || self.percentage.to_string(),
        );
        formatter.write_str(&label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn money(text: &str) -> Money {
        Money::create(Decimal::from_str(text).unwrap()).unwrap_or_else(|| panic!("invalid {text}"))
    }

    #[rstest]
    fn test_apply_twenty_percent() {
        let discount = Discount::create("", Decimal::from(20)).unwrap_or_else(|| panic!("valid"));

        assert_eq!(discount.apply(money("100")), money("80"));
        assert_eq!(discount.amount_off(money("100")), money("20"));
    }

    #[rstest]
    fn test_apply_full_discount_is_zero() {
        let discount = Discount::create("", Decimal::ONE_HUNDRED).unwrap_or_else(|| panic!("valid"));

        assert_eq!(discount.apply(money("42.50")), Money::ZERO);
    }

    #[rstest]
    fn test_code_is_upper_cased() {
        let discount =
            Discount::create("spring20", Decimal::from(5)).unwrap_or_else(|| panic!("valid"));

        assert_eq!(
            discount.code().map(|code| code.value().to_string()),
            Optional::some("SPRING20".to_string())
        );
        assert_eq!(discount.to_string(), "SPRING20 (5%)");
    }

    #[rstest]
    fn test_invalid_code_is_reported_before_percentage() {
        let result = Discount::create("no", Decimal::from(150));

        assert_eq!(
            result.error(),
            Optional::some("discount code 'NO' is not a valid discount code")
        );
    }

    #[rstest]
    fn test_out_of_range_percentage_message() {
        let result = Discount::create("", Decimal::from(150));

        assert_eq!(
            result.error(),
            Optional::some("discount percentage must be between 0 and 100, got 150")
        );
    }
}
