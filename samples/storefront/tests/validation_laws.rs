//! Property tests for validation and pricing
//!
//! 1. Address validation reports the earliest invalid field and nothing else
//! 2. Valid inputs always build an address
//! 3. Order totals are exact and never exceed the subtotal

use proptest::prelude::*;
use rust_decimal::Decimal;
use storefront_sample::compound_types::{Address, Customer};
use storefront_sample::ordering::{Discount, Order, OrderLine};

// =============================================================================
// Strategy definitions
// =============================================================================

fn valid_street_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z ]{0,30}").unwrap()
}

fn valid_city_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][a-z]{1,20}").unwrap()
}

fn valid_postal_code_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{5}").unwrap()
}

fn invalid_postal_code_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{1,4}|[a-z]{5}").unwrap()
}

/// Prices in cents, up to 10,000.00
fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0_i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0_i64..=10_000).prop_map(|basis_points| Decimal::new(basis_points, 2))
}

// =============================================================================
// Address validation
// =============================================================================

proptest! {
    #[test]
    fn prop_valid_inputs_build_an_address(
        street in valid_street_strategy(),
        city in valid_city_strategy(),
        postal_code in valid_postal_code_strategy(),
    ) {
        let result = Address::create(&street, "", &city, &postal_code, "");

        prop_assert!(result.is_ok(), "rejected: {}", result);
    }

    #[test]
    fn prop_empty_street_wins_over_any_later_failure(
        city in ".{0,60}",
        postal_code in invalid_postal_code_strategy(),
    ) {
        let message = Address::create("", "", &city, &postal_code, "")
            .into_error()
            .unwrap_or_default();

        prop_assert_eq!(message, "street must not be empty");
    }

    #[test]
    fn prop_invalid_postal_code_reported_when_earlier_fields_valid(
        street in valid_street_strategy(),
        city in valid_city_strategy(),
        postal_code in invalid_postal_code_strategy(),
    ) {
        let message = Address::create(&street, "", &city, &postal_code, "")
            .into_error()
            .unwrap_or_default();

        prop_assert!(message.starts_with("postal code"), "got: {}", message);
    }
}

// =============================================================================
// Pricing
// =============================================================================

proptest! {
    #[test]
    fn prop_total_is_subtotal_minus_exact_discount(
        price in price_strategy(),
        quantity in 1_u32..=20,
        percentage in percentage_strategy(),
    ) {
        let order = Customer::create("Ada", "")
            .bind(|customer| {
                OrderLine::create("Item", price, quantity)
                    .bind(|line| Order::create("ORD-P", customer, vec![line]))
            })
            .bind(|order| {
                Discount::create("", percentage).on_success(|discount| order.with_discount(discount))
            })
            .into_value();

        prop_assert!(order.is_present());
        let checked = order.map(|order| {
            let subtotal = order.subtotal().value();
            let total = order.total().value();
            let discount = order.discount_amount().value();
            (subtotal, total, discount)
        });
        let (subtotal, total, discount) = checked.unwrap_or_default();

        prop_assert_eq!(subtotal, price * Decimal::from(quantity));
        prop_assert_eq!(total + discount, subtotal);
        prop_assert!(total <= subtotal);
        prop_assert!(total.scale() <= 2);
    }
}
