//! Order lines

use duality::outcome::Outcome;
use rust_decimal::Decimal;

use crate::simple_types::{Money, ProductName, Quantity};

/// One product on an order: name, unit price and quantity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderLine {
    product_name: ProductName,
    unit_price: Money,
    quantity: Quantity,
}

impl OrderLine {
    /// Builds an order line, checking product name, unit price and quantity
    /// in that order.
    ///
    /// # Examples
    ///
    /// ```
    /// use duality::optional::Optional;
    /// use rust_decimal::Decimal;
    /// use storefront_sample::ordering::OrderLine;
    ///
    /// let line = OrderLine::create("Teapot", Decimal::new(1250, 2), 2);
    /// assert_eq!(line.value().map(|l| l.line_total().to_string()), Optional::some("25.00".to_string()));
    ///
    /// let rejected = OrderLine::create("Teapot", Decimal::new(1250, 2), 0);
    /// assert_eq!(rejected.error(), Optional::some("quantity must be between 1 and 1000, got 0"));
    /// ```
    pub fn create(product_name: &str, unit_price: Decimal, quantity: u32) -> Outcome<Self> {
        ProductName::create(product_name).bind(|product_name| {
            Money::create(unit_price).bind(|unit_price| {
                Quantity::create(quantity).on_success(|quantity| Self {
                    product_name,
                    unit_price,
                    quantity,
                })
            })
        })
    }

    /// Returns the product name
    #[must_use]
    pub const fn product_name(&self) -> &ProductName {
        &self.product_name
    }

    /// Returns the price of one unit
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the quantity
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price times quantity, rounded to cents
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity.as_decimal())
    }
}
