//! Orders and their derived documents
//!
//! An [`Order`] ties a customer to one or more [`OrderLine`]s and at most one
//! [`Discount`]. Amounts are computed on demand; labels and e-mails are
//! `Optional` because they depend on customer details that may be missing.

use duality::optional::Optional;
use duality::outcome::Outcome;

use super::{Discount, OrderLine};
use crate::compound_types::Customer;
use crate::conversions;
use crate::simple_types::constrained_type;
use crate::simple_types::{Money, ValidationError};

/// Order reference as printed on invoices, up to 20 characters
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderReference(String);

impl OrderReference {
    const FIELD_NAME: &'static str = "order reference";
    const MAX_LENGTH: usize = 20;

    /// Validates an order reference
    pub fn create(value: &str) -> Outcome<Self> {
        constrained_type::create_string(Self::FIELD_NAME, Self, Self::MAX_LENGTH, value)
    }

    /// Returns the reference text
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// A placed order
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use storefront_sample::compound_types::Customer;
/// use storefront_sample::ordering::{Discount, Order, OrderLine};
///
/// let total = Customer::create("Ada", "")
///     .bind(|customer| {
///         OrderLine::create("Lamp", Decimal::from(100), 1)
///             .bind(|line| Order::create("ORD-1", customer, vec![line]))
///     })
///     .bind(|order| {
///         Discount::create("", Decimal::from(20)).on_success(|d| order.with_discount(d))
///     })
///     .fold(|order| order.total().to_string(), |error| error);
///
/// assert_eq!(total, "80.00");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    reference: OrderReference,
    customer: Customer,
    lines: Vec<OrderLine>,
    discount: Optional<Discount>,
}

impl Order {
    /// Builds an order. The reference is checked first, then that at least
    /// one line is present.
    pub fn create(reference: &str, customer: Customer, lines: Vec<OrderLine>) -> Outcome<Self> {
        OrderReference::create(reference).bind(|reference| {
            if lines.is_empty() {
                ValidationError::new("order lines", "must contain at least one line")
                    .into_outcome()
            } else {
                tracing::trace!(
                    reference = reference.value(),
                    line_count = lines.len(),
                    "order created"
                );
                Outcome::ok(Self {
                    reference,
                    customer,
                    lines,
                    discount: Optional::none(),
                })
            }
        })
    }

    /// Returns a copy of this order with `discount` applied, replacing any
    /// earlier discount.
    #[must_use]
    pub fn with_discount(self, discount: Discount) -> Self {
        Self {
            discount: Optional::some(discount),
            ..self
        }
    }

    /// Returns the reference
    #[must_use]
    pub const fn reference(&self) -> &OrderReference {
        &self.reference
    }

    /// Returns the customer
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Returns the order lines
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns the discount, if one is applied
    #[must_use]
    pub const fn discount(&self) -> Optional<&Discount> {
        self.discount.as_ref()
    }

    /// Sum of all line totals
    #[must_use]
    pub fn subtotal(&self) -> Money {
        Money::sum(self.lines.iter().map(OrderLine::line_total))
    }

    /// Amount taken off the subtotal; zero without a discount
    #[must_use]
    pub fn discount_amount(&self) -> Money {
        let subtotal = self.subtotal();
        self.discount()
            .map(|discount| discount.amount_off(subtotal))
            .unwrap_or(Money::ZERO)
    }

    /// Subtotal minus discount
    #[must_use]
    pub fn total(&self) -> Money {
        self.subtotal().minus(self.discount_amount())
    }

    /// Renders a plain-text invoice.
    ///
    /// The discount line appears only when a discount is applied.
    #[must_use]
    pub fn invoice(&self) -> String {
        let header = [
            format!("Invoice {}", self.reference.value()),
            format!("Bill to: {}", self.customer.name().value()),
        ];
        let line_items = self.lines.iter().map(|line| {
            format!(
                "  {} x{} @ {} = {}",
                line.product_name().value(),
                line.quantity().value(),
                line.unit_price(),
                line.line_total()
            )
        });
        let discount_line = self
            .discount()
            .map(|discount| format!("Discount {discount}: -{}", self.discount_amount()));

        header
            .into_iter()
            .chain(line_items)
            .chain(std::iter::once(format!("Subtotal: {}", self.subtotal())))
            .chain(Option::<String>::from(discount_line))
            .chain(std::iter::once(format!("Total: {}", self.total())))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Shipping label headed by the order reference; absent when the
    /// customer has no shipping address.
    pub fn shipping_label(&self) -> Optional<String> {
        self.customer
            .shipping_label()
            .map(|label| format!("Order {}\n{label}", self.reference.value()))
    }

    /// Order confirmation e-mail; absent when the customer has no e-mail
    /// address.
    pub fn confirmation_email(&self) -> Optional<String> {
        self.customer.email_confirmation().map(|notice| {
            format!(
                "{notice}\nOrder {} has been received. Total: {}.",
                self.reference.value(),
                self.total()
            )
        })
    }

    /// Shipping label for dispatch, where a missing address is an error.
    pub fn dispatch_label(&self) -> Outcome<String> {
        conversions::require(
            self.shipping_label(),
            &format!("order {} has no shipping address", self.reference.value()),
        )
    }
}
