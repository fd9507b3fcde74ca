//! storefront-demo
//!
//! Builds a customer, an address, an order and a discount, then logs the
//! invoice, shipping label and confirmation e-mail.
//!
//! ```bash
//! RUST_LOG=storefront_sample=trace,storefront_demo=info cargo run --bin storefront-demo
//! ```

use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duality::outcome::Outcome;
use storefront_sample::compound_types::{Address, Customer};
use storefront_sample::conversions;
use storefront_sample::ordering::{Discount, Order, OrderLine};

fn build_order() -> Outcome<Order> {
    let customer = Customer::create("Ada Lovelace", "ada@example.com").bind(|customer| {
        Address::create("Baker Street", "221B", "London", "12345", "United Kingdom")
            .on_success(|address| customer.with_shipping_address(address))
    });
    let lines = OrderLine::create("Teapot", Decimal::new(3450, 2), 1).bind(|teapot| {
        OrderLine::create("Cup", Decimal::new(1275, 2), 4).on_success(|cups| vec![teapot, cups])
    });

    customer
        .bind(|customer| lines.bind(|lines| Order::create("ORD-1001", customer, lines)))
        .bind(|order| {
            Discount::create("welcome", Decimal::from(15))
                .on_success(|discount| order.with_discount(discount))
        })
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_sample=info,storefront_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    build_order().fold(
        |order| {
            tracing::info!(reference = order.reference().value(), total = %order.total(), "order placed");
            tracing::info!("\n{}", order.invoice());
            tracing::info!("\n{}", order.dispatch_label().fold(|label| label, |error| error));
            tracing::info!(
                "\n{}",
                order
                    .confirmation_email()
                    .unwrap_or_else(|| "no e-mail on file".to_string())
            );
        },
        |error| tracing::warn!(%error, "order rejected"),
    );

    // A customer that left both optional fields blank
    let bare = conversions::recover(Customer::create("Grace Hopper", ""));
    let label = bare.bind(|customer| customer.shipping_label());
    tracing::info!(has_label = label.is_present(), "customer without address");

    let rejected = Address::create("", "", "City", "12345", "");
    tracing::info!(outcome = %rejected.as_ref().on_success(ToString::to_string), "invalid address");
}
