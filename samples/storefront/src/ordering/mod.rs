//! Orders, order lines and discounts.

mod discount;
mod order;
mod order_line;

pub use discount::{Discount, DiscountCode};
pub use order::{Order, OrderReference};
pub use order_line::OrderLine;
