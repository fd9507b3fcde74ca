//! Compound types built from validated simple types.
//!
//! - [`Address`]: street, optional building number, city, postal code,
//!   optional country
//! - [`Customer`]: name, optional e-mail, optional shipping address

mod address;
mod customer;

pub use address::Address;
pub use customer::Customer;
