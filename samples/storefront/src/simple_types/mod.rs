//! Constrained value objects used by the storefront domain.
//!
//! Each type is a newtype with a private field and a single validating
//! factory returning `Outcome<Self>` (or `Outcome<Optional<Self>>` for fields
//! a customer may leave blank). Once built, a value is valid for its whole
//! lifetime; there is no way to mutate it.
//!
//! # Type Categories
//!
//! - **Address components**: `Street`, `BuildingNumber`, `City`, `PostalCode`, `Country`
//! - **Contact**: `CustomerName`, `EmailAddress`
//! - **Product lines**: `ProductName`, `Quantity`
//! - **Money**: `Money`, `Percentage`
//!
//! # Examples
//!
//! ```
//! use duality::optional::Optional;
//! use storefront_sample::simple_types::{PostalCode, Street};
//!
//! assert!(PostalCode::create("12345").is_ok());
//! assert_eq!(Street::create("").error(), Optional::some("street must not be empty"));
//! ```

mod address_types;
mod contact_types;
pub mod constrained_type;
mod error;
mod money_types;
mod product_types;

pub use address_types::{BuildingNumber, City, Country, PostalCode, Street};
pub use contact_types::{CustomerName, EmailAddress};
pub use error::ValidationError;
pub use money_types::{Money, Percentage};
pub use product_types::{ProductName, Quantity};
