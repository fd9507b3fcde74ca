//! # Storefront Sample
//!
//! A small storefront domain built on `duality`'s `Optional` and `Outcome`.
//!
//! ## Overview
//!
//! Every value object and entity is created through a validating factory
//! returning `Outcome<Self>`. Composite entities chain their field checks with
//! `Outcome::bind`, so the first invalid field (in a fixed order) is the one
//! reported. Fields a customer may leave out are `Optional`, and documents
//! that depend on them (shipping labels, confirmation e-mails) are
//! `Optional<String>`.
//!
//! ## Module Structure
//!
//! - `simple_types`: Constrained value objects (`Street`, `PostalCode`, `Money`, etc.)
//! - `compound_types`: `Address` and `Customer`
//! - `ordering`: `Order`, `OrderLine` and `Discount`
//! - `conversions`: Explicit `Optional` to `Outcome` conversions

#![forbid(unsafe_code)]

pub mod compound_types;
pub mod conversions;
pub mod ordering;
pub mod simple_types;
