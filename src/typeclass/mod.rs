//! Type class traits describing the composition laws of the containers.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation via GATs
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing computations with dependency
//!
//! Each trait is implemented for [`Optional`](crate::optional::Optional) and
//! [`Outcome`](crate::outcome::Outcome) by delegating to their inherent
//! `map`/`on_success` and `bind` methods, so code generic over a container
//! shape can rely on the laws documented here.
//!
//! # Examples
//!
//! ```rust
//! use duality::optional::Optional;
//! use duality::outcome::Outcome;
//! use duality::typeclass::{Functor, Monad};
//!
//! fn increment_all<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     container.fmap(|n| n + 1)
//! }
//!
//! assert_eq!(increment_all(Optional::some(1)), Optional::some(2));
//! assert_eq!(increment_all(Outcome::ok(1)), Outcome::ok(2));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
