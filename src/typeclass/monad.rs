//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use duality::outcome::Outcome;
//! use duality::typeclass::Monad;
//!
//! fn parse_positive(raw: &str) -> Outcome<i32> {
//!     match raw.parse::<i32>() {
//!         Ok(n) if n > 0 => Outcome::ok(n),
//!         _ => Outcome::err(format!("'{raw}' is not a positive number")),
//!     }
//! }
//!
//! let doubled = Outcome::ok("21").flat_map(parse_positive).flat_map(|n| Outcome::ok(n * 2));
//! assert_eq!(doubled, Outcome::ok(42));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;
use crate::outcome::Outcome;

/// A type class for types that support sequencing of computations.
///
/// `flat_map` is the generic name for `bind` on both containers.
pub trait Monad: Applicative {
    /// Applies a function returning a new context and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` holds no value, that state propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::outcome::Outcome;
    /// use duality::typeclass::Monad;
    ///
    /// let first: Outcome<i32> = Outcome::err("first");
    /// let second: Outcome<&str> = Outcome::err("second");
    /// assert_eq!(first.then(second), Outcome::err("first"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.bind(function)
    }
}

impl<A> Monad for Outcome<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        self.bind(function)
    }
}
