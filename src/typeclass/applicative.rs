//! Applicative type class - lifting values and combining independent contexts.
//!
//! # Laws
//!
//! ```text
//! Self::pure(x).fmap(f) == Self::pure(f(x))
//! fa.map2(Self::pure(b), |a, b| (a, b)) == fa.fmap(|a| (a, b))
//! ```
//!
//! For [`Outcome`], `map2` keeps the message of the left operand when both
//! sides failed, matching the first-error-wins policy of `bind` chains.

use super::functor::Functor;
use crate::optional::Optional;
use crate::outcome::Outcome;

/// A type class for functors that can lift plain values and combine two
/// contexts.
///
/// # Examples
///
/// ```rust
/// use duality::optional::Optional;
/// use duality::typeclass::Applicative;
///
/// let lifted: Optional<i32> = <Optional<()>>::pure(42);
/// assert_eq!(lifted, Optional::some(42));
///
/// let sum = Optional::some(1).map2(Optional::some(2), |x, y| x + y);
/// assert_eq!(sum, Optional::some(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context with a binary function.
    ///
    /// The function runs only when both sides hold a value.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values in the context.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.bind(|a| other.map(|b| function(a, b)))
    }
}

impl<A> Applicative for Outcome<A> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B> {
        Outcome::ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B>, function: F) -> Outcome<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.bind(|a| other.on_success(|b| function(a, b)))
    }
}
