//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use duality::optional::Optional;
//! use duality::outcome::Outcome;
//! use duality::typeclass::Functor;
//!
//! let shown: Optional<String> = Optional::some(5).fmap(|n| n.to_string());
//! assert_eq!(shown, Optional::some("5".to_string()));
//!
//! let failed: Outcome<String> = Outcome::<i32>::err("E").fmap(|n| n.to_string());
//! assert!(failed.is_err());
//! ```

use super::higher::TypeConstructor;
use crate::optional::Optional;
use crate::outcome::Outcome;

/// A type class for types that can have a function mapped over their contents.
///
/// `fmap` never calls the function when the container holds no value
/// (absent `Optional`, failed `Outcome`).
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay usable afterwards or the inner type
    /// is not `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::optional::Optional;
    /// use duality::typeclass::Functor;
    ///
    /// let word = Optional::some("hello".to_string());
    /// assert_eq!(word.fmap_ref(|s| s.len()), Optional::some(5));
    /// assert!(word.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<A> Implementation
// =============================================================================

impl<A> Functor for Outcome<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        self.on_success(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().on_success(function)
    }
}
