//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. [`TypeConstructor`] works around this with a GAT, which is what
//! lets [`Functor`](super::Functor) and [`Monad`](super::Monad) describe
//! `map` and `bind` once for both containers.
//!
//! # Example
//!
//! ```rust
//! use duality::optional::Optional;
//! use duality::typeclass::TypeConstructor;
//!
//! fn absent_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Optional<String> = absent_like(Optional::some(42));
//! assert!(none_string.is_absent());
//! ```

use crate::optional::Optional;
use crate::outcome::Outcome;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: the type parameter the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Optional<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<A> TypeConstructor for Outcome<A> {
    type Inner = A;
    type WithType<B> = Outcome<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Optional<i32>>();
    }

    #[test]
    fn outcome_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<Outcome<String>>();
    }

    #[test]
    fn nested_containers_are_type_constructors() {
        fn assert_inner<T: TypeConstructor<Inner = Outcome<i32>>>() {}
        assert_inner::<Optional<Outcome<i32>>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Outcome<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool::<Step2>();
    }
}
