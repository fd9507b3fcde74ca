//! Optional type - a value that may or may not be present.
//!
//! This module provides `Optional<T>`, a container with exactly two states:
//! present (holding one `T`) or absent. Values are created only through
//! [`Optional::some`] and [`Optional::none`]; the representation is private,
//! so no third state can be constructed.
//!
//! Absence is not failure. An `Optional` carries no reason for being empty;
//! use [`Outcome`](crate::outcome::Outcome) when a reason matters.
//!
//! # Examples
//!
//! ```rust
//! use duality::optional::Optional;
//!
//! let answer = Optional::some(42);
//! let text = answer.map(|n| n.to_string()).unwrap_or_else(String::new);
//! assert_eq!(text, "42");
//!
//! let missing: Optional<i32> = Optional::none();
//! assert_eq!(missing.unwrap_or(0), 0);
//! ```
//!
//! Nesting never collapses on its own:
//!
//! ```rust
//! use duality::optional::Optional;
//!
//! let nested: Optional<Optional<i32>> = Optional::some(Optional::none());
//! assert!(nested.is_present());
//! assert_ne!(nested, Optional::none());
//! ```

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum State<T> {
    Present(T),
    Absent,
}

/// A value of type `T` that is either present or absent.
///
/// The state is fixed at construction. Every transformation (`map`, `bind`,
/// `filter`, ...) consumes the receiver and builds a new `Optional`; nothing
/// mutates an existing one.
///
/// Presence is orthogonal to the payload's own emptiness: an
/// `Optional<Option<String>>` built with `some(None)` is still present.
///
/// # Examples
///
/// ```rust
/// use duality::optional::Optional;
///
/// let present: Optional<Option<&str>> = Optional::some(None);
/// assert!(present.is_present());
/// assert_eq!(present.unwrap_or_else(|| Some("fallback")), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T>(State<T>);

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` as a present `Optional`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self(State::Present(value))
    }

    /// Returns the absent `Optional`.
    #[inline]
    pub const fn none() -> Self {
        Self(State::Absent)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::optional::Optional;
    ///
    /// assert!(Optional::some(1).is_present());
    /// assert!(!Optional::<i32>::none().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self.0, State::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the payload, producing an `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::optional::Optional;
    ///
    /// let name = Optional::some(String::from("Ada"));
    /// assert_eq!(name.as_ref().map(|s| s.len()), Optional::some(3));
    /// // `name` is still usable here
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match &self.0 {
            State::Present(value) => Optional::some(value),
            State::Absent => Optional::none(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// If present, `function` runs exactly once and its result is wrapped as
    /// present. If absent, `function` is never called and the result is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::optional::Optional;
    ///
    /// assert_eq!(Optional::some(21).map(|x| x * 2), Optional::some(42));
    ///
    /// let mut calls = 0;
    /// let absent: Optional<i32> = Optional::none();
    /// let result = absent.map(|x| {
    ///     calls += 1;
    ///     x * 2
    /// });
    /// assert_eq!(result, Optional::none());
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn map<R, F>(self, function: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self.0 {
            State::Present(value) => Optional::some(function(value)),
            State::Absent => Optional::none(),
        }
    }

    /// Chains a computation that may itself produce an absent value.
    ///
    /// If present, returns `function(value)` directly, so a present value can
    /// become absent. If absent, short-circuits without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::optional::Optional;
    ///
    /// fn half(n: i32) -> Optional<i32> {
    ///     if n % 2 == 0 { Optional::some(n / 2) } else { Optional::none() }
    /// }
    ///
    /// assert_eq!(Optional::some(8).bind(half).bind(half), Optional::some(2));
    /// assert_eq!(Optional::some(6).bind(half).bind(half), Optional::none());
    /// ```
    #[inline]
    pub fn bind<R, F>(self, function: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self.0 {
            State::Present(value) => function(value),
            State::Absent => Optional::none(),
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// The predicate is not called on an absent value.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.0 {
            State::Present(value) => {
                if predicate(&value) {
                    Self::some(value)
                } else {
                    Self::none()
                }
            }
            State::Absent => Self::none(),
        }
    }

    /// Returns `self` if present, otherwise the `Optional` produced by
    /// `alternative`.
    ///
    /// `alternative` is not called when a value is present.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.0 {
            State::Present(value) => Self::some(value),
            State::Absent => alternative(),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Optional` by running exactly one of two branches.
    ///
    /// This is the total `match`: `on_some` receives the value when present,
    /// `on_none` runs when absent. The unchosen branch is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::optional::Optional;
    ///
    /// let describe = |o: Optional<u8>| o.fold(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(describe(Optional::some(7)), "got 7");
    /// assert_eq!(describe(Optional::none()), "nothing");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_some: F, on_none: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self.0 {
            State::Present(value) => on_some(value),
            State::Absent => on_none(),
        }
    }

    /// Returns the held value, or the result of `provider` when absent.
    ///
    /// The provider is evaluated lazily: never when present, and once per
    /// call when absent. Nothing is cached between calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::optional::Optional;
    ///
    /// let mut evaluations = 0;
    /// let absent: Optional<i32> = Optional::none();
    /// for _ in 0..3 {
    ///     absent.unwrap_or_else(|| {
    ///         evaluations += 1;
    ///         0
    ///     });
    /// }
    /// assert_eq!(evaluations, 3);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, provider: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.0 {
            State::Present(value) => value,
            State::Absent => provider(),
        }
    }

    /// Returns the held value, or `default` when absent.
    ///
    /// `default` is evaluated eagerly by the caller; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) for a lazy fallback.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self.0 {
            State::Present(value) => value,
            State::Absent => default,
        }
    }
}

impl<T: Default> Optional<T> {
    /// Returns the held value, or `T::default()` when absent.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// `some(some(x))` becomes `some(x)`; both `some(none())` and `none()`
    /// become `none()`. The collapse only happens when asked for.
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            State::Present(value) => formatter.debug_tuple("Some").field(value).finish(),
            State::Absent => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    /// Formats as `Some(<value>)` or `None`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            State::Present(value) => write!(formatter, "Some({value})"),
            State::Absent => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// `Some(x)` becomes present, `None` becomes absent.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::some(value),
            None => Self::none(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.fold(Some, || None)
    }
}
