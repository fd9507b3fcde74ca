//! Outcome type - either a success value or a failure message.
//!
//! `Outcome<T>` has exactly two states: success, holding a `T`, and failure,
//! holding a human-readable message. It is built only through
//! [`Outcome::ok`] and [`Outcome::err`].
//!
//! Failures propagate unchanged. Once a chain of [`on_success`] or [`bind`]
//! steps hits a failure, every later step is skipped and the first message
//! reaches the end of the chain untouched. The chain is resolved with
//! [`fold`] or one of the `unwrap_or*` methods.
//!
//! [`on_success`]: Outcome::on_success
//! [`bind`]: Outcome::bind
//! [`fold`]: Outcome::fold
//!
//! # Examples
//!
//! ```rust
//! use duality::optional::Optional;
//! use duality::outcome::Outcome;
//!
//! let parsed: Outcome<i32> = Outcome::err("bad");
//! let rendered = parsed.on_success(|x| x.to_string());
//! assert_eq!(rendered.error(), Optional::some("bad"));
//!
//! let fine = Outcome::ok(20).on_success(|x| x + 1);
//! assert_eq!(fine.unwrap_or(0), 21);
//! ```

use std::fmt;

use crate::optional::Optional;

#[derive(Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Success(T),
    Failure(String),
}

/// A success value of type `T` or a failure message.
///
/// Exactly one side is populated. The failure message can only be reached
/// through [`error`](Self::error), [`into_error`](Self::into_error),
/// [`fold`](Self::fold) or the `unwrap_or*` fallbacks, so a caller cannot
/// read it without first handling the success case.
///
/// # Examples
///
/// ```rust
/// use duality::outcome::Outcome;
///
/// fn parse_age(raw: &str) -> Outcome<u8> {
///     raw.parse::<u8>()
///         .map_or_else(|_| Outcome::err(format!("'{raw}' is not an age")), Outcome::ok)
/// }
///
/// let message = parse_age("abc").fold(|age| age.to_string(), |error| error);
/// assert_eq!(message, "'abc' is not an age");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T>(State<T>);

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` as a success.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self(State::Success(value))
    }

    /// Builds a failure carrying `message`.
    ///
    /// Constructing a failure always succeeds.
    #[inline]
    pub fn err(message: impl Into<String>) -> Self {
        Self(State::Failure(message.into()))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self.0, State::Success(_))
    }

    /// Returns `true` for a failure. Always the complement of [`is_ok`](Self::is_ok).
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns the failure message, or an absent `Optional` on success.
    ///
    /// "No error" is `Optional::none()`, never an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::optional::Optional;
    /// use duality::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32>::err("E").error(), Optional::some("E"));
    /// assert_eq!(Outcome::ok(1).error(), Optional::none());
    /// ```
    #[inline]
    pub fn error(&self) -> Optional<&str> {
        match &self.0 {
            State::Success(_) => Optional::none(),
            State::Failure(message) => Optional::some(message.as_str()),
        }
    }

    /// Consumes the outcome, returning the failure message if there is one.
    #[inline]
    pub fn into_error(self) -> Optional<String> {
        match self.0 {
            State::Success(_) => Optional::none(),
            State::Failure(message) => Optional::some(message),
        }
    }

    /// Returns the success value by reference, or an absent `Optional` on
    /// failure.
    #[inline]
    pub const fn value(&self) -> Optional<&T> {
        match &self.0 {
            State::Success(value) => Optional::some(value),
            State::Failure(_) => Optional::none(),
        }
    }

    /// Consumes the outcome, returning the success value if there is one.
    #[inline]
    pub fn into_value(self) -> Optional<T> {
        match self.0 {
            State::Success(value) => Optional::some(value),
            State::Failure(_) => Optional::none(),
        }
    }

    /// Borrows the success value, producing an `Outcome<&T>`.
    ///
    /// A failure message is cloned into the new outcome.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match &self.0 {
            State::Success(value) => Outcome::ok(value),
            State::Failure(message) => Outcome::err(message.clone()),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Transforms the success value.
    ///
    /// On success, `function` runs once and its result is wrapped as a
    /// success. On failure, `function` is never called and the same message
    /// is carried forward.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::optional::Optional;
    /// use duality::outcome::Outcome;
    ///
    /// let mut steps = 0;
    /// let chained = Outcome::<i32>::err("E")
    ///     .on_success(|x| {
    ///         steps += 1;
    ///         x + 1
    ///     })
    ///     .on_success(|x| x * 2);
    /// assert_eq!(chained.error(), Optional::some("E"));
    /// assert_eq!(steps, 0);
    /// ```
    #[inline]
    pub fn on_success<R, F>(self, function: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self.0 {
            State::Success(value) => Outcome::ok(function(value)),
            State::Failure(message) => Outcome(State::Failure(message)),
        }
    }

    /// Chains a step that may itself fail.
    ///
    /// On success, returns `function(value)` directly. On failure, the
    /// message is passed through and `function` is not called. Sequencing
    /// validations with `bind` reports only the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::optional::Optional;
    /// use duality::outcome::Outcome;
    ///
    /// fn positive(n: i32) -> Outcome<i32> {
    ///     if n > 0 { Outcome::ok(n) } else { Outcome::err("not positive") }
    /// }
    ///
    /// assert_eq!(Outcome::ok(3).bind(positive), Outcome::ok(3));
    /// assert_eq!(Outcome::ok(-3).bind(positive).error(), Optional::some("not positive"));
    /// ```
    #[inline]
    pub fn bind<R, F>(self, function: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Outcome<R>,
    {
        match self.0 {
            State::Success(value) => function(value),
            State::Failure(message) => Outcome(State::Failure(message)),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the outcome by running exactly one of two branches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::ok(5).fold(|x| x, |_| 0), 5);
    /// assert_eq!(Outcome::<String>::err("m").fold(|x| x, |e| e), "m");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(String) -> R,
    {
        match self.0 {
            State::Success(value) => on_success(value),
            State::Failure(message) => on_failure(message),
        }
    }

    /// Returns the success value, or `default` on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self.0 {
            State::Success(value) => value,
            State::Failure(_) => default,
        }
    }

    /// Returns the success value, or the result of `provider` on failure.
    ///
    /// The provider is never called on success and is evaluated afresh on
    /// every call that needs it.
    #[inline]
    pub fn unwrap_or_else<F>(self, provider: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.0 {
            State::Success(value) => value,
            State::Failure(_) => provider(),
        }
    }
}

impl<T: Default> Outcome<T> {
    /// Returns the success value, or `T::default()` on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duality::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<u32>::err("x").unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            State::Success(value) => formatter.debug_tuple("Ok").field(value).finish(),
            State::Failure(message) => formatter.debug_tuple("Err").field(message).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    /// Formats as `Ok(<value>)` or `Err(<message>)`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            State::Success(value) => write!(formatter, "Ok({value})"),
            State::Failure(message) => write!(formatter, "Err({message})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Result<T, String>> for Outcome<T> {
    /// `Ok(v)` becomes a success, `Err(message)` a failure with the same text.
    #[inline]
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(message) => Self::err(message),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.fold(Ok, Err)
    }
}
