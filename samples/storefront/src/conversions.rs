//! Conversions between `Optional` and `Outcome`
//!
//! The two containers know nothing about each other. When a caller needs to
//! cross from one to the other it says so here, supplying the missing piece
//! of information: a message when an absent value becomes a failure.

use duality::optional::Optional;
use duality::outcome::Outcome;

/// Turns an absent value into a failure carrying `message`.
///
/// # Examples
///
/// ```
/// use duality::optional::Optional;
/// use duality::outcome::Outcome;
/// use storefront_sample::conversions::require;
///
/// assert_eq!(require(Optional::some(1), "missing"), Outcome::ok(1));
/// assert_eq!(
///     require(Optional::<i32>::none(), "missing").error(),
///     Optional::some("missing")
/// );
/// ```
pub fn require<T>(value: Optional<T>, message: &str) -> Outcome<T> {
    value.fold(Outcome::ok, || Outcome::err(message))
}

/// Keeps the success value and discards the failure message.
///
/// Use this only where the caller has nothing to do with the reason.
pub fn recover<T>(outcome: Outcome<T>) -> Optional<T> {
    outcome.fold(Optional::some, |message| {
        tracing::debug!(reason = %message, "failure recovered as absent value");
        Optional::none()
    })
}
