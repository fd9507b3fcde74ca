//! Validation error type definition

use duality::outcome::Outcome;
use thiserror::Error;

/// A rejected field value.
///
/// Holds the field name and what was wrong with the input. It is rendered as
/// `"<field name> <message>"` when handed to an [`Outcome`], since outcomes
/// carry plain message text.
///
/// # Examples
///
/// ```
/// use storefront_sample::simple_types::ValidationError;
///
/// let error = ValidationError::new("street", "must not be empty");
/// assert_eq!(error.to_string(), "street must not be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name} {message}")]
pub struct ValidationError {
    /// Name of the rejected field
    pub field_name: String,
    /// What the field violated
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }

    /// Renders the error into a failed [`Outcome`].
    ///
    /// The rejection is logged at `debug` level with the field name.
    pub fn into_outcome<T>(self) -> Outcome<T> {
        tracing::debug!(field = %self.field_name, reason = %self.message, "validation rejected");
        Outcome::err(self.to_string())
    }
}
