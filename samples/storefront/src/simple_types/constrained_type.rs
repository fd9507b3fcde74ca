//! Helper functions for building constrained types
//!
//! Each helper takes the field name used in messages, a constructor for the
//! wrapped newtype and the raw input, and returns an [`Outcome`] holding either
//! the constructed value or the first rule the input broke.
//!
//! Surrounding whitespace is trimmed before any check; a blank input counts
//! as empty.

use duality::optional::Optional;
use duality::outcome::Outcome;
use regex::Regex;
use rust_decimal::Decimal;

use super::error::ValidationError;

/// Creates a string type with a maximum length constraint
///
/// Length is counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use storefront_sample::simple_types::constrained_type::create_string;
///
/// #[derive(Debug, PartialEq)]
/// struct Name(String);
///
/// assert!(create_string("name", Name, 50, "John").is_ok());
/// assert!(create_string("name", Name, 50, "   ").is_err());
/// ```
pub fn create_string<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Outcome<T>
where
    F: FnOnce(String) -> T,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        ValidationError::new(field_name, "must not be empty").into_outcome()
    } else if trimmed.chars().count() > max_length {
        ValidationError::new(
            field_name,
            &format!("must not be more than {max_length} characters"),
        )
        .into_outcome()
    } else {
        Outcome::ok(constructor(trimmed.to_string()))
    }
}

/// Like [`create_string`], but an empty input is an absent value rather
/// than an error.
///
/// # Returns
///
/// * `ok(none())` - for an empty or blank string
/// * `ok(some(T))` - on successful validation
/// * `err(message)` - when exceeding the maximum length
pub fn create_string_optional<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Outcome<Optional<T>>
where
    F: FnOnce(String) -> T,
{
    if value.trim().is_empty() {
        Outcome::ok(Optional::none())
    } else {
        create_string(field_name, constructor, max_length, value).on_success(Optional::some)
    }
}

/// Creates a string type that must match `pattern`
///
/// `description` names the expected format in the error message, e.g.
/// `"a valid postal code"`. The pattern should carry its own anchors.
pub fn create_like<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    description: &str,
    value: &str,
) -> Outcome<T>
where
    F: FnOnce(String) -> T,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        ValidationError::new(field_name, "must not be empty").into_outcome()
    } else if pattern.is_match(trimmed) {
        Outcome::ok(constructor(trimmed.to_string()))
    } else {
        ValidationError::new(field_name, &format!("'{trimmed}' is not {description}"))
            .into_outcome()
    }
}

/// Like [`create_like`], but an empty input is an absent value.
pub fn create_like_optional<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    description: &str,
    value: &str,
) -> Outcome<Optional<T>>
where
    F: FnOnce(String) -> T,
{
    if value.trim().is_empty() {
        Outcome::ok(Optional::none())
    } else {
        create_like(field_name, constructor, pattern, description, value).on_success(Optional::some)
    }
}

/// Creates an integer type with an inclusive range constraint
pub fn create_integer<T, F>(
    field_name: &str,
    constructor: F,
    min_value: u32,
    max_value: u32,
    value: u32,
) -> Outcome<T>
where
    F: FnOnce(u32) -> T,
{
    if (min_value..=max_value).contains(&value) {
        Outcome::ok(constructor(value))
    } else {
        ValidationError::new(
            field_name,
            &format!("must be between {min_value} and {max_value}, got {value}"),
        )
        .into_outcome()
    }
}

/// Creates a decimal type with an inclusive range constraint
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use storefront_sample::simple_types::constrained_type::create_decimal;
///
/// let rejected = create_decimal("ratio", |d| d, Decimal::ZERO, Decimal::ONE, Decimal::TWO);
/// assert_eq!(
///     rejected.into_error().unwrap_or_else(String::new),
///     "ratio must be between 0 and 1, got 2"
/// );
/// ```
pub fn create_decimal<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    max_value: Decimal,
    value: Decimal,
) -> Outcome<T>
where
    F: FnOnce(Decimal) -> T,
{
    if value < min_value || value > max_value {
        ValidationError::new(
            field_name,
            &format!("must be between {min_value} and {max_value}, got {value}"),
        )
        .into_outcome()
    } else {
        Outcome::ok(constructor(value))
    }
}
