//! Customer contact types
//!
//! `CustomerName` and `EmailAddress`.

use duality::optional::Optional;
use duality::outcome::Outcome;
use regex::Regex;
use std::sync::LazyLock;

use super::constrained_type;

// =============================================================================
// CustomerName
// =============================================================================

/// Customer display name, up to 100 characters
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomerName(String);

impl CustomerName {
    const FIELD_NAME: &'static str = "customer name";
    const MAX_LENGTH: usize = 100;

    /// Validates a customer name
    pub fn create(value: &str) -> Outcome<Self> {
        constrained_type::create_string(Self::FIELD_NAME, Self, Self::MAX_LENGTH, value)
    }

    /// Returns the name
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// EmailAddress
// =============================================================================

/// E-mail address: one `@`, a dotted domain, no whitespace, up to 254
/// characters
///
/// # Examples
///
/// ```
/// use storefront_sample::simple_types::EmailAddress;
///
/// assert!(EmailAddress::create_optional("user@example.com").unwrap_or_default().is_present());
/// assert!(EmailAddress::create_optional("").unwrap_or_default().is_absent());
/// assert!(EmailAddress::create_optional("invalid-email").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex pattern")
});

impl EmailAddress {
    const FIELD_NAME: &'static str = "email";
    const MAX_LENGTH: usize = 254;

    /// Validates an e-mail address; an empty input means the customer gave
    /// none.
    pub fn create_optional(value: &str) -> Outcome<Optional<Self>> {
        constrained_type::create_string_optional(
            Self::FIELD_NAME,
            |text| text,
            Self::MAX_LENGTH,
            value,
        )
        .bind(|checked: Optional<String>| {
            checked.fold(
                |text| {
                    constrained_type::create_like(
                        Self::FIELD_NAME,
                        Self,
                        &EMAIL_PATTERN,
                        "a valid e-mail address",
                        &text,
                    )
                    .on_success(Optional::some)
                },
                || Outcome::ok(Optional::none()),
            )
        })
    }

    /// Returns the address text
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_customer_name_valid() {
        let name = CustomerName::create("Ada Lovelace");

        assert_eq!(
            name.into_value().map(|n| n.value().to_string()),
            Optional::some("Ada Lovelace".to_string())
        );
    }

    #[rstest]
    fn test_customer_name_empty() {
        assert_eq!(
            CustomerName::create("").error(),
            Optional::some("customer name must not be empty")
        );
    }

    #[rstest]
    #[case("a@b.io", true)]
    #[case("first.last@example.co.uk", true)]
    #[case("no-at-sign.com", false)]
    #[case("two@@example.com", false)]
    #[case("spaces in@example.com", false)]
    #[case("user@localhost", false)]
    fn test_email_format(#[case] input: &str, #[case] expected_ok: bool) {
        assert_eq!(EmailAddress::create_optional(input).is_ok(), expected_ok);
    }

    #[rstest]
    fn test_email_too_long_reports_length_before_format() {
        let local_part = "a".repeat(250);
        let email = format!("{local_part}@example.com");

        assert_eq!(
            EmailAddress::create_optional(&email).error(),
            Optional::some("email must not be more than 254 characters")
        );
    }
}
