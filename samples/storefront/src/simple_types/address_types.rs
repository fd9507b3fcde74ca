//! Address component types
//!
//! `Street`, `BuildingNumber`, `City`, `PostalCode` and `Country`.

use duality::optional::Optional;
use duality::outcome::Outcome;
use regex::Regex;
use std::sync::LazyLock;

use super::constrained_type;

// =============================================================================
// Street
// =============================================================================

/// Street name, up to 100 characters
///
/// # Examples
///
/// ```
/// use storefront_sample::simple_types::Street;
///
/// let street = Street::create("Baker Street").fold(|s| s.value().to_string(), |e| e);
/// assert_eq!(street, "Baker Street");
///
/// assert!(Street::create("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Street(String);

impl Street {
    const FIELD_NAME: &'static str = "street";
    const MAX_LENGTH: usize = 100;

    /// Validates a street name
    pub fn create(value: &str) -> Outcome<Self> {
        constrained_type::create_string(Self::FIELD_NAME, Self, Self::MAX_LENGTH, value)
    }

    /// Returns the street name
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// BuildingNumber
// =============================================================================

/// House number with an optional letter suffix and flat number, e.g. `221B`
/// or `12/4`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BuildingNumber(String);

static BUILDING_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,5}[A-Za-z]?(/[0-9]{1,4})?$").expect("Invalid building number regex pattern")
});

impl BuildingNumber {
    const FIELD_NAME: &'static str = "building number";

    /// Validates a building number; an empty input means the address has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_sample::simple_types::BuildingNumber;
    ///
    /// assert!(BuildingNumber::create_optional("221B").unwrap_or_default().is_present());
    /// assert!(BuildingNumber::create_optional("").unwrap_or_default().is_absent());
    /// assert!(BuildingNumber::create_optional("B221").is_err());
    /// ```
    pub fn create_optional(value: &str) -> Outcome<Optional<Self>> {
        constrained_type::create_like_optional(
            Self::FIELD_NAME,
            Self,
            &BUILDING_NUMBER_PATTERN,
            "a valid building number",
            value,
        )
    }

    /// Returns the building number text
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// City
// =============================================================================

/// City name: letters, spaces, `-`, `'` and `.`, up to 50 characters
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct City(String);

static CITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{L}[\p{L} .'\-]*$").expect("Invalid city regex pattern")
});

impl City {
    const FIELD_NAME: &'static str = "city";
    const MAX_LENGTH: usize = 50;

    /// Validates a city name: length first, then the character set.
    pub fn create(value: &str) -> Outcome<Self> {
        constrained_type::create_string(Self::FIELD_NAME, |text| text, Self::MAX_LENGTH, value)
            .bind(|text| {
                constrained_type::create_like(
                    Self::FIELD_NAME,
                    Self,
                    &CITY_PATTERN,
                    "a valid city name",
                    &text,
                )
            })
    }

    /// Returns the city name
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// PostalCode
// =============================================================================

/// Five-digit postal code with an optional four-digit extension
///
/// # Examples
///
/// ```
/// use storefront_sample::simple_types::PostalCode;
///
/// assert!(PostalCode::create("12345").is_ok());
/// assert!(PostalCode::create("12345-6789").is_ok());
/// assert!(PostalCode::create("1234").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

static POSTAL_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("Invalid postal code regex pattern")
});

impl PostalCode {
    const FIELD_NAME: &'static str = "postal code";

    /// Validates a postal code
    pub fn create(value: &str) -> Outcome<Self> {
        constrained_type::create_like(
            Self::FIELD_NAME,
            Self,
            &POSTAL_CODE_PATTERN,
            "a valid postal code",
            value,
        )
    }

    /// Returns the postal code text
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Country
// =============================================================================

/// Country name, 2 to 56 letters and spaces
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Country(String);

static COUNTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{L}[\p{L} ]{1,55}$").expect("Invalid country regex pattern")
});

impl Country {
    const FIELD_NAME: &'static str = "country";

    /// Validates a country name; an empty input means no country was given.
    pub fn create_optional(value: &str) -> Outcome<Optional<Self>> {
        constrained_type::create_like_optional(
            Self::FIELD_NAME,
            Self,
            &COUNTRY_PATTERN,
            "a valid country name",
            value,
        )
    }

    /// Returns the country name
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
    #[case("221B")]
    #[case("12")]
    #[case("12/4")]
    fn test_building_number_valid(#[case] input: &str) {
        let result = BuildingNumber::create_optional(input);

        assert_eq!(
            result.into_value().flatten().map(|number| number.value().to_string()),
            Optional::some(input.to_string())
        );
    }

    #[rstest]
    #[case("١٢")]
    #[case("٤٢B")]
    fn test_building_number_rejects_non_ascii_digits(#[case] input: &str) {
        assert!(BuildingNumber::create_optional(input).is_err());
    }

    #[rstest]
    fn test_building_number_invalid_message() {
        let result = BuildingNumber::create_optional("abc");

        assert_eq!(
            result.error(),
            Optional::some("building number 'abc' is not a valid building number")
        );
    }

    #[rstest]
    #[case("New York", true)]
    #[case("Saint-Étienne", true)]
    #[case("St. John's", true)]
    #[case("City42", false)]
    #[case("", false)]
    fn test_city_charset(#[case] input: &str, #[case] expected_ok: bool) {
        assert_eq!(City::create(input).is_ok(), expected_ok);
    }

    #[rstest]
    fn test_city_too_long_reports_length() {
        let long_name = "a".repeat(51);

        assert_eq!(
            City::create(&long_name).error(),
            Optional::some("city must not be more than 50 characters")
        );
    }

    #[rstest]
    #[case("12345", true)]
    #[case("12345-6789", true)]
    #[case("1234", false)]
    #[case("ABCDE", false)]
    #[case("١٢٣٤٥", false)]
    #[case("１２３４５", false)]
    fn test_postal_code(#[case] input: &str, #[case] expected_ok: bool) {
        assert_eq!(PostalCode::create(input).is_ok(), expected_ok);
    }

    #[rstest]
    fn test_country_optional() {
        assert_eq!(Country::create_optional(""), Outcome::ok(Optional::none()));
        assert!(Country::create_optional("Poland").unwrap_or_default().is_present());
        assert!(Country::create_optional("X").is_err());
    }

    #[rstest]
    fn test_street_too_long() {
        let long_street = "s".repeat(101);

        assert!(Street::create(&long_street).is_err());
    }
}
