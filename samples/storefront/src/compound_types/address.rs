//! Postal address composite type

use duality::optional::Optional;
use duality::outcome::Outcome;
use std::fmt;

use crate::simple_types::{BuildingNumber, City, Country, PostalCode, Street};

/// A validated postal address
///
/// Street, city and postal code are required. The building number and the
/// country may be left blank, in which case they are absent.
///
/// # Examples
///
/// ```
/// use storefront_sample::compound_types::Address;
///
/// let address = Address::create("Baker Street", "221B", "London", "12345", "")
///     .fold(|address| address.to_string(), |error| error);
/// assert_eq!(address, "Baker Street 221B\n12345 London");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    street: Street,
    building_number: Optional<BuildingNumber>,
    city: City,
    postal_code: PostalCode,
    country: Optional<Country>,
}

impl Address {
    /// Builds an `Address` from raw text.
    ///
    /// Fields are checked in this order: street, building number, city,
    /// postal code, country. The first invalid field stops validation and its
    /// message is returned; fields after it are not examined.
    ///
    /// # Examples
    ///
    /// ```
    /// use duality::optional::Optional;
    /// use storefront_sample::compound_types::Address;
    ///
    /// let rejected = Address::create("", "", "City", "bad", "");
    /// assert_eq!(rejected.error(), Optional::some("street must not be empty"));
    /// ```
    pub fn create(
        street: &str,
        building_number: &str,
        city: &str,
        postal_code: &str,
        country: &str,
    ) -> Outcome<Self> {
        Street::create(street)
            .bind(|street| {
                BuildingNumber::create_optional(building_number).bind(|building_number| {
                    City::create(city).bind(|city| {
                        PostalCode::create(postal_code).bind(|postal_code| {
                            Country::create_optional(country).on_success(|country| Self {
                                street,
                                building_number,
                                city,
                                postal_code,
                                country,
                            })
                        })
                    })
                })
            })
            .on_success(|address| {
                tracing::trace!(city = address.city.value(), "address created");
                address
            })
    }

    /// Builds an `Address` from already validated parts.
    #[must_use]
    pub const fn create_from_parts(
        street: Street,
        building_number: Optional<BuildingNumber>,
        city: City,
        postal_code: PostalCode,
        country: Optional<Country>,
    ) -> Self {
        Self {
            street,
            building_number,
            city,
            postal_code,
            country,
        }
    }

    /// Returns the street
    #[must_use]
    pub const fn street(&self) -> &Street {
        &self.street
    }

    /// Returns the building number, if one was given
    #[must_use]
    pub const fn building_number(&self) -> Optional<&BuildingNumber> {
        self.building_number.as_ref()
    }

    /// Returns the city
    #[must_use]
    pub const fn city(&self) -> &City {
        &self.city
    }

    /// Returns the postal code
    #[must_use]
    pub const fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    /// Returns the country, if one was given
    #[must_use]
    pub const fn country(&self) -> Optional<&Country> {
        self.country.as_ref()
    }

    /// Renders the address as label lines.
    ///
    /// `"<street> [<building number>]"`, `"<postal code> <city>"` and, when
    /// present, the country in upper case.
    pub fn label_lines(&self) -> Vec<String> {
        let street_line = self.building_number().fold(
            |number| format!("{} {}", self.street.value(), number.value()),
            || self.street.value().to_string(),
        );
        let city_line = format!("{} {}", self.postal_code.value(), self.city.value());

        let mut lines = vec![street_line, city_line];
        lines.extend(Option::<String>::from(
            self.country().map(|country| country.value().to_uppercase()),
        ));
        lines
    }
}

impl fmt::Display for Address {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.label_lines().join("\n"))
    }
}
