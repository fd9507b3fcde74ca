//! Customer composite type

use duality::optional::Optional;
use duality::outcome::Outcome;

use super::Address;
use crate::simple_types::{CustomerName, EmailAddress};

/// A customer with an optional e-mail address and an optional shipping
/// address
///
/// Both optional parts are modelled as [`Optional`] rather than sentinel
/// values, so code that needs them has to handle their absence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    name: CustomerName,
    email: Optional<EmailAddress>,
    shipping_address: Optional<Address>,
}

impl Customer {
    /// Builds a customer from a name and an e-mail address.
    ///
    /// The name is checked first. A blank e-mail means the customer gave
    /// none; a non-blank one must be well formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_sample::compound_types::Customer;
    ///
    /// let customer = Customer::create("Ada", "").into_value();
    /// assert!(customer.bind(|c| c.email().map(|e| e.value().to_string())).is_absent());
    ///
    /// assert!(Customer::create("Ada", "not-an-email").is_err());
    /// ```
    pub fn create(name: &str, email: &str) -> Outcome<Self> {
        CustomerName::create(name).bind(|name| {
            EmailAddress::create_optional(email).on_success(|email| {
                tracing::trace!(
                    customer = name.value(),
                    has_email = email.is_present(),
                    "customer created"
                );
                Self {
                    name,
                    email,
                    shipping_address: Optional::none(),
                }
            })
        })
    }

    /// Returns a copy of this customer that ships to `address`.
    #[must_use]
    pub fn with_shipping_address(self, address: Address) -> Self {
        Self {
            shipping_address: Optional::some(address),
            ..self
        }
    }

    /// Returns the customer name
    #[must_use]
    pub const fn name(&self) -> &CustomerName {
        &self.name
    }

    /// Returns the e-mail address, if the customer gave one
    #[must_use]
    pub const fn email(&self) -> Optional<&EmailAddress> {
        self.email.as_ref()
    }

    /// Returns the shipping address, if one is on file
    #[must_use]
    pub const fn shipping_address(&self) -> Optional<&Address> {
        self.shipping_address.as_ref()
    }

    /// Renders a shipping label: the name followed by the address lines.
    ///
    /// Absent when no shipping address is on file.
    pub fn shipping_label(&self) -> Optional<String> {
        self.shipping_address()
            .map(|address| format!("{}\n{address}", self.name.value()))
    }

    /// Renders a short confirmation notice for the customer's inbox.
    ///
    /// Absent when the customer has no e-mail address.
    pub fn email_confirmation(&self) -> Optional<String> {
        self.email().map(|email| {
            format!(
                "To: {}\nDear {}, thank you for your order.",
                email.value(),
                self.name.value()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn address() -> Address {
        Address::create("Main Street", "1", "Springfield", "12345", "")
            .unwrap_or_else(|| panic!("fixture address is valid"))
    }

    #[rstest]
    fn test_customer_without_optional_parts() {
        let customer = Customer::create("Ada", "").unwrap_or_else(|| panic!("valid customer"));

        assert!(customer.shipping_label().is_absent());
        assert!(customer.email_confirmation().is_absent());
    }

    #[rstest]
    fn test_shipping_label_includes_name_and_address(address: Address) {
        let customer = Customer::create("Ada", "")
            .unwrap_or_else(|| panic!("valid customer"))
            .with_shipping_address(address);

        assert_eq!(
            customer.shipping_label(),
            Optional::some("Ada\nMain Street 1\n12345 Springfield".to_string())
        );
    }

    #[rstest]
    fn test_email_confirmation_addresses_customer() {
        let customer =
            Customer::create("Ada", "ada@example.com").unwrap_or_else(|| panic!("valid customer"));

        assert_eq!(
            customer.email_confirmation(),
            Optional::some("To: ada@example.com\nDear Ada, thank you for your order.".to_string())
        );
    }

    #[rstest]
    fn test_name_is_checked_before_email() {
        let result = Customer::create("", "broken");

        assert_eq!(result.error(), Optional::some("customer name must not be empty"));
    }
}
