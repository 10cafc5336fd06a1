//! Contact: validated, immutable directory record
//!
//! ## Construction
//!
//! A `Contact` only exists after a successful validation pass. There are two
//! ways to get one:
//!
//! - **Fresh**: [`Contact::new`] or [`NewContact::build`], every field required.
//! - **Replacement**: [`Contact::replace`] takes an existing contact plus a
//!   [`ContactUpdate`]; absent fields are copied forward, then the merged
//!   result is validated again. The identifier is never replaceable.
//!
//! ## Validation order
//!
//! Fail-fast, first violation wins:
//!
//! 1. identifier present
//! 2. first name, last name, phone number, address present (in that order)
//! 3. identifier, first name, last name, phone number within the short limit
//! 4. address within the address limit
//!
//! No field is ever modified after construction; "updating" a contact means
//! building a replacement.

use crate::error::{Error, Result};
use crate::field::Field;
use crate::limits::{require, Limits};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// One directory entry
///
/// Deserialization runs the same validation pass as [`NewContact::build`]
/// with default limits, so invalid data never yields a `Contact`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NewContact")]
pub struct Contact {
    id: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    address: String,
}

impl Contact {
    /// Build a contact from five present values using default limits
    ///
    /// # Errors
    ///
    /// Returns `FieldTooLong` for the first field exceeding its limit.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self> {
        NewContact::new()
            .id(id)
            .first_name(first_name)
            .last_name(last_name)
            .phone_number(phone_number)
            .address(address)
            .build(&Limits::default())
    }

    fn validated(
        id: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        phone_number: Option<String>,
        address: Option<String>,
        limits: &Limits,
    ) -> Result<Self> {
        let id = require(Field::ContactId, id)?;
        let first_name = require(Field::FirstName, first_name)?;
        let last_name = require(Field::LastName, last_name)?;
        let phone_number = require(Field::PhoneNumber, phone_number)?;
        let address = require(Field::Address, address)?;

        limits.check_length(Field::ContactId, &id)?;
        limits.check_length(Field::FirstName, &first_name)?;
        limits.check_length(Field::LastName, &last_name)?;
        limits.check_length(Field::PhoneNumber, &phone_number)?;
        limits.check_length(Field::Address, &address)?;

        Ok(Contact {
            id,
            first_name,
            last_name,
            phone_number,
            address,
        })
    }

    /// Build a replacement carrying `update` over this contact, default limits
    pub fn replace(&self, update: ContactUpdate) -> Result<Self> {
        self.replace_with_limits(update, &Limits::default())
    }

    /// Build a replacement carrying `update` over this contact
    ///
    /// Fields absent from `update` keep their current value. The identifier
    /// is always carried over. The merged values are validated in full.
    pub fn replace_with_limits(&self, update: ContactUpdate, limits: &Limits) -> Result<Self> {
        let ContactUpdate {
            first_name,
            last_name,
            phone_number,
            address,
        } = update;

        Self::validated(
            Some(self.id.clone()),
            Some(first_name.unwrap_or_else(|| self.first_name.clone())),
            Some(last_name.unwrap_or_else(|| self.last_name.clone())),
            Some(phone_number.unwrap_or_else(|| self.phone_number.clone())),
            Some(address.unwrap_or_else(|| self.address.clone())),
            limits,
        )
    }

    /// Contact identifier
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// First name
    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name
    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Phone number
    #[inline]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Address
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Value of `field`
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ContactId => &self.id,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Address => &self.address,
        }
    }

    /// Write the five-line field dump to `out`
    pub fn display_values<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "{}: {}", Field::FirstName, self.first_name)?;
        writeln!(f, "{}: {}", Field::LastName, self.last_name)?;
        writeln!(f, "{}: {}", Field::PhoneNumber, self.phone_number)?;
        write!(f, "{}: {}", Field::Address, self.address)
    }
}

/// Fresh-construction input where any field may be absent
///
/// # Example
///
/// ```
/// use contactbook_core::{Limits, NewContact};
///
/// let contact = NewContact::new()
///     .id("1")
///     .first_name("John")
///     .last_name("Doe")
///     .phone_number("1234567890")
///     .address("123 Main St")
///     .build(&Limits::default())
///     .unwrap();
/// assert_eq!(contact.first_name(), "John");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    /// Contact identifier
    #[serde(default)]
    pub id: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Address
    #[serde(default)]
    pub address: Option<String>,
}

impl NewContact {
    /// Empty input, every field absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the first name
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Set the last name
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Set the phone number
    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    /// Set the address
    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    /// Run the validation pass and produce a `Contact`
    ///
    /// # Errors
    ///
    /// `RequiredField` for the first absent field, otherwise `FieldTooLong`
    /// for the first field over its limit.
    pub fn build(self, limits: &Limits) -> Result<Contact> {
        Contact::validated(
            self.id,
            self.first_name,
            self.last_name,
            self.phone_number,
            self.address,
            limits,
        )
    }
}

impl TryFrom<NewContact> for Contact {
    type Error = Error;

    fn try_from(value: NewContact) -> Result<Self> {
        value.build(&Limits::default())
    }
}

/// Partial set of new values for a replacement
///
/// Absent fields are filled from the existing contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUpdate {
    /// New first name
    #[serde(default)]
    pub first_name: Option<String>,
    /// New last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// New phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// New address
    #[serde(default)]
    pub address: Option<String>,
}

impl ContactUpdate {
    /// Update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the first name
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Replace the last name
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Replace the phone number
    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    /// Replace the address
    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    /// True if no field is supplied
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone_number.is_none()
            && self.address.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn john() -> Contact {
        Contact::new("1", "John", "Doe", "1234567890", "123 Main St").unwrap()
    }

    fn complete() -> NewContact {
        NewContact::new()
            .id("1")
            .first_name("John")
            .last_name("Doe")
            .phone_number("1234567890")
            .address("123 Main St")
    }

    #[test]
    fn test_accessors_return_inputs() {
        let c = john();
        assert_eq!(c.id(), "1");
        assert_eq!(c.first_name(), "John");
        assert_eq!(c.last_name(), "Doe");
        assert_eq!(c.phone_number(), "1234567890");
        assert_eq!(c.address(), "123 Main St");
        assert_eq!(c.get(Field::Address), "123 Main St");
    }

    #[test]
    fn test_symbol_identifier_is_accepted() {
        let c = Contact::new("JJJ*#$@$%J", "A", "B", "C", "D").unwrap();
        assert_eq!(c.id(), "JJJ*#$@$%J");
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let limits = Limits::default();

        let mut input = complete();
        input.id = None;
        input.address = None;
        let err = input.build(&limits).unwrap_err();
        assert_eq!(err.field(), Some(Field::ContactId));

        let mut input = complete();
        input.last_name = None;
        input.phone_number = None;
        let err = input.build(&limits).unwrap_err();
        assert!(matches!(
            err,
            Error::RequiredField {
                field: Field::LastName
            }
        ));

        let mut input = complete();
        input.address = None;
        let err = input.build(&limits).unwrap_err();
        assert_eq!(err.field(), Some(Field::Address));
    }

    #[test]
    fn test_absence_checked_before_length() {
        // Overlong id plus a missing address reports the missing address
        let mut input = complete().id("12345678901");
        input.address = None;
        let err = input.build(&Limits::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::RequiredField {
                field: Field::Address
            }
        ));
    }

    #[test]
    fn test_eleven_digit_id_rejected() {
        let err = Contact::new("21474836471", "Donald", "Hartley", "4325559894", "234 West Street")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::FieldTooLong {
                field: Field::ContactId,
                limit: 10,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_address_limit_is_thirty() {
        let thirty = "a".repeat(30);
        assert!(Contact::new("1", "A", "B", "C", thirty.as_str()).is_ok());

        let err = Contact::new("1", "A", "B", "C", "a".repeat(31)).unwrap_err();
        assert!(matches!(
            err,
            Error::FieldTooLong {
                field: Field::Address,
                limit: 30,
                ..
            }
        ));
    }

    #[test]
    fn test_replace_single_field() {
        let c = john();
        let r = c
            .replace(ContactUpdate::new().phone_number("5550001111"))
            .unwrap();
        assert_eq!(r.id(), c.id());
        assert_eq!(r.first_name(), c.first_name());
        assert_eq!(r.last_name(), c.last_name());
        assert_eq!(r.address(), c.address());
        assert_eq!(r.phone_number(), "5550001111");
        // Original untouched
        assert_eq!(c.phone_number(), "1234567890");
    }

    #[test]
    fn test_replace_with_nothing_is_identity() {
        let c = john();
        let r = c.replace(ContactUpdate::new()).unwrap();
        assert_eq!(r, c);
    }

    #[test]
    fn test_replace_revalidates_merged_values() {
        let c = john();
        let err = c
            .replace(ContactUpdate::new().first_name("Bartholomew"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::FieldTooLong {
                field: Field::FirstName,
                ..
            }
        ));
    }

    #[test]
    fn test_replace_under_tighter_limits_rechecks_carried_fields() {
        let c = john();
        let err = c
            .replace_with_limits(ContactUpdate::new(), &Limits::with_small_limits())
            .unwrap_err();
        assert_eq!(err.field(), Some(Field::FirstName));
    }

    #[test]
    fn test_display_values() {
        let mut out = Vec::new();
        john().display_values(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "ID: 1\nFirst Name: John\nLast Name: Doe\nPhone Number: 1234567890\nAddress: 123 Main St\n"
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"id":"1","first_name":"John","last_name":"Doe","phone_number":"1234567890","address":"123 Main St"}"#;
        let c: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(c, john());

        let too_long = r#"{"id":"1","first_name":"Maximiliana","last_name":"Doe","phone_number":"1","address":"x"}"#;
        let err = serde_json::from_str::<Contact>(too_long).unwrap_err();
        assert!(err.to_string().contains("First Name cannot be longer than 10!"));

        let missing = r#"{"id":"1","first_name":"John","last_name":"Doe","phone_number":"1"}"#;
        let err = serde_json::from_str::<Contact>(missing).unwrap_err();
        assert!(err.to_string().contains("Address cannot be null!"));
    }

    #[test]
    fn test_update_is_empty() {
        assert!(ContactUpdate::new().is_empty());
        assert!(!ContactUpdate::new().address("x").is_empty());
    }

    proptest! {
        #[test]
        fn prop_valid_tuples_construct(
            id in "[A-Za-z0-9]{1,10}",
            first in "[A-Za-z]{0,10}",
            last in "[A-Za-z]{0,10}",
            phone in "[0-9]{0,10}",
            address in "[A-Za-z0-9 ]{0,30}",
        ) {
            let c = Contact::new(id.clone(), first.clone(), last.clone(), phone.clone(), address.clone()).unwrap();
            prop_assert_eq!(c.id(), id.as_str());
            prop_assert_eq!(c.first_name(), first.as_str());
            prop_assert_eq!(c.last_name(), last.as_str());
            prop_assert_eq!(c.phone_number(), phone.as_str());
            prop_assert_eq!(c.address(), address.as_str());
        }

        #[test]
        fn prop_overlong_short_field_names_that_field(
            which in 0usize..4,
            long in "[a-z]{11,40}",
        ) {
            let mut values = vec!["1".to_string(), "A".to_string(), "B".to_string(), "C".to_string()];
            values[which] = long;
            let err = Contact::new(
                values[0].clone(),
                values[1].clone(),
                values[2].clone(),
                values[3].clone(),
                "addr",
            )
            .unwrap_err();
            prop_assert_eq!(err.field(), Some(Field::ALL[which]));
            prop_assert!(
                matches!(err, Error::FieldTooLong { limit: 10, .. }),
                "expected FieldTooLong with limit 10"
            );
        }

        #[test]
        fn prop_overlong_address_rejected(address in "[a-z ]{31,60}") {
            let err = Contact::new("1", "A", "B", "C", address).unwrap_err();
            prop_assert_eq!(err.field(), Some(Field::Address));
        }
    }
}
