//! Customer model fixtures.
//!
//! Plain serializable shapes used to exercise a persistence framework's
//! handling of nested, non-entity value types. Two parallel families:
//! the `Customer` family embeds the validated [`Name`] value object, while
//! the `ValuedCustomer` family holds a raw `String` name and value-type
//! variants of the same address/country shapes. None of these carry behavior
//! beyond field storage and deterministic `dummy` builders.

use nestval::prelude::*;

///
/// Customer
///
/// Entity-style record: an identity field plus embedded value types (the
/// name and both addresses) with no identity of their own.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Customer {
    pub id: u32,
    pub name: Name,
    pub shipping_address: Address,
    pub billing_address: Address,
}

impl Customer {
    /// Deterministic fixture builder keyed by a byte seed.
    pub fn dummy(v: u8) -> Self {
        Self {
            id: u32::from(v),
            name: Name::new(format!("customer {v}")).expect("dummy name must remain valid"),
            shipping_address: Address::dummy(v),
            billing_address: Address::dummy(v.wrapping_add(1)),
        }
    }
}

///
/// Address
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Address {
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub zip_code: u32,
    pub country: Country,
}

impl Address {
    pub fn dummy(v: u8) -> Self {
        Self {
            address_line1: format!("{v} Main Street"),
            address_line2: None,
            zip_code: 10000 + u32::from(v),
            country: Country::dummy(v),
        }
    }
}

///
/// Country
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Country {
    pub full_name: String,
    pub code: String,
}

impl Country {
    pub fn dummy(v: u8) -> Self {
        Self {
            full_name: format!("Country {v}"),
            code: format!("C{v}"),
        }
    }
}

///
/// CustomerGroup
///
/// Entity-style record referencing `Customer`, itself entity-style.
/// Used to exercise value types behind required and optional references.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CustomerGroup {
    pub id: u32,
    pub required_customer: Customer,
    pub optional_customer: Option<Customer>,
}

impl CustomerGroup {
    pub fn dummy(v: u8) -> Self {
        Self {
            id: u32::from(v),
            required_customer: Customer::dummy(v),
            optional_customer: Some(Customer::dummy(v.wrapping_add(1))),
        }
    }
}

///
/// ValuedCustomer
///
/// Same shape as `Customer` with a raw string name and value-type variants
/// of the embedded shapes.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValuedCustomer {
    pub id: u32,
    pub name: String,
    pub shipping_address: AddressValue,
    pub billing_address: AddressValue,
}

impl ValuedCustomer {
    pub fn dummy(v: u8) -> Self {
        Self {
            id: u32::from(v),
            name: format!("valued customer {v}"),
            shipping_address: AddressValue::dummy(v),
            billing_address: AddressValue::dummy(v.wrapping_add(1)),
        }
    }
}

///
/// AddressValue
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AddressValue {
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub zip_code: u32,
    pub country: CountryValue,
}

impl AddressValue {
    pub fn dummy(v: u8) -> Self {
        Self {
            address_line1: format!("{v} Side Street"),
            address_line2: Some(format!("Unit {v}")),
            zip_code: 20000 + u32::from(v),
            country: CountryValue::dummy(v),
        }
    }
}

///
/// CountryValue
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CountryValue {
    pub full_name: String,
    pub code: String,
}

impl CountryValue {
    pub fn dummy(v: u8) -> Self {
        Self {
            full_name: format!("Country {v}"),
            code: format!("C{v}"),
        }
    }
}

///
/// ValuedCustomerGroup
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValuedCustomerGroup {
    pub id: u32,
    pub required_customer: ValuedCustomer,
    pub optional_customer: Option<ValuedCustomer>,
}

impl ValuedCustomerGroup {
    pub fn dummy(v: u8) -> Self {
        Self {
            id: u32::from(v),
            required_customer: ValuedCustomer::dummy(v),
            optional_customer: None,
        }
    }
}

///
/// TESTS
///
