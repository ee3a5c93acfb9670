//! Adaptor property metadata.

use prost::{Enumeration, Message};

/// Value type of a configuration property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum PropertyType {
    String = 0,
    Boolean = 1,
    Integer = 2,
    Long = 3,
    Double = 4,
    Size = 5,
}

/// A configuration property supported by an adaptor.
///
/// `default_value` is always present as a field; the empty string stands for
/// "no default".
#[derive(Clone, PartialEq, Message)]
pub struct PropertyDescription {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(string, tag = "3")]
    pub default_value: String,
    #[prost(enumeration = "PropertyType", tag = "4")]
    pub property_type: i32,
}
