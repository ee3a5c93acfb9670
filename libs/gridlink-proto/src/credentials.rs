//! Credential messages.
//!
//! A request carries at most one credential through the [`CredentialCarrier`]
//! oneof. Map values stay flat: entries and the fallback are scalar
//! credentials only, never nested maps.

use std::collections::HashMap;

use prost::{Message, Oneof};

/// Credential without a secret; an empty `username` means "unset".
#[derive(Clone, PartialEq, Message)]
pub struct AnonymousCredential {
    #[prost(string, tag = "1")]
    pub username: String,
}

/// Username/password credential.
#[derive(Clone, PartialEq, Message)]
pub struct PasswordCredential {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub password: String,
}

/// Certificate-file credential with an optional passphrase.
#[derive(Clone, PartialEq, Message)]
pub struct CertificateCredential {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub certfile: String,
    #[prost(string, tag = "3")]
    pub passphrase: String,
}

/// Scalar credential cases, shared by map entries and the map fallback.
#[derive(Clone, PartialEq, Oneof)]
pub enum ScalarCredential {
    #[prost(message, tag = "1")]
    Anonymous(AnonymousCredential),
    #[prost(message, tag = "2")]
    Password(PasswordCredential),
    #[prost(message, tag = "3")]
    Certificate(CertificateCredential),
}

/// A single host-keyed map entry value.
#[derive(Clone, PartialEq, Message)]
pub struct UserCredential {
    #[prost(oneof = "ScalarCredential", tags = "1, 2, 3")]
    pub scalar: Option<ScalarCredential>,
}

/// Host-keyed credential map with an optional fallback.
///
/// When no entry matches the requested host the fallback applies; an absent
/// fallback means no credential is available for unlisted hosts.
#[derive(Clone, PartialEq, Message)]
pub struct CredentialMap {
    #[prost(oneof = "ScalarCredential", tags = "1, 2, 3")]
    pub fallback: Option<ScalarCredential>,
    #[prost(map = "string, message", tag = "4")]
    pub entries: HashMap<String, UserCredential>,
}

/// The "at most one credential per request" oneof.
///
/// Both create requests embed this with the same tag block, so the mapping
/// layer can resolve either request kind through a single code path.
#[derive(Clone, PartialEq, Oneof)]
pub enum CredentialCarrier {
    #[prost(message, tag = "4")]
    Anonymous(AnonymousCredential),
    #[prost(message, tag = "5")]
    Password(PasswordCredential),
    #[prost(message, tag = "6")]
    Certificate(CertificateCredential),
    #[prost(message, tag = "7")]
    Map(CredentialMap),
}
