//! Credential resolution and identity projection.
//!
//! The wire side tracks presence through oneof discriminants, so every branch
//! here keys on "which case is set", never on whether a field equals its
//! proto3 default.

use std::collections::HashMap;

use gridlink_proto as proto;

use crate::api::grpc::error::MapError;
use crate::api::grpc::optional;
use crate::domain::credential::{
    AnonymousCredential, CertificateCredential, Credential, CredentialMap, PasswordCredential,
    UserCredential,
};

/// Sentinel returned by [`credential_username`] when a credential carries no
/// username. Part of the resource-identity contract, so it must never change.
pub const NO_USERNAME: &str = "nousername";

/// Reconstruct a domain credential from the request's credential oneof.
///
/// An entirely unset carrier yields the default anonymous credential. A map
/// carrier resolves its fallback and entries recursively, one level deep.
///
/// # Errors
///
/// Returns [`MapError`] when the carrier holds an unrecognized wire value.
pub fn resolve_credential(
    carrier: Option<&proto::CredentialCarrier>,
) -> Result<Credential, MapError> {
    let Some(carrier) = carrier else {
        return Ok(Credential::default());
    };
    let credential = match carrier {
        proto::CredentialCarrier::Anonymous(msg) => Credential::Anonymous(resolve_anonymous(msg)),
        proto::CredentialCarrier::Password(msg) => Credential::Password(resolve_password(msg)),
        proto::CredentialCarrier::Certificate(msg) => {
            Credential::Certificate(resolve_certificate(msg))
        }
        proto::CredentialCarrier::Map(msg) => Credential::Map(resolve_map(msg)?),
    };
    Ok(credential)
}

/// The username this credential presents to the outside, or [`NO_USERNAME`].
///
/// A map credential projects the username of its fallback; host entries never
/// name the map itself. Deterministic and side-effect-free, as the result is
/// baked into resource identities.
#[must_use]
pub fn credential_username(credential: &Credential) -> &str {
    credential.username().unwrap_or(NO_USERNAME)
}

/// The stable lookup key of a resource handle.
///
/// Equal inputs always produce the same identity; callers use it to correlate
/// follow-up requests with a previously created resource.
#[must_use]
pub fn resource_identity(adaptor: &str, username: &str, location: &str) -> String {
    format!("{adaptor}://{username}@{location}")
}

fn resolve_anonymous(msg: &proto::AnonymousCredential) -> AnonymousCredential {
    AnonymousCredential {
        username: optional(&msg.username),
    }
}

fn resolve_password(msg: &proto::PasswordCredential) -> PasswordCredential {
    PasswordCredential::new(msg.username.clone(), msg.password.clone())
}

fn resolve_certificate(msg: &proto::CertificateCredential) -> CertificateCredential {
    CertificateCredential::new(
        msg.username.clone(),
        msg.certfile.clone(),
        msg.passphrase.clone(),
    )
}

fn resolve_scalar(scalar: &proto::ScalarCredential) -> UserCredential {
    match scalar {
        proto::ScalarCredential::Anonymous(msg) => {
            UserCredential::Anonymous(resolve_anonymous(msg))
        }
        proto::ScalarCredential::Password(msg) => UserCredential::Password(resolve_password(msg)),
        proto::ScalarCredential::Certificate(msg) => {
            UserCredential::Certificate(resolve_certificate(msg))
        }
    }
}

/// A map entry whose oneof is entirely unset resolves like an unset request
/// credential: anonymous with no username.
fn resolve_entry(entry: &proto::UserCredential) -> UserCredential {
    entry
        .scalar
        .as_ref()
        .map_or_else(|| UserCredential::Anonymous(AnonymousCredential::default()), resolve_scalar)
}

fn resolve_map(msg: &proto::CredentialMap) -> Result<CredentialMap, MapError> {
    let fallback = msg.fallback.as_ref().map(resolve_scalar);
    let mut entries = HashMap::with_capacity(msg.entries.len());
    for (host, entry) in &msg.entries {
        entries.insert(host.clone(), resolve_entry(entry));
    }
    Ok(CredentialMap { fallback, entries })
}
