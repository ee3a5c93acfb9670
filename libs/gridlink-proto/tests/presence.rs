//! Oneof presence survives the wire: "message present with default fields"
//! must stay distinguishable from "message absent" after a round trip.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use gridlink_proto::{
    AnonymousCredential, CreateSchedulerRequest, CredentialCarrier, CredentialMap,
};
use prost::Message;

#[test]
fn unset_credential_stays_unset() {
    let request = CreateSchedulerRequest {
        adaptor: "slurm".to_owned(),
        ..Default::default()
    };

    let decoded = CreateSchedulerRequest::decode(request.encode_to_vec().as_slice())
        .expect("round trip decodes");

    assert_eq!(decoded.credential, None);
}

#[test]
fn present_empty_map_stays_present() {
    let request = CreateSchedulerRequest {
        adaptor: "slurm".to_owned(),
        credential: Some(CredentialCarrier::Map(CredentialMap::default())),
        ..Default::default()
    };

    let decoded = CreateSchedulerRequest::decode(request.encode_to_vec().as_slice())
        .expect("round trip decodes");

    assert_eq!(
        decoded.credential,
        Some(CredentialCarrier::Map(CredentialMap::default()))
    );
}

#[test]
fn present_anonymous_with_defaults_stays_present() {
    let request = CreateSchedulerRequest {
        credential: Some(CredentialCarrier::Anonymous(AnonymousCredential::default())),
        ..Default::default()
    };

    let decoded = CreateSchedulerRequest::decode(request.encode_to_vec().as_slice())
        .expect("round trip decodes");

    assert_eq!(
        decoded.credential,
        Some(CredentialCarrier::Anonymous(AnonymousCredential::default()))
    );
}
