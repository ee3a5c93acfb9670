//! Mappers between the domain model and the wire schema.
//!
//! All functions here are pure projections: they hold no state, perform no
//! I/O and are safe to call concurrently. Failures are limited to
//! unrecognized wire enum tags, reported as [`MapError`] and convertible to
//! `tonic::Status` with `Code::InvalidArgument`.

pub mod credentials;
pub mod error;
pub mod files;
pub mod jobs;
pub mod properties;

pub use credentials::{NO_USERNAME, credential_username, resolve_credential, resource_identity};
pub use error::MapError;
pub use files::{
    map_copy_mode, map_copy_status, map_file_system_adaptor_description, map_path_attributes,
    map_permissions, parse_permissions, write_file_system, write_file_systems, write_path,
};
pub use jobs::{
    map_job, map_job_description, map_job_status, map_queue_status,
    map_scheduler_adaptor_description, write_job_description,
};
pub use properties::map_property_descriptions;

/// Wire-to-domain defaulting for optional string fields: the empty string
/// means "unset".
pub(crate) fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Wire-to-domain defaulting for optional numeric fields: zero means "unset".
pub(crate) fn nonzero(value: u32) -> Option<u32> {
    if value == 0 { None } else { Some(value) }
}
