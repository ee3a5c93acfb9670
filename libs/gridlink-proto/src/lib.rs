//! Wire schema for the GridLink resource bridge.
//!
//! These are the flat messages exchanged with remote callers. The schema is
//! written by hand with `prost` derives rather than generated from a `.proto`
//! file so that the crate builds without a protobuf toolchain; tags are part
//! of the wire contract and must never be reused or renumbered.
//!
//! Presence conventions: scalar fields use the proto3 defaults (empty string,
//! zero) to mean "unset"; anywhere the distinction between "message absent"
//! and "message present with default fields" is meaningful, a `oneof` carries
//! the case discriminant.

pub mod common;
pub mod credentials;
pub mod files;
pub mod jobs;
pub mod properties;

pub use common::Empty;
pub use credentials::{
    AnonymousCredential, CertificateCredential, CredentialCarrier, CredentialMap,
    PasswordCredential, ScalarCredential, UserCredential,
};
pub use files::{
    CopyMode, CopyOperation, CopyStatus, CreateFileSystemRequest, FileSystem,
    FileSystemAdaptorDescription, FileSystems, Path, PathAttributes, PosixFilePermission,
};
pub use jobs::{
    CreateSchedulerRequest, Job, JobDescription, JobStatus, QueueStatus, Scheduler,
    SchedulerAdaptorDescription, StatusErrorType,
};
pub use properties::{PropertyDescription, PropertyType};
