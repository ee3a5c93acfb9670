//! Domain model consumed by the wire mappers.
//!
//! These are the in-process values of the resource-access layer: credentials,
//! adaptor property metadata, job and file records, and the closed error
//! taxonomy. All records are immutable once built; the mappers only read them.

pub mod credential;
pub mod error;
pub mod files;
pub mod jobs;
pub mod properties;

pub use credential::{
    AnonymousCredential, CertificateCredential, Credential, CredentialMap, PasswordCredential,
    UserCredential,
};
pub use error::DomainError;
pub use files::{CopyMode, CopyStatus, FileSystemHandle, PathAttributes, PosixPermission, Probed};
pub use jobs::{JobDescription, JobStatus, QueueStatus};
pub use properties::{AdaptorDescription, Component, PropertyDescription, PropertyType};
