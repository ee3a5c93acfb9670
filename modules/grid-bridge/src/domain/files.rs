use std::collections::{BTreeSet, HashMap};

use crate::domain::credential::Credential;
use crate::domain::error::DomainError;

/// Outcome of probing a single optional attribute on the backing system.
///
/// `Unsupported` is a property of the backing system, not an error of the
/// request: mappers log it and leave the wire field at its default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Probed<T> {
    Present(T),
    #[default]
    Absent,
    Unsupported,
}

/// POSIX permission bits of a path.
///
/// `Ord` so permission sets iterate in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PosixPermission {
    OwnerRead,
    OwnerWrite,
    OwnerExecute,
    GroupRead,
    GroupWrite,
    GroupExecute,
    OthersRead,
    OthersWrite,
    OthersExecute,
}

/// Attributes of a single path as reported by the backing system.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PathAttributes {
    pub path: String,
    pub creation_time: u64,
    pub last_access_time: u64,
    pub last_modified_time: u64,
    pub size: u64,
    pub is_directory: bool,
    pub is_regular_file: bool,
    pub is_symbolic_link: bool,
    pub is_other: bool,
    pub is_hidden: bool,
    pub is_readable: bool,
    pub is_writable: bool,
    pub is_executable: bool,
    pub owner: Probed<String>,
    pub group: Probed<String>,
    pub permissions: Probed<BTreeSet<PosixPermission>>,
}

/// What to do when a copy target already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyMode {
    #[default]
    Create,
    Replace,
    Ignore,
}

/// Point-in-time status of a copy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStatus {
    pub state: String,
    pub running: bool,
    pub done: bool,
    pub bytes_copied: u64,
    pub bytes_to_copy: u64,
    pub error: Option<DomainError>,
}

/// An open file system as the bridge sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSystemHandle {
    pub adaptor: String,
    pub location: String,
    pub properties: HashMap<String, String>,
    pub credential: Credential,
}
