//! File system messages.

use std::collections::HashMap;

use prost::{Enumeration, Message};

use crate::credentials::CredentialCarrier;
use crate::properties::PropertyDescription;

/// Request to open a file system on a remote resource.
#[derive(Clone, PartialEq, Message)]
pub struct CreateFileSystemRequest {
    #[prost(string, tag = "1")]
    pub adaptor: String,
    #[prost(string, tag = "2")]
    pub location: String,
    #[prost(map = "string, string", tag = "3")]
    pub properties: HashMap<String, String>,
    #[prost(oneof = "CredentialCarrier", tags = "4, 5, 6, 7")]
    pub credential: Option<CredentialCarrier>,
}

/// Handle for a previously created file system.
///
/// The echoed `request` never carries the original credential.
#[derive(Clone, PartialEq, Message)]
pub struct FileSystem {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    pub request: Option<CreateFileSystemRequest>,
}

/// The file systems currently known to the bridge.
#[derive(Clone, PartialEq, Message)]
pub struct FileSystems {
    #[prost(message, repeated, tag = "1")]
    pub filesystems: Vec<FileSystem>,
}

/// Absolute path on a specific file system.
#[derive(Clone, PartialEq, Message)]
pub struct Path {
    #[prost(message, optional, tag = "1")]
    pub filesystem: Option<FileSystem>,
    #[prost(string, tag = "2")]
    pub path: String,
}

/// POSIX permission bits.
///
/// `None` is a wire-only marker for "no permission bits": it is accepted on
/// input and never produced on output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum PosixFilePermission {
    None = 0,
    OwnerRead = 1,
    OwnerWrite = 2,
    OwnerExecute = 3,
    GroupRead = 4,
    GroupWrite = 5,
    GroupExecute = 6,
    OthersRead = 7,
    OthersWrite = 8,
    OthersExecute = 9,
}

/// Attributes of a single path.
///
/// `owner`, `group` and `permissions` are best-effort: they are left at their
/// defaults when the backing system cannot report them.
#[derive(Clone, PartialEq, Message)]
pub struct PathAttributes {
    #[prost(message, optional, tag = "1")]
    pub path: Option<Path>,
    #[prost(uint64, tag = "2")]
    pub creation_time: u64,
    #[prost(uint64, tag = "3")]
    pub last_access_time: u64,
    #[prost(uint64, tag = "4")]
    pub last_modified_time: u64,
    #[prost(uint64, tag = "5")]
    pub size: u64,
    #[prost(bool, tag = "6")]
    pub is_directory: bool,
    #[prost(bool, tag = "7")]
    pub is_regular_file: bool,
    #[prost(bool, tag = "8")]
    pub is_symbolic_link: bool,
    #[prost(bool, tag = "9")]
    pub is_other: bool,
    #[prost(bool, tag = "10")]
    pub is_hidden: bool,
    #[prost(bool, tag = "11")]
    pub is_readable: bool,
    #[prost(bool, tag = "12")]
    pub is_writable: bool,
    #[prost(bool, tag = "13")]
    pub is_executable: bool,
    #[prost(string, tag = "14")]
    pub owner: String,
    #[prost(string, tag = "15")]
    pub group: String,
    #[prost(enumeration = "PosixFilePermission", repeated, tag = "16")]
    pub permissions: Vec<i32>,
}

/// What to do when the copy target already exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum CopyMode {
    Create = 0,
    Replace = 1,
    Ignore = 2,
}

/// Handle for a running copy operation.
#[derive(Clone, PartialEq, Message)]
pub struct CopyOperation {
    #[prost(string, tag = "1")]
    pub id: String,
}

/// Point-in-time status of a copy operation.
#[derive(Clone, PartialEq, Message)]
pub struct CopyStatus {
    #[prost(message, optional, tag = "1")]
    pub copy_operation: Option<CopyOperation>,
    #[prost(uint64, tag = "2")]
    pub bytes_copied: u64,
    #[prost(uint64, tag = "3")]
    pub bytes_to_copy: u64,
    #[prost(string, tag = "4")]
    pub state: String,
    #[prost(bool, tag = "5")]
    pub running: bool,
    #[prost(bool, tag = "6")]
    pub done: bool,
    #[prost(string, tag = "7")]
    pub error: String,
}

/// Describes a file system adaptor and the properties it supports.
#[derive(Clone, PartialEq, Message)]
pub struct FileSystemAdaptorDescription {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(string, repeated, tag = "3")]
    pub supported_locations: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub supported_properties: Vec<PropertyDescription>,
}
