//! File system mapping.

use std::collections::BTreeSet;

use gridlink_proto as proto;
use tracing::warn;

use crate::api::grpc::credentials::{credential_username, resource_identity};
use crate::api::grpc::error::MapError;
use crate::api::grpc::properties::map_property_descriptions;
use crate::domain::files::{
    CopyMode, CopyStatus, FileSystemHandle, PathAttributes, PosixPermission, Probed,
};
use crate::domain::properties::{AdaptorDescription, Component};

/// Project a domain permission set onto the wire.
///
/// The wire-only `None` marker is never produced; an empty set simply maps to
/// an empty sequence.
#[must_use]
pub fn map_permissions(
    permissions: &BTreeSet<PosixPermission>,
) -> Vec<proto::PosixFilePermission> {
    permissions.iter().map(|p| permission_to_wire(*p)).collect()
}

/// Parse wire permission tags into a domain permission set.
///
/// `None` is accepted and dropped, which allows expressing a file with no
/// permission bits at all.
///
/// # Errors
///
/// Returns [`MapError`] on an unrecognized permission tag; unknown values are
/// rejected, never silently skipped.
pub fn parse_permissions(raw: &[i32]) -> Result<BTreeSet<PosixPermission>, MapError> {
    let mut permissions = BTreeSet::new();
    for value in raw {
        let tag = proto::PosixFilePermission::try_from(*value)
            .map_err(|_| MapError::unknown_enum("posix file permission", *value))?;
        if let Some(permission) = permission_from_wire(tag) {
            permissions.insert(permission);
        }
    }
    Ok(permissions)
}

fn permission_to_wire(permission: PosixPermission) -> proto::PosixFilePermission {
    match permission {
        PosixPermission::OwnerRead => proto::PosixFilePermission::OwnerRead,
        PosixPermission::OwnerWrite => proto::PosixFilePermission::OwnerWrite,
        PosixPermission::OwnerExecute => proto::PosixFilePermission::OwnerExecute,
        PosixPermission::GroupRead => proto::PosixFilePermission::GroupRead,
        PosixPermission::GroupWrite => proto::PosixFilePermission::GroupWrite,
        PosixPermission::GroupExecute => proto::PosixFilePermission::GroupExecute,
        PosixPermission::OthersRead => proto::PosixFilePermission::OthersRead,
        PosixPermission::OthersWrite => proto::PosixFilePermission::OthersWrite,
        PosixPermission::OthersExecute => proto::PosixFilePermission::OthersExecute,
    }
}

fn permission_from_wire(permission: proto::PosixFilePermission) -> Option<PosixPermission> {
    match permission {
        proto::PosixFilePermission::None => None,
        proto::PosixFilePermission::OwnerRead => Some(PosixPermission::OwnerRead),
        proto::PosixFilePermission::OwnerWrite => Some(PosixPermission::OwnerWrite),
        proto::PosixFilePermission::OwnerExecute => Some(PosixPermission::OwnerExecute),
        proto::PosixFilePermission::GroupRead => Some(PosixPermission::GroupRead),
        proto::PosixFilePermission::GroupWrite => Some(PosixPermission::GroupWrite),
        proto::PosixFilePermission::GroupExecute => Some(PosixPermission::GroupExecute),
        proto::PosixFilePermission::OthersRead => Some(PosixPermission::OthersRead),
        proto::PosixFilePermission::OthersWrite => Some(PosixPermission::OthersWrite),
        proto::PosixFilePermission::OthersExecute => Some(PosixPermission::OthersExecute),
    }
}

/// Parse a wire copy mode.
///
/// # Errors
///
/// Returns [`MapError`] on an unrecognized copy-mode tag.
pub fn map_copy_mode(raw: i32) -> Result<CopyMode, MapError> {
    let mode =
        proto::CopyMode::try_from(raw).map_err(|_| MapError::unknown_enum("copy mode", raw))?;
    Ok(match mode {
        proto::CopyMode::Create => CopyMode::Create,
        proto::CopyMode::Replace => CopyMode::Replace,
        proto::CopyMode::Ignore => CopyMode::Ignore,
    })
}

/// Wire path on `filesystem`.
#[must_use]
pub fn write_path(path: &str, filesystem: &proto::FileSystem) -> proto::Path {
    proto::Path {
        filesystem: Some(filesystem.clone()),
        path: path.to_owned(),
    }
}

/// Project path attributes onto the wire.
///
/// Owner, group and permissions are best-effort: when the backing system
/// reports an attribute as unsupported it is logged, its field stays at the
/// default and the remaining attributes are still mapped.
#[must_use]
pub fn map_path_attributes(
    filesystem: &proto::FileSystem,
    attributes: &PathAttributes,
) -> proto::PathAttributes {
    let mut record = proto::PathAttributes {
        path: Some(write_path(&attributes.path, filesystem)),
        creation_time: attributes.creation_time,
        last_access_time: attributes.last_access_time,
        last_modified_time: attributes.last_modified_time,
        size: attributes.size,
        is_directory: attributes.is_directory,
        is_regular_file: attributes.is_regular_file,
        is_symbolic_link: attributes.is_symbolic_link,
        is_other: attributes.is_other,
        is_hidden: attributes.is_hidden,
        is_readable: attributes.is_readable,
        is_writable: attributes.is_writable,
        is_executable: attributes.is_executable,
        owner: String::new(),
        group: String::new(),
        permissions: Vec::new(),
    };
    match &attributes.permissions {
        Probed::Present(permissions) => {
            record.permissions = map_permissions(permissions)
                .into_iter()
                .map(|p| p as i32)
                .collect();
        }
        Probed::Absent => {}
        Probed::Unsupported => warn!(path = %attributes.path, "skipping permissions, not supported"),
    }
    match &attributes.owner {
        Probed::Present(owner) => record.owner = owner.clone(),
        Probed::Absent => {}
        Probed::Unsupported => warn!(path = %attributes.path, "skipping owner, not supported"),
    }
    match &attributes.group {
        Probed::Present(group) => record.group = group.clone(),
        Probed::Absent => {}
        Probed::Unsupported => warn!(path = %attributes.path, "skipping group, not supported"),
    }
    record
}

/// Project an open file system into its wire handle.
///
/// The identity embeds the projected username; the echoed request carries no
/// credential.
#[must_use]
pub fn write_file_system(handle: &FileSystemHandle) -> proto::FileSystem {
    let request = proto::CreateFileSystemRequest {
        adaptor: handle.adaptor.clone(),
        location: handle.location.clone(),
        properties: handle.properties.clone(),
        credential: None,
    };
    proto::FileSystem {
        id: resource_identity(
            &handle.adaptor,
            credential_username(&handle.credential),
            &handle.location,
        ),
        request: Some(request),
    }
}

/// Project all open file systems.
#[must_use]
pub fn write_file_systems(handles: &[FileSystemHandle]) -> proto::FileSystems {
    proto::FileSystems {
        filesystems: handles.iter().map(write_file_system).collect(),
    }
}

/// Project a copy status, bound to its operation handle.
#[must_use]
pub fn map_copy_status(status: &CopyStatus, operation: &proto::CopyOperation) -> proto::CopyStatus {
    proto::CopyStatus {
        copy_operation: Some(operation.clone()),
        bytes_copied: status.bytes_copied,
        bytes_to_copy: status.bytes_to_copy,
        state: status.state.clone(),
        running: status.running,
        done: status.done,
        error: status
            .error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
    }
}

/// Project an adaptor description with its file-system-level properties.
#[must_use]
pub fn map_file_system_adaptor_description(
    description: &AdaptorDescription,
) -> proto::FileSystemAdaptorDescription {
    proto::FileSystemAdaptorDescription {
        name: description.name.clone(),
        description: description.description.clone(),
        supported_locations: description.supported_locations.clone(),
        supported_properties: map_property_descriptions(
            &description.supported_properties,
            Component::FileSystem,
        ),
    }
}
