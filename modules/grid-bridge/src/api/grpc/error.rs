use thiserror::Error;
use tonic::Status;

/// Mapping failures: a malformed or unrecognized wire value.
///
/// These always surface synchronously to the immediate caller as a rejected
/// request; nothing in the mapping layer retries or defaults them away.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("unrecognized {field} enum value {value}")]
    UnknownEnumValue { field: &'static str, value: i32 },
}

impl MapError {
    pub(crate) fn unknown_enum(field: &'static str, value: i32) -> Self {
        Self::UnknownEnumValue { field, value }
    }
}

impl From<MapError> for Status {
    fn from(err: MapError) -> Self {
        Status::invalid_argument(err.to_string())
    }
}
