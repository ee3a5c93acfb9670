use thiserror::Error;

/// Errors raised by the resource-access layer.
///
/// The taxonomy is closed on purpose: the status mappers classify these
/// variants into the wire error kinds by identity, so adding a variant here
/// must be matched by a classification decision there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("job was cancelled: {message}")]
    Cancelled { message: String },

    #[error("no such job: {message}")]
    NoSuchJob { message: String },

    #[error("no such scheduler: {message}")]
    NoSuchScheduler { message: String },

    #[error("not connected: {message}")]
    NotConnected { message: String },

    #[error("invalid location: {message}")]
    InvalidLocation { message: String },

    #[error("I/O failure: {message}")]
    Io { message: String },
}

impl DomainError {
    #[must_use]
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::Cancelled {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn no_such_job(message: impl Into<String>) -> Self {
        Self::NoSuchJob {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn no_such_scheduler(message: impl Into<String>) -> Self {
        Self::NoSuchScheduler {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_connected(message: impl Into<String>) -> Self {
        Self::NotConnected {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_location(message: impl Into<String>) -> Self {
        Self::InvalidLocation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}
