use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

/// Credential without a secret.
///
/// `username: None` means no username was supplied; backends treat this as
/// "connect anonymously".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnonymousCredential {
    pub username: Option<String>,
}

impl AnonymousCredential {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }
}

/// Username/password credential. The password is never logged; `Debug`
/// prints it redacted.
#[derive(Debug, Clone)]
pub struct PasswordCredential {
    pub username: String,
    pub password: SecretString,
}

impl PasswordCredential {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl PartialEq for PasswordCredential {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
            && self.password.expose_secret() == other.password.expose_secret()
    }
}

impl Eq for PasswordCredential {}

/// Certificate-file credential with a passphrase-protected key.
#[derive(Debug, Clone)]
pub struct CertificateCredential {
    pub username: String,
    pub certfile: String,
    pub passphrase: SecretString,
}

impl CertificateCredential {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        certfile: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            certfile: certfile.into(),
            passphrase: SecretString::from(passphrase.into()),
        }
    }
}

impl PartialEq for CertificateCredential {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
            && self.certfile == other.certfile
            && self.passphrase.expose_secret() == other.passphrase.expose_secret()
    }
}

impl Eq for CertificateCredential {}

/// Scalar credential: the subset allowed as a map entry or fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCredential {
    Anonymous(AnonymousCredential),
    Password(PasswordCredential),
    Certificate(CertificateCredential),
}

impl UserCredential {
    /// The username this credential carries, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Anonymous(credential) => credential.username.as_deref(),
            Self::Password(credential) => Some(&credential.username),
            Self::Certificate(credential) => Some(&credential.username),
        }
    }
}

/// Host-keyed credential map.
///
/// `fallback` applies when no entry matches the requested host; `None` means
/// no credential is available for unlisted hosts. Entries are scalar
/// credentials only, never nested maps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CredentialMap {
    pub fallback: Option<UserCredential>,
    pub entries: HashMap<String, UserCredential>,
}

impl CredentialMap {
    #[must_use]
    pub fn with_fallback(fallback: UserCredential) -> Self {
        Self {
            fallback: Some(fallback),
            entries: HashMap::new(),
        }
    }

    pub fn put(&mut self, host: impl Into<String>, credential: UserCredential) {
        self.entries.insert(host.into(), credential);
    }

    /// The credential to use for `host`: the host entry if present, otherwise
    /// the fallback.
    #[must_use]
    pub fn lookup(&self, host: &str) -> Option<&UserCredential> {
        self.entries.get(host).or(self.fallback.as_ref())
    }
}

/// A credential as consumed by the resource-access layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Anonymous(AnonymousCredential),
    Password(PasswordCredential),
    Certificate(CertificateCredential),
    Map(CredentialMap),
}

impl Credential {
    /// The single username this credential carries, if any.
    ///
    /// A map credential delegates to its fallback; host entries never define
    /// the map's own username.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Anonymous(credential) => credential.username.as_deref(),
            Self::Password(credential) => Some(&credential.username),
            Self::Certificate(credential) => Some(&credential.username),
            Self::Map(map) => map.fallback.as_ref().and_then(UserCredential::username),
        }
    }
}

impl Default for Credential {
    /// The credential used when a request specifies none.
    fn default() -> Self {
        Self::Anonymous(AnonymousCredential::default())
    }
}

impl From<UserCredential> for Credential {
    fn from(credential: UserCredential) -> Self {
        match credential {
            UserCredential::Anonymous(c) => Self::Anonymous(c),
            UserCredential::Password(c) => Self::Password(c),
            UserCredential::Certificate(c) => Self::Certificate(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_debug_never_prints_the_secret() {
        let credential = PasswordCredential::new("someone", "supersecret");
        let rendered = format!("{credential:?}");
        assert!(!rendered.contains("supersecret"));
        assert!(rendered.contains("someone"));
    }

    #[test]
    fn map_lookup_prefers_host_entry_over_fallback() {
        let mut map = CredentialMap::with_fallback(UserCredential::Anonymous(
            AnonymousCredential::new("someone"),
        ));
        map.put(
            "somehost",
            UserCredential::Anonymous(AnonymousCredential::new("someoneelse")),
        );

        assert_eq!(
            map.lookup("somehost").and_then(UserCredential::username),
            Some("someoneelse")
        );
        assert_eq!(
            map.lookup("otherhost").and_then(UserCredential::username),
            Some("someone")
        );
    }

    #[test]
    fn map_lookup_without_fallback_yields_nothing() {
        let map = CredentialMap::default();
        assert_eq!(map.lookup("anyhost"), None);
    }
}
