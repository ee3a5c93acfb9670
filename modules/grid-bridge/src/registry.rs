//! Live resource handles, correlated across calls by identity string.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use crate::config::BridgeConfig;

/// Registry failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("resource {id} is already registered")]
    Duplicate { id: String },

    #[error("registry is full ({capacity} resources)")]
    Full { capacity: usize },

    #[error("resource {id} is not registered")]
    NotFound { id: String },
}

/// Open resource handles keyed by their identity string
/// (`{adaptor}://{username}@{location}`).
///
/// The registry is the only stateful part of the bridge; the mappers stay
/// pure. Handles are shared out as `Arc` so a remove cannot invalidate a
/// handle a request is still using.
#[derive(Debug)]
pub struct ResourceRegistry<T> {
    resources: RwLock<HashMap<String, Arc<T>>>,
    capacity: usize,
}

impl<T> ResourceRegistry<T> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Registry sized from the module configuration.
    #[must_use]
    pub fn with_config(config: &BridgeConfig) -> Self {
        Self::new(config.max_open_resources)
    }

    /// Register a resource under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] when `id` is already registered
    /// and [`RegistryError::Full`] when the configured capacity is reached.
    pub fn insert(&self, id: impl Into<String>, resource: T) -> Result<(), RegistryError> {
        let id = id.into();
        let mut resources = self.resources.write();
        if resources.contains_key(&id) {
            return Err(RegistryError::Duplicate { id });
        }
        if resources.len() >= self.capacity {
            return Err(RegistryError::Full {
                capacity: self.capacity,
            });
        }
        debug!(%id, "registering resource");
        resources.insert(id, Arc::new(resource));
        Ok(())
    }

    /// Look up the resource registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when `id` is unknown.
    pub fn get(&self, id: &str) -> Result<Arc<T>, RegistryError> {
        self.resources
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound { id: id.to_owned() })
    }

    /// Remove and return the resource registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when `id` is unknown.
    pub fn remove(&self, id: &str) -> Result<Arc<T>, RegistryError> {
        let removed = self
            .resources
            .write()
            .remove(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_owned() })?;
        debug!(%id, "removed resource");
        Ok(removed)
    }

    /// The identities currently registered, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.resources.read().keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.read().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_returns_the_same_resource() {
        let registry = ResourceRegistry::new(4);
        registry
            .insert("sftp://someone@somehost", 42)
            .expect("first insert succeeds");

        let resource = registry.get("sftp://someone@somehost").expect("registered");
        assert_eq!(*resource, 42);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let registry = ResourceRegistry::new(4);
        registry.insert("id", 1).expect("first insert succeeds");

        let err = registry.insert("id", 2).expect_err("duplicate must fail");
        assert_eq!(
            err,
            RegistryError::Duplicate {
                id: "id".to_owned()
            }
        );
    }

    #[test]
    fn capacity_is_enforced() {
        let registry = ResourceRegistry::new(1);
        registry.insert("a", 1).expect("fits");

        let err = registry.insert("b", 2).expect_err("over capacity");
        assert_eq!(err, RegistryError::Full { capacity: 1 });
    }

    #[test]
    fn capacity_comes_from_the_module_config() {
        let config = BridgeConfig {
            max_open_resources: 1,
        };
        let registry = ResourceRegistry::with_config(&config);
        registry.insert("a", 1).expect("fits");
        assert!(registry.insert("b", 2).is_err());
    }

    #[test]
    fn remove_frees_the_identity() {
        let registry = ResourceRegistry::new(2);
        registry.insert("a", 1).expect("fits");

        let removed = registry.remove("a").expect("registered");
        assert_eq!(*removed, 1);
        assert!(registry.is_empty());
        assert!(registry.get("a").is_err());
        registry.insert("a", 3).expect("identity is free again");
    }
}
