//! Shared per-bundle data store

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

/// Data a bundle shares between its hooks and keeps for the app's lifetime
///
/// Clones share the same underlying map. Registered on the app under the
/// bundle's name.
#[derive(Debug, Clone, Default)]
pub struct BundleStore {
    inner: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl BundleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the value stored under `key`
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Store `value` under `key`, returning the previous value
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into())
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}
