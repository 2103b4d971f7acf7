//! The application assembled by the app factory
//!
//! [`UnchainedApp`] is passed explicitly to every command that reads it.

pub mod factory;

use std::collections::BTreeMap;

use serde_json::Value;

pub use factory::AppFactory;

use crate::bundle::{BundleMeta, BundleStore, ExtensionDescriptor, ServiceEntry};
use crate::config::{ConfigMap, Env};

/// A built application: its config snapshot and unchained registries
#[derive(Debug, Clone)]
pub struct UnchainedApp {
    pub env: Env,
    pub config: ConfigMap,
    pub unchained: Unchained,
}

impl UnchainedApp {
    /// An empty app for `env`; the config starts with `ENV` set
    pub fn new(env: Env) -> Self {
        let mut config = ConfigMap::new();
        config.insert("ENV".to_string(), Value::from(env.to_string()));
        Self {
            env,
            config,
            unchained: Unchained::default(),
        }
    }
}

/// Registries filled in by the app factory's hooks
#[derive(Debug, Clone, Default)]
pub struct Unchained {
    /// Loaded bundles, in load order
    pub bundles: Vec<BundleMeta>,
    pub extensions: BTreeMap<String, ExtensionEntry>,
    pub services: BTreeMap<String, ServiceEntry>,
    /// Bundle stores by bundle name
    pub stores: BTreeMap<String, BundleStore>,
}

impl Unchained {
    /// Look up a loaded bundle by name
    pub fn bundle(&self, name: &str) -> Option<&BundleMeta> {
        self.bundles.iter().find(|b| b.name == name)
    }
}

/// An extension registry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionEntry {
    /// Registered, waiting for its dependencies to be initialized
    Pending {
        extension: ExtensionDescriptor,
        dependencies: Vec<String>,
    },
    Initialized(ExtensionDescriptor),
}

impl ExtensionEntry {
    pub fn extension(&self) -> &ExtensionDescriptor {
        match self {
            ExtensionEntry::Pending { extension, .. } | ExtensionEntry::Initialized(extension) => {
                extension
            }
        }
    }

    pub fn initialized(self) -> Self {
        match self {
            ExtensionEntry::Pending { extension, .. } | ExtensionEntry::Initialized(extension) => {
                ExtensionEntry::Initialized(extension)
            }
        }
    }
}
