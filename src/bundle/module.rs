//! What a bundle contributes to the app, grouped into named bundle modules
//!
//! Hooks look up the module they read from by name (`config`, `extensions`,
//! `services`), unless the bundle redirects them with an override.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::{ConfigMap, Env};

/// Contents of one named bundle module
#[derive(Debug, Clone, Default)]
pub struct BundleModule {
    pub config: Option<ConfigLayers>,
    pub extensions: Vec<ExtensionDescriptor>,
    pub services: Vec<ServiceDescriptor>,
}

impl BundleModule {
    /// A module holding config options
    pub fn config(layers: ConfigLayers) -> Self {
        Self {
            config: Some(layers),
            ..Self::default()
        }
    }

    /// A module holding extensions
    pub fn extensions(extensions: Vec<ExtensionDescriptor>) -> Self {
        Self {
            extensions,
            ..Self::default()
        }
    }

    /// A module holding services
    pub fn services(services: Vec<ServiceDescriptor>) -> Self {
        Self {
            services,
            ..Self::default()
        }
    }
}

/// Config options, split into a base layer and per-env layers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigLayers {
    pub base: ConfigMap,
    pub envs: BTreeMap<Env, ConfigMap>,
}

impl ConfigLayers {
    pub fn new(base: ConfigMap) -> Self {
        Self {
            base,
            envs: BTreeMap::new(),
        }
    }

    pub fn with_env(mut self, env: Env, options: ConfigMap) -> Self {
        self.envs.insert(env, options);
        self
    }

    /// Base options overlaid with the options for `env`
    pub fn for_env(&self, env: Env) -> ConfigMap {
        let mut merged = self.base.clone();
        if let Some(options) = self.envs.get(&env) {
            merged.extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }
}

/// An extension a bundle registers on the app
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtensionDescriptor {
    pub name: String,

    #[serde(rename = "class")]
    pub class_name: String,

    pub module: String,

    /// Names of extensions that must be initialized first
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ExtensionDescriptor {
    pub fn new(
        name: impl Into<String>,
        class_name: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            module: module.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }
}

/// A service a bundle registers on the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub entry: ServiceEntry,
}

/// How a registered service describes itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEntry {
    /// A service instance of the named class
    Instance { class_name: String, module: String },
    /// A service registered as a type rather than an instance
    Class { type_name: String, module: String },
    /// A service with no class metadata, shown by its string form
    Opaque(String),
}

impl ServiceEntry {
    /// Class column of the services table
    pub fn class_label(&self) -> &str {
        match self {
            ServiceEntry::Instance { class_name, .. } => class_name,
            ServiceEntry::Class { type_name, .. } => type_name,
            ServiceEntry::Opaque(repr) => repr,
        }
    }

    /// Module column of the services table; empty without class metadata
    pub fn module(&self) -> &str {
        match self {
            ServiceEntry::Instance { module, .. } | ServiceEntry::Class { module, .. } => module,
            ServiceEntry::Opaque(_) => "",
        }
    }
}
