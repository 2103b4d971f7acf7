//! The application bundle declared in the unchained config
//!
//! ```yaml
//! app:
//!   module_name: my_app
//!   class: App
//!   config:
//!     SECRET_KEY: not-so-secret
//!   envs:
//!     production:
//!       DEBUG: false
//!   extensions:
//!     - { name: db, class: SQLAlchemy, module: my_app.extensions }
//!   services:
//!     - { name: users, class: UserManager, module: my_app.services }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{
    BundleBuilder, BundleMeta, BundleModule, ConfigLayers, ExtensionDescriptor,
    ServiceDescriptor, ServiceEntry,
};
use crate::config::{ConfigMap, Env};

fn default_module_name() -> String {
    "app".to_string()
}

fn default_class_name() -> String {
    "App".to_string()
}

/// Declaration of the top-level application bundle
#[derive(Debug, Clone, Deserialize)]
pub struct AppBundleManifest {
    /// Module path of the app; a trailing bundle marker is stripped
    #[serde(default = "default_module_name")]
    pub module_name: String,

    /// Type name the bundle name is derived from
    #[serde(rename = "class", default = "default_class_name")]
    pub class_name: String,

    /// Explicit bundle name
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub config: ConfigMap,

    #[serde(default)]
    pub envs: BTreeMap<Env, ConfigMap>,

    #[serde(default)]
    pub extensions: Vec<ExtensionDescriptor>,

    #[serde(default)]
    pub services: Vec<ServiceManifest>,
}

/// A service declared in the manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ServiceManifest {
    Instance {
        name: String,
        #[serde(rename = "class")]
        class_name: String,
        module: String,
    },
    Class {
        name: String,
        #[serde(rename = "type")]
        type_name: String,
        module: String,
    },
    Opaque {
        name: String,
        repr: String,
    },
}

impl ServiceManifest {
    pub fn to_descriptor(&self) -> ServiceDescriptor {
        match self {
            ServiceManifest::Instance {
                name,
                class_name,
                module,
            } => ServiceDescriptor {
                name: name.clone(),
                entry: ServiceEntry::Instance {
                    class_name: class_name.clone(),
                    module: module.clone(),
                },
            },
            ServiceManifest::Class {
                name,
                type_name,
                module,
            } => ServiceDescriptor {
                name: name.clone(),
                entry: ServiceEntry::Class {
                    type_name: type_name.clone(),
                    module: module.clone(),
                },
            },
            ServiceManifest::Opaque { name, repr } => ServiceDescriptor {
                name: name.clone(),
                entry: ServiceEntry::Opaque(repr.clone()),
            },
        }
    }
}

impl AppBundleManifest {
    /// Freeze the manifest into an app bundle
    pub fn to_bundle(&self) -> BundleMeta {
        let mut bundle = BundleBuilder::new(&self.module_name, &self.class_name)
            .with_module_name(&self.module_name)
            .as_app_bundle();
        if let Some(name) = &self.name {
            bundle = bundle.with_name(name);
        }

        let layers = self
            .envs
            .iter()
            .fold(ConfigLayers::new(self.config.clone()), |layers, (env, options)| {
                layers.with_env(*env, options.clone())
            });
        let services = self
            .services
            .iter()
            .map(ServiceManifest::to_descriptor)
            .collect();

        bundle
            .with_module("config", BundleModule::config(layers))
            .with_module("extensions", BundleModule::extensions(self.extensions.clone()))
            .with_module("services", BundleModule::services(services))
            .build()
    }
}
