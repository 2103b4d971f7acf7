//! Bundles: pluggable application modules
//!
//! A bundle type implements [`Bundle`] and fills in a [`BundleBuilder`].
//! Its name and module name are derived once from the type path when the
//! [`BundleMeta`] is built:
//!
//! ```rust,ignore
//! pub struct BlogBundle;
//!
//! impl Bundle for BlogBundle {
//!     fn declare(bundle: BundleBuilder) -> BundleBuilder {
//!         bundle.with_module("config", BundleModule::config(blog_config()))
//!     }
//! }
//!
//! // defined in my_app::blog::bundle
//! let meta = BundleMeta::of::<BlogBundle>();
//! assert_eq!(meta.name, "blog_bundle");
//! assert_eq!(meta.module_name, "my_app::blog");
//! ```

pub mod manifest;
pub mod module;
pub mod naming;
pub mod registry;
mod store;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub use module::{BundleModule, ConfigLayers, ExtensionDescriptor, ServiceDescriptor, ServiceEntry};
pub use registry::BundleRegistry;
pub use store::BundleStore;

use crate::hooks::{AppFactoryHook, HookRef};

/// A bundle type
///
/// Every method has a default, so a unit struct with an empty impl is a
/// valid bundle that contributes nothing but its name.
pub trait Bundle: 'static {
    /// Declare the bundle's hooks, modules, overrides and store
    fn declare(bundle: BundleBuilder) -> BundleBuilder {
        bundle
    }
}

/// Collects a bundle's declaration before it is frozen into a [`BundleMeta`]
#[derive(Debug)]
pub struct BundleBuilder {
    module_path: String,
    type_name: String,
    name: Option<String>,
    module_name: Option<String>,
    app_bundle: bool,
    hooks: Vec<HookRef>,
    modules: BTreeMap<String, BundleModule>,
    overrides: BTreeMap<String, String>,
    store: Option<BundleStore>,
}

impl BundleBuilder {
    /// Start a declaration for a type defined at `module_path`
    pub fn new(module_path: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            module_path: module_path.into(),
            type_name: type_name.into(),
            name: None,
            module_name: None,
            app_bundle: false,
            hooks: Vec::new(),
            modules: BTreeMap::new(),
            overrides: BTreeMap::new(),
            store: None,
        }
    }

    /// Start a declaration for bundle type `B`
    pub fn for_type<B: Bundle>() -> Self {
        let (module_path, type_name) = naming::split_type_path(std::any::type_name::<B>());
        Self::new(module_path, type_name)
    }

    /// Override the derived bundle name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the derived module name; a trailing bundle marker is stripped
    pub fn with_module_name(mut self, module_name: &str) -> Self {
        self.module_name = Some(naming::normalize_module_name(module_name));
        self
    }

    /// Mark this as the top-level application bundle
    pub fn as_app_bundle(mut self) -> Self {
        self.app_bundle = true;
        self
    }

    pub fn with_hook(mut self, hook: impl AppFactoryHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Add (or replace) the bundle module called `name`
    pub fn with_module(mut self, name: impl Into<String>, module: BundleModule) -> Self {
        self.modules.insert(name.into(), module);
        self
    }

    /// Redirect the hook that reads override attribute `attr` to `module_name`
    pub fn with_override(mut self, attr: impl Into<String>, module_name: impl Into<String>) -> Self {
        self.overrides.insert(attr.into(), module_name.into());
        self
    }

    pub fn with_store(mut self, store: BundleStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> BundleMeta {
        let location = if self.module_path.is_empty() {
            self.type_name.clone()
        } else {
            format!("{}::{}", self.module_path, self.type_name)
        };
        BundleMeta {
            name: self
                .name
                .unwrap_or_else(|| naming::derive_name(&self.type_name)),
            module_name: self
                .module_name
                .unwrap_or_else(|| naming::derive_module_name(&self.module_path)),
            location,
            app_bundle: self.app_bundle,
            hooks: self.hooks,
            modules: self.modules,
            overrides: self.overrides,
            store: self.store,
        }
    }
}

/// A bundle's frozen declaration
#[derive(Debug, Clone)]
pub struct BundleMeta {
    /// Snake-cased type name unless overridden
    pub name: String,
    /// Module path with the bundle marker stripped
    pub module_name: String,
    /// Full path of the defining type
    pub location: String,
    /// Whether this is the top-level application bundle
    pub app_bundle: bool,
    /// Hooks to register with the app factory, in order
    pub hooks: Vec<HookRef>,
    modules: BTreeMap<String, BundleModule>,
    overrides: BTreeMap<String, String>,
    store: Option<BundleStore>,
}

impl BundleMeta {
    /// Build the declaration of bundle type `B`
    pub fn of<B: Bundle>() -> Self {
        B::declare(BundleBuilder::for_type::<B>()).build()
    }

    /// The bundle module called `name`, if the bundle has one
    pub fn module(&self, name: &str) -> Option<&BundleModule> {
        self.modules.get(name)
    }

    /// Module name the bundle sets for override attribute `attr`
    pub fn override_for(&self, attr: &str) -> Option<&str> {
        self.overrides.get(attr).map(String::as_str)
    }

    pub fn store(&self) -> Option<&BundleStore> {
        self.store.as_ref()
    }
}

impl fmt::Display for BundleMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Bundle name={:?} module={:?}>",
            self.name, self.module_name
        )
    }
}
