//! App factory hooks
//!
//! A hook is a unit of startup work declared by a bundle. The app factory
//! collects hooks from every loaded bundle and runs them in order against
//! the app being built (see [`run_hooks::RunHooksHook`]).
//!
//! Hooks that read per-bundle contributions name a default bundle module
//! (e.g. `config`) and an override attribute (e.g. `config_module_name`)
//! that lets a bundle point the hook at a differently named module.

pub mod configure_app;
pub mod register_bundle_stores;
pub mod register_extensions;
pub mod register_services;
pub mod run_hooks;

use std::fmt;
use std::sync::Arc;

pub use configure_app::ConfigureAppHook;
pub use register_bundle_stores::RegisterBundleStoresHook;
pub use register_extensions::RegisterExtensionsHook;
pub use register_services::RegisterServicesHook;
pub use run_hooks::RunHooksHook;

use crate::app::UnchainedApp;
use crate::bundle::{BundleMeta, BundleModule};
use crate::error::Result;

/// Shared handle to a hook declared by a bundle
pub type HookRef = Arc<dyn AppFactoryHook>;

/// A unit of app setup work run by the app factory
pub trait AppFactoryHook: fmt::Debug {
    /// Unique hook name
    fn name(&self) -> &'static str;

    /// Description shown by `unchained hooks`; the first line is the summary
    fn description(&self) -> &'static str;

    /// Bundle module this hook reads from by default
    fn bundle_module_name(&self) -> Option<&'static str> {
        None
    }

    /// Bundle override attribute that redirects [`Self::bundle_module_name`]
    fn bundle_override_module_name_attr(&self) -> Option<&'static str> {
        None
    }

    /// Hooks that must run before this one
    fn run_after(&self) -> &'static [&'static str] {
        &[]
    }

    /// Hooks that must run after this one
    fn run_before(&self) -> &'static [&'static str] {
        &[]
    }

    /// Do the hook's work against the app being built
    fn run_hook(&self, app: &mut UnchainedApp, bundles: &[BundleMeta]) -> Result<()>;

    /// Resolve the bundle module this hook should read from `bundle`
    fn bundle_module<'b>(&self, bundle: &'b BundleMeta) -> Option<&'b BundleModule> {
        let default = self.bundle_module_name()?;
        let module_name = self
            .bundle_override_module_name_attr()
            .and_then(|attr| bundle.override_for(attr))
            .unwrap_or(default);
        bundle.module(module_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::BundleBuilder;

    #[derive(Debug)]
    struct ReadsWidgets;

    impl AppFactoryHook for ReadsWidgets {
        fn name(&self) -> &'static str {
            "reads_widgets"
        }

        fn description(&self) -> &'static str {
            "Reads widgets."
        }

        fn bundle_module_name(&self) -> Option<&'static str> {
            Some("widgets")
        }

        fn bundle_override_module_name_attr(&self) -> Option<&'static str> {
            Some("widgets_module_name")
        }

        fn run_hook(&self, _app: &mut UnchainedApp, _bundles: &[BundleMeta]) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bundle_module_default() {
        let bundle = BundleBuilder::new("my_app", "App")
            .with_module("widgets", BundleModule::default())
            .build();
        assert!(ReadsWidgets.bundle_module(&bundle).is_some());
    }

    #[test]
    fn test_bundle_module_override() {
        let bundle = BundleBuilder::new("my_app", "App")
            .with_module("widgets", BundleModule::default())
            .with_override("widgets_module_name", "gadgets")
            .build();
        assert!(ReadsWidgets.bundle_module(&bundle).is_none());

        let bundle = BundleBuilder::new("my_app", "App")
            .with_module("gadgets", BundleModule::default())
            .with_override("widgets_module_name", "gadgets")
            .build();
        assert!(ReadsWidgets.bundle_module(&bundle).is_some());
    }
}
