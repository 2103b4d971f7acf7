use serde_json::json;

use crate::bundle::{Bundle, BundleBuilder, BundleModule, ConfigLayers};
use crate::bundles::options;
use crate::config::Env;
use crate::hooks::{
    ConfigureAppHook, RegisterBundleStoresHook, RegisterExtensionsHook, RegisterServicesHook,
};

/// Registers the hooks every app needs
pub struct UnchainedBundle;

impl Bundle for UnchainedBundle {
    fn declare(bundle: BundleBuilder) -> BundleBuilder {
        let config = ConfigLayers::new(options(json!({
            "DEBUG": false,
            "TESTING": false,
        })))
        .with_env(Env::Development, options(json!({ "DEBUG": true })))
        .with_env(Env::Test, options(json!({ "TESTING": true })));

        bundle
            .with_hook(RegisterBundleStoresHook)
            .with_hook(ConfigureAppHook)
            .with_hook(RegisterExtensionsHook)
            .with_hook(RegisterServicesHook)
            .with_module("config", BundleModule::config(config))
    }
}
