//! Apply each bundle's config options to the app config

use tracing::debug;

use super::AppFactoryHook;
use crate::app::UnchainedApp;
use crate::bundle::BundleMeta;
use crate::config::{ConfigMap, Env};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct ConfigureAppHook;

impl ConfigureAppHook {
    /// The options `bundle` contributes in `env`: its base options overlaid
    /// with the options for `env`
    pub fn get_bundle_config(&self, bundle: &BundleMeta, env: Env) -> ConfigMap {
        self.bundle_module(bundle)
            .and_then(|module| module.config.as_ref())
            .map(|layers| layers.for_env(env))
            .unwrap_or_default()
    }
}

impl AppFactoryHook for ConfigureAppHook {
    fn name(&self) -> &'static str {
        "configure_app"
    }

    fn description(&self) -> &'static str {
        "Updates the app config with the options from each bundle.\n\n\
         Bundles are applied in load order, so later bundles (and finally the \
         app bundle) override options set by earlier ones."
    }

    fn bundle_module_name(&self) -> Option<&'static str> {
        Some("config")
    }

    fn bundle_override_module_name_attr(&self) -> Option<&'static str> {
        Some("config_module_name")
    }

    fn run_hook(&self, app: &mut UnchainedApp, bundles: &[BundleMeta]) -> Result<()> {
        for bundle in bundles {
            let options = self.get_bundle_config(bundle, app.env);
            debug!(
                bundle = %bundle.name,
                options = options.len(),
                "applying bundle config"
            );
            app.config.extend(options);
        }
        Ok(())
    }
}
