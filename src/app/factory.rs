//! App factory: load the unchained config, load bundles, run hooks

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, info};

use super::UnchainedApp;
use crate::bundle::manifest::AppBundleManifest;
use crate::bundle::{BundleMeta, BundleRegistry};
use crate::bundles::base_bundle;
use crate::config::{Env, UnchainedConfig};
use crate::error::{self, Result};
use crate::hooks::RunHooksHook;

/// Builds an [`UnchainedApp`] from an unchained config file
#[derive(Debug, Clone)]
pub struct AppFactory {
    config_path: PathBuf,
    env: Env,
    registry: BundleRegistry,
}

impl AppFactory {
    pub fn new(config_path: impl Into<PathBuf>, env: Env) -> Self {
        Self {
            config_path: config_path.into(),
            env,
            registry: BundleRegistry::builtin(),
        }
    }

    /// Resolve `BUNDLES` entries against `registry` instead of the built-in one
    pub fn with_registry(mut self, registry: BundleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Read the unchained config file
    pub fn load_unchained_config(&self) -> Result<UnchainedConfig> {
        debug!(path = %self.config_path.display(), env = %self.env, "loading unchained config");
        UnchainedConfig::load(&self.config_path)
    }

    /// Resolve the bundles to load, in order
    ///
    /// The base bundle always comes first and the app bundle, if declared,
    /// last. `BUNDLES` entries naming the base bundle are skipped. Returns the
    /// app bundle and the full list.
    ///
    /// # Errors
    ///
    /// Fails on a path no bundle is registered at, or when two bundles share
    /// a name.
    pub fn load_bundles(
        &self,
        paths: &[String],
        app: Option<&AppBundleManifest>,
    ) -> Result<(Option<BundleMeta>, Vec<BundleMeta>)> {
        let base = BundleRegistry::new(vec![base_bundle()]);
        let mut bundles = base.all().to_vec();
        for path in paths {
            if base.resolve(path).is_some() {
                debug!(path = %path, "base bundle is always loaded; skipping");
                continue;
            }
            let bundle = self
                .registry
                .resolve(path)
                .ok_or_else(|| error::bundle::unknown_path(path))?;
            debug!(path = %path, bundle = %bundle.name, "loaded bundle");
            bundles.push(bundle.clone());
        }

        let app_bundle = app.map(AppBundleManifest::to_bundle);
        if let Some(app_bundle) = &app_bundle {
            debug!(bundle = %app_bundle.name, "loaded app bundle");
            bundles.push(app_bundle.clone());
        }

        let mut names = HashSet::new();
        for bundle in &bundles {
            if !names.insert(bundle.name.as_str()) {
                return Err(error::bundle::duplicate(&bundle.name));
            }
        }

        Ok((app_bundle, bundles))
    }

    /// Build the app: load config and bundles, then run every hook
    ///
    /// # Errors
    ///
    /// Fails if the config file is missing or malformed, has no `BUNDLES`
    /// key, or if any bundle or hook fails to load or run.
    pub fn create_app(&self) -> Result<UnchainedApp> {
        let unchained_config = self.load_unchained_config()?;
        let paths = unchained_config.bundles.as_deref().ok_or_else(|| {
            error::config::invalid(format!(
                "BUNDLES is not set in {}",
                self.config_path.display()
            ))
        })?;
        let (app_bundle, bundles) = self.load_bundles(paths, unchained_config.app.as_ref())?;

        let mut app = UnchainedApp::new(self.env);
        app.unchained.bundles = bundles.clone();
        RunHooksHook.run(&mut app, &bundles)?;

        info!(
            env = %self.env,
            bundles = bundles.len(),
            app_bundle = app_bundle.as_ref().map(|b| b.name.as_str()).unwrap_or("(none)"),
            "app created"
        );
        Ok(app)
    }
}
