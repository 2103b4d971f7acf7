//! Register extensions from each bundle and initialize them in dependency order

use std::collections::HashMap;

use tracing::debug;

use super::AppFactoryHook;
use crate::app::{ExtensionEntry, UnchainedApp};
use crate::bundle::{BundleMeta, ExtensionDescriptor};
use crate::common::sort::topological_sort;
use crate::error::{Result, hook};

#[derive(Debug, Default)]
pub struct RegisterExtensionsHook;

impl RegisterExtensionsHook {
    /// Extensions declared by `bundle`
    pub fn collect_from_bundle<'b>(&self, bundle: &'b BundleMeta) -> &'b [ExtensionDescriptor] {
        self.bundle_module(bundle)
            .map(|module| module.extensions.as_slice())
            .unwrap_or_default()
    }
}

impl AppFactoryHook for RegisterExtensionsHook {
    fn name(&self) -> &'static str {
        "register_extensions"
    }

    fn description(&self) -> &'static str {
        "Registers extensions found in bundles with the unchained extension.\n\n\
         Extensions are initialized after the extensions they depend on."
    }

    fn bundle_module_name(&self) -> Option<&'static str> {
        Some("extensions")
    }

    fn bundle_override_module_name_attr(&self) -> Option<&'static str> {
        Some("extensions_module_name")
    }

    fn run_after(&self) -> &'static [&'static str] {
        &["configure_app"]
    }

    fn run_hook(&self, app: &mut UnchainedApp, bundles: &[BundleMeta]) -> Result<()> {
        let extensions = &mut app.unchained.extensions;
        let mut order: Vec<String> = Vec::new();

        for bundle in bundles {
            for ext in self.collect_from_bundle(bundle) {
                if !order.contains(&ext.name) {
                    order.push(ext.name.clone());
                }
                extensions.insert(
                    ext.name.clone(),
                    ExtensionEntry::Pending {
                        extension: ext.clone(),
                        dependencies: ext.dependencies.clone(),
                    },
                );
            }
        }

        let mut deps: HashMap<String, Vec<String>> = HashMap::new();
        for (name, entry) in extensions.iter() {
            if let ExtensionEntry::Pending { dependencies, .. } = entry {
                for dep in dependencies {
                    if !extensions.contains_key(dep) {
                        return Err(hook::extension_dependency_missing(name, dep));
                    }
                }
                deps.insert(name.clone(), dependencies.clone());
            }
        }

        for name in topological_sort(&deps, &order)? {
            if let Some(entry) = extensions.remove(&name) {
                debug!(extension = %name, "initializing extension");
                extensions.insert(name, entry.initialized());
            }
        }
        Ok(())
    }
}
