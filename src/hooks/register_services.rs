//! Register services declared by bundles

use tracing::debug;

use super::AppFactoryHook;
use crate::app::UnchainedApp;
use crate::bundle::BundleMeta;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct RegisterServicesHook;

impl AppFactoryHook for RegisterServicesHook {
    fn name(&self) -> &'static str {
        "register_services"
    }

    fn description(&self) -> &'static str {
        "Registers services found in bundles with the unchained extension.\n\n\
         A service registered by a later bundle replaces one of the same name."
    }

    fn bundle_module_name(&self) -> Option<&'static str> {
        Some("services")
    }

    fn bundle_override_module_name_attr(&self) -> Option<&'static str> {
        Some("services_module_name")
    }

    fn run_after(&self) -> &'static [&'static str] {
        &["register_extensions"]
    }

    fn run_hook(&self, app: &mut UnchainedApp, bundles: &[BundleMeta]) -> Result<()> {
        for bundle in bundles {
            let Some(module) = self.bundle_module(bundle) else {
                continue;
            };
            for service in &module.services {
                let replaced = app
                    .unchained
                    .services
                    .insert(service.name.clone(), service.entry.clone());
                debug!(
                    bundle = %bundle.name,
                    service = %service.name,
                    replaced = replaced.is_some(),
                    "registered service"
                );
            }
        }
        Ok(())
    }
}
