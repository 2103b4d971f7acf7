//! Expose bundle stores on the app

use super::AppFactoryHook;
use crate::app::UnchainedApp;
use crate::bundle::BundleMeta;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct RegisterBundleStoresHook;

impl AppFactoryHook for RegisterBundleStoresHook {
    fn name(&self) -> &'static str {
        "register_bundle_stores"
    }

    fn description(&self) -> &'static str {
        "Makes each bundle's store available on the app under the bundle's name."
    }

    fn run_hook(&self, app: &mut UnchainedApp, bundles: &[BundleMeta]) -> Result<()> {
        for bundle in bundles {
            if let Some(store) = bundle.store() {
                app.unchained
                    .stores
                    .insert(bundle.name.clone(), store.clone());
            }
        }
        Ok(())
    }
}
