use serde_json::json;

use super::hooks::RegisterLocalesHook;
use crate::bundle::{
    Bundle, BundleBuilder, BundleModule, BundleStore, ConfigLayers, ExtensionDescriptor,
};
use crate::bundles::options;

/// Internationalization support
pub struct BabelBundle;

impl Bundle for BabelBundle {
    fn declare(bundle: BundleBuilder) -> BundleBuilder {
        bundle
            .with_store(BundleStore::new())
            .with_hook(RegisterLocalesHook)
            .with_module(
                "config",
                BundleModule::config(ConfigLayers::new(options(json!({
                    "BABEL_DEFAULT_LOCALE": "en",
                    "BABEL_LANGUAGES": ["en"],
                })))),
            )
            .with_module(
                "extensions",
                BundleModule::extensions(vec![ExtensionDescriptor::new(
                    "babel",
                    "Babel",
                    "unchained::bundles::babel::extensions",
                )]),
            )
    }
}
