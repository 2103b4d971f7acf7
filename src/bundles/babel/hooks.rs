use serde_json::Value;
use tracing::debug;

use crate::app::UnchainedApp;
use crate::bundle::BundleMeta;
use crate::error::Result;
use crate::hooks::AppFactoryHook;

/// Name the babel bundle's store is registered under
const STORE_NAME: &str = "babel_bundle";

const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Default)]
pub struct RegisterLocalesHook;

impl RegisterLocalesHook {
    /// Supported locales from the app config, default locale first if missing
    fn locales(config: &crate::config::ConfigMap) -> (String, Vec<String>) {
        let default = config
            .get("BABEL_DEFAULT_LOCALE")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_LOCALE)
            .to_string();
        let mut languages: Vec<String> = config
            .get("BABEL_LANGUAGES")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        if !languages.contains(&default) {
            languages.insert(0, default.clone());
        }
        (default, languages)
    }
}

impl AppFactoryHook for RegisterLocalesHook {
    fn name(&self) -> &'static str {
        "register_locales"
    }

    fn description(&self) -> &'static str {
        "Stores the default locale and supported languages in the babel bundle's store."
    }

    fn run_after(&self) -> &'static [&'static str] {
        &["configure_app", "register_bundle_stores"]
    }

    fn run_hook(&self, app: &mut UnchainedApp, _bundles: &[BundleMeta]) -> Result<()> {
        let Some(store) = app.unchained.stores.get(STORE_NAME) else {
            return Ok(());
        };
        let (default, languages) = Self::locales(&app.config);
        debug!(default = %default, count = languages.len(), "registered locales");
        store.set("default_locale", default);
        store.set("locales", languages);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::bundle::BundleMeta;
    use crate::bundles::babel::BabelBundle;
    use crate::config::Env;
    use crate::hooks::{ConfigureAppHook, RegisterBundleStoresHook};
    use serde_json::json;

    #[test]
    fn test_store_name_matches_bundle_name() {
        assert_eq!(BundleMeta::of::<BabelBundle>().name, STORE_NAME);
    }

    #[test]
    fn test_registers_locales_in_store() {
        let bundle = BundleMeta::of::<BabelBundle>();
        let bundles = [bundle];
        let mut app = UnchainedApp::new(Env::Development);
        RegisterBundleStoresHook
            .run_hook(&mut app, &bundles)
            .expect("stores");
        ConfigureAppHook
            .run_hook(&mut app, &bundles)
            .expect("configure");
        app.config
            .insert("BABEL_LANGUAGES".to_string(), json!(["fr", "de"]));

        RegisterLocalesHook
            .run_hook(&mut app, &bundles)
            .expect("locales");

        let store = bundles[0].store().expect("babel store");
        assert_eq!(store.get("default_locale"), Some(json!("en")));
        assert_eq!(store.get("locales"), Some(json!(["en", "fr", "de"])));
    }

    #[test]
    fn test_without_store_is_noop() {
        let mut app = UnchainedApp::new(Env::Development);
        RegisterLocalesHook
            .run_hook(&mut app, &[])
            .expect("locales");
        assert!(app.unchained.stores.is_empty());
    }
}
