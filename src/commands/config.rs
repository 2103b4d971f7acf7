//! Config command implementation

use crate::app::UnchainedApp;
use crate::cli::ConfigArgs;
use crate::common::table::print_table;
use crate::config::display_value;
use crate::error::{self, Result};
use crate::hooks::ConfigureAppHook;

const HEADER: [&str; 2] = ["Config Key", "Value"];

/// Run config command
pub fn run(app: &UnchainedApp, args: ConfigArgs) -> Result<()> {
    print_table(&HEADER, &rows(app, args.bundle_name.as_deref())?);
    Ok(())
}

/// (key, value) rows of the app config
///
/// With a bundle name, only the keys that bundle sets in the current env.
///
/// # Errors
///
/// Returns [`crate::error::UnchainedError::BundleNotFound`] for an unknown bundle name.
pub fn rows(app: &UnchainedApp, bundle_name: Option<&str>) -> Result<Vec<Vec<String>>> {
    let bundle_cfg = match bundle_name {
        Some(name) => {
            let bundle = app
                .unchained
                .bundle(name)
                .ok_or_else(|| error::bundle::not_found(name))?;
            Some(ConfigureAppHook.get_bundle_config(bundle, app.env))
        }
        None => None,
    };

    Ok(app
        .config
        .iter()
        .filter(|(key, _)| bundle_cfg.as_ref().is_none_or(|cfg| cfg.contains_key(*key)))
        .map(|(key, value)| vec![key.clone(), display_value(value)])
        .collect())
}
