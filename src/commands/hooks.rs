//! Hooks command implementation
//!
//! Loads the bundle list without building the app, so it works even when
//! the app itself would fail to start.

use crate::app::AppFactory;
use crate::cli::HooksArgs;
use crate::common::string_utils::format_docstring;
use crate::common::table::print_table;
use crate::error::Result;
use crate::hooks::{HookRef, RunHooksHook};

const HEADER: [&str; 4] = [
    "Hook Name",
    "Default Bundle Module",
    "Bundle Module Override Attr",
    "Description",
];

const NONE: &str = "(None)";

/// Run hooks command
pub fn run(factory: &AppFactory, args: HooksArgs) -> Result<()> {
    print_table(&HEADER, &rows(&load_hooks(factory, args.run_order)?));
    Ok(())
}

/// Hooks of every bundle the config lists, in collection or run order
///
/// A config without `BUNDLES` yields only the hooks of the base bundle
/// and the app bundle.
pub fn load_hooks(factory: &AppFactory, run_order: bool) -> Result<Vec<HookRef>> {
    let unchained_config = factory.load_unchained_config()?;
    let paths = unchained_config.bundles.unwrap_or_default();
    let (_, bundles) = factory.load_bundles(&paths, unchained_config.app.as_ref())?;

    let hooks = RunHooksHook.collect_from_bundles(&bundles);
    if run_order {
        RunHooksHook.resolve_run_order(hooks)
    } else {
        Ok(hooks)
    }
}

pub fn rows(hooks: &[HookRef]) -> Vec<Vec<String>> {
    hooks
        .iter()
        .map(|hook| {
            let description = format_docstring(hook.description());
            vec![
                hook.name().to_string(),
                hook.bundle_module_name().unwrap_or(NONE).to_string(),
                hook.bundle_override_module_name_attr()
                    .unwrap_or(NONE)
                    .to_string(),
                if description.is_empty() {
                    NONE.to_string()
                } else {
                    description
                },
            ]
        })
        .collect()
}
