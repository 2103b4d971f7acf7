//! Collect hooks from bundles and run them in order

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::HookRef;
use crate::app::UnchainedApp;
use crate::bundle::BundleMeta;
use crate::common::sort::topological_sort;
use crate::error::Result;

/// Drives the hook pipeline for the app factory
#[derive(Debug, Default)]
pub struct RunHooksHook;

impl RunHooksHook {
    /// Every bundle's hooks, in bundle order then declaration order
    ///
    /// Nothing is deduplicated or reordered here.
    pub fn collect_from_bundles(&self, bundles: &[BundleMeta]) -> Vec<HookRef> {
        bundles
            .iter()
            .flat_map(|bundle| bundle.hooks.iter().cloned())
            .collect()
    }

    /// Order collected hooks for running
    ///
    /// Keeps the first hook of each name, then applies `run_after` and
    /// `run_before`. Unconstrained hooks keep their collection order;
    /// constraints naming hooks that were not collected are ignored.
    pub fn resolve_run_order(&self, hooks: Vec<HookRef>) -> Result<Vec<HookRef>> {
        let mut seen = HashSet::new();
        let unique: Vec<HookRef> = hooks
            .into_iter()
            .filter(|hook| seen.insert(hook.name()))
            .collect();

        let order: Vec<String> = unique.iter().map(|h| h.name().to_string()).collect();
        let mut deps: HashMap<String, Vec<String>> = HashMap::new();
        for hook in &unique {
            for after in hook.run_after() {
                deps.entry(hook.name().to_string())
                    .or_default()
                    .push((*after).to_string());
            }
            for before in hook.run_before() {
                deps.entry((*before).to_string())
                    .or_default()
                    .push(hook.name().to_string());
            }
        }

        let mut by_name: HashMap<String, HookRef> = unique
            .into_iter()
            .map(|hook| (hook.name().to_string(), hook))
            .collect();

        Ok(topological_sort(&deps, &order)?
            .into_iter()
            .filter_map(|name| by_name.remove(&name))
            .collect())
    }

    /// Collect, order and run every bundle's hooks against `app`
    pub fn run(&self, app: &mut UnchainedApp, bundles: &[BundleMeta]) -> Result<()> {
        let hooks = self.resolve_run_order(self.collect_from_bundles(bundles))?;
        for hook in hooks {
            debug!(hook = hook.name(), "running hook");
            hook.run_hook(app, bundles)?;
        }
        Ok(())
    }
}
