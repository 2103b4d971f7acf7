//! Registry of bundles compiled into the binary
//!
//! `BUNDLES` entries in the unchained config are resolved against this
//! registry by path.

use super::BundleMeta;
use super::naming::normalize_module_name;

/// Registry of all loadable bundles
#[derive(Debug, Clone)]
pub struct BundleRegistry {
    bundles: Vec<BundleMeta>,
}

impl BundleRegistry {
    /// Create a new registry with the given bundles
    pub fn new(bundles: Vec<BundleMeta>) -> Self {
        Self { bundles }
    }

    /// Registry of the bundles shipped with unchained
    pub fn builtin() -> Self {
        Self::new(crate::bundles::builtin_bundles())
    }

    /// Find the bundle a `BUNDLES` entry refers to
    ///
    /// Accepts the bundle's module name (with or without the bundle marker),
    /// its full type location, or its name.
    pub fn resolve(&self, path: &str) -> Option<&BundleMeta> {
        let path = path.trim();
        let module_name = normalize_module_name(path);
        self.bundles
            .iter()
            .find(|b| b.module_name == module_name)
            .or_else(|| self.bundles.iter().find(|b| b.location == path))
            .or_else(|| self.bundles.iter().find(|b| b.name == path))
    }

    /// Get all bundles in the registry
    pub fn all(&self) -> &[BundleMeta] {
        &self.bundles
    }
}

impl Default for BundleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
