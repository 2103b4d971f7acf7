//! Bundles shipped with unchained
//!
//! The base bundle is always loaded first and carries the core hooks. The
//! others are loaded when listed in `BUNDLES`.

pub mod babel;
pub mod base;
pub mod mail;
pub mod session;

use serde_json::Value;

use crate::bundle::BundleMeta;
use crate::config::ConfigMap;

/// The bundle every app loads first
pub fn base_bundle() -> BundleMeta {
    BundleMeta::of::<base::UnchainedBundle>()
}

/// Bundles that can be listed in `BUNDLES`
pub fn builtin_bundles() -> Vec<BundleMeta> {
    vec![
        BundleMeta::of::<babel::BabelBundle>(),
        BundleMeta::of::<mail::MailBundle>(),
        BundleMeta::of::<session::SessionBundle>(),
    ]
}

/// Config options from a JSON object literal; other values give no options
pub(crate) fn options(value: Value) -> ConfigMap {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => ConfigMap::new(),
    }
}
