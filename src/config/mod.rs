//! Unchained config file (unchained.yaml) data structures
//!
//! The unchained config lists the bundles to load (`BUNDLES`) and may
//! declare the top-level application bundle inline (`app`).

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::manifest::AppBundleManifest;
use crate::error::{Result, UnchainedError, config};

/// Default unchained config file name
pub const UNCHAINED_CONFIG_FILE: &str = "unchained.yaml";

/// Config snapshot: option name to value
pub type ConfigMap = BTreeMap<String, Value>;

/// Application environment
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    #[default]
    Development,
    Production,
    Staging,
    Test,
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Env::Development => "development",
            Env::Production => "production",
            Env::Staging => "staging",
            Env::Test => "test",
        };
        f.write_str(name)
    }
}

/// Unchained config (unchained.yaml)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnchainedConfig {
    /// Bundle module paths, in load order
    #[serde(rename = "BUNDLES", default)]
    pub bundles: Option<Vec<String>>,

    /// The application's own bundle
    #[serde(default)]
    pub app: Option<AppBundleManifest>,
}

impl UnchainedConfig {
    /// Parse unchained config from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load unchained config from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml).map_err(|e| match e {
            UnchainedError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }
}

/// Render a config value the way the config table shows it
///
/// Strings are shown without quotes; everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
