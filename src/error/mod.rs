//! Error types and handling for Unchained
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle loading and lookup errors
//! - [`config`]: Unchained config file errors
//! - [`hook`]: Hook and extension ordering errors

pub mod bundle;
pub mod config;
pub mod hook;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Unchained operations
#[derive(Error, Diagnostic, Debug)]
pub enum UnchainedError {
    // Bundle errors
    #[error("Bundle '{name}' not found")]
    #[diagnostic(
        code(unchained::bundle::not_found),
        help("Run 'unchained bundles' to list the names of the loaded bundles")
    )]
    BundleNotFound { name: String },

    #[error("No bundle is registered at '{path}'")]
    #[diagnostic(
        code(unchained::bundle::unknown_path),
        help("BUNDLES entries must name a bundle module, e.g. unchained::bundles::babel")
    )]
    UnknownBundlePath { path: String },

    #[error("Bundle name '{name}' is used by more than one bundle")]
    #[diagnostic(
        code(unchained::bundle::duplicate),
        help("Each bundle in BUNDLES must be listed once and have a unique name")
    )]
    DuplicateBundle { name: String },

    // Hook errors
    #[error("Circular dependency detected: {chain}")]
    #[diagnostic(
        code(unchained::hook::circular),
        help("Check the run_after/run_before constraints and extension dependencies")
    )]
    CircularDependency { chain: String },

    #[error("Extension '{extension}' depends on unregistered extension '{dependency}'")]
    #[diagnostic(
        code(unchained::hook::extension_dependency_missing),
        help("Add the bundle providing '{dependency}' to BUNDLES")
    )]
    ExtensionDependencyMissing {
        extension: String,
        dependency: String,
    },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(unchained::config::not_found),
        help("Pass --config or set UNCHAINED_CONFIG to the unchained config file")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(unchained::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(unchained::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(unchained::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(unchained::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for UnchainedError {
    fn from(err: std::io::Error) -> Self {
        UnchainedError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for UnchainedError {
    fn from(err: serde_yaml::Error) -> Self {
        UnchainedError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, UnchainedError>;
