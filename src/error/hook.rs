//! Hook ordering and extension errors

use super::UnchainedError;

/// Creates a circular dependency error
pub fn circular(chain: impl Into<String>) -> UnchainedError {
    UnchainedError::CircularDependency {
        chain: chain.into(),
    }
}

/// Creates a missing extension dependency error
pub fn extension_dependency_missing(
    extension: impl Into<String>,
    dependency: impl Into<String>,
) -> UnchainedError {
    UnchainedError::ExtensionDependencyMissing {
        extension: extension.into(),
        dependency: dependency.into(),
    }
}
