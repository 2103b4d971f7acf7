//! Bundle-related errors

use super::UnchainedError;

/// Creates a bundle not found error
pub fn not_found(name: impl Into<String>) -> UnchainedError {
    UnchainedError::BundleNotFound { name: name.into() }
}

/// Creates an unknown bundle path error
pub fn unknown_path(path: impl Into<String>) -> UnchainedError {
    UnchainedError::UnknownBundlePath { path: path.into() }
}

/// Creates a duplicate bundle name error
pub fn duplicate(name: impl Into<String>) -> UnchainedError {
    UnchainedError::DuplicateBundle { name: name.into() }
}
