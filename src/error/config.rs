//! Configuration errors

use super::UnchainedError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> UnchainedError {
    UnchainedError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> UnchainedError {
    UnchainedError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> UnchainedError {
    UnchainedError::ConfigInvalid {
        message: message.into(),
    }
}
