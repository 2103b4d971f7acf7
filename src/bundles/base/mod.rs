//! Base bundle: core hooks and default options

mod bundle;

pub use bundle::UnchainedBundle;
