//! Babel bundle: locale options and the supported-locales store

mod bundle;
mod hooks;

pub use bundle::BabelBundle;
pub use hooks::RegisterLocalesHook;
