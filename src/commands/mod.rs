//! Command implementations for the Unchained CLI
//!
//! Every introspection command reads already-built state and prints a
//! table. Only `hooks` works without building the app.

pub mod bundles;
pub mod completions;
pub mod config;
pub mod extensions;
pub mod hooks;
pub mod services;
pub mod version;
