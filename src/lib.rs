//! Unchained - bundles and hooks for assembling an app
//!
//! An app is built by an [`app::AppFactory`] from the bundles listed in an
//! unchained config file. Each bundle contributes hooks, which the factory
//! collects and runs in order, plus the config options, extensions and
//! services those hooks register.

pub mod app;
pub mod bundle;
pub mod bundles;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod hooks;
