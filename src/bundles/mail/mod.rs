//! Mail bundle: outgoing mail options, extension and services
//!
//! Keeps its options in a `settings` module rather than `config`.

mod bundle;

pub use bundle::MailBundle;
