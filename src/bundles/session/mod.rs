//! Session bundle: server-side session options and interface

mod bundle;

pub use bundle::SessionBundle;
