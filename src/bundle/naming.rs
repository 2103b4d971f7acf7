//! Bundle naming convention
//!
//! A bundle's name is its snake-cased type name. Its module name is the
//! module path of the type, minus a trailing `bundle` segment, so a bundle
//! type defined in `my_app::blog::bundle` reports `my_app::blog`.

use crate::common::string_utils::{right_replace, snake_case};

/// Module path suffix marking a bundle's own defining module
pub const BUNDLE_MARKER: &str = "::bundle";

/// Split a full type path into its module path and type name
///
/// Generic arguments are dropped: `a::b::Foo<x::Y>` splits into `a::b` and `Foo`.
pub fn split_type_path(type_path: &str) -> (&str, &str) {
    let base = type_path.split('<').next().unwrap_or(type_path);
    base.rsplit_once("::").unwrap_or(("", base))
}

/// Derive a bundle name from its type name
pub fn derive_name(type_ident: &str) -> String {
    snake_case(type_ident)
}

/// Derive a bundle's logical module path from the module its type is defined in
pub fn derive_module_name(module_path: &str) -> String {
    normalize_module_name(module_path)
}

/// Strip the bundle marker from an explicitly declared module name
///
/// Names without the marker, including empty ones, pass through unchanged.
pub fn normalize_module_name(module_name: &str) -> String {
    if module_name.ends_with(BUNDLE_MARKER) {
        return right_replace(module_name, BUNDLE_MARKER, "", 1);
    }
    module_name.to_string()
}
