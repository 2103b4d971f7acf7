//! Common utility modules for shared functionality across the codebase.

pub mod sort;
pub mod string_utils;
pub mod table;
