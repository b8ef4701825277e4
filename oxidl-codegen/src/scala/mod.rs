//! Scala target emission.
//!
//! Each submodule covers one concern: type resolution, constant value
//! rendering, per-declaration emitters, doc comments and identifier
//! casing. The driver in [`crate::generator`] composes them into
//! complete output units.

pub mod consts;
pub mod doc;
pub mod enums;
pub mod naming;
pub mod records;
pub mod services;
pub mod types;

/// Generated-notice banner placed at the top of every output unit.
#[must_use]
pub fn banner() -> &'static str {
    "/**\n * Autogenerated by oxidl\n *\n * DO NOT EDIT UNLESS YOU ARE SURE THAT YOU KNOW WHAT YOU ARE DOING\n */\n"
}

/// Returns the `package` line for a declared namespace, or the empty
/// string when the module declares none.
#[must_use]
pub fn package_decl(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("package {namespace}\n\n")
    }
}

/// Imports for generated units that reference the runtime library.
#[must_use]
pub fn runtime_imports() -> &'static str {
    "import org.slf4j.{Logger,LoggerFactory}\nimport io.oxidl._\nimport io.oxidl.meta._\nimport io.oxidl.protocol._\n\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_decl() {
        assert_eq!(package_decl(""), "");
        assert_eq!(package_decl("com.example"), "package com.example\n\n");
    }

    #[test]
    fn test_banner_is_a_comment() {
        assert!(banner().starts_with("/**"));
        assert!(banner().ends_with("*/\n"));
    }
}
