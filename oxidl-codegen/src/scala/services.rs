//! Service declaration emission.
//!
//! Service bodies are an extension point. The enclosing class is always
//! produced so downstream references stay valid; the four hook points
//! below are independently invokable and currently contribute nothing.

use crate::scala::doc::doc_comment;
use oxidl_schema::ServiceDef;

/// Emits the per-service declaration with all four hook points applied
/// in order: interface, client, server, helpers.
#[must_use]
pub fn service_body(def: &ServiceDef) -> String {
    let mut out = doc_comment(def.doc.as_deref().unwrap_or(""));
    out.push_str(&format!("class {} {{\n", def.name));
    out.push_str(&interface_stub(def));
    out.push_str(&client_stub(def));
    out.push_str(&server_stub(def));
    out.push_str(&helper_stub(def));
    out.push_str("}\n");
    out
}

/// Service interface hook. Not yet implemented; emits nothing.
#[must_use]
pub fn interface_stub(def: &ServiceDef) -> String {
    tracing::debug!(
        "service '{}': interface emission not implemented, emitting empty placeholder",
        def.name
    );
    String::new()
}

/// Client stub hook. Not yet implemented; emits nothing.
#[must_use]
pub fn client_stub(def: &ServiceDef) -> String {
    tracing::debug!(
        "service '{}': client emission not implemented, emitting empty placeholder",
        def.name
    );
    String::new()
}

/// Server skeleton hook. Not yet implemented; emits nothing.
#[must_use]
pub fn server_stub(def: &ServiceDef) -> String {
    tracing::debug!(
        "service '{}': server emission not implemented, emitting empty placeholder",
        def.name
    );
    String::new()
}

/// Helper struct hook (method args and results). Not yet implemented;
/// emits nothing.
#[must_use]
pub fn helper_stub(def: &ServiceDef) -> String {
    tracing::debug!(
        "service '{}': helper emission not implemented, emitting empty placeholder",
        def.name
    );
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_declaration_is_always_produced() {
        let def = ServiceDef::new("Calculator");
        let out = service_body(&def);
        assert_eq!(out, "class Calculator {\n}\n");
    }

    #[test]
    fn test_hooks_emit_empty_placeholders() {
        let def = ServiceDef::new("Calculator");
        assert!(interface_stub(&def).is_empty());
        assert!(client_stub(&def).is_empty());
        assert!(server_stub(&def).is_empty());
        assert!(helper_stub(&def).is_empty());
    }

    #[test]
    fn test_service_doc() {
        let mut def = ServiceDef::new("Calculator");
        def.doc = Some("Adds numbers.".to_string());
        let out = service_body(&def);
        assert!(out.starts_with("/**\n * Adds numbers.\n */\nclass Calculator {"));
    }
}
