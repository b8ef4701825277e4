//! ScalaDoc comment rendering.

use crate::scala::types::TypeResolver;
use oxidl_schema::{Field, MethodDef, TypeNode};

/// Renders a documentation string as a ScalaDoc block.
///
/// Returns the empty string for empty input, so callers can append the
/// result unconditionally.
#[must_use]
pub fn doc_comment(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = String::from("/**\n");
    for line in text.lines() {
        if line.is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(" */\n");
    out
}

/// Renders the documentation for a record field.
///
/// Fields whose true type is an enum get a generated cross-reference to
/// the enum's qualified name appended after the field's own text.
#[must_use]
pub fn field_doc(field: &Field, resolver: &TypeResolver<'_>) -> String {
    let own = field.doc.as_deref().unwrap_or("");
    if let TypeNode::Enum { name, module } = field.ty.true_type() {
        let combined = format!("{own}\n@see {}", resolver.qualified_name(name, module));
        doc_comment(&combined)
    } else {
        doc_comment(own)
    }
}

/// Renders the documentation for a service method, with one `@param`
/// line per argument.
#[must_use]
pub fn method_doc(method: &MethodDef) -> String {
    if method.doc.is_none() && method.args.is_empty() {
        return String::new();
    }
    let mut text = method.doc.clone().unwrap_or_default();
    for arg in &method.args {
        text.push_str("\n@param ");
        text.push_str(&arg.name);
        if let Some(doc) = &arg.doc {
            text.push(' ');
            text.push_str(doc);
        }
    }
    doc_comment(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxidl_schema::{BaseKind, Module};

    #[test]
    fn test_doc_comment_empty_input_emits_nothing() {
        assert_eq!(doc_comment(""), "");
    }

    #[test]
    fn test_doc_comment_block_shape() {
        let out = doc_comment("Line one.\nLine two.");
        assert_eq!(out, "/**\n * Line one.\n * Line two.\n */\n");
    }

    #[test]
    fn test_field_doc_plain_field() {
        let module = Module::new("main", "");
        let resolver = TypeResolver::new(&module);
        let mut field = Field::new("count", TypeNode::Base(BaseKind::I32));
        field.doc = Some("How many.".to_string());
        let out = field_doc(&field, &resolver);
        assert!(out.contains("How many."));
        assert!(!out.contains("@see"));
    }

    #[test]
    fn test_field_doc_enum_cross_reference() {
        let mut module = Module::new("main", "");
        module
            .includes
            .insert("shared".to_string(), "pkg.sub".to_string());
        let resolver = TypeResolver::new(&module);

        let mut field = Field::new("color", TypeNode::enum_ref("Color", "shared"));
        field.doc = Some("Display color.".to_string());
        let out = field_doc(&field, &resolver);
        assert!(out.contains("Display color."));
        assert!(out.contains("@see pkg.sub.Color"));
    }

    #[test]
    fn test_field_doc_enum_behind_alias() {
        let module = Module::new("main", "");
        let resolver = TypeResolver::new(&module);
        let field = Field::new(
            "color",
            TypeNode::alias("ColorAlias", TypeNode::enum_ref("Color", "main")),
        );
        let out = field_doc(&field, &resolver);
        assert!(out.contains("@see Color"));
    }

    #[test]
    fn test_method_doc_params() {
        let mut arg = Field::new("id", TypeNode::Base(BaseKind::I64));
        arg.doc = Some("Record id.".to_string());
        let method = MethodDef {
            name: "fetch".to_string(),
            args: vec![arg, Field::new("verbose", TypeNode::Base(BaseKind::Bool))],
            ret: TypeNode::Base(BaseKind::Void),
            doc: Some("Fetches a record.".to_string()),
        };
        let out = method_doc(&method);
        assert!(out.contains("Fetches a record."));
        assert!(out.contains("@param id Record id."));
        assert!(out.contains("@param verbose"));
    }
}
