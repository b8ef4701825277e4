//! Record and exception declaration emission.

use crate::scala::doc::{doc_comment, field_doc};
use crate::scala::types::TypeResolver;
use oxidl_schema::RecordDef;

/// Emits a record as a case class with one `var` parameter per field in
/// declared order. Exceptions additionally mix in `Exception` so the
/// generated class is throwable.
#[must_use]
pub fn record_body(def: &RecordDef, resolver: &TypeResolver<'_>) -> String {
    let mut out = doc_comment(def.doc.as_deref().unwrap_or(""));
    out.push_str(&format!("case class {}(", def.name));

    let mut first = true;
    for field in &def.fields {
        if !first {
            out.push_str(", ");
        }
        first = false;
        out.push_str(&field_doc(field, resolver));
        out.push_str(&format!(
            "var {} : {}",
            field.name,
            resolver.resolve(&field.ty, false)
        ));
    }

    out.push_str(") extends GeneratedStruct");
    if def.is_exception {
        out.push_str(" with Exception");
    }
    out.push_str(" {\n}\n");
    out
}
