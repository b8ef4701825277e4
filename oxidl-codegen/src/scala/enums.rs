//! Enum declaration emission.

use crate::scala::doc::doc_comment;
use oxidl_schema::EnumDef;

/// Emits an enum as an `Enumeration` object, one named value per member
/// in declared order.
#[must_use]
pub fn enum_body(def: &EnumDef) -> String {
    let mut out = doc_comment(def.doc.as_deref().unwrap_or(""));
    out.push_str(&format!("object {} extends Enumeration {{\n", def.name));

    for (constant, ordinal) in def.resolved_ordinals() {
        if let Some(doc) = &constant.doc {
            for line in doc_comment(doc).lines() {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str(&format!("  val {} = Value({ordinal})\n", constant.name));
    }

    out.push_str("}\n");
    out
}
