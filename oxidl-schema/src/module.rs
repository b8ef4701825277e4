//! Module-level declarations.
//!
//! A [`Module`] is one generation unit: the declarations of a single IDL
//! source file, already parsed and validated, in source order.

use crate::types::TypeNode;
use crate::values::LiteralValue;
use std::collections::HashMap;

/// One schema module (generation unit).
#[derive(Debug, Clone)]
pub struct Module {
    /// Module name (the IDL file's logical name).
    pub name: String,
    /// Declared target namespace, possibly empty.
    pub namespace: String,
    /// Namespaces of included modules, keyed by module name.
    pub includes: HashMap<String, String>,
    /// Typedef declarations in source order.
    pub typedefs: Vec<Typedef>,
    /// Enum declarations in source order.
    pub enums: Vec<EnumDef>,
    /// Record and exception declarations in source order.
    pub records: Vec<RecordDef>,
    /// Top-level constants in source order.
    pub constants: Vec<Constant>,
    /// Service declarations in source order.
    pub services: Vec<ServiceDef>,
}

impl Module {
    /// Creates a new empty module.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            includes: HashMap::new(),
            typedefs: Vec::new(),
            enums: Vec::new(),
            records: Vec::new(),
            constants: Vec::new(),
            services: Vec::new(),
        }
    }

    /// Looks up a record declared in this module.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&RecordDef> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Returns the declared namespace of another module, if known.
    #[must_use]
    pub fn include_namespace(&self, module: &str) -> Option<&str> {
        self.includes.get(module).map(String::as_str)
    }
}

/// A typedef declaration. Produces no output of its own; aliases are
/// transparent to emission.
#[derive(Debug, Clone)]
pub struct Typedef {
    /// Alias name.
    pub name: String,
    /// The aliased type.
    pub target: TypeNode,
}

/// One enum member.
#[derive(Debug, Clone)]
pub struct EnumConstant {
    /// Member name.
    pub name: String,
    /// Explicit ordinal, if one was written in the source.
    pub ordinal: Option<i64>,
    /// Attached documentation.
    pub doc: Option<String>,
}

impl EnumConstant {
    /// Creates a member without an explicit ordinal.
    #[must_use]
    pub fn implicit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ordinal: None,
            doc: None,
        }
    }

    /// Creates a member with an explicit ordinal.
    #[must_use]
    pub fn explicit(name: impl Into<String>, ordinal: i64) -> Self {
        Self {
            name: name.into(),
            ordinal: Some(ordinal),
            doc: None,
        }
    }
}

/// An enum declaration.
#[derive(Debug, Clone)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Members in source order.
    pub constants: Vec<EnumConstant>,
    /// Attached documentation.
    pub doc: Option<String>,
}

impl EnumDef {
    /// Creates a new enum declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, constants: Vec<EnumConstant>) -> Self {
        Self {
            name: name.into(),
            constants,
            doc: None,
        }
    }

    /// Resolves each member's ordinal.
    ///
    /// A member without an explicit ordinal takes the previous member's
    /// resolved value plus one, with a virtual predecessor of -1 before
    /// the first member.
    #[must_use]
    pub fn resolved_ordinals(&self) -> Vec<(&EnumConstant, i64)> {
        let mut value = -1;
        self.constants
            .iter()
            .map(|c| {
                value = c.ordinal.unwrap_or(value + 1);
                (c, value)
            })
            .collect()
    }
}

/// One record field.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: TypeNode,
    /// Attached documentation.
    pub doc: Option<String>,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
        }
    }
}

/// A record or exception declaration.
#[derive(Debug, Clone)]
pub struct RecordDef {
    /// Record name.
    pub name: String,
    /// Fields in source order.
    pub fields: Vec<Field>,
    /// True if declared as an exception.
    pub is_exception: bool,
    /// Attached documentation.
    pub doc: Option<String>,
}

impl RecordDef {
    /// Creates a new record declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            is_exception: false,
            doc: None,
        }
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A top-level constant declaration.
#[derive(Debug, Clone)]
pub struct Constant {
    /// Constant name.
    pub name: String,
    /// Declared type.
    pub ty: TypeNode,
    /// Literal value.
    pub value: LiteralValue,
}

impl Constant {
    /// Creates a new constant.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeNode, value: LiteralValue) -> Self {
        Self {
            name: name.into(),
            ty,
            value,
        }
    }
}

/// One service method.
#[derive(Debug, Clone)]
pub struct MethodDef {
    /// Method name.
    pub name: String,
    /// Arguments in source order.
    pub args: Vec<Field>,
    /// Return type.
    pub ret: TypeNode,
    /// Attached documentation.
    pub doc: Option<String>,
}

/// A service declaration.
///
/// Service bodies are an extension point; the generators currently emit a
/// structurally valid empty declaration per service.
#[derive(Debug, Clone)]
pub struct ServiceDef {
    /// Service name.
    pub name: String,
    /// Methods in source order.
    pub methods: Vec<MethodDef>,
    /// Attached documentation.
    pub doc: Option<String>,
}

impl ServiceDef {
    /// Creates a new service declaration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            doc: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BaseKind;

    #[test]
    fn test_resolved_ordinals_implicit_start_at_zero() {
        let def = EnumDef::new(
            "Color",
            vec![
                EnumConstant::implicit("RED"),
                EnumConstant::implicit("GREEN"),
                EnumConstant::implicit("BLUE"),
            ],
        );
        let values: Vec<i64> = def.resolved_ordinals().iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![0, 1, 2]);
    }

    #[test]
    fn test_resolved_ordinals_explicit_resets_sequence() {
        let def = EnumDef::new(
            "Status",
            vec![
                EnumConstant::implicit("A"),
                EnumConstant::explicit("B", 5),
                EnumConstant::implicit("C"),
            ],
        );
        let values: Vec<i64> = def.resolved_ordinals().iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![0, 5, 6]);
    }

    #[test]
    fn test_record_field_lookup() {
        let def = RecordDef::new(
            "Point",
            vec![
                Field::new("x", TypeNode::Base(BaseKind::I32)),
                Field::new("y", TypeNode::Base(BaseKind::I32)),
            ],
        );
        assert!(def.field("x").is_some());
        assert!(def.field("z").is_none());
    }

    #[test]
    fn test_module_include_namespace() {
        let mut module = Module::new("main", "com.example.main");
        module
            .includes
            .insert("shared".to_string(), "pkg.sub".to_string());
        assert_eq!(module.include_namespace("shared"), Some("pkg.sub"));
        assert_eq!(module.include_namespace("other"), None);
    }
}
