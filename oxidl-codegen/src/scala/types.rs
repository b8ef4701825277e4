//! Scala type expression resolution.

use oxidl_schema::{BaseKind, Module, TypeNode};

/// Resolves schema type nodes to Scala type expressions.
///
/// Resolution is a pure tree walk: aliases are unconditionally stripped,
/// base kinds go through a fixed lookup table, containers recurse into
/// their element types, and named types from other modules are qualified
/// with that module's declared namespace.
pub struct TypeResolver<'a> {
    module: &'a Module,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver for the module being generated.
    #[must_use]
    pub fn new(module: &'a Module) -> Self {
        Self { module }
    }

    /// Returns the Scala type expression for a schema type.
    ///
    /// `in_container` signals that the expression appears as a container
    /// element. Scala spells element types the same as declaration types,
    /// but the flag is threaded through so the contract matches targets
    /// that do distinguish the two.
    #[must_use]
    pub fn resolve(&self, ty: &TypeNode, in_container: bool) -> String {
        match ty.true_type() {
            TypeNode::Base(kind) => base_type_name(*kind, in_container).to_string(),
            TypeNode::List(elem) => format!("List[{}]", self.resolve(elem, true)),
            TypeNode::Set(elem) => format!("Set[{}]", self.resolve(elem, true)),
            TypeNode::Map(key, value) => format!(
                "Map[{},{}]",
                self.resolve(key, true),
                self.resolve(value, true)
            ),
            TypeNode::Enum { name, module } | TypeNode::Record { name, module, .. } => {
                self.qualified_name(name, module)
            }
            // true_type never returns an alias
            TypeNode::Alias { target, .. } => self.resolve(target, in_container),
        }
    }

    /// Qualifies a declared type name with its owning module's namespace.
    ///
    /// Types from the module being generated keep their bare name. A
    /// cross-module type without a declared namespace also falls back to
    /// the bare name, which can collide; the fallback is logged.
    #[must_use]
    pub fn qualified_name(&self, name: &str, owning_module: &str) -> String {
        if owning_module == self.module.name {
            return name.to_string();
        }
        match self.module.include_namespace(owning_module) {
            Some(ns) if !ns.is_empty() => format!("{ns}.{name}"),
            _ => {
                tracing::warn!(
                    "type '{}' from module '{}' has no declared namespace, emitting bare name",
                    name,
                    owning_module
                );
                name.to_string()
            }
        }
    }
}

/// Returns the Scala spelling of a base type.
///
/// The table covers every base kind; `in_container` is accepted for
/// contract parity with targets that box container elements.
#[must_use]
pub fn base_type_name(kind: BaseKind, _in_container: bool) -> &'static str {
    match kind {
        BaseKind::Void => "void",
        BaseKind::Str => "String",
        BaseKind::Binary => "Array[Byte]",
        BaseKind::Bool => "Boolean",
        BaseKind::Byte => "Byte",
        BaseKind::I16 => "Short",
        BaseKind::I32 => "Int",
        BaseKind::I64 => "Long",
        BaseKind::Double => "Double",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxidl_schema::TypeNode;

    fn test_module() -> Module {
        let mut module = Module::new("main", "com.example.main");
        module
            .includes
            .insert("shared".to_string(), "pkg.sub".to_string());
        module.includes.insert("bare".to_string(), String::new());
        module
    }

    #[test]
    fn test_base_types() {
        let module = test_module();
        let resolver = TypeResolver::new(&module);
        assert_eq!(resolver.resolve(&TypeNode::Base(BaseKind::I32), false), "Int");
        assert_eq!(resolver.resolve(&TypeNode::Base(BaseKind::I64), false), "Long");
        assert_eq!(resolver.resolve(&TypeNode::Base(BaseKind::Str), false), "String");
        assert_eq!(
            resolver.resolve(&TypeNode::Base(BaseKind::Binary), false),
            "Array[Byte]"
        );
    }

    #[test]
    fn test_alias_transparency_at_any_depth() {
        let module = test_module();
        let resolver = TypeResolver::new(&module);
        let mut ty = TypeNode::Base(BaseKind::Bool);
        for depth in 0..6 {
            ty = TypeNode::alias(format!("A{depth}"), ty);
            assert_eq!(resolver.resolve(&ty, false), "Boolean");
        }
    }

    #[test]
    fn test_container_types() {
        let module = test_module();
        let resolver = TypeResolver::new(&module);
        let ty = TypeNode::Map(
            Box::new(TypeNode::Base(BaseKind::Str)),
            Box::new(TypeNode::List(Box::new(TypeNode::Base(BaseKind::I64)))),
        );
        assert_eq!(resolver.resolve(&ty, false), "Map[String,List[Long]]");

        let ty = TypeNode::Set(Box::new(TypeNode::Base(BaseKind::Byte)));
        assert_eq!(resolver.resolve(&ty, false), "Set[Byte]");
    }

    #[test]
    fn test_local_type_stays_bare() {
        let module = test_module();
        let resolver = TypeResolver::new(&module);
        let ty = TypeNode::enum_ref("Color", "main");
        assert_eq!(resolver.resolve(&ty, false), "Color");
    }

    #[test]
    fn test_cross_module_type_is_qualified() {
        let module = test_module();
        let resolver = TypeResolver::new(&module);
        let ty = TypeNode::enum_ref("Color", "shared");
        assert_eq!(resolver.resolve(&ty, false), "pkg.sub.Color");

        let ty = TypeNode::record_ref("Point", "shared");
        assert_eq!(resolver.resolve(&ty, false), "pkg.sub.Point");
    }

    #[test]
    fn test_missing_namespace_falls_back_to_bare_name() {
        let module = test_module();
        let resolver = TypeResolver::new(&module);
        let ty = TypeNode::enum_ref("Color", "bare");
        assert_eq!(resolver.resolve(&ty, false), "Color");

        let ty = TypeNode::enum_ref("Color", "unknown");
        assert_eq!(resolver.resolve(&ty, false), "Color");
    }
}
