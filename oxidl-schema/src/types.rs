//! Schema type nodes.
//!
//! This module contains the type expressions attached to fields, constants
//! and typedefs. The variants form a closed set so generator dispatch is
//! checked for exhaustiveness at compile time.

/// Base (primitive) type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    /// Boolean value.
    Bool,
    /// Signed 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// 64-bit floating point.
    Double,
    /// UTF-8 string.
    Str,
    /// Raw byte blob.
    Binary,
    /// No value (method returns only).
    Void,
}

impl BaseKind {
    /// Returns the IDL-level name of the base kind.
    #[must_use]
    pub const fn idl_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Double => "double",
            Self::Str => "string",
            Self::Binary => "binary",
            Self::Void => "void",
        }
    }

    /// Returns true if this is an integer kind.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Byte | Self::I16 | Self::I32 | Self::I64)
    }
}

/// A schema type expression.
///
/// `Alias` chains are finite by construction: the target is owned, so a
/// cycle cannot be built. [`TypeNode::true_type`] always terminates at a
/// non-alias node.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// Base (primitive) type.
    Base(BaseKind),
    /// Enum type, with the module that declared it.
    Enum {
        /// Enum name.
        name: String,
        /// Owning module name.
        module: String,
    },
    /// Record or exception type, with the module that declared it.
    Record {
        /// Record name.
        name: String,
        /// Owning module name.
        module: String,
        /// True if declared as an exception.
        is_exception: bool,
    },
    /// Ordered list with one element type.
    List(Box<TypeNode>),
    /// Set with one element type.
    Set(Box<TypeNode>),
    /// Map with key and value types.
    Map(Box<TypeNode>, Box<TypeNode>),
    /// Typedef indirection to another type.
    Alias {
        /// Typedef name.
        name: String,
        /// The aliased type.
        target: Box<TypeNode>,
    },
}

impl TypeNode {
    /// Follows alias edges until a non-alias node is reached.
    ///
    /// Typedefs are fully transparent to emission; every generator
    /// dispatches on the node returned here.
    #[must_use]
    pub fn true_type(&self) -> &TypeNode {
        let mut ty = self;
        while let TypeNode::Alias { target, .. } = ty {
            ty = target;
        }
        ty
    }

    /// Returns true if the true type is a base type.
    #[must_use]
    pub fn is_base(&self) -> bool {
        matches!(self.true_type(), Self::Base(_))
    }

    /// Returns true if the true type is an enum.
    #[must_use]
    pub fn is_enum(&self) -> bool {
        matches!(self.true_type(), Self::Enum { .. })
    }

    /// Returns true if the true type is a record or exception.
    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self.true_type(), Self::Record { .. })
    }

    /// Returns true if the true type is a list, set or map.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(
            self.true_type(),
            Self::List(_) | Self::Set(_) | Self::Map(_, _)
        )
    }

    /// Convenience constructor for an alias node.
    #[must_use]
    pub fn alias(name: impl Into<String>, target: TypeNode) -> Self {
        Self::Alias {
            name: name.into(),
            target: Box::new(target),
        }
    }

    /// Convenience constructor for an enum reference.
    #[must_use]
    pub fn enum_ref(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self::Enum {
            name: name.into(),
            module: module.into(),
        }
    }

    /// Convenience constructor for a record reference.
    #[must_use]
    pub fn record_ref(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self::Record {
            name: name.into(),
            module: module.into(),
            is_exception: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_type_identity_for_non_alias() {
        let ty = TypeNode::Base(BaseKind::I32);
        assert_eq!(ty.true_type(), &TypeNode::Base(BaseKind::I32));
    }

    #[test]
    fn test_true_type_strips_alias_chain() {
        let mut ty = TypeNode::Base(BaseKind::Str);
        for depth in 0..8 {
            ty = TypeNode::alias(format!("Alias{depth}"), ty);
        }
        assert_eq!(ty.true_type(), &TypeNode::Base(BaseKind::Str));
    }

    #[test]
    fn test_predicates_follow_alias() {
        let ty = TypeNode::alias("Id", TypeNode::Base(BaseKind::I64));
        assert!(ty.is_base());
        assert!(!ty.is_container());

        let ty = TypeNode::alias(
            "Names",
            TypeNode::List(Box::new(TypeNode::Base(BaseKind::Str))),
        );
        assert!(ty.is_container());
        assert!(!ty.is_record());
    }

    #[test]
    fn test_idl_name() {
        assert_eq!(BaseKind::I64.idl_name(), "i64");
        assert_eq!(BaseKind::Binary.idl_name(), "binary");
        assert!(BaseKind::Byte.is_integer());
        assert!(!BaseKind::Double.is_integer());
    }
}
