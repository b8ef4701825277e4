//! Literal value trees for constant declarations.

/// A literal value from the schema source.
///
/// Values carry no type information of their own; the type is supplied by
/// the constant or field being rendered. Map and struct entries keep their
/// source declaration order so re-rendering a schema is diff-stable.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Double(f64),
    /// Boolean literal.
    Bool(bool),
    /// String literal (unescaped bytes as written).
    Str(String),
    /// Reference to an enum member, resolved to its ordinal upstream.
    EnumRef(i64),
    /// List literal, elements in declaration order.
    List(Vec<LiteralValue>),
    /// Map literal, pairs in declaration order.
    Map(Vec<(LiteralValue, LiteralValue)>),
    /// Struct literal, (field name, value) pairs in declaration order.
    Struct(Vec<(String, LiteralValue)>),
}

impl LiteralValue {
    /// Returns the integer payload, treating booleans as 0/1.
    ///
    /// The upstream parser stores boolean constants as integers in some
    /// front-ends; generators accept either form.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) | Self::EnumRef(v) => Some(*v),
            Self::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Returns a short kind name for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Double(_) => "double",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::EnumRef(_) => "enum member",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Struct(_) => "struct",
        }
    }
}
