//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Consistency errors indicate the upstream validator's contract was
/// violated; there is no sensible partial output and the whole generation
/// run aborts. No error is ever retried.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Internal schema consistency violation.
    #[error("schema consistency error: {message}")]
    SchemaConsistency {
        /// Error message.
        message: String,
    },

    /// Struct literal key with no matching declared field.
    #[error("record '{record}' has no field named '{field}'")]
    UnknownField {
        /// Record name.
        record: String,
        /// Offending literal key.
        field: String,
    },

    /// A constant was declared for a type with no literal form.
    #[error("no literal form for type '{type_name}' in constant '{constant}'")]
    NoLiteralForm {
        /// Resolved type name.
        type_name: String,
        /// Constant or binding name being rendered.
        constant: String,
    },

    /// A declared-but-unimplemented extension point was reached.
    #[error("unsupported construct '{construct}' in declaration '{declaration}'")]
    UnsupportedConstruct {
        /// Construct kind.
        construct: String,
        /// Declaration name.
        declaration: String,
    },

    /// IO error while writing an output unit.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Creates a schema consistency error with the given message.
    pub fn consistency(message: impl Into<String>) -> Self {
        Self::SchemaConsistency {
            message: message.into(),
        }
    }

    /// Creates an unknown field error.
    pub fn unknown_field(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            record: record.into(),
            field: field.into(),
        }
    }

    /// Creates a no-literal-form error.
    pub fn no_literal_form(type_name: impl Into<String>, constant: impl Into<String>) -> Self {
        Self::NoLiteralForm {
            type_name: type_name.into(),
            constant: constant.into(),
        }
    }
}
