//! # oxidl Schema
//!
//! Validated IDL schema tree for code generation.
//!
//! This crate provides:
//! - Type nodes for base types, containers, enums, records and aliases
//! - Literal value trees for constant declarations
//! - Module-level declaration lists in source order
//!
//! The tree is constructed by the upstream parser and semantic validator;
//! everything here is a read-only view from the code generators' point of
//! view. No type errors are expected to reach the generators except as
//! defensive consistency checks.

pub mod module;
pub mod types;
pub mod values;

pub use module::{
    Constant, EnumConstant, EnumDef, Field, MethodDef, Module, RecordDef, ServiceDef, Typedef,
};
pub use types::{BaseKind, TypeNode};
pub use values::LiteralValue;
