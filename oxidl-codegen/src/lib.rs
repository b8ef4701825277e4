//! # oxidl Codegen
//!
//! Scala code generation from validated oxidl schema modules.
//!
//! This crate provides:
//! - Type resolution from schema type nodes to Scala type expressions
//! - Constant value rendering, including composite literals
//! - Per-declaration emitters for enums, records, constants and services
//!
//! The input is an [`oxidl_schema::Module`] produced by the upstream
//! parser and validator; the output is one source unit per emitting
//! declaration.

pub mod error;
pub mod generator;
pub mod scala;

pub use error::CodegenError;
pub use generator::{Generator, SourceUnit};

use oxidl_schema::Module;
use std::path::Path;

/// Generates Scala source units for a validated schema module.
///
/// # Errors
/// Returns `CodegenError` if the module violates the validator's
/// consistency contract.
pub fn generate_module(module: &Module) -> Result<Vec<SourceUnit>, CodegenError> {
    Generator::new(module).generate()
}

/// Generates Scala source for a module and writes one file per unit
/// into `dir`, creating the directory if needed.
///
/// Each unit's sink is opened, written in full and closed before the
/// next unit begins.
///
/// # Errors
/// Returns `CodegenError` if generation fails or a unit cannot be
/// written.
pub fn write_to_dir(module: &Module, dir: &Path) -> Result<(), CodegenError> {
    let units = generate_module(module)?;
    std::fs::create_dir_all(dir)?;
    for unit in &units {
        std::fs::write(dir.join(unit.file_name()), &unit.contents)?;
        tracing::debug!("wrote '{}'", unit.file_name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxidl_schema::{EnumConstant, EnumDef};

    fn test_module() -> Module {
        let mut module = Module::new("demo", "com.example.demo");
        module.enums.push(EnumDef::new(
            "Color",
            vec![EnumConstant::implicit("RED"), EnumConstant::implicit("GREEN")],
        ));
        module
    }

    #[test]
    fn test_generate_module() {
        let module = test_module();
        let units = generate_module(&module).expect("generate");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].base_name, "Color");
    }

    #[test]
    fn test_write_to_dir() {
        let module = test_module();
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("gen-scala");

        write_to_dir(&module, &out).expect("write");

        let contents = std::fs::read_to_string(out.join("Color.scala")).expect("read back");
        assert!(contents.contains("object Color extends Enumeration"));
        assert!(contents.contains("package com.example.demo"));
    }
}
