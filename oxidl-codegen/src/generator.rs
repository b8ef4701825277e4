//! Per-declaration generation driver.
//!
//! The driver walks one module's declarations in source order and
//! materializes one output unit per emitting declaration. Units are
//! independent: each is built in full before the next begins, and no
//! state is shared across them except the module itself.

use crate::error::CodegenError;
use crate::scala::{self, consts::ConstRenderer, enums, naming, records, services, types::TypeResolver};
use oxidl_schema::Module;

/// One self-contained unit of generated source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// The declaration's preferred base name.
    pub base_name: String,
    /// Complete source text, banner and package line included.
    pub contents: String,
}

impl SourceUnit {
    /// Returns the unit's preferred file name.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.scala", self.base_name)
    }
}

/// Code generator for one schema module.
pub struct Generator<'a> {
    module: &'a Module,
}

impl<'a> Generator<'a> {
    /// Creates a generator over a validated module.
    #[must_use]
    pub fn new(module: &'a Module) -> Self {
        Self { module }
    }

    /// Generates one output unit per emitting declaration.
    ///
    /// Typedefs produce no unit (aliases are transparent), and the
    /// constants holder is omitted when the module declares no
    /// constants.
    pub fn generate(&self) -> Result<Vec<SourceUnit>, CodegenError> {
        let mut units = Vec::new();
        let resolver = TypeResolver::new(self.module);

        for def in &self.module.enums {
            tracing::debug!("generating enum '{}'", def.name);
            units.push(self.unit(&def.name, false, &enums::enum_body(def)));
        }

        if let Some(unit) = self.constants_unit()? {
            units.push(unit);
        }

        for def in &self.module.records {
            tracing::debug!("generating record '{}'", def.name);
            units.push(self.unit(&def.name, true, &records::record_body(def, &resolver)));
        }

        for def in &self.module.services {
            tracing::debug!("generating service stub '{}'", def.name);
            units.push(self.unit(&def.name, true, &services::service_body(def)));
        }

        Ok(units)
    }

    /// Builds the single constants-holder unit, or `None` when the
    /// module declares no constants.
    fn constants_unit(&self) -> Result<Option<SourceUnit>, CodegenError> {
        if self.module.constants.is_empty() {
            return Ok(None);
        }
        tracing::debug!(
            "generating constants holder with {} bindings",
            self.module.constants.len()
        );

        let mut renderer = ConstRenderer::new(self.module);
        let mut body = String::from("object Constants {\n\n");
        for constant in &self.module.constants {
            let binding = renderer.declare(
                &naming::constant_name(&constant.name),
                &constant.ty,
                &constant.value,
            )?;
            for line in binding.lines() {
                body.push_str("  ");
                body.push_str(line);
                body.push('\n');
            }
            body.push('\n');
        }
        body.push_str("}\n");

        Ok(Some(self.unit("Constants", false, &body)))
    }

    fn unit(&self, base_name: &str, with_imports: bool, body: &str) -> SourceUnit {
        let mut contents = String::from(scala::banner());
        contents.push_str(&scala::package_decl(&self.module.namespace));
        if with_imports {
            contents.push_str(scala::runtime_imports());
        }
        contents.push_str(body);
        SourceUnit {
            base_name: base_name.to_string(),
            contents,
        }
    }
}
