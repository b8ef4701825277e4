//! Constant value rendering.
//!
//! Base and enum values render to a single Scala expression. Containers
//! and records have no single-expression literal form in the generated
//! declaration syntax, so they render to a fresh temporary binding plus
//! one mutation statement per element; the caller emits the statements
//! ahead of the expression, inside one scoped block.

use crate::error::CodegenError;
use crate::scala::naming::cap_name;
use crate::scala::types::TypeResolver;
use oxidl_schema::{BaseKind, LiteralValue, Module, TypeNode};

/// Result of rendering one constant value.
///
/// `statements` must be emitted, in order, before `expr` is used. It is
/// empty exactly when the value was expressible as a single expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedValue {
    /// The resulting Scala expression.
    pub expr: String,
    /// Auxiliary statements the expression depends on.
    pub statements: Vec<String>,
}

impl RenderedValue {
    fn pure(expr: String) -> Self {
        Self {
            expr,
            statements: Vec::new(),
        }
    }
}

/// Renders literal value trees against their declared types.
///
/// Holds the temporary-name counter, so one renderer instance spans one
/// output unit and synthesized names stay unique within it.
pub struct ConstRenderer<'a> {
    module: &'a Module,
    resolver: TypeResolver<'a>,
    tmp: u32,
}

impl<'a> ConstRenderer<'a> {
    /// Creates a renderer for the module being generated.
    #[must_use]
    pub fn new(module: &'a Module) -> Self {
        Self {
            module,
            resolver: TypeResolver::new(module),
            tmp: 0,
        }
    }

    /// Renders a full `val name : Type = value` binding.
    ///
    /// Single-expression values produce a one-line binding. Composite
    /// values produce a block binding so the temporary and its mutation
    /// statements cannot leak past the construction.
    pub fn declare(
        &mut self,
        name: &str,
        ty: &TypeNode,
        value: &LiteralValue,
    ) -> Result<String, CodegenError> {
        let type_expr = self.resolver.resolve(ty, false);
        let rendered = self.render(name, ty, value)?;

        if rendered.statements.is_empty() {
            return Ok(format!("val {name} : {type_expr} = {}\n", rendered.expr));
        }

        let mut out = format!("val {name} : {type_expr} = {{\n");
        for statement in &rendered.statements {
            out.push_str("  ");
            out.push_str(statement);
            out.push('\n');
        }
        out.push_str("  ");
        out.push_str(&rendered.expr);
        out.push_str("\n}\n");
        Ok(out)
    }

    /// Renders a value against its declared type.
    ///
    /// `hint` names the binding being rendered and only appears in
    /// diagnostics.
    pub fn render(
        &mut self,
        hint: &str,
        ty: &TypeNode,
        value: &LiteralValue,
    ) -> Result<RenderedValue, CodegenError> {
        match ty.true_type() {
            TypeNode::Base(kind) => Ok(RenderedValue::pure(self.render_base(hint, *kind, value)?)),
            // Enum constants render as the bare ordinal, mirroring the
            // numeric wire representation.
            TypeNode::Enum { name, .. } => {
                let ordinal = value.as_integer().ok_or_else(|| {
                    CodegenError::consistency(format!(
                        "enum constant '{hint}' of type '{name}' has a {} value",
                        value.kind()
                    ))
                })?;
                Ok(RenderedValue::pure(ordinal.to_string()))
            }
            TypeNode::List(elem) => self.render_sequence(hint, ty, elem, value, SequenceShape::List),
            TypeNode::Set(elem) => self.render_sequence(hint, ty, elem, value, SequenceShape::Set),
            TypeNode::Map(key, val) => self.render_map(hint, ty, key, val, value),
            TypeNode::Record { name, module, .. } => {
                self.render_record(hint, ty, name, module, value)
            }
            // true_type never returns an alias
            TypeNode::Alias { target, .. } => self.render(hint, target, value),
        }
    }

    fn render_base(
        &self,
        hint: &str,
        kind: BaseKind,
        value: &LiteralValue,
    ) -> Result<String, CodegenError> {
        match kind {
            BaseKind::Str | BaseKind::Binary => match value {
                LiteralValue::Str(s) => Ok(format!("\"{}\"", escape_string(s))),
                other => Err(self.mismatch(hint, kind, other)),
            },
            BaseKind::Bool => match value.as_integer() {
                Some(v) => Ok(if v > 0 { "true" } else { "false" }.to_string()),
                None => Err(self.mismatch(hint, kind, value)),
            },
            BaseKind::Byte => self
                .integer_of(hint, kind, value)
                .map(|v| format!("{v}.toByte")),
            BaseKind::I16 => self
                .integer_of(hint, kind, value)
                .map(|v| format!("{v}.toShort")),
            BaseKind::I32 => self.integer_of(hint, kind, value).map(|v| v.to_string()),
            BaseKind::I64 => self.integer_of(hint, kind, value).map(|v| format!("{v}L")),
            BaseKind::Double => match value {
                LiteralValue::Double(d) => Ok(format_double(*d)),
                LiteralValue::Integer(v) => Ok(format!("{v}.toDouble")),
                other => Err(self.mismatch(hint, kind, other)),
            },
            BaseKind::Void => Err(CodegenError::no_literal_form("void", hint)),
        }
    }

    fn render_sequence(
        &mut self,
        hint: &str,
        ty: &TypeNode,
        elem: &TypeNode,
        value: &LiteralValue,
        shape: SequenceShape,
    ) -> Result<RenderedValue, CodegenError> {
        let LiteralValue::List(items) = value else {
            return Err(CodegenError::consistency(format!(
                "{} constant '{hint}' has a {} value",
                shape.noun(),
                value.kind()
            )));
        };

        let type_expr = self.resolver.resolve(ty, false);
        let tmp = self.tmp_name();

        let mut statements = vec![format!("var {tmp} : {type_expr} = {}()", shape.empty())];
        for item in items {
            let child = self.render(hint, elem, item)?;
            statements.extend(child.statements);
            statements.push(match shape {
                SequenceShape::List => format!("{tmp} :+= {}", child.expr),
                SequenceShape::Set => format!("{tmp} += {}", child.expr),
            });
        }

        Ok(RenderedValue {
            expr: tmp,
            statements,
        })
    }

    fn render_map(
        &mut self,
        hint: &str,
        ty: &TypeNode,
        key_ty: &TypeNode,
        val_ty: &TypeNode,
        value: &LiteralValue,
    ) -> Result<RenderedValue, CodegenError> {
        let LiteralValue::Map(pairs) = value else {
            return Err(CodegenError::consistency(format!(
                "map constant '{hint}' has a {} value",
                value.kind()
            )));
        };

        let type_expr = self.resolver.resolve(ty, false);
        let tmp = self.tmp_name();

        let mut statements = vec![format!("var {tmp} : {type_expr} = Map()")];
        for (key, val) in pairs {
            let key_rendered = self.render(hint, key_ty, key)?;
            statements.extend(key_rendered.statements);
            let val_rendered = self.render(hint, val_ty, val)?;
            statements.extend(val_rendered.statements);
            statements.push(format!(
                "{tmp} += (({}, {}))",
                key_rendered.expr, val_rendered.expr
            ));
        }

        Ok(RenderedValue {
            expr: tmp,
            statements,
        })
    }

    fn render_record(
        &mut self,
        hint: &str,
        ty: &TypeNode,
        record_name: &str,
        owning_module: &str,
        value: &LiteralValue,
    ) -> Result<RenderedValue, CodegenError> {
        let LiteralValue::Struct(entries) = value else {
            return Err(CodegenError::consistency(format!(
                "record constant '{hint}' has a {} value",
                value.kind()
            )));
        };

        // Field lists live with the declaring module; constants only
        // reference locally resolvable records.
        if owning_module != self.module.name {
            return Err(CodegenError::consistency(format!(
                "record '{record_name}' from module '{owning_module}' is not declared in module '{}'",
                self.module.name
            )));
        }
        let record = self.module.record(record_name).ok_or_else(|| {
            CodegenError::consistency(format!(
                "record '{record_name}' is not declared in module '{}'",
                self.module.name
            ))
        })?;

        let type_expr = self.resolver.resolve(ty, false);
        let tmp = self.tmp_name();

        let mut field_types = Vec::with_capacity(entries.len());
        for (field_name, _) in entries {
            let field = record
                .field(field_name)
                .ok_or_else(|| CodegenError::unknown_field(record_name, field_name.clone()))?;
            field_types.push(field.ty.clone());
        }

        let mut statements = vec![format!("val {tmp} : {type_expr} = new {type_expr}()")];
        for ((field_name, field_value), field_ty) in entries.iter().zip(field_types) {
            let child = self.render(hint, &field_ty, field_value)?;
            statements.extend(child.statements);
            statements.push(format!("{tmp}.set{}({})", cap_name(field_name), child.expr));
        }

        Ok(RenderedValue {
            expr: tmp,
            statements,
        })
    }

    fn integer_of(
        &self,
        hint: &str,
        kind: BaseKind,
        value: &LiteralValue,
    ) -> Result<i64, CodegenError> {
        value
            .as_integer()
            .ok_or_else(|| self.mismatch(hint, kind, value))
    }

    fn mismatch(&self, hint: &str, kind: BaseKind, value: &LiteralValue) -> CodegenError {
        CodegenError::consistency(format!(
            "constant '{hint}' of type '{}' has a {} value",
            kind.idl_name(),
            value.kind()
        ))
    }

    fn tmp_name(&mut self) -> String {
        let n = self.tmp;
        self.tmp += 1;
        format!("tmp{n}")
    }
}

#[derive(Debug, Clone, Copy)]
enum SequenceShape {
    List,
    Set,
}

impl SequenceShape {
    const fn empty(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Set => "Set",
        }
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Set => "set",
        }
    }
}

/// Escapes a string for a double-quoted Scala literal.
///
/// Covers the quote, backslash and all control characters, so the
/// escaped form decodes back to the original bytes.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Formats a double literal, keeping a decimal point on integral values
/// so the literal stays a Double.
fn format_double(d: f64) -> String {
    let mut out = format!("{d}");
    if !out.contains(['.', 'e', 'E', 'N', 'i']) {
        out.push_str(".0");
    }
    out
}
