//! Core emitter struct and shared rendering helpers.

use std::collections::HashMap;
use std::fmt::Write;

use idl2proto_core::utils::to_lower_snake_case;
use idl2proto_core::{Field, Program, ProgramGraph, Requiredness};
use indexmap::IndexMap;
use indexmap::map::Entry;

use super::namespace;
use super::types::TypeMapper;
use crate::{Config, Error, Origin, Result};

/// Name of the single field of wrapper messages.
pub(super) const VALUE_FIELD: &str = "value";

/// proto3 emitter for one program.
///
/// Writes into an injected sink, so the same code renders to a file buffer
/// or a test string.
pub struct Emitter<'a, W> {
    pub(super) graph: &'a ProgramGraph,
    pub(super) program: &'a Program,
    pub(super) config: &'a Config,
    pub(super) types: TypeMapper<'a>,

    /// Emitted top-level name -> source construct that claimed it
    pub(super) names: IndexMap<String, String>,
    /// Output sink
    pub(super) out: &'a mut W,
}

/// A rendered message field.
pub(super) struct FieldLine<'f> {
    pub label: &'static str,
    pub ty: String,
    pub name: String,
    pub doc: Option<&'f str>,
}

impl FieldLine<'_> {
    /// The `value` field of a wrapper message.
    pub fn value(ty: String) -> Self {
        Self {
            label: "",
            ty,
            name: VALUE_FIELD.to_string(),
            doc: None,
        }
    }
}

impl<'a, W: Write> Emitter<'a, W> {
    pub fn new(
        graph: &'a ProgramGraph,
        program: &'a Program,
        config: &'a Config,
        out: &'a mut W,
    ) -> Self {
        Self {
            graph,
            program,
            config,
            types: TypeMapper::new(graph, program),
            names: IndexMap::new(),
            out,
        }
    }

    pub(super) fn package(&self) -> String {
        namespace::package_name(self.program, &self.config.fallback_package)
    }

    pub(super) fn origin(&self, entity: impl Into<String>) -> Origin {
        Origin::new(&self.program.key, entity)
    }

    /// Reserve a top-level proto name for the construct described by `source`.
    pub(super) fn claim(&mut self, name: &str, source: impl FnOnce() -> String) -> Result<()> {
        match self.names.entry(name.to_string()) {
            Entry::Vacant(e) => {
                e.insert(source());
                Ok(())
            }
            Entry::Occupied(e) => Err(Error::NameCollision {
                program: self.program.key.clone(),
                name: name.to_string(),
                first: e.get().clone(),
                second: source(),
            }),
        }
    }

    /// Render `fields` with positional numbering. Nothing is written.
    ///
    /// Field names must stay distinct after lower snake casing.
    pub(super) fn field_lines<'f>(
        &self,
        entity: &str,
        fields: &'f [Field],
    ) -> Result<Vec<FieldLine<'f>>> {
        let at = self.origin(entity);
        let mut seen: HashMap<String, &str> = HashMap::with_capacity(fields.len());
        fields
            .iter()
            .map(|field| {
                let name = to_lower_snake_case(&field.name);
                if let Some(first) = seen.insert(name.clone(), &field.name) {
                    return Err(Error::NameCollision {
                        program: self.program.key.clone(),
                        name: format!("{entity}.{name}"),
                        first: format!("field `{entity}.{first}`"),
                        second: format!("field `{entity}.{}`", field.name),
                    });
                }

                let ty = self.types.map(&field.ty, &at.field(&field.name))?;
                // `optional repeated` and `optional map` are rejected by protoc
                let label = if field.requiredness == Requiredness::Optional
                    && !field.ty.is_container()
                {
                    "optional "
                } else {
                    ""
                };
                Ok(FieldLine {
                    label,
                    ty,
                    name,
                    doc: field.doc.as_deref(),
                })
            })
            .collect()
    }

    /// Emit `message Name { ... }` followed by a blank line.
    pub(super) fn write_message(
        &mut self,
        name: &str,
        doc: Option<&str>,
        lines: &[FieldLine<'_>],
    ) -> Result<()> {
        self.emit_doc("", doc)?;
        if lines.is_empty() {
            write!(self.out, "message {name} {{}}\n\n")?;
            return Ok(());
        }

        writeln!(self.out, "message {name} {{")?;
        for (i, line) in lines.iter().enumerate() {
            self.emit_doc("  ", line.doc)?;
            writeln!(
                self.out,
                "  {}{} {} = {};",
                line.label,
                line.ty,
                line.name,
                i + 1
            )?;
        }
        write!(self.out, "}}\n\n")?;
        Ok(())
    }

    /// Emit a doc string as `//` comment lines at `indent`.
    pub(super) fn emit_doc(&mut self, indent: &str, doc: Option<&str>) -> Result<()> {
        if !self.config.emit_docs {
            return Ok(());
        }
        let Some(doc) = doc.map(str::trim).filter(|d| !d.is_empty()) else {
            return Ok(());
        };

        for line in doc.lines().map(str::trim_end) {
            if line.is_empty() {
                writeln!(self.out, "{indent}//")?;
            } else {
                writeln!(self.out, "{indent}// {line}")?;
            }
        }
        Ok(())
    }
}
