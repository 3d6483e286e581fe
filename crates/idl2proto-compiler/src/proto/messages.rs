//! Enum, typedef wrapper and struct message emission.

use std::fmt::Write;

use idl2proto_core::utils::{to_pascal_case, to_upper_snake_case};
use idl2proto_core::{Enum, Struct, Typedef};

use super::emitter::{Emitter, FieldLine, VALUE_FIELD};
use crate::Result;

/// Suffix of the zero member synthesized for enums that lack one.
pub(super) const UNSPECIFIED_SUFFIX: &str = "_UNSPECIFIED";

impl<W: Write> Emitter<'_, W> {
    /// Emit an enum, synthesizing `<NAME>_UNSPECIFIED = 0` when no member
    /// holds zero.
    ///
    /// Enum values are scoped to the package in proto3, so member names are
    /// claimed alongside top-level names.
    pub(super) fn emit_enum(&mut self, e: &Enum) -> Result<()> {
        let name = to_pascal_case(&e.name);
        self.claim(&name, || format!("enum `{}`", e.name))?;

        self.emit_doc("", e.doc.as_deref())?;
        writeln!(self.out, "enum {name} {{")?;
        if !e.has_zero() {
            let zero = format!("{}{UNSPECIFIED_SUFFIX}", to_upper_snake_case(&e.name));
            self.claim(&zero, || format!("zero value synthesized for enum `{}`", e.name))?;
            writeln!(self.out, "  {zero} = 0;")?;
        }
        for value in &e.values {
            let member = to_upper_snake_case(&value.name);
            self.claim(&member, || {
                format!("enum value `{}.{}`", e.name, value.name)
            })?;
            self.emit_doc("  ", value.doc.as_deref())?;
            writeln!(self.out, "  {member} = {};", value.value)?;
        }
        write!(self.out, "}}\n\n")?;
        Ok(())
    }

    /// Emit a typedef as a one-field wrapper message named after the alias.
    pub(super) fn emit_typedef(&mut self, t: &Typedef) -> Result<()> {
        let name = to_pascal_case(&t.name);
        self.claim(&name, || format!("typedef `{}`", t.name))?;

        let at = self.origin(&t.name).field(VALUE_FIELD);
        let ty = self.types.map(&t.ty, &at)?;
        self.write_message(&name, t.doc.as_deref(), &[FieldLine::value(ty)])
    }

    pub(super) fn emit_struct(&mut self, s: &Struct) -> Result<()> {
        let name = to_pascal_case(&s.name);
        self.claim(&name, || format!("struct `{}`", s.name))?;

        let lines = self.field_lines(&s.name, &s.fields)?;
        self.write_message(&name, s.doc.as_deref(), &lines)
    }
}
