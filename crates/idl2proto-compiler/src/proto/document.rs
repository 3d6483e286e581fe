//! Document assembly: syntax, package, imports, then body sections.

use std::fmt::Write;

use indexmap::IndexSet;
use tracing::debug;

use super::emitter::Emitter;
use super::services::ServicePlan;
use super::{EMPTY_IMPORT, namespace};
use crate::{Error, Result};

impl<'a, W: Write> Emitter<'a, W> {
    /// Emit the complete document for the current program.
    ///
    /// Order: syntax, package, imports, enums, typedef wrappers, structs,
    /// services. Inheritance is resolved before anything is written so
    /// imports can account for inherited RPCs.
    pub fn emit(mut self) -> Result<()> {
        let program = self.program;
        let plans = program
            .services
            .iter()
            .map(|service| self.plan_service(service))
            .collect::<Result<Vec<_>>>()?;

        write!(self.out, "syntax = \"proto3\";\n\n")?;
        write!(self.out, "package {};\n\n", self.package())?;
        self.emit_imports(&plans)?;

        for e in &program.enums {
            self.emit_enum(e)?;
        }
        for t in &program.typedefs {
            self.emit_typedef(t)?;
        }
        for s in &program.structs {
            self.emit_struct(s)?;
        }
        for plan in &plans {
            self.emit_service(plan)?;
        }

        debug!(
            program = %program.key,
            declarations = self.names.len(),
            "emitted proto document"
        );
        Ok(())
    }

    /// One import per transitively included program, plus the well-known
    /// empty type when a void RPC maps to it.
    fn emit_imports(&mut self, plans: &[ServicePlan<'_>]) -> Result<()> {
        let mut imports = IndexSet::new();
        for key in self.types.reachable() {
            let included = self.graph.get(key).ok_or_else(|| Error::MissingInclude {
                program: self.program.key.clone(),
                include: key.clone(),
            })?;
            imports.insert(namespace::import_path(included));
        }
        if self.config.uses_well_known_empty() && plans.iter().any(ServicePlan::returns_void) {
            imports.insert(EMPTY_IMPORT.to_string());
        }

        if imports.is_empty() {
            return Ok(());
        }
        for import in &imports {
            writeln!(self.out, "import \"{import}\";")?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
