//! Source type to proto3 type mapping.

use idl2proto_core::utils::to_pascal_case;
use idl2proto_core::{BaseType, Program, ProgramGraph, ProgramKey, Type, TypeRef};
use indexmap::IndexSet;
use tracing::trace;

use super::namespace;
use crate::{Error, Origin, Result};

/// Maps source types to proto3 type strings, relative to one program.
///
/// Cross-file references are checked against the current program's
/// transitive includes and qualified with the declaring package.
pub struct TypeMapper<'a> {
    graph: &'a ProgramGraph,
    current: &'a Program,
    reachable: IndexSet<ProgramKey>,
}

impl<'a> TypeMapper<'a> {
    pub fn new(graph: &'a ProgramGraph, current: &'a Program) -> Self {
        Self {
            graph,
            current,
            reachable: graph.transitive_includes(&current.key),
        }
    }

    /// Programs reachable from the current one through includes.
    pub fn reachable(&self) -> &IndexSet<ProgramKey> {
        &self.reachable
    }

    /// Map a type in value position (field, argument, element).
    ///
    /// `at` names the construct being mapped and is attached to errors.
    pub fn map(&self, ty: &Type, at: &Origin) -> Result<String> {
        let mapped = match ty {
            Type::Base(base) => map_base(*base, at)?.to_string(),
            Type::Uuid => "string".to_string(),
            Type::Binary => "bytes".to_string(),
            Type::List(elem) => format!("repeated {}", self.map(elem, at)?),
            Type::Set(elem) => format!("map<{},bool>", self.map_key(elem, at)?),
            Type::Map { key, value } => {
                format!("map<{},{}>", self.map_key(key, at)?, self.map(value, at)?)
            }
            Type::Struct(r) | Type::Enum(r) | Type::Typedef(r) => self.reference(r, at)?,
        };
        trace!(%ty, %mapped, "mapped type");
        Ok(mapped)
    }

    /// proto3 only accepts integral and string map keys.
    fn map_key(&self, key: &Type, at: &Origin) -> Result<String> {
        match key {
            Type::Base(
                BaseType::String | BaseType::I8 | BaseType::I16 | BaseType::I32 | BaseType::I64,
            )
            | Type::Uuid => self.map(key, at),
            _ => Err(Error::UnsupportedMapKeyType {
                at: at.clone(),
                key: key.to_string(),
            }),
        }
    }

    /// PascalCase name of a declared type, package-qualified when it lives
    /// in another program with a `grpc` namespace.
    pub fn reference(&self, r: &TypeRef, at: &Origin) -> Result<String> {
        let declaring = self.resolve(&r.program, &r.name, at)?;
        let name = to_pascal_case(&r.name);
        Ok(match namespace::qualifier(self.current, declaring) {
            Some(package) => format!("{package}.{name}"),
            None => name,
        })
    }

    /// The program `key`, which must be the current program or reachable
    /// from it. `name` is the referenced entity, reported on failure.
    pub fn resolve(&self, key: &ProgramKey, name: &str, at: &Origin) -> Result<&'a Program> {
        if *key == self.current.key {
            return Ok(self.current);
        }
        self.reachable
            .contains(key)
            .then(|| self.graph.get(key))
            .flatten()
            .ok_or_else(|| Error::UnresolvedCrossReference {
                at: at.clone(),
                program: key.clone(),
                name: name.to_string(),
            })
    }
}

fn map_base(base: BaseType, at: &Origin) -> Result<&'static str> {
    Ok(match base {
        BaseType::Void => {
            return Err(Error::UnsupportedBaseType {
                at: at.clone(),
                ty: base.name().to_string(),
            });
        }
        BaseType::String => "string",
        BaseType::Bool => "bool",
        // proto3 has no integers narrower than 32 bits
        BaseType::I8 | BaseType::I16 | BaseType::I32 => "int32",
        BaseType::I64 => "int64",
        BaseType::Double => "double",
    })
}
