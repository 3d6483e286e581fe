//! idl2proto compiler: IDL program graph to proto3 schema translation.
//!
//! This crate provides the translation pipeline:
//! - `proto` - type mapping, namespace resolution and document emission
//! - `output` - writing one `.proto` file per program
//! - `config` - emission policies

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::fmt;
use std::path::PathBuf;

use idl2proto_core::ProgramKey;

pub mod config;
pub mod output;
pub mod proto;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod lib_tests;

pub use config::{Config, VoidResponse};
pub use output::{write_all, write_program};
pub use proto::{generate, generate_into};

/// Location of a construct in the source program graph.
///
/// Renders as `program:entity.field`, e.g. `calc.thrift:Calculator.add.a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub program: ProgramKey,
    pub entity: String,
    pub field: Option<String>,
}

impl Origin {
    pub fn new(program: &ProgramKey, entity: impl Into<String>) -> Self {
        Self {
            program: program.clone(),
            entity: entity.into(),
            field: None,
        }
    }

    pub fn field(&self, field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..self.clone()
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.program, self.entity)?;
        if let Some(field) = &self.field {
            write!(f, ".{field}")?;
        }
        Ok(())
    }
}

/// Errors that abort translation of a program.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A type with no proto3 representation in this position (e.g. a void field).
    #[error("{at}: unsupported base type `{ty}`")]
    UnsupportedBaseType { at: Origin, ty: String },

    #[error("{at}: unsupported proto3 map key type `{key}` (expected string, int32 or int64)")]
    UnsupportedMapKeyType { at: Origin, key: String },

    /// A reference into a program the current one does not include.
    #[error(
        "{at}: `{name}` refers to program `{program}`, which is not reachable from the include graph"
    )]
    UnresolvedCrossReference {
        at: Origin,
        program: ProgramKey,
        name: String,
    },

    #[error("{program}: included program `{include}` is not in the program graph")]
    MissingInclude {
        program: ProgramKey,
        include: ProgramKey,
    },

    /// Two distinct source names that emit the same proto name.
    #[error("{program}: {first} and {second} both emit as `{name}`")]
    NameCollision {
        program: ProgramKey,
        name: String,
        first: String,
        second: String,
    },

    #[error("{at}: program `{program}` declares no service `{service}`")]
    UnknownService {
        at: Origin,
        program: ProgramKey,
        service: String,
    },

    #[error("{at}: service inheritance cycle through `{service}`")]
    CyclicInheritance { at: Origin, service: String },

    #[error("unknown program `{0}`")]
    UnknownProgram(ProgramKey),

    #[error("failed to write {}: {source}", path.display())]
    OutputResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to output sink")]
    Format(#[from] fmt::Error),
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, Error>;
