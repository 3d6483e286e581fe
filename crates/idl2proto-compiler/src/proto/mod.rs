//! proto3 schema emission.
//!
//! [`generate`] renders one program of a [`ProgramGraph`] into a complete
//! proto3 document. The pieces:
//! - `types` - source type to proto3 type strings, map key validation
//! - `namespace` - package, import path and qualification rules
//! - `messages` - enums, typedef wrappers, struct messages
//! - `services` - request/response synthesis and inheritance flattening
//! - `document` - section ordering

mod document;
mod emitter;
mod messages;
pub mod namespace;
mod services;
pub mod types;

#[cfg(test)]
mod document_tests;

use std::fmt;

use idl2proto_core::{ProgramGraph, ProgramKey};

pub use emitter::Emitter;
pub use types::TypeMapper;

use crate::{Config, Error, Result};

/// The well-known empty message.
pub const EMPTY_TYPE: &str = "google.protobuf.Empty";

/// Import that declares [`EMPTY_TYPE`].
pub const EMPTY_IMPORT: &str = "google/protobuf/empty.proto";

/// Render the proto3 document for the program `key`.
///
/// The document ends with exactly one newline.
pub fn generate(graph: &ProgramGraph, key: &ProgramKey, config: &Config) -> Result<String> {
    let program = graph
        .get(key)
        .ok_or_else(|| Error::UnknownProgram(key.clone()))?;

    let mut output = String::new();
    Emitter::new(graph, program, config, &mut output).emit()?;

    output.truncate(output.trim_end().len());
    output.push('\n');
    Ok(output)
}

/// Render the document for `key` into `out`.
///
/// The document is rendered completely before anything reaches `out`, so a
/// failed translation leaves the sink untouched.
pub fn generate_into<W: fmt::Write>(
    graph: &ProgramGraph,
    key: &ProgramKey,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let document = generate(graph, key, config)?;
    out.write_str(&document)?;
    Ok(())
}
