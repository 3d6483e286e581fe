pub mod check;
pub mod generate;
pub mod graph_loader;

#[cfg(test)]
mod test_fixtures;


use std::io;
use std::path::PathBuf;

use idl2proto_core::{ProgramGraph, ProgramKey};

/// Errors raised by CLI commands outside of translation itself.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid program graph in {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),

    #[error(transparent)]
    Translate(#[from] idl2proto_compiler::Error),
}

/// Programs to translate: the explicit selection, or every program in
/// graph order.
pub fn selected_keys(graph: &ProgramGraph, programs: &[ProgramKey]) -> Vec<ProgramKey> {
    if programs.is_empty() {
        graph.programs().map(|p| p.key.clone()).collect()
    } else {
        programs.to_vec()
    }
}
