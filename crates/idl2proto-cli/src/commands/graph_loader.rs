use std::fs;
use std::io::{self, Read};
use std::path::Path;

use idl2proto_core::{ProgramGraph, parse_program_graph};
use tracing::debug;

use super::CommandError;

/// Load the JSON program graph at `path`, or from stdin when `path` is `-`.
pub fn load_graph(path: &Path) -> Result<ProgramGraph, CommandError> {
    if path.as_os_str() == "-" {
        return load_stdin();
    }
    let content = fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(&content, &path.display().to_string())
}

fn load_stdin() -> Result<ProgramGraph, CommandError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CommandError::Stdin)?;
    parse_graph(&buf, "<stdin>")
}

/// Parse `json`; `origin` names the input in error messages.
pub fn parse_graph(json: &str, origin: &str) -> Result<ProgramGraph, CommandError> {
    let graph = parse_program_graph(json).map_err(|source| CommandError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    debug!(origin, programs = graph.len(), "loaded program graph");
    Ok(graph)
}
