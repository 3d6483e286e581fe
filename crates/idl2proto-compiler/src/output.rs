//! Writing generated documents to an output directory.
//!
//! Each program becomes `<dir>/<lower_snake(name)>.proto`. The document is
//! rendered in memory first; the file is only created once translation has
//! succeeded, and it is written through a temp file renamed into place, so
//! neither a failed program nor a failed write leaves a partial schema behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use idl2proto_core::{ProgramGraph, ProgramKey};
use tempfile::Builder;
use tracing::debug;

use crate::proto::{generate, namespace};
use crate::{Config, Error, Result};

/// Translate the program `key` and write it into `out_dir`.
///
/// Returns the path of the written file. `out_dir` must exist.
pub fn write_program(
    graph: &ProgramGraph,
    key: &ProgramKey,
    config: &Config,
    out_dir: &Path,
) -> Result<PathBuf> {
    let program = graph
        .get(key)
        .ok_or_else(|| Error::UnknownProgram(key.clone()))?;
    let document = generate(graph, key, config)?;

    let path = out_dir.join(namespace::file_name(program));
    write_file(&path, &document)?;
    debug!(program = %key, path = %path.display(), "wrote proto file");
    Ok(path)
}

/// Translate every program of `graph` into `out_dir`, stopping at the
/// first failure.
pub fn write_all(graph: &ProgramGraph, config: &Config, out_dir: &Path) -> Result<Vec<PathBuf>> {
    graph
        .programs()
        .map(|program| write_program(graph, &program.key, config, out_dir))
        .collect()
}

/// Write through a temp file in the same directory, renamed into place, so
/// an I/O failure never leaves a truncated schema at `path`.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    let resource_error = |source| Error::OutputResource {
        path: path.to_path_buf(),
        source,
    };
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut builder = Builder::new();
    // Same mode `File::create` would use, before umask
    #[cfg(unix)]
    builder.permissions(std::os::unix::fs::PermissionsExt::from_mode(0o666));
    let mut file = builder.tempfile_in(dir).map_err(resource_error)?;
    file.write_all(contents.as_bytes()).map_err(resource_error)?;
    file.flush().map_err(resource_error)?;
    file.persist(path).map_err(|e| resource_error(e.error))?;
    Ok(())
}
