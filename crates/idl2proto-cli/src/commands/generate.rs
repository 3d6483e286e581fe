use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use idl2proto_compiler::{Config, generate, write_program};
use idl2proto_core::ProgramKey;
use tracing::info;

use super::graph_loader::load_graph;
use super::{CommandError, selected_keys};

/// Where generated documents go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// One `<file>.proto` per program in this directory
    Dir(PathBuf),
    Stdout,
}

pub struct GenerateArgs {
    pub graph_path: PathBuf,
    /// Empty means every program
    pub programs: Vec<ProgramKey>,
    pub output: Output,
    pub config: Config,
}

pub fn run(args: GenerateArgs) {
    let stdout = io::stdout();
    if let Err(e) = execute(&args, &mut stdout.lock()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Translate the selected programs. Returns the written paths (none for
/// stdout output).
pub fn execute<W: Write>(args: &GenerateArgs, stdout: &mut W) -> Result<Vec<PathBuf>, CommandError> {
    let graph = load_graph(&args.graph_path)?;
    let keys = selected_keys(&graph, &args.programs);

    match &args.output {
        Output::Stdout => {
            // Render everything first: a failure prints no documents
            let documents = keys
                .iter()
                .map(|key| generate(&graph, key, &args.config))
                .collect::<Result<Vec<_>, _>>()?;
            for (i, document) in documents.iter().enumerate() {
                if i > 0 {
                    writeln!(stdout).map_err(CommandError::Stdout)?;
                }
                stdout
                    .write_all(document.as_bytes())
                    .map_err(CommandError::Stdout)?;
            }
            stdout.flush().map_err(CommandError::Stdout)?;
            Ok(Vec::new())
        }
        Output::Dir(dir) => {
            fs::create_dir_all(dir).map_err(|source| CommandError::CreateDir {
                path: dir.clone(),
                source,
            })?;
            let paths = keys
                .iter()
                .map(|key| write_program(&graph, key, &args.config, dir))
                .collect::<Result<Vec<_>, _>>()?;
            info!(files = paths.len(), dir = %dir.display(), "generated proto files");
            Ok(paths)
        }
    }
}
