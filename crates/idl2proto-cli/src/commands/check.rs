use std::path::PathBuf;

use idl2proto_compiler::{Config, Error, generate};
use idl2proto_core::{ProgramGraph, ProgramKey};

use super::graph_loader::load_graph;
use super::{CommandError, selected_keys};

pub struct CheckArgs {
    pub graph_path: PathBuf,
    /// Empty means every program
    pub programs: Vec<ProgramKey>,
    pub config: Config,
}

pub fn run(args: CheckArgs) {
    let failures = match execute(&args) {
        Ok(failures) => failures,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if failures.is_empty() {
        // Silent on success (like cargo check)
        return;
    }
    for e in &failures {
        eprintln!("error: {}", e);
    }
    std::process::exit(1);
}

/// Translate the selected programs in memory, collecting the first error
/// of each failing program.
pub fn execute(args: &CheckArgs) -> Result<Vec<Error>, CommandError> {
    let graph = load_graph(&args.graph_path)?;
    let keys = selected_keys(&graph, &args.programs);
    Ok(check_graph(&graph, &keys, &args.config))
}

pub fn check_graph(graph: &ProgramGraph, keys: &[ProgramKey], config: &Config) -> Vec<Error> {
    keys.iter()
        .filter_map(|key| generate(graph, key, config).err())
        .collect()
}
