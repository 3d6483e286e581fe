//! Program graph: every program of a compilation, indexed by key.

use indexmap::{IndexMap, IndexSet};

use crate::{Program, ProgramKey};

/// All programs of one compilation.
///
/// Iteration follows input order. A duplicate key replaces the earlier
/// program in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(from = "Vec<Program>")]
pub struct ProgramGraph {
    programs: IndexMap<ProgramKey, Program>,
}

impl ProgramGraph {
    pub fn new(programs: impl IntoIterator<Item = Program>) -> Self {
        let programs = programs
            .into_iter()
            .map(|program| (program.key.clone(), program))
            .collect();
        Self { programs }
    }

    pub fn get(&self, key: &ProgramKey) -> Option<&Program> {
        self.programs.get(key)
    }

    pub fn contains(&self, key: &ProgramKey) -> bool {
        self.programs.contains_key(key)
    }

    pub fn programs(&self) -> impl Iterator<Item = &Program> {
        self.programs.values()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Keys reachable from `root` through includes, excluding `root`.
    ///
    /// Depth-first in include declaration order, each key once. Keys that
    /// are included but absent from the graph are still reported so callers
    /// can surface them; their own includes are unknown.
    pub fn transitive_includes(&self, root: &ProgramKey) -> IndexSet<ProgramKey> {
        let mut reached = IndexSet::new();
        let Some(program) = self.get(root) else {
            return reached;
        };

        let mut stack: Vec<&ProgramKey> = program.includes.iter().rev().collect();
        while let Some(key) = stack.pop() {
            if key == root || !reached.insert(key.clone()) {
                continue;
            }
            if let Some(included) = self.get(key) {
                stack.extend(included.includes.iter().rev());
            }
        }
        reached
    }
}

impl From<Vec<Program>> for ProgramGraph {
    fn from(programs: Vec<Program>) -> Self {
        Self::new(programs)
    }
}

impl FromIterator<Program> for ProgramGraph {
    fn from_iter<I: IntoIterator<Item = Program>>(iter: I) -> Self {
        Self::new(iter)
    }
}
