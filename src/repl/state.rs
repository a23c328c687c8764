//! REPL state management
//!
//! Tracks the automaton currently in use and the display settings.

use crate::automaton::AutomatonDefinition;
use crate::catalog::{self, Exercise};
use crate::engine::{run, RunResult};
use crate::serialization::load_definition;
use anyhow::{Context, Result};
use std::path::Path;

/// Where the active automaton came from
#[derive(Debug, Clone)]
pub enum ActiveSource {
    /// A catalog exercise
    Exercise(&'static Exercise),
    /// A definition file
    File(String),
}

impl std::fmt::Display for ActiveSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exercise(exercise) => write!(f, "{}", exercise.id),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}

/// REPL state
pub struct ReplState {
    /// Where the active definition came from
    pub source: ActiveSource,
    /// The active definition
    pub definition: AutomatonDefinition,
    /// Print a step-by-step trace after each run
    pub show_trace: bool,
    /// Inputs run so far, with their results
    pub history: Vec<(String, RunResult)>,
}

impl ReplState {
    /// Create a REPL state using the given exercise
    pub fn new(exercise_id: &str, show_trace: bool) -> Result<Self> {
        let exercise = Self::lookup(exercise_id)?;
        Ok(Self {
            source: ActiveSource::Exercise(exercise),
            definition: exercise.definition()?,
            show_trace,
            history: Vec::new(),
        })
    }

    fn lookup(id: &str) -> Result<&'static Exercise> {
        catalog::find(id).with_context(|| {
            let known: Vec<&str> = catalog::ids().collect();
            format!("Unknown exercise '{}'. Available: {}", id, known.join(", "))
        })
    }

    /// Switch to a catalog exercise
    pub fn use_exercise(&mut self, id: &str) -> Result<&'static Exercise> {
        let exercise = Self::lookup(id)?;
        self.definition = exercise.definition()?;
        self.source = ActiveSource::Exercise(exercise);
        self.history.clear();
        Ok(exercise)
    }

    /// Load a definition file and make it active
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        let definition = load_definition(path)
            .with_context(|| format!("Failed to load definition: {}", path.display()))?;
        self.definition = definition;
        self.source = ActiveSource::File(path.display().to_string());
        self.history.clear();
        Ok(())
    }

    /// The active exercise, if the definition came from the catalog
    pub fn exercise(&self) -> Option<&'static Exercise> {
        match self.source {
            ActiveSource::Exercise(exercise) => Some(exercise),
            ActiveSource::File(_) => None,
        }
    }

    /// Run the active definition over `input` and remember the result
    pub fn run(&mut self, input: &str) -> &RunResult {
        let result = run(&self.definition, input);
        self.history.push((input.to_string(), result));
        // just pushed
        &self.history[self.history.len() - 1].1
    }
}
