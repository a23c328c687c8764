//! Execution traces.

use super::configuration::Configuration;
use crate::automaton::{Mode, StackSymbol, State, Transition};

/// One recorded step: the configuration reached and the move that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEntry {
    /// Configuration after the step
    pub configuration: Configuration,
    /// Transition applied; `None` for the initial configuration
    pub transition: Option<Transition>,
}

/// The ordered configurations visited by one run.
///
/// Always starts with the initial configuration, followed by one entry per
/// applied transition. Read-only once the run has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    /// All entries, initial configuration first.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Iterate over the recorded configurations.
    pub fn configurations(&self) -> impl Iterator<Item = &Configuration> + '_ {
        self.entries.iter().map(|e| &e.configuration)
    }

    /// The states visited, in order.
    pub fn path(&self) -> Vec<&State> {
        self.configurations().map(|c| &c.state).collect()
    }

    /// The configuration the run ended in.
    pub fn last(&self) -> &Configuration {
        // The recorder is seeded with the initial configuration.
        &self.entries[self.entries.len() - 1].configuration
    }

    /// Number of entries (applied steps + 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of applied transitions.
    pub fn steps(&self) -> usize {
        self.entries.len() - 1
    }

    /// Stack contents at the end of the run, bottom first.
    pub fn final_stack(&self) -> &[StackSymbol] {
        self.last().stack.as_slice()
    }
}

/// Captures configurations as the engine applies transitions.
#[derive(Debug)]
pub struct TraceRecorder {
    mode: Mode,
    entries: Vec<TraceEntry>,
}

impl TraceRecorder {
    /// Start a trace at `initial`.
    pub fn new(mode: Mode, initial: &Configuration) -> Self {
        let mut recorder = Self {
            mode,
            entries: Vec::new(),
        };
        recorder.push(initial, None);
        recorder
    }

    /// Record the configuration reached by applying `transition`.
    pub fn record(&mut self, configuration: &Configuration, transition: &Transition) {
        self.push(configuration, Some(transition.clone()));
    }

    fn push(&mut self, configuration: &Configuration, transition: Option<Transition>) {
        let mut snapshot = configuration.clone();
        if self.mode == Mode::Finite {
            snapshot.stack = Default::default();
        }
        self.entries.push(TraceEntry {
            configuration: snapshot,
            transition,
        });
    }

    /// Number of entries recorded so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the recording.
    pub fn finish(self) -> Trace {
        Trace {
            entries: self.entries,
        }
    }
}
