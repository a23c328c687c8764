//! Acceptance decisions.

use super::configuration::Configuration;
use super::executor::RunStatus;
use crate::automaton::{AutomatonDefinition, Mode};
use crate::error::RunFailure;
use std::fmt;

/// Why a run was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// The run could not continue.
    Stuck(RunFailure),
    /// Input consumed, but the final state is not accepting.
    NonAccepting,
    /// Accepting state reached with symbols left above the bottom marker.
    ResidualStack,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Stuck(failure) => write!(f, "{failure}"),
            Rejection::NonAccepting => f.write_str("final state is not accepting"),
            Rejection::ResidualStack => f.write_str("stack not exhausted"),
        }
    }
}

/// Final outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// The input belongs to the language.
    Accepted,
    /// The input does not belong to the language.
    Rejected(Rejection),
}

impl Verdict {
    /// Check if this verdict accepts.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("accepted"),
            Verdict::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}

/// Applies the acceptance discipline of a definition to a finished run.
#[derive(Debug, Clone, Copy)]
pub struct AcceptanceEvaluator<'a> {
    definition: &'a AutomatonDefinition,
}

impl<'a> AcceptanceEvaluator<'a> {
    /// Create an evaluator for `definition`.
    pub fn new(definition: &'a AutomatonDefinition) -> Self {
        Self { definition }
    }

    /// Decide a run from its final configuration and status.
    ///
    /// Finite mode accepts by final state. Pushdown mode additionally
    /// requires the stack to hold exactly the bottom marker.
    pub fn evaluate(&self, last: &Configuration, status: &RunStatus) -> Verdict {
        if let RunStatus::Stuck(failure) = status {
            return Verdict::Rejected(Rejection::Stuck(failure.clone()));
        }

        if !self.definition.is_accepting(&last.state) {
            return Verdict::Rejected(Rejection::NonAccepting);
        }

        match (self.definition.mode(), self.definition.initial_stack_symbol()) {
            (Mode::Pushdown, Some(bottom)) if !last.stack.is_only(bottom) => {
                Verdict::Rejected(Rejection::ResidualStack)
            }
            _ => Verdict::Accepted,
        }
    }
}
