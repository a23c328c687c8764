//! Running automata over input strings.
//!
//! The pieces, in the order a run uses them:
//! - [`ExecutionEngine`] steps a [`Configuration`] through the definition
//! - [`TransitionResolver`] picks the applicable transition at each step
//! - [`TraceRecorder`] captures every configuration visited
//! - [`AcceptanceEvaluator`] turns the final configuration into a [`Verdict`]
//!
//! Most callers only need [`run`].

mod acceptance;
mod configuration;
mod executor;
mod resolver;
mod trace;

pub use acceptance::{AcceptanceEvaluator, Rejection, Verdict};
pub use configuration::{Configuration, Stack};
pub use executor::{step_bound, ExecutionEngine, RunStatus};
pub use resolver::TransitionResolver;
pub use trace::{Trace, TraceEntry, TraceRecorder};

use crate::automaton::{AutomatonDefinition, State};
use crate::error::RunFailure;

/// The outcome of running a definition over one input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Accept, or reject with a reason
    pub verdict: Verdict,
    /// State the run ended in
    pub final_state: State,
    /// Every configuration visited
    pub trace: Trace,
}

impl RunResult {
    /// Check if the input was accepted.
    #[inline]
    pub fn accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// The failure that stopped the run, if it got stuck.
    pub fn failure(&self) -> Option<&RunFailure> {
        match &self.verdict {
            Verdict::Rejected(Rejection::Stuck(failure)) => Some(failure),
            _ => None,
        }
    }

    /// The reason for rejection, if rejected.
    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.verdict {
            Verdict::Accepted => None,
            Verdict::Rejected(reason) => Some(reason),
        }
    }
}

/// Run `definition` over `input`.
///
/// Pure and deterministic: the same definition and input always produce the
/// same result. Every run terminates; see [`step_bound`].
///
/// # Example
///
/// ```rust
/// use libautomata::prelude::*;
///
/// let def = AutomatonBuilder::finite()
///     .states(["q0", "q1"])
///     .alphabet("01".chars())
///     .initial("q0")
///     .accepting(["q0"])
///     .transition("q0", '0', "q1")
///     .transition("q1", '1', "q0")
///     .build()?;
///
/// let result = run(&def, "01x");
/// assert!(!result.accepted());
/// assert_eq!(
///     result.failure(),
///     Some(&RunFailure::InvalidSymbol { symbol: 'x', position: 2 })
/// );
/// # Ok::<(), libautomata::DefinitionError>(())
/// ```
pub fn run(definition: &AutomatonDefinition, input: &str) -> RunResult {
    ExecutionEngine::new(definition, input).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{AutomatonBuilder, StackPush, StackSymbol, StackTop, Symbol};

    fn abc() -> AutomatonDefinition {
        AutomatonBuilder::pushdown("Z0")
            .states(["q0", "q1", "q2", "q3", "q4", "qf"])
            .alphabet("abc".chars())
            .stack_alphabet(["B"])
            .initial("q0")
            .accepting(["qf"])
            .transition("q0", 'a', "q1")
            .transition("q1", 'a', "q1")
            .stack_transition("q1", 'b', StackTop::Any, "q2", StackPush::symbol("B"))
            .stack_transition("q2", 'b', StackTop::Any, "q2", StackPush::symbol("B"))
            .stack_transition("q2", 'c', StackTop::symbol("B"), "q3", StackPush::Nothing)
            .stack_transition("q3", 'c', StackTop::symbol("B"), "q3", StackPush::Nothing)
            .transition("q3", 'a', "q4")
            .stack_transition("q3", Symbol::EPSILON, StackTop::symbol("Z0"), "qf", StackPush::symbol("Z0"))
            .transition("q4", 'a', "q4")
            .stack_transition("q4", Symbol::EPSILON, StackTop::symbol("Z0"), "qf", StackPush::symbol("Z0"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_pushdown_accepts_with_bottom_only() {
        let result = run(&abc(), "abc");
        assert!(result.accepted());
        assert_eq!(result.final_state, State::new("qf"));
        assert_eq!(result.trace.final_stack(), &[StackSymbol::new("Z0")]);
        // a, b, c, then the settle move
        assert_eq!(result.trace.steps(), 4);
    }

    #[test]
    fn test_settle_then_stuck() {
        let result = run(&abc(), "abcc");
        assert_eq!(
            result.failure(),
            Some(&RunFailure::NoTransition {
                state: State::new("qf"),
                position: 3,
                symbol: Some(Symbol::new('c')),
            })
        );
    }

    #[test]
    fn test_pending_stack_blocks_settle() {
        let result = run(&abc(), "ab");
        assert_eq!(result.rejection(), Some(&Rejection::NonAccepting));
        assert_eq!(result.final_state, State::new("q2"));
        assert_eq!(result.trace.final_stack().len(), 2);
    }

    #[test]
    fn test_trailing_as_after_settle() {
        assert!(run(&abc(), "aabbccaa").accepted());
        assert!(!run(&abc(), "abbca").accepted());
    }

    #[test]
    fn test_empty_input_epsilon_loop() {
        let def = AutomatonBuilder::finite()
            .states(["q0"])
            .alphabet("a".chars())
            .initial("q0")
            .epsilon("q0", "q0")
            .build()
            .unwrap();
        let result = run(&def, "");
        assert_eq!(result.failure(), Some(&RunFailure::EpsilonLoop { steps: 2 }));
        assert_eq!(result.trace.len(), 3);
    }
}
