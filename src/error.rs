//! Error types.
//!
//! [`DefinitionError`] is the only error that crosses the API as an `Err`:
//! it is raised while building an automaton. Everything that can go wrong
//! while running one is a [`RunFailure`], carried inside a rejected
//! [`RunResult`](crate::engine::RunResult).

use crate::automaton::{StackSymbol, State, Symbol};
use thiserror::Error;

/// A malformed automaton definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// No initial state was declared.
    #[error("Initial state is required. Use .initial() to set it.")]
    MissingInitialState,

    /// The initial state is not among the declared states.
    #[error("Initial state {0} is not a declared state")]
    UnknownInitialState(State),

    /// An accepting state is not among the declared states.
    #[error("Accepting state {0} is not a declared state")]
    UnknownAcceptingState(State),

    /// The alphabet contains the reserved epsilon marker.
    #[error("Alphabet must not contain the epsilon marker '{}'", Symbol::EPSILON)]
    EpsilonInAlphabet,

    /// A transition leaves from or enters an undeclared state.
    #[error("Transition {transition} references undeclared state {state}")]
    UnknownTransitionState {
        /// The offending transition, rendered
        transition: String,
        /// The undeclared state
        state: State,
    },

    /// A transition reads an input symbol outside the alphabet.
    #[error("Transition {transition} reads symbol '{symbol}' which is not in the alphabet")]
    UnknownInputSymbol {
        /// The offending transition, rendered
        transition: String,
        /// The undeclared symbol
        symbol: Symbol,
    },

    /// A stack symbol is used but not declared in the stack alphabet.
    #[error("Stack symbol {0} is not in the stack alphabet")]
    UnknownStackSymbol(StackSymbol),

    /// Two transitions share the same `(source, input, stack top)` key.
    #[error("Duplicate transition for ({state}, {input}, {stack_top})")]
    DuplicateTransition {
        /// Source state
        state: State,
        /// Input symbol
        input: Symbol,
        /// Stack component, rendered
        stack_top: String,
    },

    /// A finite-state definition declares stack behaviour.
    #[error("Finite-state automaton cannot use the stack: {0}")]
    StackInFiniteMode(String),

    /// A stack alphabet was declared without an initial stack symbol.
    #[error("Stack alphabet declared without an initial stack symbol")]
    MissingInitialStackSymbol,

    /// A transition pushes the bottom marker on top of other content.
    #[error("Transition {0} pushes the bottom marker without reading it")]
    BottomMarkerPushed(String),

    /// A transition pops the bottom marker without restoring it.
    #[error("Transition {0} removes the bottom marker")]
    BottomMarkerRemoved(String),
}

/// Why a run got stuck.
///
/// These are ordinary outcomes of running an automaton on an arbitrary
/// string and are reported as rejections, never as `Err`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum RunFailure {
    /// The input contains a symbol outside the declared alphabet.
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol {
        /// The offending character
        symbol: char,
        /// Zero-based index into the input
        position: usize,
    },

    /// No transition applies to the current configuration.
    #[error("no transition from {state} at position {position}{}", describe_lookahead(*symbol))]
    NoTransition {
        /// State the run was stuck in
        state: State,
        /// Zero-based index of the unread input
        position: usize,
        /// The unread symbol, if input remained
        symbol: Option<Symbol>,
    },

    /// The step budget ran out, which only happens on epsilon cycles.
    #[error("epsilon loop detected after {steps} steps")]
    EpsilonLoop {
        /// Steps applied before the budget was exhausted
        steps: usize,
    },
}

fn describe_lookahead(symbol: Option<Symbol>) -> String {
    match symbol {
        Some(s) => format!(" reading '{s}'"),
        None => String::new(),
    }
}

/// A specialized `Result` type for definition construction.
pub type Result<T> = std::result::Result<T, DefinitionError>;
