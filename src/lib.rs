//! # libautomata
//!
//! Deterministic finite-state and pushdown acceptors, driven by data.
//!
//! An automaton is described once with an [`AutomatonBuilder`], validated
//! into an immutable [`AutomatonDefinition`], and then run over any number
//! of input strings. Each run yields a [`RunResult`] carrying the verdict,
//! the final state and the full trace of configurations.
//!
//! Two acceptance disciplines are supported:
//! - **finite**: no stack; accept when the run ends in an accepting state
//! - **pushdown**: one stack seeded with a bottom marker; accept when the run
//!   ends in an accepting state with only the bottom marker left
//!
//! Pushdown runs resolve transitions first-match in declaration order and
//! never backtrack. Once the input is exhausted, epsilon moves keep firing
//! (the settle phase) until none applies.
//!
//! ## Example
//!
//! ```rust
//! use libautomata::prelude::*;
//!
//! // a⁺ bⁿ cⁿ
//! let def = AutomatonBuilder::pushdown("Z0")
//!     .states(["q0", "q1", "q2", "q3", "qf"])
//!     .alphabet("abc".chars())
//!     .stack_alphabet(["B"])
//!     .initial("q0")
//!     .accepting(["qf"])
//!     .transition("q0", 'a', "q1")
//!     .transition("q1", 'a', "q1")
//!     .stack_transition("q1", 'b', StackTop::Any, "q2", StackPush::symbol("B"))
//!     .stack_transition("q2", 'b', StackTop::Any, "q2", StackPush::symbol("B"))
//!     .stack_transition("q2", 'c', StackTop::symbol("B"), "q3", StackPush::Nothing)
//!     .stack_transition("q3", 'c', StackTop::symbol("B"), "q3", StackPush::Nothing)
//!     .stack_transition("q3", Symbol::EPSILON, StackTop::symbol("Z0"), "qf", StackPush::symbol("Z0"))
//!     .build()?;
//!
//! assert!(run(&def, "aabbcc").accepted());
//! assert!(!run(&def, "abbc").accepted());
//! # Ok::<(), libautomata::DefinitionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod report;

#[cfg(feature = "serialization")]
pub mod serialization;

/// Interactive REPL for exploring automata
#[cfg(feature = "cli")]
pub mod repl;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use automaton::{AutomatonBuilder, AutomatonDefinition, Mode};
pub use engine::{run, RunResult};
pub use error::{DefinitionError, RunFailure};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{
        AutomatonBuilder, AutomatonDefinition, Mode, StackPush, StackSymbol, StackTop, State,
        Symbol, Transition,
    };
    pub use crate::catalog::{catalog, Exercise};
    pub use crate::engine::{run, Rejection, RunResult, Trace, Verdict};
    pub use crate::error::{DefinitionError, RunFailure};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{from_json_str, load_definition, save_definition, to_json_string};
}
