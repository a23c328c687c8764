//! Automaton definitions.
//!
//! This module holds the static side of the simulator:
//! - [`Symbol`] and [`StackSymbol`], with the reserved [`Symbol::EPSILON`]
//! - [`State`] identifiers
//! - [`Transition`]s with their [`StackTop`] / [`StackPush`] components
//! - the validated [`AutomatonDefinition`] and its [`AutomatonBuilder`]

pub mod builder;
mod definition;
mod state;
mod symbol;
mod transition;

pub use builder::AutomatonBuilder;
pub use definition::{AutomatonDefinition, Mode};
pub use state::State;
pub use symbol::{StackSymbol, Symbol};
pub use transition::{StackPush, StackTop, Transition, TransitionKey};
