//! Immutable automaton definitions.

use super::state::State;
use super::symbol::{StackSymbol, Symbol};
use super::transition::{StackTop, Transition, TransitionKey};
use crate::error::{DefinitionError, Result};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// Which acceptance discipline a definition uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// No stack; accept by final state.
    Finite,
    /// One stack; accept by final state with only the bottom marker left.
    Pushdown,
}

/// A validated, immutable automaton.
///
/// Built with [`AutomatonBuilder`](super::AutomatonBuilder). Transitions are
/// indexed both by their full `(source, input, stack_top)` key and by source
/// state in declaration order; the latter drives first-match resolution.
#[derive(Debug, Clone)]
pub struct AutomatonDefinition {
    states: Vec<State>,
    alphabet: BTreeSet<Symbol>,
    stack_alphabet: BTreeSet<StackSymbol>,
    transitions: Vec<Transition>,
    by_key: FxHashMap<TransitionKey, usize>,
    by_source: FxHashMap<State, SmallVec<[usize; 4]>>,
    initial_state: State,
    initial_stack_symbol: Option<StackSymbol>,
    accepting: BTreeSet<State>,
    has_epsilon_moves: bool,
}

impl AutomatonDefinition {
    /// Index already-validated parts. Rejects duplicate transition keys.
    pub(super) fn new(
        states: Vec<State>,
        alphabet: BTreeSet<Symbol>,
        stack_alphabet: BTreeSet<StackSymbol>,
        transitions: Vec<Transition>,
        initial_state: State,
        initial_stack_symbol: Option<StackSymbol>,
        accepting: BTreeSet<State>,
    ) -> Result<Self> {
        let mut by_key = FxHashMap::default();
        let mut by_source: FxHashMap<State, SmallVec<[usize; 4]>> = FxHashMap::default();

        for (idx, transition) in transitions.iter().enumerate() {
            if by_key.insert(transition.key(), idx).is_some() {
                return Err(DefinitionError::DuplicateTransition {
                    state: transition.source.clone(),
                    input: transition.input,
                    stack_top: transition.stack_top.to_string(),
                });
            }
            by_source
                .entry(transition.source.clone())
                .or_default()
                .push(idx);
        }

        let has_epsilon_moves = transitions.iter().any(Transition::is_epsilon);

        Ok(Self {
            states,
            alphabet,
            stack_alphabet,
            transitions,
            by_key,
            by_source,
            initial_state,
            initial_stack_symbol,
            accepting,
            has_epsilon_moves,
        })
    }

    /// The acceptance discipline of this definition.
    pub fn mode(&self) -> Mode {
        if self.initial_stack_symbol.is_some() {
            Mode::Pushdown
        } else {
            Mode::Finite
        }
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Check if `state` is declared.
    pub fn has_state(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    /// The input alphabet, sorted.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    /// Check if a character belongs to the input alphabet.
    #[inline]
    pub fn accepts_symbol(&self, c: char) -> bool {
        self.alphabet.contains(&Symbol::new(c))
    }

    /// The stack alphabet; empty in finite mode.
    pub fn stack_alphabet(&self) -> &BTreeSet<StackSymbol> {
        &self.stack_alphabet
    }

    /// All transitions in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Transitions leaving `state`, in declaration order.
    pub fn transitions_from<'a>(&'a self, state: &State) -> impl Iterator<Item = &'a Transition> + 'a {
        self.by_source
            .get(state)
            .into_iter()
            .flat_map(move |indices| indices.iter().map(move |&i| &self.transitions[i]))
    }

    /// Exact lookup by `(source, input, stack_top)`.
    pub fn transition(&self, source: &State, input: Symbol, stack_top: &StackTop) -> Option<&Transition> {
        let key = TransitionKey {
            source: source.clone(),
            input,
            stack_top: stack_top.clone(),
        };
        self.by_key.get(&key).map(|&i| &self.transitions[i])
    }

    /// The initial state.
    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    /// The initial stack symbol, which doubles as the bottom marker.
    pub fn initial_stack_symbol(&self) -> Option<&StackSymbol> {
        self.initial_stack_symbol.as_ref()
    }

    /// Accepting states, sorted.
    pub fn accepting_states(&self) -> &BTreeSet<State> {
        &self.accepting
    }

    /// Check if `state` is accepting.
    #[inline]
    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting.contains(state)
    }

    /// Check if any transition consumes no input.
    #[inline]
    pub fn has_epsilon_moves(&self) -> bool {
        self.has_epsilon_moves
    }
}
