//! Builder pattern for creating [`AutomatonDefinition`] instances.
//!
//! The `AutomatonBuilder` collects states, alphabets and transitions with a
//! fluent API and validates everything once, in [`AutomatonBuilder::build`].

use super::definition::AutomatonDefinition;
use super::state::State;
use super::symbol::{StackSymbol, Symbol};
use super::transition::{StackPush, StackTop, Transition};
use crate::error::{DefinitionError, Result};
use std::collections::BTreeSet;

/// Builder for constructing an [`AutomatonDefinition`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use libautomata::prelude::*;
///
/// let l1 = AutomatonBuilder::finite()
///     .states(["q0", "q1"])
///     .alphabet("01".chars())
///     .initial("q0")
///     .accepting(["q0"])
///     .transition("q0", '0', "q1")
///     .transition("q1", '1', "q0")
///     .build()?;
///
/// assert!(run(&l1, "0101").accepted());
/// # Ok::<(), libautomata::DefinitionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    states: Vec<State>,
    alphabet: Vec<Symbol>,
    stack_alphabet: Vec<StackSymbol>,
    transitions: Vec<Transition>,
    initial_state: Option<State>,
    initial_stack_symbol: Option<StackSymbol>,
    accepting: Vec<State>,
}

impl AutomatonBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a finite-state definition (no stack).
    pub fn finite() -> Self {
        Self::new()
    }

    /// Start a pushdown definition whose stack starts with `bottom`.
    ///
    /// `bottom` is added to the stack alphabet and serves as the bottom
    /// marker for the acceptance check.
    pub fn pushdown(bottom: impl Into<StackSymbol>) -> Self {
        let bottom = bottom.into();
        Self {
            stack_alphabet: vec![bottom.clone()],
            initial_stack_symbol: Some(bottom),
            ..Self::default()
        }
    }

    /// Declare states. Declaration order is kept for display.
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        for state in states {
            let state = state.into();
            if !self.states.contains(&state) {
                self.states.push(state);
            }
        }
        self
    }

    /// Declare the input alphabet.
    pub fn alphabet<I, C>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Symbol>,
    {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Declare stack symbols in addition to the bottom marker.
    pub fn stack_alphabet<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StackSymbol>,
    {
        self.stack_alphabet
            .extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Set the initial state.
    pub fn initial(mut self, state: impl Into<State>) -> Self {
        self.initial_state = Some(state.into());
        self
    }

    /// Set the initial stack symbol without adding it to the stack alphabet.
    ///
    /// Prefer [`AutomatonBuilder::pushdown`]; this exists for definitions
    /// assembled from external documents.
    pub fn initial_stack_symbol(mut self, symbol: impl Into<StackSymbol>) -> Self {
        self.initial_stack_symbol = Some(symbol.into());
        self
    }

    /// Declare accepting states.
    pub fn accepting<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a move on `symbol` that ignores the stack.
    pub fn transition(
        self,
        source: impl Into<State>,
        symbol: char,
        target: impl Into<State>,
    ) -> Self {
        self.add(Transition::new(source, symbol, target))
    }

    /// Add a move that consumes no input and ignores the stack.
    pub fn epsilon(self, source: impl Into<State>, target: impl Into<State>) -> Self {
        self.add(Transition::new(source, Symbol::EPSILON, target))
    }

    /// Add a move with explicit stack behaviour.
    pub fn stack_transition(
        self,
        source: impl Into<State>,
        input: impl Into<Symbol>,
        stack_top: StackTop,
        target: impl Into<State>,
        push: StackPush,
    ) -> Self {
        self.add(Transition {
            source: source.into(),
            input: input.into(),
            stack_top,
            target: target.into(),
            push,
        })
    }

    /// Add a fully-formed transition.
    pub fn add(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Validate and build the definition.
    ///
    /// # Errors
    ///
    /// Returns a [`DefinitionError`] if:
    /// - no initial state was set, or it is not a declared state
    /// - an accepting state is not declared
    /// - the alphabet contains [`Symbol::EPSILON`]
    /// - a transition references undeclared states or symbols
    /// - two transitions share a `(source, input, stack_top)` key
    /// - a finite-state definition touches the stack
    /// - a transition would push or drop the bottom marker
    pub fn build(self) -> Result<AutomatonDefinition> {
        let initial_state = self
            .initial_state
            .ok_or(DefinitionError::MissingInitialState)?;

        let alphabet: BTreeSet<Symbol> = self.alphabet.into_iter().collect();
        if alphabet.contains(&Symbol::EPSILON) {
            return Err(DefinitionError::EpsilonInAlphabet);
        }

        if !self.states.contains(&initial_state) {
            return Err(DefinitionError::UnknownInitialState(initial_state));
        }

        let mut accepting = BTreeSet::new();
        for state in self.accepting {
            if !self.states.contains(&state) {
                return Err(DefinitionError::UnknownAcceptingState(state));
            }
            accepting.insert(state);
        }

        let stack_alphabet: BTreeSet<StackSymbol> = self.stack_alphabet.into_iter().collect();
        match &self.initial_stack_symbol {
            None if !stack_alphabet.is_empty() => {
                return Err(DefinitionError::MissingInitialStackSymbol)
            }
            Some(bottom) if !stack_alphabet.contains(bottom) => {
                return Err(DefinitionError::UnknownStackSymbol(bottom.clone()))
            }
            _ => {}
        }

        for transition in &self.transitions {
            for state in [&transition.source, &transition.target] {
                if !self.states.contains(state) {
                    return Err(DefinitionError::UnknownTransitionState {
                        transition: transition.to_string(),
                        state: state.clone(),
                    });
                }
            }

            if !transition.is_epsilon() && !alphabet.contains(&transition.input) {
                return Err(DefinitionError::UnknownInputSymbol {
                    transition: transition.to_string(),
                    symbol: transition.input,
                });
            }

            match &self.initial_stack_symbol {
                None => {
                    if transition.touches_stack() {
                        return Err(DefinitionError::StackInFiniteMode(transition.to_string()));
                    }
                }
                Some(bottom) => check_stack_usage(transition, bottom, &stack_alphabet)?,
            }
        }

        AutomatonDefinition::new(
            self.states,
            alphabet,
            stack_alphabet,
            self.transitions,
            initial_state,
            self.initial_stack_symbol,
            accepting,
        )
    }
}

/// Stack symbols must be declared, and the bottom marker must stay at the
/// bottom: it is only ever read and written back in the same move.
fn check_stack_usage(
    transition: &Transition,
    bottom: &StackSymbol,
    stack_alphabet: &BTreeSet<StackSymbol>,
) -> Result<()> {
    let read = transition.stack_top.as_symbol();
    let written = transition.push.as_symbol();

    for symbol in read.into_iter().chain(written) {
        if !stack_alphabet.contains(symbol) {
            return Err(DefinitionError::UnknownStackSymbol(symbol.clone()));
        }
    }

    let reads_bottom = read == Some(bottom);
    let writes_bottom = written == Some(bottom);
    if reads_bottom && !writes_bottom {
        return Err(DefinitionError::BottomMarkerRemoved(transition.to_string()));
    }
    if writes_bottom && !reads_bottom {
        return Err(DefinitionError::BottomMarkerPushed(transition.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l1() -> AutomatonBuilder {
        AutomatonBuilder::finite()
            .states(["q0", "q1"])
            .alphabet("01".chars())
            .initial("q0")
            .accepting(["q0"])
            .transition("q0", '0', "q1")
            .transition("q1", '1', "q0")
    }

    #[test]
    fn test_builder_complete() {
        let def = l1().build().unwrap();
        assert_eq!(def.states().len(), 2);
        assert_eq!(def.transitions().len(), 2);
        assert_eq!(def.initial_state(), &State::new("q0"));
        assert!(def.is_accepting(&State::new("q0")));
        assert!(def.initial_stack_symbol().is_none());
    }

    #[test]
    fn test_builder_missing_initial() {
        let result = AutomatonBuilder::finite().states(["q0"]).build();
        assert_eq!(result.unwrap_err(), DefinitionError::MissingInitialState);
    }

    #[test]
    fn test_builder_unknown_initial() {
        let result = l1().initial("q7").build();
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::UnknownInitialState(State::new("q7"))
        );
    }

    #[test]
    fn test_builder_unknown_accepting() {
        let result = l1().accepting(["q9"]).build();
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::UnknownAcceptingState(State::new("q9"))
        );
    }

    #[test]
    fn test_builder_epsilon_in_alphabet() {
        let result = l1().alphabet(['ε']).build();
        assert_eq!(result.unwrap_err(), DefinitionError::EpsilonInAlphabet);
    }

    #[test]
    fn test_builder_duplicate_key() {
        let result = l1().transition("q0", '0', "q0").build();
        assert!(matches!(
            result.unwrap_err(),
            DefinitionError::DuplicateTransition { .. }
        ));
    }

    #[test]
    fn test_builder_undeclared_transition_state() {
        let result = l1().transition("q1", '0', "trap").build();
        match result.unwrap_err() {
            DefinitionError::UnknownTransitionState { state, .. } => {
                assert_eq!(state, State::new("trap"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builder_symbol_outside_alphabet() {
        let result = l1().transition("q0", '2', "q1").build();
        assert!(matches!(
            result.unwrap_err(),
            DefinitionError::UnknownInputSymbol { .. }
        ));
    }

    #[test]
    fn test_builder_stack_in_finite_mode() {
        let result = l1()
            .stack_transition("q1", '0', StackTop::Any, "q1", StackPush::symbol("B"))
            .build();
        assert!(matches!(
            result.unwrap_err(),
            DefinitionError::StackInFiniteMode(_)
        ));

        let result = l1().stack_alphabet(["B"]).build();
        assert_eq!(result.unwrap_err(), DefinitionError::MissingInitialStackSymbol);
    }

    #[test]
    fn test_builder_bottom_marker_discipline() {
        let base = || {
            AutomatonBuilder::pushdown("Z0")
                .states(["p", "q"])
                .alphabet("a".chars())
                .stack_alphabet(["A"])
                .initial("p")
                .accepting(["q"])
        };

        let dropped = base()
            .stack_transition("p", Symbol::EPSILON, StackTop::symbol("Z0"), "q", StackPush::Nothing)
            .build();
        assert!(matches!(dropped.unwrap_err(), DefinitionError::BottomMarkerRemoved(_)));

        let pushed = base()
            .stack_transition("p", 'a', StackTop::Any, "q", StackPush::symbol("Z0"))
            .build();
        assert!(matches!(pushed.unwrap_err(), DefinitionError::BottomMarkerPushed(_)));

        let restored = base()
            .stack_transition("p", Symbol::EPSILON, StackTop::symbol("Z0"), "q", StackPush::symbol("Z0"))
            .build();
        assert!(restored.is_ok());
    }

    #[test]
    fn test_builder_undeclared_stack_symbol() {
        let result = AutomatonBuilder::pushdown("Z0")
            .states(["p"])
            .alphabet("a".chars())
            .initial("p")
            .stack_transition("p", 'a', StackTop::Any, "p", StackPush::symbol("X"))
            .build();
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::UnknownStackSymbol(StackSymbol::new("X"))
        );
    }

    #[test]
    fn test_builder_error_display() {
        assert!(DefinitionError::MissingInitialState
            .to_string()
            .contains("Initial state"));
    }
}
