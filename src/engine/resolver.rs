//! Transition resolution.

use crate::automaton::{AutomatonDefinition, StackSymbol, State, Symbol, Transition};

/// Finds the transition that applies to a configuration.
///
/// Resolution is first-match and never backtracks: transitions leaving the
/// current state are scanned in declaration order and the first one whose
/// input and stack components both match is returned. If that choice later
/// leads to a stuck configuration the engine does not come back to try the
/// alternatives.
#[derive(Debug, Clone, Copy)]
pub struct TransitionResolver<'a> {
    definition: &'a AutomatonDefinition,
}

impl<'a> TransitionResolver<'a> {
    /// Create a resolver over a definition.
    pub fn new(definition: &'a AutomatonDefinition) -> Self {
        Self { definition }
    }

    /// Resolve the move for `state` reading `lookahead` with `stack_top`.
    ///
    /// `lookahead` is matched exactly: a real symbol only selects moves on
    /// that symbol, and [`Symbol::EPSILON`] only selects epsilon moves.
    pub fn resolve(
        &self,
        state: &State,
        lookahead: Symbol,
        stack_top: Option<&StackSymbol>,
    ) -> Option<&'a Transition> {
        self.definition
            .transitions_from(state)
            .find(|t| t.input == lookahead && t.stack_top.matches(stack_top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{AutomatonBuilder, StackPush, StackTop};

    fn pda() -> AutomatonDefinition {
        AutomatonBuilder::pushdown("Z0")
            .states(["q2", "q3", "qf"])
            .alphabet("bc".chars())
            .stack_alphabet(["B"])
            .initial("q2")
            .accepting(["qf"])
            .stack_transition("q2", 'b', StackTop::Any, "q2", StackPush::symbol("B"))
            .stack_transition("q2", 'c', StackTop::symbol("B"), "q3", StackPush::Nothing)
            .stack_transition("q3", 'c', StackTop::symbol("B"), "q3", StackPush::Nothing)
            .stack_transition("q3", Symbol::EPSILON, StackTop::symbol("Z0"), "qf", StackPush::symbol("Z0"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_concrete_stack_top() {
        let def = pda();
        let resolver = TransitionResolver::new(&def);
        let b = StackSymbol::new("B");
        let z0 = StackSymbol::new("Z0");

        let hit = resolver.resolve(&State::new("q2"), Symbol::new('c'), Some(&b));
        assert_eq!(hit.map(|t| t.target.name()), Some("q3"));

        assert!(resolver
            .resolve(&State::new("q2"), Symbol::new('c'), Some(&z0))
            .is_none());
        assert!(resolver
            .resolve(&State::new("q2"), Symbol::new('c'), None)
            .is_none());
    }

    #[test]
    fn test_resolve_wildcard_matches_any_top() {
        let def = pda();
        let resolver = TransitionResolver::new(&def);
        for top in [None, Some(StackSymbol::new("Z0")), Some(StackSymbol::new("B"))] {
            let hit = resolver.resolve(&State::new("q2"), Symbol::new('b'), top.as_ref());
            assert!(hit.is_some());
        }
    }

    #[test]
    fn test_epsilon_only_matches_epsilon_moves() {
        let def = pda();
        let resolver = TransitionResolver::new(&def);
        let z0 = StackSymbol::new("Z0");

        assert!(resolver
            .resolve(&State::new("q3"), Symbol::new('c'), Some(&z0))
            .is_none());
        let settle = resolver.resolve(&State::new("q3"), Symbol::EPSILON, Some(&z0));
        assert_eq!(settle.map(|t| t.target.name()), Some("qf"));
    }

    #[test]
    fn test_first_declared_match_wins() {
        let def = AutomatonBuilder::pushdown("Z0")
            .states(["p", "first", "second"])
            .alphabet("a".chars())
            .stack_alphabet(["A"])
            .initial("p")
            .stack_transition("p", 'a', StackTop::Any, "first", StackPush::Nothing)
            .stack_transition("p", 'a', StackTop::symbol("Z0"), "second", StackPush::symbol("Z0"))
            .build()
            .unwrap();
        let resolver = TransitionResolver::new(&def);
        let z0 = StackSymbol::new("Z0");

        let hit = resolver.resolve(&State::new("p"), Symbol::new('a'), Some(&z0));
        assert_eq!(hit.map(|t| t.target.name()), Some("first"));
    }
}
