//! Transition table entries.

use super::state::State;
use super::symbol::{StackSymbol, Symbol};
use std::fmt;

/// The stack component a transition reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum StackTop {
    /// Ignore the stack; matches any configuration.
    Any,
    /// Require this symbol on top of the stack and pop it.
    Symbol(StackSymbol),
}

impl StackTop {
    /// Shorthand for `StackTop::Symbol`.
    pub fn symbol(name: impl Into<StackSymbol>) -> Self {
        StackTop::Symbol(name.into())
    }

    /// The concrete symbol, if any.
    pub fn as_symbol(&self) -> Option<&StackSymbol> {
        match self {
            StackTop::Any => None,
            StackTop::Symbol(s) => Some(s),
        }
    }

    /// Check whether this component accepts the given stack top.
    #[inline]
    pub fn matches(&self, top: Option<&StackSymbol>) -> bool {
        match self {
            StackTop::Any => true,
            StackTop::Symbol(expected) => top == Some(expected),
        }
    }
}

impl fmt::Display for StackTop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackTop::Any => write!(f, "{}", Symbol::EPSILON),
            StackTop::Symbol(s) => write!(f, "{s}"),
        }
    }
}

/// The stack component a transition writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum StackPush {
    /// Leave the stack as it is after the (optional) pop.
    Nothing,
    /// Push exactly one symbol.
    Symbol(StackSymbol),
}

impl StackPush {
    /// Shorthand for `StackPush::Symbol`.
    pub fn symbol(name: impl Into<StackSymbol>) -> Self {
        StackPush::Symbol(name.into())
    }

    /// The concrete symbol, if any.
    pub fn as_symbol(&self) -> Option<&StackSymbol> {
        match self {
            StackPush::Nothing => None,
            StackPush::Symbol(s) => Some(s),
        }
    }
}

impl fmt::Display for StackPush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackPush::Nothing => write!(f, "{}", Symbol::EPSILON),
            StackPush::Symbol(s) => write!(f, "{s}"),
        }
    }
}

/// Lookup key of a transition. Unique within a definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionKey {
    /// Source state
    pub source: State,
    /// Input symbol or [`Symbol::EPSILON`]
    pub input: Symbol,
    /// Stack component read
    pub stack_top: StackTop,
}

/// A single transition `(source, input, stack_top) → (target, push)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// State the transition leaves from
    pub source: State,
    /// Symbol consumed, or [`Symbol::EPSILON`] for a move that consumes nothing
    pub input: Symbol,
    /// Stack component read (and popped when concrete)
    pub stack_top: StackTop,
    /// State the transition enters
    pub target: State,
    /// Stack component pushed after the pop
    pub push: StackPush,
}

impl Transition {
    /// A finite-state move on `input` that leaves the stack alone.
    pub fn new(source: impl Into<State>, input: impl Into<Symbol>, target: impl Into<State>) -> Self {
        Self {
            source: source.into(),
            input: input.into(),
            stack_top: StackTop::Any,
            target: target.into(),
            push: StackPush::Nothing,
        }
    }

    /// Check if this transition consumes no input.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        self.input.is_epsilon()
    }

    /// Check if this transition reads or writes the stack.
    pub fn touches_stack(&self) -> bool {
        !matches!((&self.stack_top, &self.push), (StackTop::Any, StackPush::Nothing))
    }

    /// The lookup key of this transition.
    pub fn key(&self) -> TransitionKey {
        TransitionKey {
            source: self.source.clone(),
            input: self.input,
            stack_top: self.stack_top.clone(),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "δ({}, {}", self.source, self.input)?;
        if self.touches_stack() {
            write!(f, ", {}) = ({}, {})", self.stack_top, self.target, self.push)
        } else {
            write!(f, ") = {}", self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_top_matching() {
        let z0 = StackSymbol::new("Z0");
        let b = StackSymbol::new("B");

        assert!(StackTop::Any.matches(None));
        assert!(StackTop::Any.matches(Some(&z0)));
        assert!(StackTop::symbol("Z0").matches(Some(&z0)));
        assert!(!StackTop::symbol("Z0").matches(Some(&b)));
        assert!(!StackTop::symbol("Z0").matches(None));
    }

    #[test]
    fn test_transition_display() {
        let finite = Transition::new("q0", '0', "q1");
        assert_eq!(finite.to_string(), "δ(q0, 0) = q1");

        let pushdown = Transition {
            source: State::new("q2"),
            input: Symbol::new('c'),
            stack_top: StackTop::symbol("B"),
            target: State::new("q3"),
            push: StackPush::Nothing,
        };
        assert_eq!(pushdown.to_string(), "δ(q2, c, B) = (q3, ε)");
    }

    #[test]
    fn test_key_ignores_target() {
        let a = Transition::new("q0", '0', "q1");
        let b = Transition::new("q0", '0', "q2");
        assert_eq!(a.key(), b.key());
        assert!(!a.touches_stack());
    }
}
