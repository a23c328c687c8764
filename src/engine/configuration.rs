//! Run-time configurations and the pushdown stack.

use crate::automaton::{StackSymbol, State};
use smallvec::SmallVec;
use std::fmt;

/// The pushdown stack. Index 0 is the bottom.
///
/// Stacks up to eight symbols deep stay inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Stack {
    symbols: SmallVec<[StackSymbol; 8]>,
}

impl Stack {
    /// An empty stack, as carried by finite-state runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack holding only the bottom marker.
    pub fn with_bottom(bottom: StackSymbol) -> Self {
        let mut symbols = SmallVec::new();
        symbols.push(bottom);
        Self { symbols }
    }

    /// The top symbol, if any.
    #[inline]
    pub fn top(&self) -> Option<&StackSymbol> {
        self.symbols.last()
    }

    /// Push one symbol.
    #[inline]
    pub fn push(&mut self, symbol: StackSymbol) {
        self.symbols.push(symbol);
    }

    /// Pop the top symbol.
    #[inline]
    pub fn pop(&mut self) -> Option<StackSymbol> {
        self.symbols.pop()
    }

    /// Number of symbols, bottom marker included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the stack holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check if the stack holds exactly `symbol` and nothing else.
    pub fn is_only(&self, symbol: &StackSymbol) -> bool {
        self.symbols.len() == 1 && self.symbols[0] == *symbol
    }

    /// Symbols from bottom to top.
    pub fn as_slice(&self) -> &[StackSymbol] {
        &self.symbols
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}")?;
        }
        f.write_str("]")
    }
}

/// A snapshot of a run: current state, input position and stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    /// Current state
    pub state: State,
    /// Index of the next unread input symbol
    pub position: usize,
    /// Stack contents; empty for finite-state runs
    pub stack: Stack,
}

impl Configuration {
    /// Create a configuration.
    pub fn new(state: State, position: usize, stack: Stack) -> Self {
        Self {
            state,
            position,
            stack,
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stack.is_empty() {
            write!(f, "({}, {})", self.state, self.position)
        } else {
            write!(f, "({}, {}, {})", self.state, self.position, self.stack)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_push_pop() {
        let mut stack = Stack::with_bottom(StackSymbol::new("Z0"));
        assert!(stack.is_only(&StackSymbol::new("Z0")));

        stack.push(StackSymbol::new("B"));
        stack.push(StackSymbol::new("B"));
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top(), Some(&StackSymbol::new("B")));
        assert!(!stack.is_only(&StackSymbol::new("Z0")));

        assert_eq!(stack.pop(), Some(StackSymbol::new("B")));
        assert_eq!(stack.pop(), Some(StackSymbol::new("B")));
        assert!(stack.is_only(&StackSymbol::new("Z0")));
    }

    #[test]
    fn test_empty_stack() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_configuration_display() {
        let mut stack = Stack::with_bottom(StackSymbol::new("Z0"));
        stack.push(StackSymbol::new("B"));
        let config = Configuration::new(State::new("q2"), 2, stack);
        assert_eq!(config.to_string(), "(q2, 2, [Z0, B])");

        let finite = Configuration::new(State::new("q0"), 0, Stack::new());
        assert_eq!(finite.to_string(), "(q0, 0)");
    }
}
