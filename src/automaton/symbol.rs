//! Input and stack symbols.

use std::fmt;
use std::sync::Arc;

/// An input symbol.
///
/// Symbols are single characters. [`Symbol::EPSILON`] is reserved for
/// transitions that consume no input and can never be declared as part of an
/// alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Symbol(char);

impl Symbol {
    /// The epsilon marker used by transitions that consume no input.
    pub const EPSILON: Symbol = Symbol('ε');

    /// Wrap a character as a symbol.
    #[inline]
    pub const fn new(c: char) -> Self {
        Symbol(c)
    }

    /// The underlying character.
    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Check if this is the epsilon marker.
    #[inline]
    pub fn is_epsilon(self) -> bool {
        self == Self::EPSILON
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stack alphabet element, such as `Z0` or `B`.
///
/// Backed by a shared string so that configurations can be snapshotted into
/// a trace without copying symbol names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StackSymbol(Arc<str>);

impl StackSymbol {
    /// Create a stack symbol from its name.
    pub fn new(name: impl AsRef<str>) -> Self {
        StackSymbol(Arc::from(name.as_ref()))
    }

    /// The symbol name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StackSymbol {
    fn from(name: &str) -> Self {
        StackSymbol::new(name)
    }
}

impl From<String> for StackSymbol {
    fn from(name: String) -> Self {
        StackSymbol(Arc::from(name))
    }
}

impl fmt::Display for StackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
