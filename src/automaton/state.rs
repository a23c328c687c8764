//! State identifiers.

use std::fmt;
use std::sync::Arc;

/// An opaque state identifier such as `q0`.
///
/// Cloning is a reference-count bump, so traces can hold one per step.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct State(Arc<str>);

impl State {
    /// Create a state from its name.
    pub fn new(name: impl AsRef<str>) -> Self {
        State(Arc::from(name.as_ref()))
    }

    /// The state name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        State::new(name)
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        State(Arc::from(name))
    }
}

impl From<&State> for State {
    fn from(state: &State) -> Self {
        state.clone()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
