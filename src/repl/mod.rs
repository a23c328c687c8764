//! Interactive REPL for libautomata
//!
//! A Read-Eval-Print Loop for switching between automata, running inputs and
//! inspecting traces interactively.

pub mod command;
pub mod helper;
pub mod state;
pub mod state_machine;

pub use command::{Command, CommandResult};
pub use helper::AutomataHelper;
pub use state::ReplState;
pub use state_machine::{ReplEvent, ReplPhase, ReplStateMachine, Transition};

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<std::path::PathBuf>,
    /// Maximum history entries
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "automata> ".to_string(),
            history_file: crate::cli::paths::history_file_path().ok(),
            max_history: 1000,
        }
    }
}
