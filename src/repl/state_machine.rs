//! REPL state machine
//!
//! Drives the read-eval-print cycle as explicit phases and events, so the
//! loop in the binary only feeds events and prints outputs.

use super::command::{Command, CommandResult};
use colored::Colorize;

/// REPL execution phase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReplPhase {
    /// Ready to accept new input
    #[default]
    Ready,

    /// A parsed command is waiting to be executed
    Executing {
        /// The command being executed
        command: Command,
    },

    /// Exiting the REPL
    Exiting,
}

impl ReplPhase {
    /// Check if the phase is terminal (requires exit)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exiting)
    }
}

/// REPL event
#[derive(Debug, Clone)]
pub enum ReplEvent {
    /// User submitted a line of input
    LineSubmitted {
        /// The input line
        line: String,
    },

    /// Command execution completed
    CommandExecuted {
        /// The execution result
        result: CommandResult,
    },

    /// Command execution failed
    ExecutionError {
        /// Error message
        message: String,
    },

    /// User interrupted (Ctrl+C)
    Interrupted,

    /// End of file (Ctrl+D)
    Eof,
}

/// State transition result
#[derive(Debug)]
pub struct Transition {
    /// New phase after transition
    pub new_phase: ReplPhase,
    /// Optional output message
    pub output: Option<String>,
}

impl Transition {
    /// Create a transition with no output
    pub fn to(phase: ReplPhase) -> Self {
        Self {
            new_phase: phase,
            output: None,
        }
    }

    /// Create a transition with output
    pub fn to_with_output(phase: ReplPhase, output: String) -> Self {
        Self {
            new_phase: phase,
            output: Some(output),
        }
    }
}

/// State machine for REPL execution
#[derive(Debug, Default)]
pub struct ReplStateMachine {
    phase: ReplPhase,
}

impl ReplStateMachine {
    /// Create a new state machine in Ready phase
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current phase
    pub fn phase(&self) -> &ReplPhase {
        &self.phase
    }

    /// The command awaiting execution, if any
    pub fn pending_command(&self) -> Option<&Command> {
        match &self.phase {
            ReplPhase::Executing { command } => Some(command),
            _ => None,
        }
    }

    /// Check if the state machine is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Process an event and transition to a new state
    pub fn process_event(&mut self, event: ReplEvent) -> Transition {
        let transition = match (&self.phase, event) {
            (ReplPhase::Ready, ReplEvent::LineSubmitted { line }) => {
                if line.trim().is_empty() {
                    Transition::to(ReplPhase::Ready)
                } else {
                    match Command::parse(&line) {
                        Ok(command) => Transition::to(ReplPhase::Executing { command }),
                        Err(e) => Transition::to_with_output(
                            ReplPhase::Ready,
                            format!("{}: {}", "Parse error".red().bold(), e),
                        ),
                    }
                }
            }

            (ReplPhase::Executing { .. }, ReplEvent::CommandExecuted { result }) => match result {
                CommandResult::Continue(output) if !output.is_empty() => {
                    Transition::to_with_output(ReplPhase::Ready, output)
                }
                CommandResult::Continue(_) | CommandResult::Silent => Transition::to(ReplPhase::Ready),
                CommandResult::Exit => {
                    Transition::to_with_output(ReplPhase::Exiting, "Goodbye!".green().to_string())
                }
            },

            (ReplPhase::Executing { .. }, ReplEvent::ExecutionError { message }) => {
                Transition::to_with_output(
                    ReplPhase::Ready,
                    format!("{}: {}", "Error".red().bold(), message),
                )
            }

            (ReplPhase::Exiting, _) => Transition::to(ReplPhase::Exiting),

            (_, ReplEvent::Interrupted) => Transition::to_with_output(
                ReplPhase::Ready,
                "^C (Use 'exit' or Ctrl+D to quit)".yellow().to_string(),
            ),

            (_, ReplEvent::Eof) => {
                Transition::to_with_output(ReplPhase::Exiting, "Goodbye!".green().to_string())
            }

            (current, event) => {
                tracing::warn!(?event, phase = ?current, "unexpected REPL event");
                Transition::to(ReplPhase::Ready)
            }
        };

        self.phase = transition.new_phase.clone();
        transition
    }

    /// Reset to Ready phase
    pub fn reset(&mut self) {
        self.phase = ReplPhase::Ready;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(sm: &mut ReplStateMachine, line: &str) -> Transition {
        sm.process_event(ReplEvent::LineSubmitted {
            line: line.to_string(),
        })
    }

    #[test]
    fn test_ready_to_executing() {
        let mut sm = ReplStateMachine::new();
        assert_eq!(sm.phase(), &ReplPhase::Ready);

        submit(&mut sm, "help");
        assert_eq!(sm.pending_command(), Some(&Command::Help));
    }

    #[test]
    fn test_executed_returns_to_ready() {
        let mut sm = ReplStateMachine::new();
        submit(&mut sm, "table");

        let transition = sm.process_event(ReplEvent::CommandExecuted {
            result: CommandResult::Continue("done".to_string()),
        });
        assert_eq!(transition.output.as_deref(), Some("done"));
        assert_eq!(sm.phase(), &ReplPhase::Ready);
    }

    #[test]
    fn test_parse_error_stays_ready() {
        let mut sm = ReplStateMachine::new();
        let transition = submit(&mut sm, "use");
        assert!(transition.output.is_some());
        assert_eq!(sm.phase(), &ReplPhase::Ready);
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut sm = ReplStateMachine::new();
        let transition = submit(&mut sm, "   ");
        assert!(transition.output.is_none());
        assert_eq!(sm.phase(), &ReplPhase::Ready);
    }

    #[test]
    fn test_exit_command() {
        let mut sm = ReplStateMachine::new();
        submit(&mut sm, "quit");
        sm.process_event(ReplEvent::CommandExecuted {
            result: CommandResult::Exit,
        });
        assert!(sm.is_terminal());

        submit(&mut sm, "help");
        assert!(sm.is_terminal());
    }

    #[test]
    fn test_interrupt_recovery() {
        let mut sm = ReplStateMachine::new();
        submit(&mut sm, "01");
        sm.process_event(ReplEvent::Interrupted);
        assert_eq!(sm.phase(), &ReplPhase::Ready);
    }

    #[test]
    fn test_eof_exits() {
        let mut sm = ReplStateMachine::new();
        sm.process_event(ReplEvent::Eof);
        assert!(sm.is_terminal());
    }
}
