//! Command parsing and execution
//!
//! Defines all REPL commands and their execution logic.

use super::state::ReplState;
use crate::catalog;
use crate::cli::commands::{format_check_report, format_definition, format_result};
use crate::report;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch exercise: use <id>
    Use {
        /// Exercise id
        id: String,
    },
    /// Run the active automaton: run <input> | <input>
    Run {
        /// Input string, already normalized (`ε` becomes empty)
        input: String,
    },
    /// Toggle trace display: trace [on|off]
    Trace {
        /// Enable or disable traces; toggles when absent
        enable: Option<bool>,
    },
    /// Show the transition table: table
    Table,
    /// Run the sample cases of the active exercise: check
    Check,
    /// List catalog exercises: list
    List,
    /// Load a definition file: load <path>
    Load {
        /// Path to the JSON definition
        path: PathBuf,
    },
    /// Show help: help
    Help,
    /// Exit REPL: exit | quit | salir
    Exit,
}

/// Command result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Continue REPL
    Continue(String),
    /// Exit REPL
    Exit,
    /// No output
    Silent,
}

/// Names the completer offers
pub const COMMAND_NAMES: &[&str] = &[
    "use", "run", "trace", "table", "check", "list", "load", "help", "exit", "quit", "salir",
];

impl Command {
    /// Parse command from input string
    ///
    /// A line that does not start with a command name is run as input.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(anyhow::anyhow!("Empty command"));
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "use" | "exercise" => Self::parse_use(args),
            "run" | "r" => Self::parse_run(args),
            "trace" => Self::parse_trace(args),
            "table" | "show" => Ok(Self::Table),
            "check" | "test" => Ok(Self::Check),
            "list" | "ls" => Ok(Self::List),
            "load" => Self::parse_load(args),
            "help" | "?" => Ok(Self::Help),
            "exit" | "quit" | "salir" => Ok(Self::Exit),
            _ if parts.len() == 1 => Ok(Self::Run {
                input: report::parse_input(parts[0]).to_string(),
            }),
            _ => Err(anyhow::anyhow!(
                "Unknown command: '{}'. Type 'help' for available commands.",
                cmd
            )),
        }
    }

    fn parse_use(args: &[&str]) -> Result<Self> {
        match args {
            [id] => Ok(Self::Use { id: id.to_string() }),
            _ => Err(anyhow::anyhow!("Usage: use <exercise>")),
        }
    }

    fn parse_run(args: &[&str]) -> Result<Self> {
        match args {
            [input] => Ok(Self::Run {
                input: report::parse_input(input).to_string(),
            }),
            _ => Err(anyhow::anyhow!("Usage: run <input>  (use ε for the empty string)")),
        }
    }

    fn parse_trace(args: &[&str]) -> Result<Self> {
        let enable = match args {
            [] => None,
            [flag] => Some(match flag.to_lowercase().as_str() {
                "on" | "true" | "yes" | "1" => true,
                "off" | "false" | "no" | "0" => false,
                _ => return Err(anyhow::anyhow!("Usage: trace [on|off]")),
            }),
            _ => return Err(anyhow::anyhow!("Usage: trace [on|off]")),
        };
        Ok(Self::Trace { enable })
    }

    fn parse_load(args: &[&str]) -> Result<Self> {
        match args {
            [path] => Ok(Self::Load {
                path: PathBuf::from(path),
            }),
            _ => Err(anyhow::anyhow!("Usage: load <path>")),
        }
    }

    /// Execute command
    pub fn execute(&self, state: &mut ReplState) -> Result<CommandResult> {
        match self {
            Self::Use { id } => {
                let exercise = state.use_exercise(id)?;
                Ok(CommandResult::Continue(format!(
                    "Using {} {}",
                    exercise.id.cyan().bold(),
                    exercise.language.dimmed()
                )))
            }

            Self::Run { input } => {
                let show_trace = state.show_trace;
                let result = state.run(input);
                Ok(CommandResult::Continue(format_result(input, result, show_trace)))
            }

            Self::Trace { enable } => {
                state.show_trace = enable.unwrap_or(!state.show_trace);
                let label = if state.show_trace {
                    "on".green()
                } else {
                    "off".yellow()
                };
                Ok(CommandResult::Continue(format!("Trace {label}")))
            }

            Self::Table => Ok(CommandResult::Continue(format_definition(
                &state.source.to_string(),
                &state.definition,
            ))),

            Self::Check => {
                let exercise = state.exercise().context(
                    "Sample cases are only available for catalog exercises. Use 'use <id>' first.",
                )?;
                let summary = report::check(exercise)?;
                Ok(CommandResult::Continue(format_check_report(exercise, &summary)))
            }

            Self::List => {
                let mut out = String::new();
                for exercise in catalog::catalog() {
                    let marker = match state.exercise() {
                        Some(active) if active.id == exercise.id => "*",
                        _ => " ",
                    };
                    let _ = writeln!(
                        out,
                        "{} {:<8} {}",
                        marker,
                        exercise.id.cyan(),
                        exercise.title
                    );
                }
                Ok(CommandResult::Continue(out.trim_end().to_string()))
            }

            Self::Load { path } => {
                state.load_from_file(path)?;
                Ok(CommandResult::Continue(format!(
                    "Loaded {}",
                    path.display().to_string().cyan()
                )))
            }

            Self::Help => Ok(CommandResult::Continue(Self::general_help())),

            Self::Exit => Ok(CommandResult::Exit),
        }
    }

    fn general_help() -> String {
        format!(
            r#"{}

{}
  use, exercise <id>        Switch to a catalog exercise
  list, ls                  List catalog exercises (* marks the active one)
  load <path>               Load a JSON definition file
  table, show               Show the transition table

{}
  run, r <input>            Run the active automaton over <input>
  <input>                   Same as run <input>
  trace [on|off]            Toggle step-by-step traces
  check, test               Run the sample cases of the active exercise

{}
  help, ?                   Show this help
  exit, quit, salir         Exit REPL

Use ε (or "") for the empty string.

{}
  automata> use abc
  automata> trace on
  automata> aabbcc
  automata> run ε
"#,
            "libautomata REPL - Interactive Automaton Explorer"
                .bold()
                .underline(),
            "Automata:".bold(),
            "Running:".bold(),
            "General:".bold(),
            "Examples:".bold(),
        )
    }
}
