//! CLI interface for libautomata
//!
//! Provides command-line utilities for inspecting and running automata.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, OutputFormat, SourceArgs};
pub use paths::{config_dir, PersistentConfig};
