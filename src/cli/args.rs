//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface
#[derive(Parser)]
#[command(name = "libautomata")]
#[command(about = "Simulate finite-state and pushdown automata")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine activity (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where an automaton comes from: a catalog exercise or a definition file.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Catalog exercise id (see `list`)
    #[arg(short, long, conflicts_with = "file")]
    pub exercise: Option<String>,

    /// JSON definition file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Top-level subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// List the catalog exercises
    List,

    /// Print the transition table of an automaton
    Table {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Run an automaton over one or more inputs
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Print a step-by-step trace of each run
        #[arg(short, long)]
        trace: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        output: OutputFormat,

        /// Shorthand for `--output json`
        #[arg(long, conflicts_with = "output")]
        json: bool,

        /// Inputs; use "ε" or "" for the empty string
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },

    /// Run the sample cases of one exercise, or of all of them
    Check {
        /// Catalog exercise id
        #[arg(short, long)]
        exercise: Option<String>,
    },

    /// Write a catalog exercise as a JSON definition file
    Export {
        /// Catalog exercise id
        #[arg(short, long)]
        exercise: String,

        /// Output file
        output: PathBuf,
    },

    /// Show or update user settings
    Config {
        /// Set the default exercise
        #[arg(long)]
        default_exercise: Option<String>,

        /// Show traces by default
        #[arg(long, action = clap::ArgAction::Set)]
        show_trace: Option<bool>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Launch interactive REPL
    Repl {
        /// Exercise to start with
        #[arg(short, long)]
        exercise: Option<String>,

        /// Show traces after each run
        #[arg(short, long)]
        trace: bool,
    },
}

/// How `run` prints its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// One JSON document per input
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
