//! libautomata - Finite-state and pushdown acceptor simulation
//!
//! Provides CLI utilities and an interactive REPL for running automata.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use libautomata::cli::commands;
use libautomata::cli::paths::PersistentConfig;
use libautomata::cli::{Cli, Commands};
use libautomata::repl::{AutomataHelper, ReplConfig, ReplEvent, ReplState, ReplStateMachine};
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("libautomata=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("libautomata=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = PersistentConfig::load_from(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Repl { exercise, trace } => {
                let merged = config.merge_with_cli(exercise, trace.then_some(true));
                run_repl(&merged)
            }
            command => commands::execute(command, &config, cli.config.as_deref()),
        }
    });

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run_repl(config: &PersistentConfig) -> anyhow::Result<()> {
    let mut state = ReplState::new(config.exercise_or_default(), config.trace_enabled())?;

    print_banner(&state);

    let repl_config = ReplConfig::default();

    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .max_history_size(repl_config.max_history)?
        .build();

    let mut editor: Editor<AutomataHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rustyline_config)?;
    editor.set_helper(Some(AutomataHelper::new()));

    if let Some(history_path) = &repl_config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    let mut state_machine = ReplStateMachine::new();

    while !state_machine.is_terminal() {
        let prompt = format!(
            "{} {}",
            format!("[{}]", state.source).bright_yellow(),
            repl_config.prompt.bright_cyan().bold()
        );

        let event = match editor.readline(&prompt) {
            Ok(line) => ReplEvent::LineSubmitted { line },
            Err(ReadlineError::Interrupted) => ReplEvent::Interrupted,
            Err(ReadlineError::Eof) => ReplEvent::Eof,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        };

        let transition = state_machine.process_event(event);
        if let Some(output) = transition.output {
            println!("{output}");
        }

        let Some(command) = state_machine.pending_command().cloned() else {
            continue;
        };

        let follow_up = match command.execute(&mut state) {
            Ok(result) => ReplEvent::CommandExecuted { result },
            Err(e) => ReplEvent::ExecutionError {
                message: format!("{e:#}"),
            },
        };
        if let Some(output) = state_machine.process_event(follow_up).output {
            println!("{output}");
        }
    }

    if let Some(history_path) = &repl_config.history_file {
        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = editor.save_history(history_path) {
            eprintln!("{}: Failed to save history: {}", "Warning".yellow(), e);
        }
    }

    Ok(())
}

fn print_banner(state: &ReplState) {
    let rule = "═══════════════════════════════════════════════════════".bright_cyan();
    println!();
    println!("{rule}");
    println!(
        "{}",
        "   libautomata - Automaton Simulator".bright_cyan().bold()
    );
    println!("{rule}");
    println!();
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!("  Active:  {}", state.source.to_string().cyan());
    println!("  Type {} for available commands", "'help'".yellow().bold());
    println!(
        "  Type {} or press {} to exit",
        "'exit'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!();
}
