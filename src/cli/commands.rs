//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fmt::Write as _;
use std::path::Path;

use crate::automaton::{AutomatonDefinition, Mode};
use crate::catalog::{self, Exercise};
use crate::engine::{run, RunResult};
use crate::report::{self, CheckReport};
use crate::serialization::{load_definition, save_definition};

use super::args::{Commands, OutputFormat, SourceArgs};
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Execute a CLI command
///
/// `config` is the stored configuration; `config_path` is the `--config`
/// override, if any, used when the command writes the configuration back.
pub fn execute(command: Commands, config: &PersistentConfig, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Repl { .. } => {
            // Handled in main.rs
            bail!("The REPL must be started from the libautomata binary");
        }
        Commands::List => cmd_list(),
        Commands::Table { source } => cmd_table(&source, config),
        Commands::Run {
            source,
            trace,
            output,
            json,
            inputs,
        } => {
            let merged = config.merge_with_cli(None, trace.then_some(true));
            let output = if json { OutputFormat::Json } else { output };
            cmd_run(&source, &merged, output, &inputs)
        }
        Commands::Check { exercise } => cmd_check(exercise.as_deref()),
        Commands::Export { exercise, output } => cmd_export(&exercise, &output),
        Commands::Config {
            default_exercise,
            show_trace,
            reset,
        } => cmd_config(default_exercise, show_trace, reset, config_path),
    }
}

/// Look up a catalog exercise, with a helpful error.
pub fn find_exercise(id: &str) -> Result<&'static Exercise> {
    catalog::find(id).with_context(|| {
        let known: Vec<&str> = catalog::ids().collect();
        format!("Unknown exercise '{}'. Available: {}", id, known.join(", "))
    })
}

/// Resolve a `-e`/`-f` pair to a definition and a display label.
pub fn load_source(source: &SourceArgs, config: &PersistentConfig) -> Result<(String, AutomatonDefinition)> {
    if let Some(path) = &source.file {
        let definition = load_definition(path)
            .with_context(|| format!("Failed to load definition: {}", path.display()))?;
        return Ok((path.display().to_string(), definition));
    }

    let id = source
        .exercise
        .as_deref()
        .unwrap_or_else(|| config.exercise_or_default());
    let exercise = find_exercise(id)?;
    let definition = exercise
        .definition()
        .with_context(|| format!("Exercise '{}' has an invalid definition", exercise.id))?;
    Ok((exercise.id.to_string(), definition))
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Finite => "finite",
        Mode::Pushdown => "pushdown",
    }
}

/// List command
fn cmd_list() -> Result<()> {
    println!("{}", "Exercises".bold().underline());
    println!();
    for exercise in catalog::catalog() {
        let mode = exercise
            .definition()
            .map(|d| mode_label(d.mode()))
            .unwrap_or("invalid");
        println!(
            "  {:<8} {:<9} {}",
            exercise.id.cyan().bold(),
            mode.dimmed(),
            exercise.title
        );
        println!("  {:<8} {:<9} {}", "", "", exercise.language.dimmed());
    }
    Ok(())
}

/// Render a definition summary and its transition table.
pub fn format_definition(label: &str, definition: &AutomatonDefinition) -> String {
    let mut out = format!(
        "{} ({})\n\n",
        label.bold().underline(),
        mode_label(definition.mode())
    );
    for line in report::transition_table(definition).lines() {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Initial state:    {}",
        definition.initial_state().to_string().cyan()
    );
    let accepting: Vec<String> = definition
        .accepting_states()
        .iter()
        .map(ToString::to_string)
        .collect();
    let _ = write!(out, "  Accepting states: {}", accepting.join(", ").green());
    if let Some(bottom) = definition.initial_stack_symbol() {
        let _ = write!(out, "\n  Initial stack:    {}", bottom.to_string().yellow());
    }
    out
}

/// Table command
fn cmd_table(source: &SourceArgs, config: &PersistentConfig) -> Result<()> {
    let (label, definition) = load_source(source, config)?;
    println!("{}", format_definition(&label, &definition));
    Ok(())
}

/// Render the outcome of one run, optionally followed by its narration.
pub fn format_result(input: &str, result: &RunResult, show_trace: bool) -> String {
    let shown = report::display_input(input);
    let mut out = if result.accepted() {
        format!(
            "{} {}  (final state {})",
            "✓ accepted".green().bold(),
            shown.cyan(),
            result.final_state
        )
    } else {
        let reason = result
            .rejection()
            .map(ToString::to_string)
            .unwrap_or_default();
        format!(
            "{} {}  (final state {}: {})",
            "✗ rejected".red().bold(),
            shown.cyan(),
            result.final_state,
            reason.yellow()
        )
    };

    if show_trace {
        for line in report::narrate(result) {
            let _ = write!(out, "\n    {}", line.dimmed());
        }
    }
    out
}

#[derive(serde::Serialize)]
struct RunOutput<'a> {
    input: &'a str,
    accepted: bool,
    #[serde(flatten)]
    result: &'a RunResult,
}

/// Run command
fn cmd_run(
    source: &SourceArgs,
    config: &PersistentConfig,
    output: OutputFormat,
    inputs: &[String],
) -> Result<()> {
    let (_, definition) = load_source(source, config)?;

    for raw in inputs {
        let input = report::parse_input(raw);
        let result = run(&definition, input);
        match output {
            OutputFormat::Text => println!("{}", format_result(input, &result, config.trace_enabled())),
            OutputFormat::Json => {
                let document = RunOutput {
                    input,
                    accepted: result.accepted(),
                    result: &result,
                };
                println!("{}", serde_json::to_string_pretty(&document)?);
            }
        }
    }
    Ok(())
}

/// Render a check report as a table.
pub fn format_check_report(exercise: &Exercise, summary: &CheckReport) -> String {
    let verdict = |accepted: bool| if accepted { "accept" } else { "reject" };
    let mut out = format!(
        "{} {}\n  {:<16} {:<10} {:<10} {}\n",
        exercise.id.bold().underline(),
        exercise.language.dimmed(),
        "Input",
        "Expected",
        "Obtained",
        "Final state"
    );
    for outcome in &summary.outcomes {
        let mark = if outcome.matches() {
            "✓".green()
        } else {
            "✗".red()
        };
        let _ = writeln!(
            out,
            "{} {:<16} {:<10} {:<10} {}",
            mark,
            report::display_input(&outcome.input),
            verdict(outcome.expected),
            verdict(outcome.obtained),
            outcome.final_state
        );
    }

    if summary.all_passed() {
        let _ = write!(out, "  {}", "All cases passed".green().bold());
    } else {
        let failed = summary.mismatches().count();
        let _ = write!(out, "  {}", format!("{failed} case(s) failed").red().bold());
    }
    out
}

/// Check command
fn cmd_check(exercise: Option<&str>) -> Result<()> {
    let exercises: Vec<&Exercise> = match exercise {
        Some(id) => vec![find_exercise(id)?],
        None => catalog::catalog().iter().collect(),
    };

    let mut failed = Vec::new();
    for exercise in exercises {
        let summary = report::check(exercise)
            .with_context(|| format!("Exercise '{}' has an invalid definition", exercise.id))?;
        println!("{}\n", format_check_report(exercise, &summary));
        if !summary.all_passed() {
            failed.push(exercise.id);
        }
    }

    if !failed.is_empty() {
        bail!("Sample cases failed for: {}", failed.join(", "));
    }
    Ok(())
}

/// Export command
fn cmd_export(id: &str, output: &Path) -> Result<()> {
    let exercise = find_exercise(id)?;
    let definition = exercise.definition()?;
    save_definition(&definition, output)
        .with_context(|| format!("Failed to write definition: {}", output.display()))?;
    println!(
        "{} {} to {}",
        "Exported".green().bold(),
        exercise.id.cyan(),
        output.display()
    );
    Ok(())
}

fn print_config(config: &PersistentConfig) {
    println!(
        "  Default exercise: {}",
        config
            .default_exercise
            .as_deref()
            .unwrap_or("(none)")
            .cyan()
    );
    println!(
        "  Show trace:       {}",
        config.trace_enabled().to_string().cyan()
    );
}

/// Config command
fn cmd_config(
    default_exercise: Option<String>,
    show_trace: Option<bool>,
    reset: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let path = config_file_path_with_override(config_path)?;

    if reset {
        let config = PersistentConfig::default();
        config.save_to(Some(&path))?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config);
        return Ok(());
    }

    let mut config = PersistentConfig::load_from(Some(&path))?;
    let mut changed = false;

    if let Some(id) = default_exercise {
        let exercise = find_exercise(&id)?;
        config.default_exercise = Some(exercise.id.to_string());
        println!("  Set default exercise: {}", exercise.id.green());
        changed = true;
    }

    if let Some(show) = show_trace {
        config.show_trace = Some(show);
        println!("  Set show trace: {}", show.to_string().green());
        changed = true;
    }

    if changed {
        config.save_to(Some(&path))?;
        println!();
        println!("{}", "Configuration saved".green().bold());
    } else {
        println!("{}", "Current Configuration".bold().underline());
        println!();
        println!("  Config file:      {}", path.display().to_string().dimmed());
        print_config(&config);
    }
    Ok(())
}
