//! Plain-text presentation of definitions and runs.
//!
//! Nothing here writes to stdout; callers decide where the text goes and
//! how to decorate it.

use crate::automaton::{AutomatonDefinition, Mode, StackPush, StackTop, State, Symbol, Transition};
use crate::catalog::Exercise;
use crate::engine::{run, RunResult};
use crate::error::Result;
use std::fmt::Write as _;

/// Render an input string, showing the empty string as `ε`.
pub fn display_input(input: &str) -> String {
    if input.is_empty() {
        Symbol::EPSILON.to_string()
    } else {
        input.to_string()
    }
}

/// Interpret user-typed input: `ε` and `""` both stand for the empty string.
pub fn parse_input(raw: &str) -> &str {
    let epsilon = Symbol::EPSILON.as_char();
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c == epsilon => "",
        _ if raw == "\"\"" => "",
        _ => raw,
    }
}

/// Render the transition table of `definition`.
///
/// One row per state in declaration order, `→` marking the initial state
/// and `*` the accepting ones. One column per alphabet symbol, plus `ε`
/// when the definition has epsilon moves. Pushdown cells read
/// `target (top/push)`; empty cells show `∅`.
pub fn transition_table(definition: &AutomatonDefinition) -> String {
    let mut columns: Vec<Symbol> = definition.alphabet().iter().copied().collect();
    if definition.has_epsilon_moves() {
        columns.push(Symbol::EPSILON);
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(definition.states().len() + 1);
    let mut header = vec!["State".to_string()];
    header.extend(columns.iter().map(Symbol::to_string));
    rows.push(header);

    for state in definition.states() {
        let mut row = vec![row_label(definition, state)];
        for &symbol in &columns {
            let cell: Vec<String> = definition
                .transitions_from(state)
                .filter(|t| t.input == symbol)
                .map(|t| render_cell(definition.mode(), t))
                .collect();
            row.push(if cell.is_empty() {
                "∅".to_string()
            } else {
                cell.join(", ")
            });
        }
        rows.push(row);
    }

    let widths: Vec<usize> = (0..rows[0].len())
        .map(|col| rows.iter().map(|r| r[col].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| pad(cell, width))
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
            out.push_str(&rule.join("-+-"));
            out.push('\n');
        }
    }
    out
}

fn row_label(definition: &AutomatonDefinition, state: &State) -> String {
    let initial = if state == definition.initial_state() { "→" } else { " " };
    let accepting = if definition.is_accepting(state) { "*" } else { " " };
    format!("{initial}{accepting}{state}")
}

fn render_cell(mode: Mode, transition: &Transition) -> String {
    match mode {
        Mode::Finite => transition.target.to_string(),
        Mode::Pushdown => format!(
            "{} ({}/{})",
            transition.target, transition.stack_top, transition.push
        ),
    }
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{cell}{}", " ".repeat(width.saturating_sub(len)))
}

/// Describe what a transition does to the stack.
pub fn stack_operation(transition: &Transition) -> String {
    match (&transition.stack_top, &transition.push) {
        (StackTop::Any, StackPush::Nothing) => "no stack change".to_string(),
        (StackTop::Any, StackPush::Symbol(pushed)) => format!("push({pushed})"),
        (StackTop::Symbol(popped), StackPush::Nothing) => format!("pop({popped})"),
        (StackTop::Symbol(popped), StackPush::Symbol(pushed)) if popped == pushed => {
            format!("replace({popped})")
        }
        (StackTop::Symbol(popped), StackPush::Symbol(pushed)) => {
            format!("replace({popped}, {pushed})")
        }
    }
}

/// Narrate a run step by step.
///
/// The first line shows the initial configuration, then one line per
/// applied transition, then the verdict.
pub fn narrate(result: &RunResult) -> Vec<String> {
    let entries = result.trace.entries();
    let mut lines = Vec::with_capacity(entries.len() + 1);
    let with_stack = entries
        .first()
        .is_some_and(|e| !e.configuration.stack.is_empty());

    if let Some(first) = entries.first() {
        let mut line = format!("Start: {}", first.configuration.state);
        if with_stack {
            let _ = write!(line, " | stack {}", first.configuration.stack);
        }
        lines.push(line);
    }

    for (step, pair) in entries.windows(2).enumerate() {
        let (before, after) = (&pair[0], &pair[1]);
        let Some(transition) = &after.transition else {
            continue;
        };

        let action = if transition.is_epsilon() {
            "ε-move".to_string()
        } else {
            format!("read '{}'", transition.input)
        };
        let mut line = format!(
            "Step {:>2}: {action:<10} {} → {}",
            step + 1,
            before.configuration.state,
            after.configuration.state
        );
        if with_stack {
            let _ = write!(
                line,
                " | {} → {} ({})",
                before.configuration.stack,
                after.configuration.stack,
                stack_operation(transition)
            );
        }
        lines.push(line);
    }

    lines.push(format!("Result: {}", result.verdict));
    lines
}

/// Outcome of one sample case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// The input string
    pub input: String,
    /// Verdict the exercise expects
    pub expected: bool,
    /// Whether the automaton accepted
    pub obtained: bool,
    /// Final state of the run
    pub final_state: State,
}

impl CaseOutcome {
    /// Check if the obtained verdict matches the expected one.
    pub fn matches(&self) -> bool {
        self.expected == self.obtained
    }
}

/// Result of running every sample case of an exercise.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Exercise id
    pub exercise: &'static str,
    /// One outcome per case, in declaration order
    pub outcomes: Vec<CaseOutcome>,
}

impl CheckReport {
    /// Check if every case matched its expectation.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CaseOutcome::matches)
    }

    /// Cases whose verdict differs from the expected one.
    pub fn mismatches(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.matches())
    }
}

/// Run every sample case of `exercise`.
pub fn check(exercise: &Exercise) -> Result<CheckReport> {
    let definition = exercise.definition()?;
    let outcomes = exercise
        .cases
        .iter()
        .map(|&(input, expected)| {
            let result = run(&definition, input);
            CaseOutcome {
                input: input.to_string(),
                expected,
                obtained: result.accepted(),
                final_state: result.final_state,
            }
        })
        .collect();

    Ok(CheckReport {
        exercise: exercise.id,
        outcomes,
    })
}
