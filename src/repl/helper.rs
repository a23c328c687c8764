//! Rustyline helper integration
//!
//! Provides completion, hinting, highlighting, and validation for the REPL.

use super::command::COMMAND_NAMES;
use crate::catalog;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;

/// REPL helper
pub struct AutomataHelper {
    hinter: HistoryHinter,
    commands: Vec<&'static str>,
    exercises: Vec<&'static str>,
}

impl AutomataHelper {
    /// Create a new helper instance
    pub fn new() -> Self {
        Self {
            hinter: HistoryHinter::new(),
            commands: COMMAND_NAMES.to_vec(),
            exercises: catalog::ids().collect(),
        }
    }

    fn candidates<'a>(options: impl IntoIterator<Item = &'a str>, prefix: &str, trailing: &str) -> Vec<Pair> {
        options
            .into_iter()
            .filter(|o| o.starts_with(prefix))
            .map(|o| Pair {
                display: o.to_string(),
                replacement: format!("{o}{trailing}"),
            })
            .collect()
    }

    fn highlight_command(&self, line: &str) -> String {
        let Some(first) = line.split_whitespace().next() else {
            return line.to_string();
        };
        if !self.commands.contains(&first.to_lowercase().as_str()) {
            return line.to_string();
        }

        let start = line.len() - line.trim_start().len();
        let end = start + first.len();
        format!(
            "{}{}{}",
            &line[..start],
            first.blue().bold(),
            &line[end..]
        )
    }
}

impl Default for AutomataHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for AutomataHelper {}

impl Completer for AutomataHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let line = &line[..pos];
        let parts: Vec<&str> = line.split_whitespace().collect();
        let start = line.rfind(char::is_whitespace).map(|i| i + 1).unwrap_or(0);
        let typing_new_word = line.ends_with(char::is_whitespace);

        if parts.is_empty() {
            return Ok((0, Self::candidates(self.commands.iter().copied(), "", " ")));
        }

        // Command completion if still typing first word
        if parts.len() == 1 && !typing_new_word {
            let prefix = parts[0].to_lowercase();
            return Ok((start, Self::candidates(self.commands.iter().copied(), &prefix, " ")));
        }

        let prefix = if typing_new_word {
            String::new()
        } else {
            parts.last().map(|s| s.to_lowercase()).unwrap_or_default()
        };
        let argument_count = parts.len() - 1 + usize::from(typing_new_word);

        match parts[0].to_lowercase().as_str() {
            "use" | "exercise" if argument_count <= 1 => Ok((
                start,
                Self::candidates(self.exercises.iter().copied(), &prefix, ""),
            )),
            "trace" if argument_count <= 1 => {
                Ok((start, Self::candidates(["on", "off"], &prefix, "")))
            }
            _ => Ok((0, vec![])),
        }
    }
}

impl Hinter for AutomataHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for AutomataHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlight_command(line))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Validator for AutomataHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        // Always accept input (validation happens during execution)
        Ok(ValidationResult::Valid(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_known_command_only() {
        let helper = AutomataHelper::new();
        assert_eq!(helper.highlight_command("0101"), "0101");
        let highlighted = helper.highlight_command("use abc");
        assert!(highlighted.contains("use"));
        assert!(highlighted.ends_with(" abc"));
    }

    #[test]
    fn test_candidates_filter_by_prefix() {
        let pairs = AutomataHelper::candidates(["l1", "l2", "abc"], "l", "");
        let names: Vec<&str> = pairs.iter().map(|p| p.display.as_str()).collect();
        assert_eq!(names, vec!["l1", "l2"]);
    }
}
