//! Definition file support.
//!
//! Automata can be stored as JSON documents and loaded back. A document is
//! a plain description of the definition; loading one runs it through
//! [`AutomatonBuilder`], so a document that would not build from code does
//! not load either.
//!
//! # Example
//!
//! ```rust
//! use libautomata::catalog;
//! use libautomata::serialization::{from_json_str, to_json_string};
//!
//! let def = catalog::find("abc").unwrap().definition()?;
//! let json = to_json_string(&def)?;
//! let loaded = from_json_str(&json)?;
//! assert_eq!(loaded.transitions(), def.transitions());
//! # Ok::<(), libautomata::serialization::SerializationError>(())
//! ```

use crate::automaton::{
    AutomatonBuilder, AutomatonDefinition, StackPush, StackSymbol, StackTop, Symbol, Transition,
};
use crate::error::DefinitionError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

mod json;

pub use self::json::JsonSerializer;

/// Trait for reading and writing automaton definitions.
pub trait DefinitionSerializer {
    /// Serialize a definition to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(definition: &AutomatonDefinition, writer: W) -> Result<(), SerializationError>;

    /// Deserialize and validate a definition from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or if the decoded
    /// document does not describe a valid automaton.
    fn deserialize<R: Read>(reader: R) -> Result<AutomatonDefinition, SerializationError>;
}

/// Errors that can occur while loading or saving definitions.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during JSON encoding or decoding
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The document describes an invalid automaton
    #[error("Invalid definition: {0}")]
    Definition(#[from] DefinitionError),
    /// An input symbol is not a single character
    #[error("Input symbol {0:?} must be a single character or \"ε\"")]
    InvalidSymbol(String),
}

/// One transition as stored in a document.
///
/// `stack_top` and `push` may be omitted, `null` or `"ε"` to mean
/// "any top" and "push nothing" respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDocument {
    /// Source state
    pub from: String,
    /// Input symbol, or `"ε"`
    pub input: String,
    /// Stack symbol read and popped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_top: Option<String>,
    /// Target state
    pub to: String,
    /// Stack symbol pushed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push: Option<String>,
}

/// The on-disk shape of an automaton definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionDocument {
    /// States in declaration order
    pub states: Vec<String>,
    /// Input alphabet, one character per entry
    pub alphabet: Vec<String>,
    /// Stack alphabet; empty for finite automata
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stack_alphabet: Vec<String>,
    /// Initial state
    pub initial_state: String,
    /// Initial stack symbol; present exactly for pushdown automata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_stack_symbol: Option<String>,
    /// Accepting states
    pub accepting: Vec<String>,
    /// Transitions in declaration order
    pub transitions: Vec<TransitionDocument>,
}

impl DefinitionDocument {
    /// Describe an existing definition.
    pub fn from_definition(definition: &AutomatonDefinition) -> Self {
        Self {
            states: definition.states().iter().map(|s| s.name().to_string()).collect(),
            alphabet: definition.alphabet().iter().map(Symbol::to_string).collect(),
            stack_alphabet: definition
                .stack_alphabet()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            initial_state: definition.initial_state().name().to_string(),
            initial_stack_symbol: definition
                .initial_stack_symbol()
                .map(|s| s.as_str().to_string()),
            accepting: definition
                .accepting_states()
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
            transitions: definition
                .transitions()
                .iter()
                .map(|t| TransitionDocument {
                    from: t.source.name().to_string(),
                    input: t.input.to_string(),
                    stack_top: t.stack_top.as_symbol().map(|s| s.as_str().to_string()),
                    to: t.target.name().to_string(),
                    push: t.push.as_symbol().map(|s| s.as_str().to_string()),
                })
                .collect(),
        }
    }

    /// Validate the document and build the definition it describes.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::InvalidSymbol`] for malformed input
    /// symbols and [`SerializationError::Definition`] when the builder
    /// rejects the result.
    pub fn into_definition(self) -> Result<AutomatonDefinition, SerializationError> {
        let alphabet = self
            .alphabet
            .iter()
            .map(|s| parse_symbol(s))
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = AutomatonBuilder::new()
            .states(self.states)
            .alphabet(alphabet)
            .stack_alphabet(self.stack_alphabet)
            .initial(self.initial_state)
            .accepting(self.accepting);

        if let Some(bottom) = self.initial_stack_symbol {
            builder = builder.initial_stack_symbol(bottom);
        }

        for t in self.transitions {
            builder = builder.add(Transition {
                source: t.from.into(),
                input: parse_symbol(&t.input)?,
                stack_top: stack_component(t.stack_top).map_or(StackTop::Any, StackTop::Symbol),
                target: t.to.into(),
                push: stack_component(t.push).map_or(StackPush::Nothing, StackPush::Symbol),
            });
        }

        Ok(builder.build()?)
    }
}

fn parse_symbol(text: &str) -> Result<Symbol, SerializationError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Symbol::new(c)),
        _ => Err(SerializationError::InvalidSymbol(text.to_string())),
    }
}

fn stack_component(text: Option<String>) -> Option<StackSymbol> {
    let epsilon = Symbol::EPSILON.to_string();
    text.filter(|s| *s != epsilon).map(StackSymbol::from)
}

/// Parse a definition from a JSON string.
pub fn from_json_str(json: &str) -> Result<AutomatonDefinition, SerializationError> {
    JsonSerializer::deserialize(json.as_bytes())
}

/// Render a definition as pretty-printed JSON.
pub fn to_json_string(definition: &AutomatonDefinition) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    JsonSerializer::serialize(definition, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        SerializationError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Load a definition from a JSON file.
pub fn load_definition(path: impl AsRef<Path>) -> Result<AutomatonDefinition, SerializationError> {
    let file = File::open(path.as_ref())?;
    JsonSerializer::deserialize(BufReader::new(file))
}

/// Save a definition as a JSON file, replacing any existing file.
pub fn save_definition(
    definition: &AutomatonDefinition,
    path: impl AsRef<Path>,
) -> Result<(), SerializationError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    JsonSerializer::serialize(definition, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Mode;
    use crate::catalog;
    use crate::engine::run;

    const FINITE: &str = r#"{
        "states": ["q0", "q1"],
        "alphabet": ["0", "1"],
        "initial_state": "q0",
        "accepting": ["q0"],
        "transitions": [
            {"from": "q0", "input": "0", "to": "q1"},
            {"from": "q1", "input": "1", "to": "q0"}
        ]
    }"#;

    #[test]
    fn test_parse_finite_document() {
        let def = from_json_str(FINITE).unwrap();
        assert_eq!(def.mode(), Mode::Finite);
        assert!(run(&def, "0101").accepted());
        assert!(!run(&def, "010").accepted());
    }

    #[test]
    fn test_epsilon_spellings() {
        let json = r#"{
            "states": ["q0", "qf"],
            "alphabet": ["a"],
            "stack_alphabet": ["Z0"],
            "initial_state": "q0",
            "initial_stack_symbol": "Z0",
            "accepting": ["qf"],
            "transitions": [
                {"from": "q0", "input": "a", "stack_top": "ε", "to": "q0", "push": null},
                {"from": "q0", "input": "ε", "stack_top": "Z0", "to": "qf", "push": "Z0"}
            ]
        }"#;
        let def = from_json_str(json).unwrap();
        assert_eq!(def.transitions()[0].stack_top, StackTop::Any);
        assert_eq!(def.transitions()[0].push, StackPush::Nothing);
        assert!(def.transitions()[1].is_epsilon());
        assert!(run(&def, "aaa").accepted());
    }

    #[test]
    fn test_invalid_symbol() {
        let json = FINITE.replace(r#""input": "0""#, r#""input": "01""#);
        let err = from_json_str(&json).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidSymbol(s) if s == "01"));
    }

    #[test]
    fn test_builder_validation_applies() {
        let json = FINITE.replace(r#""accepting": ["q0"]"#, r#""accepting": ["q9"]"#);
        let err = from_json_str(&json).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::Definition(DefinitionError::UnknownAcceptingState(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            from_json_str("{").unwrap_err(),
            SerializationError::Json(_)
        ));
    }

    #[test]
    fn test_catalog_documents_are_stable() {
        for exercise in catalog::catalog() {
            let def = exercise.definition().unwrap();
            let doc = DefinitionDocument::from_definition(&def);
            let again = DefinitionDocument::from_definition(&doc.clone().into_definition().unwrap());
            assert_eq!(doc, again, "{}", exercise.id);
        }
    }
}
