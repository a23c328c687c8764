//! JSON serializer for human-readable definition files.

use crate::automaton::AutomatonDefinition;
use std::io::{Read, Write};

use super::{DefinitionDocument, DefinitionSerializer, SerializationError};

/// JSON serializer for human-readable format.
///
/// Writes a pretty-printed [`DefinitionDocument`], which is easy to edit by
/// hand and to keep under version control.
pub struct JsonSerializer;

impl DefinitionSerializer for JsonSerializer {
    fn serialize<W: Write>(definition: &AutomatonDefinition, mut writer: W) -> Result<(), SerializationError> {
        let document = DefinitionDocument::from_definition(definition);
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writeln!(writer)?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<AutomatonDefinition, SerializationError> {
        let document: DefinitionDocument = serde_json::from_reader(&mut reader)?;
        document.into_definition()
    }
}
