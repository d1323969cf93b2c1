use crate::converter::parse_outline_to_tree;
use crate::error::DocumentError;
use crate::outline::OutlineRow;
use crate::tree::{Initiative, ParsedOutline};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Loading and saving of outline JSON documents.
///
/// Two document shapes exist: a JSON array of outline rows as produced by the
/// editor, and a JSON array of persisted initiatives with nested tasks and
/// checklist items.
pub struct OutlineDocument;

impl OutlineDocument {
    pub fn rows_from_str(json: &str) -> Result<Vec<OutlineRow>, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn rows_from_file(path: impl AsRef<Path>) -> Result<Vec<OutlineRow>, DocumentError> {
        Self::rows_from_str(&Self::read(path.as_ref())?)
    }

    pub fn initiatives_from_str(json: &str) -> Result<Vec<Initiative>, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn initiatives_from_file(
        path: impl AsRef<Path>,
    ) -> Result<Vec<Initiative>, DocumentError> {
        Self::initiatives_from_str(&Self::read(path.as_ref())?)
    }

    /// Reads a row document and parses it into a tree in one step.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedOutline, DocumentError> {
        let rows = Self::rows_from_file(path)?;
        Ok(parse_outline_to_tree(&rows)?)
    }

    pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    pub fn save<T: Serialize + ?Sized>(
        value: &T,
        path: impl AsRef<Path>,
    ) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let json = Self::to_json_pretty(value)?;
        fs::write(path, json).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read(path: &Path) -> Result<String, DocumentError> {
        fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
