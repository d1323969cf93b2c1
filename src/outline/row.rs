use super::TabLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an entity that already exists in persistence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line of the flat, editable outline.
///
/// `original_tab_level` is the depth the row had when the outline was loaded.
/// A persisted row whose current `tab_level` differs from it has been moved to a
/// different kind of entity and must be deleted from its old slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRow {
    /// `None` for rows that were typed in and have never been saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub title: String,
    #[serde(default, alias = "is_completed")]
    pub is_completed: bool,
    #[serde(alias = "tab_level")]
    pub tab_level: TabLevel,
    #[serde(alias = "original_tab_level")]
    pub original_tab_level: TabLevel,
}

impl OutlineRow {
    /// Creates an unsaved, incomplete row that has not moved.
    pub fn new(title: impl Into<String>, tab_level: TabLevel) -> Self {
        Self {
            id: None,
            title: title.into(),
            is_completed: false,
            tab_level,
            original_tab_level: tab_level,
        }
    }

    pub fn with_id(mut self, id: impl Into<EntityId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Marks the row as loaded at `original` before being re-indented.
    pub fn moved_from(mut self, original: TabLevel) -> Self {
        self.original_tab_level = original;
        self
    }

    /// Rows with an empty title are separators and never produce a node.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
    }

    pub fn has_moved(&self) -> bool {
        self.tab_level != self.original_tab_level
    }
}
