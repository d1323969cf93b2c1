use super::Status;
use crate::outline::EntityId;
use serde::{Deserialize, Serialize};

/// An initiative as loaded from persistence, with its tasks nested inside.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Initiative {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A task as loaded from persistence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, alias = "checklistItems")]
    pub checklist_items: Vec<ChecklistItem>,
}

/// A checklist item as loaded from persistence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "isComplete")]
    pub is_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Initiative {
    /// Statuses other than `"DONE"` (including ones this crate does not know) count as open.
    pub fn is_done(&self) -> bool {
        self.status == Status::DONE
    }
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == Status::DONE
    }
}
