use crate::outline::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion state written back for initiatives and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "DONE")]
    Done,
    #[serde(rename = "TO_DO")]
    ToDo,
}

impl Status {
    pub const DONE: &'static str = "DONE";
    pub const TO_DO: &'static str = "TO_DO";

    pub fn from_completed(is_completed: bool) -> Self {
        if is_completed { Status::Done } else { Status::ToDo }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Done => Self::DONE,
            Status::ToDo => Self::TO_DO,
        }
    }

    pub fn is_done(self) -> bool {
        self == Status::Done
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An initiative rebuilt from the outline, ready to be upserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiativeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub title: String,
    pub status: Status,
    pub tasks: Vec<TaskNode>,
}

/// A task rebuilt from the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub title: String,
    pub status: Status,
    pub checklist_items: Vec<ChecklistNode>,
}

/// A checklist item rebuilt from the outline.
///
/// Uses `is_complete` rather than a status, matching how checklist items are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub title: String,
    pub is_complete: bool,
    /// Zero-based position within the parent task.
    pub order: u32,
}
