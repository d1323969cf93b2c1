use super::InitiativeNode;
use crate::outline::EntityId;
use serde::{Deserialize, Serialize};

/// Result of parsing an outline: the tree to upsert plus the ids to delete.
///
/// The deletion lists hold persisted rows that were re-indented. Each id is
/// listed under the kind of entity the row used to be, since that is the record
/// which no longer exists in the outline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedOutline {
    pub initiatives: Vec<InitiativeNode>,
    pub initiatives_to_delete: Vec<EntityId>,
    pub tasks_to_delete: Vec<EntityId>,
    pub checklist_items_to_delete: Vec<EntityId>,
}

/// Entity counts for a parsed outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OutlineSummary {
    pub initiatives: usize,
    pub tasks: usize,
    pub checklist_items: usize,
    pub completed: usize,
    pub deletions: usize,
}

impl ParsedOutline {
    pub fn has_deletions(&self) -> bool {
        self.deletion_count() > 0
    }

    pub fn deletion_count(&self) -> usize {
        self.initiatives_to_delete.len()
            + self.tasks_to_delete.len()
            + self.checklist_items_to_delete.len()
    }

    pub fn summary(&self) -> OutlineSummary {
        let mut summary = OutlineSummary {
            initiatives: self.initiatives.len(),
            deletions: self.deletion_count(),
            ..OutlineSummary::default()
        };

        for initiative in &self.initiatives {
            summary.completed += usize::from(initiative.status.is_done());
            summary.tasks += initiative.tasks.len();
            for task in &initiative.tasks {
                summary.completed += usize::from(task.status.is_done());
                summary.checklist_items += task.checklist_items.len();
                summary.completed += task
                    .checklist_items
                    .iter()
                    .filter(|item| item.is_complete)
                    .count();
            }
        }
        summary
    }
}
