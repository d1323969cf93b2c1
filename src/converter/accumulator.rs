use crate::error::StructureError;
use crate::outline::{EntityId, OutlineRow, TabLevel};
use crate::tree::{ChecklistNode, InitiativeNode, ParsedOutline, Status, TaskNode};

/// Fold state for a single pass over the outline.
///
/// The open initiative and open task are held outside the output until a row at
/// the same or a shallower level closes them. An open task always belongs to the
/// open initiative.
#[derive(Default)]
pub(super) struct TreeAccumulator {
    initiatives: Vec<InitiativeNode>,
    open_initiative: Option<InitiativeNode>,
    open_task: Option<TaskNode>,
    initiatives_to_delete: Vec<EntityId>,
    tasks_to_delete: Vec<EntityId>,
    checklist_items_to_delete: Vec<EntityId>,
}

impl TreeAccumulator {
    /// Consumes one non-blank row.
    pub(super) fn push_row(mut self, row: &OutlineRow) -> Result<Self, StructureError> {
        match row.tab_level {
            TabLevel::Initiative => {
                self.close_initiative();
                self.open_initiative = Some(InitiativeNode {
                    id: row.id.clone(),
                    title: row.title.clone(),
                    status: Status::from_completed(row.is_completed),
                    tasks: Vec::new(),
                });
            }
            TabLevel::Task => {
                if self.open_initiative.is_none() {
                    return Err(StructureError::TaskWithoutInitiative);
                }
                self.close_task();
                self.open_task = Some(TaskNode {
                    id: row.id.clone(),
                    title: row.title.clone(),
                    status: Status::from_completed(row.is_completed),
                    checklist_items: Vec::new(),
                });
            }
            TabLevel::ChecklistItem => {
                let task = self
                    .open_task
                    .as_mut()
                    .ok_or(StructureError::ChecklistWithoutTask)?;
                let order = task.checklist_items.len() as u32;
                task.checklist_items.push(ChecklistNode {
                    id: row.id.clone(),
                    title: row.title.clone(),
                    is_complete: row.is_completed,
                    order,
                });
            }
        }

        self.record_move(row);
        Ok(self)
    }

    /// Closes whatever is still open and returns the finished outline.
    pub(super) fn finish(mut self) -> ParsedOutline {
        self.close_initiative();
        ParsedOutline {
            initiatives: self.initiatives,
            initiatives_to_delete: self.initiatives_to_delete,
            tasks_to_delete: self.tasks_to_delete,
            checklist_items_to_delete: self.checklist_items_to_delete,
        }
    }

    /// A persisted row that changed level vacates its slot at the original level.
    fn record_move(&mut self, row: &OutlineRow) {
        let Some(id) = &row.id else {
            return;
        };
        if !row.has_moved() {
            return;
        }
        let target = match row.original_tab_level {
            TabLevel::Initiative => &mut self.initiatives_to_delete,
            TabLevel::Task => &mut self.tasks_to_delete,
            TabLevel::ChecklistItem => &mut self.checklist_items_to_delete,
        };
        target.push(id.clone());
    }

    fn close_task(&mut self) {
        if let Some(task) = self.open_task.take() {
            if let Some(initiative) = self.open_initiative.as_mut() {
                initiative.tasks.push(task);
            }
        }
    }

    fn close_initiative(&mut self) {
        self.close_task();
        if let Some(initiative) = self.open_initiative.take() {
            self.initiatives.push(initiative);
        }
    }
}
