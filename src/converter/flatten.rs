use crate::outline::{EntityId, OutlineRow, TabLevel};
use crate::tree::Initiative;
use std::iter;
use tracing::debug;

/// Flattens persisted initiatives into outline rows, depth first.
///
/// Every initiative is followed by its tasks, and every task by its checklist
/// items. Rows start out unmoved (`original_tab_level == tab_level`). Nothing is
/// filtered: entities without a title become rows with an empty title.
pub fn flatten_tree_to_outline(initiatives: &[Initiative]) -> Vec<OutlineRow> {
    let rows: Vec<OutlineRow> = initiatives
        .iter()
        .flat_map(|initiative| {
            let initiative_row = loaded_row(
                &initiative.id,
                &initiative.title,
                initiative.is_done(),
                TabLevel::Initiative,
            );
            let task_rows = initiative.tasks.iter().flat_map(|task| {
                let task_row = loaded_row(&task.id, &task.title, task.is_done(), TabLevel::Task);
                let item_rows = task.checklist_items.iter().map(|item| {
                    loaded_row(
                        &item.id,
                        &item.title,
                        item.is_complete,
                        TabLevel::ChecklistItem,
                    )
                });
                iter::once(task_row).chain(item_rows)
            });
            iter::once(initiative_row).chain(task_rows)
        })
        .collect();

    debug!(
        initiatives = initiatives.len(),
        rows = rows.len(),
        "flattened initiative tree"
    );
    rows
}

fn loaded_row(
    id: &Option<EntityId>,
    title: &Option<String>,
    is_completed: bool,
    level: TabLevel,
) -> OutlineRow {
    OutlineRow {
        id: id.clone(),
        title: title.clone().unwrap_or_default(),
        is_completed,
        tab_level: level,
        original_tab_level: level,
    }
}
