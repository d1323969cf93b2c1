//! Common test utilities for building outlines and initiative trees.
use outliner::prelude::*;

/// Shorthand for a persisted, unmoved row.
#[allow(dead_code)]
pub fn row(id: &str, title: &str, level: TabLevel) -> OutlineRow {
    OutlineRow::new(title, level).with_id(id)
}

/// Shorthand for a new row that has never been saved.
#[allow(dead_code)]
pub fn new_row(title: &str, level: TabLevel) -> OutlineRow {
    OutlineRow::new(title, level)
}

/// A blank separator row at the given level.
#[allow(dead_code)]
pub fn blank(level: TabLevel) -> OutlineRow {
    OutlineRow::new("", level)
}

/// Creates a small persisted project:
///
/// ```text
/// [ ] Launch (1)
///     [x] Write copy (2)
///         [x] Headline (3)
///         [ ] Body (4)
///     [ ] Publish (5)
/// [x] Hiring (6)
///     [ ] Post role (7)
///         [ ] Salary band (8)
/// ```
#[allow(dead_code)]
pub fn create_sample_initiatives() -> Vec<Initiative> {
    vec![
        Initiative {
            id: Some("1".into()),
            title: Some("Launch".to_string()),
            status: "TO_DO".to_string(),
            tasks: vec![
                Task {
                    id: Some("2".into()),
                    title: Some("Write copy".to_string()),
                    status: "DONE".to_string(),
                    checklist_items: vec![
                        checklist_item("3", "Headline", true, 0),
                        checklist_item("4", "Body", false, 1),
                    ],
                },
                Task {
                    id: Some("5".into()),
                    title: Some("Publish".to_string()),
                    status: "IN_PROGRESS".to_string(),
                    checklist_items: vec![],
                },
            ],
        },
        Initiative {
            id: Some("6".into()),
            title: Some("Hiring".to_string()),
            status: "DONE".to_string(),
            tasks: vec![Task {
                id: Some("7".into()),
                title: Some("Post role".to_string()),
                status: "TO_DO".to_string(),
                checklist_items: vec![checklist_item("8", "Salary band", false, 0)],
            }],
        },
    ]
}

#[allow(dead_code)]
pub fn checklist_item(id: &str, title: &str, is_complete: bool, order: u32) -> ChecklistItem {
    ChecklistItem {
        id: Some(id.into()),
        title: Some(title.to_string()),
        is_complete,
        order: Some(order),
    }
}

/// Ids as `EntityId`s, for comparing deletion lists.
#[allow(dead_code)]
pub fn ids(values: &[&str]) -> Vec<EntityId> {
    values.iter().map(|v| EntityId::from(*v)).collect()
}

/// A row document in the editor's JSON shape.
#[allow(dead_code)]
pub const EDITOR_ROWS_JSON: &str = r#"[
    { "id": "1", "title": "Launch", "isCompleted": false, "tabLevel": 0, "originalTabLevel": 0 },
    { "id": "2", "title": "Write copy", "isCompleted": true, "tabLevel": 1, "originalTabLevel": 1 },
    { "title": "", "isCompleted": false, "tabLevel": 1, "originalTabLevel": 1 },
    { "title": "Proofread", "isCompleted": false, "tabLevel": 2, "originalTabLevel": 2 },
    { "id": "9", "title": "Demoted initiative", "isCompleted": true, "tabLevel": 2, "originalTabLevel": 0 }
]"#;
