//! Integration tests for Outliner
//!
//! End-to-end tests covering the load → edit → parse cycle and document I/O.
//!
mod common;
use common::*;
use outliner::prelude::*;
use std::fs;

/// Converts persisted entities into the nodes a lossless parse should produce.
fn expected_nodes(initiatives: &[Initiative]) -> Vec<InitiativeNode> {
    initiatives
        .iter()
        .map(|initiative| InitiativeNode {
            id: initiative.id.clone(),
            title: initiative.title.clone().unwrap_or_default(),
            status: Status::from_completed(initiative.is_done()),
            tasks: initiative
                .tasks
                .iter()
                .map(|task| TaskNode {
                    id: task.id.clone(),
                    title: task.title.clone().unwrap_or_default(),
                    status: Status::from_completed(task.is_done()),
                    checklist_items: task
                        .checklist_items
                        .iter()
                        .enumerate()
                        .map(|(order, item)| ChecklistNode {
                            id: item.id.clone(),
                            title: item.title.clone().unwrap_or_default(),
                            is_complete: item.is_complete,
                            order: order as u32,
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_flatten_then_parse_is_lossless() {
        let initiatives = create_sample_initiatives();
        let rows = flatten_tree_to_outline(&initiatives);
        let parsed = parse_outline_to_tree(&rows).expect("Failed to parse");

        assert_eq!(parsed.initiatives, expected_nodes(&initiatives));
        assert!(!parsed.has_deletions());
    }

    #[test]
    fn test_blank_rows_are_invisible() {
        let rows = flatten_tree_to_outline(&create_sample_initiatives());
        let baseline = parse_outline_to_tree(&rows).expect("Failed to parse");

        for level in TabLevel::ALL {
            for position in 0..=rows.len() {
                let mut padded = rows.clone();
                padded.insert(position, blank(level));
                padded.insert(position, blank(level).with_id("ghost").moved_from(TabLevel::Task));
                let parsed = parse_outline_to_tree(&padded).expect("Failed to parse");
                assert_eq!(parsed, baseline, "blank row at {} (level {})", position, level);
            }
        }
    }

    #[test]
    fn test_outdenting_a_task_into_an_initiative() {
        let mut rows = flatten_tree_to_outline(&create_sample_initiatives());

        // "Publish" becomes its own initiative.
        rows[4].tab_level = TabLevel::Initiative;
        let parsed = parse_outline_to_tree(&rows).expect("Failed to parse");

        let titles: Vec<&str> = parsed.initiatives.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Launch", "Publish", "Hiring"]);
        assert_eq!(parsed.tasks_to_delete, ids(&["5"]));
        assert!(parsed.initiatives_to_delete.is_empty());
        assert!(parsed.checklist_items_to_delete.is_empty());
    }

    #[test]
    fn test_indenting_initiative_reparents_its_children() {
        let mut rows = flatten_tree_to_outline(&create_sample_initiatives());

        // "Hiring" becomes a task of "Launch"; its task becomes a checklist item.
        rows[5].tab_level = TabLevel::Task;
        rows[6].tab_level = TabLevel::ChecklistItem;
        rows.remove(7);
        let parsed = parse_outline_to_tree(&rows).expect("Failed to parse");

        assert_eq!(parsed.initiatives.len(), 1);
        let hiring = &parsed.initiatives[0].tasks[2];
        assert_eq!(hiring.title, "Hiring");
        assert_eq!(hiring.status, Status::Done);
        assert_eq!(hiring.checklist_items[0].title, "Post role");
        assert_eq!(parsed.initiatives_to_delete, ids(&["6"]));
        assert_eq!(parsed.tasks_to_delete, ids(&["7"]));
    }

    #[test]
    fn test_rows_document_round_trip() {
        let rows = OutlineDocument::rows_from_str(EDITOR_ROWS_JSON).expect("Failed to load rows");
        assert_eq!(rows.len(), 5);
        assert!(rows[2].is_blank());

        let parsed = parse_outline_to_tree(&rows).expect("Failed to parse");
        let task = &parsed.initiatives[0].tasks[0];
        assert_eq!(task.checklist_items.len(), 2);
        assert_eq!(task.checklist_items[1].order, 1);
        assert_eq!(parsed.initiatives_to_delete, ids(&["9"]));
    }

    #[test]
    fn test_document_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tree_path = dir.path().join("initiatives.json");
        let rows_path = dir.path().join("rows.json");

        let initiatives = create_sample_initiatives();
        OutlineDocument::save(&initiatives, &tree_path).expect("Failed to save tree");
        let loaded = OutlineDocument::initiatives_from_file(&tree_path).expect("Failed to load");
        assert_eq!(loaded, initiatives);

        OutlineDocument::save(&flatten_tree_to_outline(&loaded), &rows_path)
            .expect("Failed to save rows");
        let parsed = OutlineDocument::parse_file(&rows_path).expect("Failed to parse file");
        assert_eq!(parsed.initiatives, expected_nodes(&initiatives));
    }

    #[test]
    fn test_document_errors() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            OutlineDocument::rows_from_file(&missing),
            Err(DocumentError::Io { .. })
        ));

        let too_deep = r#"[{ "title": "x", "tabLevel": 3, "originalTabLevel": 3 }]"#;
        assert!(matches!(
            OutlineDocument::rows_from_str(too_deep),
            Err(DocumentError::Json(_))
        ));

        let orphan_path = dir.path().join("orphan.json");
        fs::write(
            &orphan_path,
            r#"[{ "title": "Orphan", "tabLevel": 1, "originalTabLevel": 1 }]"#,
        )
        .unwrap();
        assert!(matches!(
            OutlineDocument::parse_file(&orphan_path),
            Err(DocumentError::Structure(StructureError::TaskWithoutInitiative))
        ));
    }
}
