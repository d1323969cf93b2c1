use super::{OutlineRow, TabLevel};
use crate::tree::ParsedOutline;
use itertools::Itertools;

/// Renders outlines and parsed trees as indented checkbox text.
pub struct OutlineFormatter;

impl OutlineFormatter {
    /// One line per row, indented by tab level. Blank rows render as empty lines.
    pub fn format_rows(rows: &[OutlineRow]) -> String {
        rows.iter().map(Self::format_row).join("\n")
    }

    /// The tree followed by one line per non-empty deletion list.
    pub fn format_tree(parsed: &ParsedOutline) -> String {
        let mut lines = Vec::new();
        for initiative in &parsed.initiatives {
            lines.push(Self::line(
                TabLevel::Initiative,
                initiative.status.is_done(),
                &initiative.title,
            ));
            for task in &initiative.tasks {
                lines.push(Self::line(TabLevel::Task, task.status.is_done(), &task.title));
                for item in &task.checklist_items {
                    lines.push(Self::line(
                        TabLevel::ChecklistItem,
                        item.is_complete,
                        &item.title,
                    ));
                }
            }
        }

        let deletions = [
            ("initiatives", &parsed.initiatives_to_delete),
            ("tasks", &parsed.tasks_to_delete),
            ("checklist items", &parsed.checklist_items_to_delete),
        ];
        for (kind, ids) in deletions {
            if !ids.is_empty() {
                lines.push(format!("delete {}: {}", kind, ids.iter().join(", ")));
            }
        }

        lines.join("\n")
    }

    fn format_row(row: &OutlineRow) -> String {
        if row.is_blank() {
            return String::new();
        }
        let mut line = Self::line(row.tab_level, row.is_completed, &row.title);
        if row.has_moved() {
            line.push_str(&format!(" (moved from {})", row.original_tab_level));
        }
        line
    }

    fn line(level: TabLevel, done: bool, title: &str) -> String {
        let checkbox = if done { "[x]" } else { "[ ]" };
        format!(
            "{}{} {}",
            "\t".repeat(level.depth() as usize),
            checkbox,
            title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_moved_rows() {
        let rows = vec![
            OutlineRow::new("Roadmap", TabLevel::Initiative),
            OutlineRow::new("", TabLevel::Task),
            OutlineRow::new("Promote me", TabLevel::Task)
                .completed(true)
                .moved_from(TabLevel::ChecklistItem),
        ];
        assert_eq!(
            OutlineFormatter::format_rows(&rows),
            "[ ] Roadmap\n\n\t[x] Promote me (moved from 2)"
        );
    }
}
