use crate::error::StructureError;
use crate::outline::OutlineRow;
use crate::tree::ParsedOutline;
use tracing::{debug, trace};

mod accumulator;
mod flatten;

use accumulator::TreeAccumulator;
pub use flatten::flatten_tree_to_outline;

/// Rebuilds an initiative tree from a flat outline.
///
/// A parser is cheap to build and holds no state between calls, so one instance
/// can be shared and reused for every save of the outline editor.
#[derive(Debug, Clone, Default)]
pub struct OutlineParser {
    whitespace_is_blank: bool,
}

#[derive(Debug, Clone, Default)]
pub struct OutlineParserBuilder {
    whitespace_is_blank: bool,
}

impl OutlineParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip rows whose title is only whitespace, as if they were empty.
    pub fn treat_whitespace_as_blank(mut self, enabled: bool) -> Self {
        self.whitespace_is_blank = enabled;
        self
    }

    pub fn build(self) -> OutlineParser {
        OutlineParser {
            whitespace_is_blank: self.whitespace_is_blank,
        }
    }
}

impl OutlineParser {
    pub fn builder() -> OutlineParserBuilder {
        OutlineParserBuilder::new()
    }

    /// Parses `rows` in order into initiatives, tasks and checklist items.
    ///
    /// Blank rows are skipped without touching the open initiative or task.
    /// A task before any initiative, or a checklist item before any task in the
    /// current initiative, fails the whole call.
    pub fn parse(&self, rows: &[OutlineRow]) -> Result<ParsedOutline, StructureError> {
        debug!(rows = rows.len(), "parsing outline");

        let accumulator = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !self.is_skipped(row))
            .try_fold(TreeAccumulator::default(), |acc, (index, row)| {
                trace!(index, level = %row.tab_level, title = %row.title, "outline row");
                acc.push_row(row).inspect_err(|err| {
                    debug!(index, error = %err, "outline rejected");
                })
            })?;

        let parsed = accumulator.finish();
        debug!(
            initiatives = parsed.initiatives.len(),
            deletions = parsed.deletion_count(),
            "parsed outline"
        );
        Ok(parsed)
    }

    fn is_skipped(&self, row: &OutlineRow) -> bool {
        row.is_blank() || (self.whitespace_is_blank && row.title.trim().is_empty())
    }
}

/// Parses an outline with the default parser settings.
pub fn parse_outline_to_tree(rows: &[OutlineRow]) -> Result<ParsedOutline, StructureError> {
    OutlineParser::default().parse(rows)
}
