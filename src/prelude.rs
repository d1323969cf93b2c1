//! Prelude module for convenient imports
//!
//! Re-exports the types and functions needed to flatten a tree into an outline
//! and parse it back.
//!
//! # Example
//!
//! ```rust
//! use outliner::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let rows = vec![
//!     OutlineRow::new("Launch", TabLevel::Initiative),
//!     OutlineRow::new("Write copy", TabLevel::Task),
//! ];
//! let parsed = parse_outline_to_tree(&rows)?;
//! assert_eq!(parsed.initiatives[0].tasks.len(), 1);
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Conversion
pub use crate::converter::{
    OutlineParser, OutlineParserBuilder, flatten_tree_to_outline, parse_outline_to_tree,
};

// Flat side
pub use crate::outline::{EntityId, OutlineFormatter, OutlineRow, TabLevel};

// Nested side
pub use crate::tree::{
    ChecklistItem, ChecklistNode, Initiative, InitiativeNode, OutlineSummary, ParsedOutline,
    Status, Task, TaskNode,
};

// Documents and errors
pub use crate::document::OutlineDocument;
pub use crate::error::{DocumentError, StructureError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
