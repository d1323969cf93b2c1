//! # Outliner - Outline to Task Tree Conversion
//!
//! **Outliner** converts between the flat, indented outline a user edits and the
//! three-level tree a project is stored as: initiatives hold tasks, and tasks hold
//! checklist items.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Fetch the persisted initiatives and flatten them with
//!     [`flatten_tree_to_outline`]. Every row remembers the level it was loaded at.
//! 2.  **Edit**: The editor changes titles, completion and indentation. Rows can be
//!     added (without an id) or blanked out (empty title).
//! 3.  **Parse**: Feed the edited rows to [`parse_outline_to_tree`] to get the tree to
//!     upsert, plus the ids of persisted rows that were re-indented and must be
//!     deleted from the kind of entity they used to be.
//!
//! ## Quick Start
//!
//! ```rust
//! use outliner::prelude::*;
//!
//! fn main() -> std::result::Result<(), StructureError> {
//!     let loaded = vec![Initiative {
//!         id: Some("1".into()),
//!         title: Some("Launch".to_string()),
//!         status: "TO_DO".to_string(),
//!         tasks: vec![Task {
//!             id: Some("2".into()),
//!             title: Some("Write copy".to_string()),
//!             status: "DONE".to_string(),
//!             checklist_items: vec![],
//!         }],
//!     }];
//!
//!     let mut rows = flatten_tree_to_outline(&loaded);
//!
//!     // The user outdents the task into its own initiative.
//!     rows[1].tab_level = TabLevel::Initiative;
//!
//!     let parsed = parse_outline_to_tree(&rows)?;
//!     assert_eq!(parsed.initiatives.len(), 2);
//!     assert_eq!(parsed.tasks_to_delete, vec![EntityId::from("2")]);
//!     Ok(())
//! }
//! ```

pub mod converter;
pub mod document;
pub mod error;
pub mod outline;
pub mod prelude;
pub mod tree;

pub use converter::{OutlineParser, flatten_tree_to_outline, parse_outline_to_tree};
pub use document::OutlineDocument;
pub use error::{DocumentError, StructureError};
