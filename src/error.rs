use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when an outline cannot be turned into a valid initiative tree.
///
/// These indicate a structurally impossible outline (for example a row indented
/// two levels below the root). The outline editor is expected to prevent them;
/// when they do occur the whole conversion fails and no partial tree is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("Checklist item must be nested under a task")]
    ChecklistWithoutTask,

    #[error("Task must be nested under an initiative")]
    TaskWithoutInitiative,

    #[error("Invalid tab level: {0}")]
    InvalidTabLevel(u64),
}

/// Errors that can occur while loading or saving outline documents.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Could not access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse outline JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Structure(#[from] StructureError),
}
