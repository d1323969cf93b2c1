use crate::error::StructureError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Indentation depth of an outline row.
///
/// Only three depths exist: the root level holds initiatives, one indent holds
/// tasks and two indents hold checklist items. Any other depth is rejected when
/// the level is constructed, so a `TabLevel` is always valid once it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u8")]
pub enum TabLevel {
    Initiative,
    Task,
    ChecklistItem,
}

impl TabLevel {
    pub const ALL: [TabLevel; 3] = [TabLevel::Initiative, TabLevel::Task, TabLevel::ChecklistItem];

    /// The numeric depth, `0..=2`.
    pub fn depth(self) -> u8 {
        match self {
            TabLevel::Initiative => 0,
            TabLevel::Task => 1,
            TabLevel::ChecklistItem => 2,
        }
    }
}

impl TryFrom<u64> for TabLevel {
    type Error = StructureError;

    fn try_from(depth: u64) -> Result<Self, Self::Error> {
        match depth {
            0 => Ok(TabLevel::Initiative),
            1 => Ok(TabLevel::Task),
            2 => Ok(TabLevel::ChecklistItem),
            other => Err(StructureError::InvalidTabLevel(other)),
        }
    }
}

impl TryFrom<u8> for TabLevel {
    type Error = StructureError;

    fn try_from(depth: u8) -> Result<Self, Self::Error> {
        TabLevel::try_from(u64::from(depth))
    }
}

impl From<TabLevel> for u8 {
    fn from(level: TabLevel) -> Self {
        level.depth()
    }
}

impl fmt::Display for TabLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.depth())
    }
}
