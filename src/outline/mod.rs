mod formatter;
mod level;
mod row;

pub use formatter::OutlineFormatter;
pub use level::TabLevel;
pub use row::{EntityId, OutlineRow};
