mod commands;
mod history;

use crate::error::WhiteboardError;

pub use commands::Command;
pub use history::CommandHistory;

/// Result of a history traversal: the command that was applied.
pub type CommandResult = Result<Command, WhiteboardError>;
