use super::{Command, CommandResult};
use crate::document::Document;
use crate::error::WhiteboardError;

/// Undo/redo stacks for committed commands.
///
/// The undo stack always mirrors the tail of the document: its commands, in
/// order, added the last `undo_stack().len()` shapes.
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command and record it. Any redoable commands are dropped.
    pub fn execute(&mut self, command: Command, document: &mut Document) {
        command.execute(document);
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Undo the last executed command and return it
    pub fn undo(&mut self, document: &mut Document) -> CommandResult {
        let command = self
            .undo_stack
            .pop()
            .ok_or(WhiteboardError::EmptyUndoHistory)?;
        if let Err(err) = command.undo(document) {
            self.undo_stack.push(command);
            return Err(err);
        }
        self.redo_stack.push(command.clone());
        Ok(command)
    }

    /// Redo the last undone command and return it
    pub fn redo(&mut self, document: &mut Document) -> CommandResult {
        let command = self
            .redo_stack
            .pop()
            .ok_or(WhiteboardError::EmptyRedoHistory)?;
        command.execute(document);
        self.undo_stack.push(command.clone());
        Ok(command)
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
