use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{WhiteboardError, WhiteboardResult};
use crate::shape::Shape;

/// A committed mutation of the document, recorded in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Appends a shape to the document
    AddShape(Shape),
}

impl Command {
    pub fn shape(&self) -> &Shape {
        match self {
            Command::AddShape(shape) => shape,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Command::AddShape(shape) => format!("Add {}", shape.kind().name()),
        }
    }

    pub fn execute(&self, document: &mut Document) {
        match self {
            Command::AddShape(shape) => document.push(shape.clone()),
        }
    }

    /// Reverse the command. The document is left untouched when its tail is
    /// not the shape this command added.
    pub fn undo(&self, document: &mut Document) -> WhiteboardResult<()> {
        match self {
            Command::AddShape(shape) => {
                let found = document.last().map(|last| last.id());
                if found != Some(shape.id()) {
                    return Err(WhiteboardError::HistoryMismatch {
                        expected: shape.id().to_string(),
                        found: found.map(|id| id.to_string()),
                    });
                }
                document.pop();
                Ok(())
            }
        }
    }
}
