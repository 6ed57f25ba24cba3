//! Wire types for the collaboration boundary.
//!
//! Room membership, transport and merging of concurrent edits belong to the
//! hosting sync layer. The engine only turns its own changes into
//! [`RemoteChange`] messages and applies the ones a host hands back.

use serde::{Deserialize, Serialize};

use crate::event::{ChangeOrigin, EngineEvent};
use crate::shape::Shape;

/// A change produced by another peer, or one to send to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RemoteChange {
    /// Append a shape to the document
    Insert { shape: Shape },
    /// Empty the document
    Clear,
}

impl RemoteChange {
    /// The message to broadcast for a local event, if it has one.
    ///
    /// Remote-origin events are never echoed back. Undo has no encoding: a
    /// peer's document tail may differ from ours, so removal cannot be
    /// replayed safely.
    pub fn from_event(event: &EngineEvent) -> Option<Self> {
        if event.origin() == ChangeOrigin::Remote {
            return None;
        }
        match event {
            EngineEvent::ShapeCommitted { shape, .. } | EngineEvent::Redone { shape } => {
                Some(Self::Insert {
                    shape: shape.clone(),
                })
            }
            EngineEvent::Cleared { .. } => Some(Self::Clear),
            EngineEvent::Undone { .. } => None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
