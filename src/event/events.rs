use serde::{Deserialize, Serialize};

use crate::shape::Shape;

/// Where a document change came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOrigin {
    /// Local input or command
    Local,
    /// Applied on behalf of the collaboration host
    Remote,
}

/// Document changes a hosting collaboration layer may want to observe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    ShapeCommitted {
        shape: Shape,
        origin: ChangeOrigin,
    },
    Undone {
        shape: Shape,
    },
    Redone {
        shape: Shape,
    },
    Cleared {
        origin: ChangeOrigin,
    },
}

impl EngineEvent {
    pub fn origin(&self) -> ChangeOrigin {
        match self {
            Self::ShapeCommitted { origin, .. } | Self::Cleared { origin } => *origin,
            Self::Undone { .. } | Self::Redone { .. } => ChangeOrigin::Local,
        }
    }
}
