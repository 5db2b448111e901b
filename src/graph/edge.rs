use super::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label carried by an arrow leaving a branch element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Yes,
    No,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Yes => write!(f, "yes"),
            Condition::No => write!(f, "no"),
        }
    }
}

/// An arrow between two elements.
///
/// Arrows are always anchored at their source. The target stays `None` while the
/// arrow is being dragged and such arrows are invisible to connectivity queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub(super) id: EdgeId,
    pub(super) source: NodeId,
    pub(super) target: Option<NodeId>,
    pub(super) condition: Option<Condition>,
}

impl Edge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }

    pub fn is_anchored(&self) -> bool {
        self.target.is_some()
    }

    /// Whether either end of the arrow sits on `node`.
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == Some(node)
    }
}
