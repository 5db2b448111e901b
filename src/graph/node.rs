use super::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// The closed set of diagram element kinds that take part in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Where execution begins. At most one per graph.
    Entry,
    /// A single-outcome logic block.
    Action,
    /// A two-outcome conditional block (the diamond).
    Branch,
}

impl NodeKind {
    /// Maximum number of arrows that may leave an element of this kind.
    pub fn capacity(self) -> usize {
        match self {
            NodeKind::Entry => 1,
            NodeKind::Action => 1,
            NodeKind::Branch => 2,
        }
    }
}

/// A diagram element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(super) id: NodeId,
    pub(super) kind: NodeKind,
    pub(super) script: Option<String>,
    pub(super) outgoing: Vec<EdgeId>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The user supplied script fragment, `None` when the element is unscripted.
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Arrows sourced at this element in insertion order, dangling ones included.
    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Whether no further arrow may start at this element.
    pub fn is_at_capacity(&self) -> bool {
        self.outgoing.len() >= self.kind.capacity()
    }
}
