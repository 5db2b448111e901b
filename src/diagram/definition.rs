use super::Diagram;
use crate::error::DefinitionError;
use crate::graph::{Condition, NodeId, NodeKind};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A format-neutral description of a diagram, keyed by caller-chosen strings.
///
/// Building a [`Diagram`] from it goes through the regular editing API, so every
/// edit-time rule applies to imported diagrams too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagramDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Name the diagram was first saved under, if it has been renamed since.
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub version: u32,
    pub nodes: Vec<NodeDefinition>,
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
}

/// Defines a single diagram element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub key: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub script: Option<String>,
}

/// Defines an arrow between two elements by their keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub condition: Option<Condition>,
}

impl DiagramDefinition {
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(json).map_err(|e| DefinitionError::JsonParseError(e.to_string()))
    }

    /// Replays the definition onto an empty diagram, elements first, then arrows.
    pub fn build(self) -> Result<Diagram, DefinitionError> {
        self.replay(true)
    }

    /// Like [`build`](Self::build), but arrows skip the edit-time checks.
    ///
    /// For diagrams produced by other tools, which may break the arrow rules.
    /// The result should go through `validator::report` before it is compiled.
    pub fn build_unchecked(self) -> Result<Diagram, DefinitionError> {
        self.replay(false)
    }

    fn replay(self, checked: bool) -> Result<Diagram, DefinitionError> {
        let mut diagram = Diagram::new(self.name, self.description);
        diagram.original_name = self.original_name;
        diagram.version = self.version;
        let mut keys: AHashMap<String, NodeId> = AHashMap::with_capacity(self.nodes.len());

        for node in self.nodes {
            if keys.contains_key(&node.key) {
                return Err(DefinitionError::DuplicateKey(node.key));
            }
            let id = diagram
                .graph
                .add_node(node.kind, node.script)
                .map_err(|error| DefinitionError::RejectedEdit {
                    key: node.key.clone(),
                    error,
                })?;
            keys.insert(node.key, id);
        }

        for edge in self.edges {
            let lookup = |key: &str| {
                keys.get(key)
                    .copied()
                    .ok_or_else(|| DefinitionError::UnknownElement {
                        missing_key: key.to_string(),
                        source_key: edge.source.clone(),
                    })
            };
            let source = lookup(&edge.source)?;
            let target = lookup(&edge.target)?;
            let added = if checked {
                diagram.graph.add_edge(source, target, edge.condition)
            } else {
                diagram.graph.add_edge_unchecked(source, target, edge.condition)
            };
            added.map_err(|error| DefinitionError::RejectedEdit {
                key: format!("{} -> {}", edge.source, edge.target),
                error,
            })?;
        }

        tracing::debug!(
            name = %diagram.name,
            elements = diagram.graph.node_count(),
            arrows = diagram.graph.edge_count(),
            checked,
            "diagram built from definition"
        );
        Ok(diagram)
    }
}
