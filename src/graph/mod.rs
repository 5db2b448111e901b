//! # Diagram Graph Model
//!
//! Arena storage for diagram elements and the arrows between them. Elements and
//! arrows are addressed by small integer ids that are never reused, so removing an
//! element is a sweep over the arrow arena rather than a walk over back-references.
//!
//! Every edit that could break a structural invariant (arrow capacity, arrows into
//! the entry element, loops made only of conditions) is checked before it is applied
//! and refused with a [`GraphError`] instead of leaving the graph inconsistent.

mod edge;
mod node;

pub use edge::*;
pub use node::*;

use crate::error::{GraphError, ValidationError};
use crate::validator;
use std::fmt;

/// Stable identity of a diagram element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Stable identity of an arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element #{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arrow #{}", self.0)
    }
}

/// The directed graph a diagram compiles from.
///
/// Slots are tombstoned on removal, so iteration over live elements follows the
/// order in which they were added.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Option<Node>>,
    edges: Vec<Option<Edge>>,
    entry: Option<NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element. A second entry element is refused.
    pub fn add_node(&mut self, kind: NodeKind, script: Option<String>) -> Result<NodeId, GraphError> {
        if kind == NodeKind::Entry {
            if let Some(existing) = self.entry {
                return Err(GraphError::DuplicateEntry(existing));
            }
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node {
            id,
            kind,
            script,
            outgoing: Vec::new(),
        }));
        if kind == NodeKind::Entry {
            self.entry = Some(id);
        }
        tracing::debug!(%id, ?kind, "element added");
        Ok(id)
    }

    /// Removes an element together with every arrow anchored to it.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(GraphError::NodeNotFound(id))?;

        let doomed: Vec<EdgeId> = self
            .edges()
            .filter(|edge| edge.touches(id))
            .map(Edge::id)
            .collect();
        for edge_id in &doomed {
            self.detach_edge(*edge_id);
        }

        if self.entry == Some(id) {
            self.entry = None;
        }
        tracing::debug!(%id, removed_arrows = doomed.len(), "element removed");
        Ok(node)
    }

    /// Starts an arrow at `source` without a target yet.
    ///
    /// The arrow occupies one of the source's outgoing slots straight away, so a
    /// source that is already full refuses it.
    pub fn begin_edge(
        &mut self,
        source: NodeId,
        condition: Option<Condition>,
    ) -> Result<EdgeId, GraphError> {
        self.require_node(source)?;
        Self::guard(validator::check_arrow_capacity(self, source))?;
        Ok(self.insert_edge(source, None, condition))
    }

    /// Drops the loose end of a dangling arrow onto `target`.
    pub fn anchor_edge(&mut self, edge: EdgeId, target: NodeId) -> Result<(), GraphError> {
        let (source, anchored) = self
            .edge(edge)
            .map(|e| (e.source, e.is_anchored()))
            .ok_or(GraphError::EdgeNotFound(edge))?;
        if anchored {
            return Err(GraphError::EdgeAlreadyAnchored(edge));
        }
        self.require_node(target)?;
        Self::guard(validator::check_arrow_target(self, source, target))?;

        if let Some(slot) = self.edges.get_mut(edge.0).and_then(Option::as_mut) {
            slot.target = Some(target);
        }
        tracing::debug!(%edge, %source, %target, "arrow anchored");
        Ok(())
    }

    /// Adds a fully anchored arrow, running every mutation-time check first.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        condition: Option<Condition>,
    ) -> Result<EdgeId, GraphError> {
        self.require_node(source)?;
        self.require_node(target)?;
        Self::guard(validator::validate_arrow_addition(self, source, Some(target)))?;
        Ok(self.insert_edge(source, Some(target), condition))
    }

    /// Adds an anchored arrow without the capacity, entry-target or loop checks.
    ///
    /// Meant for ingesting diagrams saved by other tools, which may already break
    /// those rules. Run [`validator::check_arrow_limits`] or [`validator::report`]
    /// afterwards to find out.
    pub fn add_edge_unchecked(
        &mut self,
        source: NodeId,
        target: NodeId,
        condition: Option<Condition>,
    ) -> Result<EdgeId, GraphError> {
        self.require_node(source)?;
        self.require_node(target)?;
        Ok(self.insert_edge(source, Some(target), condition))
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge, GraphError> {
        self.detach_edge(id).ok_or(GraphError::EdgeNotFound(id))
    }

    pub fn set_condition(
        &mut self,
        id: EdgeId,
        condition: Option<Condition>,
    ) -> Result<(), GraphError> {
        let edge = self
            .edges
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(GraphError::EdgeNotFound(id))?;
        edge.condition = condition;
        Ok(())
    }

    pub fn set_script(&mut self, id: NodeId, script: Option<String>) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(GraphError::NodeNotFound(id))?;
        node.script = script;
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    /// Live elements in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().flatten()
    }

    /// Live arrows in insertion order, dangling ones included.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn entry(&self) -> Option<NodeId> {
        self.entry
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Fully anchored arrows leaving `id`, paired with their targets, in insertion order.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|node| node.outgoing.iter())
            .filter_map(move |edge_id| self.edge(*edge_id))
            .filter_map(|edge| edge.target.map(|target| (target, edge)))
    }

    fn require_node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.node(id).ok_or(GraphError::NodeNotFound(id))
    }

    fn guard(check: Result<(), ValidationError>) -> Result<(), GraphError> {
        check.map_err(|err| {
            tracing::warn!(error = %err, "edit rejected");
            GraphError::from(err)
        })
    }

    fn insert_edge(
        &mut self,
        source: NodeId,
        target: Option<NodeId>,
        condition: Option<Condition>,
    ) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Some(Edge {
            id,
            source,
            target,
            condition,
        }));
        if let Some(node) = self.nodes.get_mut(source.0).and_then(Option::as_mut) {
            node.outgoing.push(id);
        }
        tracing::debug!(%id, %source, ?target, ?condition, "arrow added");
        id
    }

    fn detach_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.get_mut(id.0).and_then(Option::take)?;
        if let Some(source) = self.nodes.get_mut(edge.source.0).and_then(Option::as_mut) {
            source.outgoing.retain(|e| *e != id);
        }
        Some(edge)
    }
}
