//! Checks run while an arrow is being drawn, before the graph accepts it.

use crate::error::ValidationError;
use crate::graph::{Graph, NodeId, NodeKind};
use ahash::AHashSet;

/// Refuses a new arrow from `source` when every outgoing slot is taken.
pub fn check_arrow_capacity(graph: &Graph, source: NodeId) -> Result<(), ValidationError> {
    match graph.node(source) {
        Some(node) if node.is_at_capacity() => Err(ValidationError::MaxChildrenReached {
            node: source,
            capacity: node.kind().capacity(),
        }),
        _ => Ok(()),
    }
}

/// Refuses an arrow from `source` landing on `target`.
///
/// Nothing may point at the entry element, and an arrow between two branch
/// elements must not close a cycle made only of branches.
pub fn check_arrow_target(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
) -> Result<(), ValidationError> {
    if graph.entry() == Some(target) {
        return Err(ValidationError::CannotConnectToEntry);
    }
    check_always_true_loop(graph, source, target)
}

/// The full check for a proposed arrow.
///
/// With no target yet only the source's capacity is checked. With a target both
/// the capacity and the target rules apply.
pub fn validate_arrow_addition(
    graph: &Graph,
    source: NodeId,
    target: Option<NodeId>,
) -> Result<(), ValidationError> {
    check_arrow_capacity(graph, source)?;
    match target {
        Some(target) => check_arrow_target(graph, source, target),
        None => Ok(()),
    }
}

/// Fails with `HasAlwaysTrueLoop` when the arrow `from -> to` joins two branch
/// elements and `from` can already be reached from `to` through branches alone.
pub fn check_always_true_loop(graph: &Graph, from: NodeId, to: NodeId) -> Result<(), ValidationError> {
    if !is_branch(graph, from) || !is_branch(graph, to) {
        return Ok(());
    }

    let mut visited = AHashSet::new();
    let mut pending = vec![to];
    while let Some(current) = pending.pop() {
        if !visited.insert(current) {
            continue;
        }
        if current == from {
            return Err(ValidationError::HasAlwaysTrueLoop { from, to });
        }
        if !is_branch(graph, current) {
            continue;
        }
        pending.extend(graph.outgoing(current).map(|(next, _)| next));
    }
    Ok(())
}

fn is_branch(graph: &Graph, id: NodeId) -> bool {
    graph
        .node(id)
        .is_some_and(|node| node.kind() == NodeKind::Branch)
}

/// Re-runs the capacity and entry-target rules over every arrow in the graph.
///
/// Graphs built through the editing API always pass. Those ingested with
/// `Graph::add_edge_unchecked` or `DiagramDefinition::build_unchecked` may not.
pub fn check_arrow_limits(graph: &Graph) -> Result<(), ValidationError> {
    for node in graph.nodes() {
        let capacity = node.kind().capacity();
        if node.outgoing_edges().len() > capacity {
            return Err(ValidationError::MaxChildrenReached {
                node: node.id(),
                capacity,
            });
        }
    }
    if let Some(entry) = graph.entry() {
        if graph.edges().any(|edge| edge.target() == Some(entry)) {
            return Err(ValidationError::CannotConnectToEntry);
        }
    }
    Ok(())
}
