//! Pre-compile checks over a finished graph.

use crate::error::ValidationError;
use crate::graph::{Condition, Graph, NodeId, NodeKind};
use ahash::AHashSet;

/// The entry element must exist and lead to at most one element.
pub fn check_entry(graph: &Graph) -> Result<NodeId, ValidationError> {
    let entry = graph.entry().ok_or(ValidationError::MissingEntry)?;
    let children = graph.outgoing(entry).count();
    if children > 1 {
        return Err(ValidationError::EntryMustHaveSingleChild { children });
    }
    Ok(entry)
}

/// Every element visited by a walk from the entry element, in visiting order.
pub fn reachable_from_entry(graph: &Graph) -> Result<Vec<NodeId>, ValidationError> {
    let entry = graph.entry().ok_or(ValidationError::MissingEntry)?;

    let mut visited = AHashSet::new();
    let mut order = Vec::new();
    let mut pending = vec![entry];
    while let Some(current) = pending.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);
        pending.extend(graph.outgoing(current).map(|(next, _)| next));
    }
    Ok(order)
}

/// Elements that cannot be reached from the entry element, in insertion order.
pub fn unreachable_nodes(graph: &Graph) -> Result<Vec<NodeId>, ValidationError> {
    let reached: AHashSet<NodeId> = reachable_from_entry(graph)?.into_iter().collect();
    Ok(graph
        .nodes()
        .map(|node| node.id())
        .filter(|id| !reached.contains(id))
        .collect())
}

pub fn check_reachability(graph: &Graph) -> Result<(), ValidationError> {
    match unreachable_nodes(graph)?.first() {
        Some(&node) => Err(ValidationError::NotAllElementsReachable { node }),
        None => Ok(()),
    }
}

/// Non-entry elements whose script is missing or empty, in insertion order.
///
/// A body of only whitespace still counts as a script.
pub fn unscripted_nodes(graph: &Graph) -> Vec<NodeId> {
    graph
        .nodes()
        .filter(|node| node.kind() != NodeKind::Entry)
        .filter(|node| node.script().is_none_or(str::is_empty))
        .map(|node| node.id())
        .collect()
}

pub fn check_scripts(graph: &Graph) -> Result<(), ValidationError> {
    match unscripted_nodes(graph).first() {
        Some(&node) => Err(ValidationError::UnscriptedElements { node }),
        None => Ok(()),
    }
}

/// Branch elements whose own outgoing arrows are not exactly one `yes` and one `no`.
///
/// Only anchored arrows sourced at the branch count. Arrows arriving at it do not.
pub fn mislabelled_branches(graph: &Graph) -> Vec<NodeId> {
    graph
        .nodes()
        .filter(|node| node.kind() == NodeKind::Branch)
        .map(|node| node.id())
        .filter(|&id| {
            let (mut arrows, mut yes, mut no) = (0, 0, 0);
            for (_, edge) in graph.outgoing(id) {
                arrows += 1;
                match edge.condition() {
                    Some(Condition::Yes) => yes += 1,
                    Some(Condition::No) => no += 1,
                    None => {}
                }
            }
            arrows != 2 || yes != 1 || no != 1
        })
        .collect()
}

pub fn check_branch_labels(graph: &Graph) -> Result<(), ValidationError> {
    match mislabelled_branches(graph).first() {
        Some(&node) => Err(ValidationError::DiamondArrowNoLabel { node }),
        None => Ok(()),
    }
}
