use super::names::NameTable;
use super::shell;
use crate::graph::{Condition, Edge, Graph, NodeId};
use ahash::AHashSet;

/// Depth-first emission of callable units, one per element reached from the entry.
pub(super) struct UnitEmitter<'a> {
    graph: &'a Graph,
    names: &'a NameTable,
    visited: AHashSet<NodeId>,
    code: String,
    units: usize,
}

impl<'a> UnitEmitter<'a> {
    pub(super) fn new(graph: &'a Graph, names: &'a NameTable) -> Self {
        Self {
            graph,
            names,
            visited: AHashSet::with_capacity(graph.node_count()),
            code: String::new(),
            units: 0,
        }
    }

    /// Emits every unit reachable from `start`.
    ///
    /// Pending elements sit on an explicit stack. The `yes` arm is pushed last
    /// so its whole subtree is emitted before the `no` arm, matching a recursive
    /// preorder walk. Elements already emitted are skipped, so shared
    /// descendants of a re-converging branch appear once.
    pub(super) fn emit_from(mut self, start: NodeId) -> (String, usize) {
        let mut pending = vec![start];
        while let Some(current) = pending.pop() {
            if !self.visited.insert(current) {
                continue;
            }
            let successors = self.emit_unit(current);
            pending.extend(successors.into_iter().rev());
        }
        (self.code, self.units)
    }

    /// Writes the unit for `id` and returns its successors in visiting order.
    fn emit_unit(&mut self, id: NodeId) -> Vec<NodeId> {
        let (graph, names) = (self.graph, self.names);
        let name = names.get(id);
        let body = graph
            .node(id)
            .and_then(|node| node.script())
            .unwrap_or_default();
        let edges: Vec<(NodeId, &Edge)> = graph.outgoing(id).collect();

        let (unit, successors) = match edges.as_slice() {
            [] => (shell::terminal_unit(name, body), vec![]),
            [(next, _)] => (
                shell::chained_unit(name, body, names.get(*next)),
                vec![*next],
            ),
            [first, second, ..] => {
                let (yes, no) = split_arms(*first, *second);
                (
                    shell::branch_unit(name, body, names.get(yes), names.get(no)),
                    vec![yes, no],
                )
            }
        };

        tracing::debug!(%id, unit = name, successors = successors.len(), "unit emitted");
        self.code.push_str(&unit);
        self.units += 1;
        successors
    }
}

/// Picks the `yes` and `no` targets of a branch by label, not by position.
///
/// With incomplete labels the second arrow fills whichever arm is unclaimed.
fn split_arms(first: (NodeId, &Edge), second: (NodeId, &Edge)) -> (NodeId, NodeId) {
    let yes = if first.1.condition() == Some(Condition::Yes) {
        first.0
    } else {
        second.0
    };
    let no = if first.1.condition() == Some(Condition::No) {
        first.0
    } else {
        second.0
    };
    (yes, no)
}
