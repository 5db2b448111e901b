use crate::graph::{Graph, NodeId, NodeKind};
use ahash::AHashMap;

/// Callable-unit identifiers for one compilation pass.
///
/// The entry element takes the reserved runtime symbol; every other element gets
/// `<prefix><n>` with `n` counting up from 1 in insertion order.
pub(super) struct NameTable {
    names: AHashMap<NodeId, String>,
}

impl NameTable {
    pub(super) fn allocate(graph: &Graph, entry_symbol: &str, prefix: &str) -> Self {
        let mut names = AHashMap::with_capacity(graph.node_count());
        let mut counter = 0;
        for node in graph.nodes() {
            let name = match node.kind() {
                NodeKind::Entry => entry_symbol.to_string(),
                NodeKind::Action | NodeKind::Branch => {
                    counter += 1;
                    format!("{}{}", prefix, counter)
                }
            };
            names.insert(node.id(), name);
        }
        Self { names }
    }

    /// Every live element is named by `allocate`, so lookups only miss for ids
    /// from another graph.
    pub(super) fn get(&self, id: NodeId) -> &str {
        self.names.get(&id).map(String::as_str).unwrap_or_default()
    }

    pub(super) fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_takes_reserved_symbol_and_others_count_in_insertion_order() {
        let mut graph = Graph::new();
        let a = graph.add_node(NodeKind::Action, None).unwrap();
        let entry = graph.add_node(NodeKind::Entry, None).unwrap();
        let b = graph.add_node(NodeKind::Branch, None).unwrap();

        let names = NameTable::allocate(&graph, "entryFunction", "function");
        assert_eq!(names.len(), 3);
        assert_eq!(names.get(entry), "entryFunction");
        assert_eq!(names.get(a), "function1");
        assert_eq!(names.get(b), "function2");
    }

    #[test]
    fn removed_elements_do_not_consume_a_name() {
        let mut graph = Graph::new();
        let gone = graph.add_node(NodeKind::Action, None).unwrap();
        let kept = graph.add_node(NodeKind::Action, None).unwrap();
        graph.remove_node(gone).unwrap();

        let names = NameTable::allocate(&graph, "entryFunction", "step");
        assert_eq!(names.len(), 1);
        assert_eq!(names.get(kept), "step1");
    }
}
