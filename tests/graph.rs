//! Tests for the graph model and its edit-time rules.
mod common;
use common::*;
use flochart::prelude::*;

#[test]
fn test_nodes_iterate_in_insertion_order() {
    let mut graph = Graph::new();
    let a = graph.add_node(NodeKind::Action, None).unwrap();
    let entry = graph.add_node(NodeKind::Entry, None).unwrap();
    let b = graph.add_node(NodeKind::Branch, None).unwrap();

    let order: Vec<NodeId> = graph.nodes().map(|n| n.id()).collect();
    assert_eq!(order, vec![a, entry, b]);
    assert_eq!(graph.entry(), Some(entry));
}

#[test]
fn test_second_entry_is_refused() {
    let mut graph = Graph::new();
    let entry = graph.add_node(NodeKind::Entry, None).unwrap();
    let err = graph.add_node(NodeKind::Entry, None).unwrap_err();
    assert_eq!(err, GraphError::DuplicateEntry(entry));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_outgoing_lists_targets_in_insertion_order() {
    let (diagram, ids) = create_decision_diagram();
    let targets: Vec<(NodeId, Option<Condition>)> = diagram
        .graph
        .outgoing(ids.b)
        .map(|(target, edge)| (target, edge.condition()))
        .collect();
    assert_eq!(
        targets,
        vec![(ids.c, Some(Condition::Yes)), (ids.d, Some(Condition::No))]
    );
    assert_eq!(diagram.graph.outgoing(ids.c).count(), 0);
}

#[test]
fn test_action_capacity_is_one() {
    let mut graph = Graph::new();
    let a = graph.add_node(NodeKind::Action, Some("a".into())).unwrap();
    let b = graph.add_node(NodeKind::Action, Some("b".into())).unwrap();
    let c = graph.add_node(NodeKind::Action, Some("c".into())).unwrap();

    graph.add_edge(a, b, None).unwrap();
    let err = graph.add_edge(a, c, None).unwrap_err();
    assert_eq!(
        err,
        GraphError::Rejected(ValidationError::MaxChildrenReached {
            node: a,
            capacity: 1
        })
    );
    assert_eq!(err.code(), ErrorCode::MaxChildrenReached);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_branch_capacity_is_two_and_entry_capacity_is_one() {
    let (mut diagram, ids) = create_decision_diagram();
    let graph = &mut diagram.graph;
    let extra = graph.add_node(NodeKind::Action, Some("e".into())).unwrap();

    let err = graph.add_edge(ids.b, extra, None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxChildrenReached);

    let err = graph.add_edge(ids.entry, extra, None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxChildrenReached);
}

#[test]
fn test_arrow_into_entry_is_refused() {
    let (mut diagram, ids) = create_decision_diagram();
    let err = diagram.graph.add_edge(ids.c, ids.entry, None).unwrap_err();
    assert_eq!(err, GraphError::Rejected(ValidationError::CannotConnectToEntry));
    assert_eq!(diagram.graph.outgoing(ids.c).count(), 0);
}

#[test]
fn test_dangling_arrow_occupies_capacity_until_removed() {
    let mut graph = Graph::new();
    let a = graph.add_node(NodeKind::Action, Some("a".into())).unwrap();
    let b = graph.add_node(NodeKind::Action, Some("b".into())).unwrap();

    let dangling = graph.begin_edge(a, None).unwrap();
    assert!(!graph.edge(dangling).unwrap().is_anchored());
    assert_eq!(graph.outgoing(a).count(), 0);

    let err = graph.begin_edge(a, None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxChildrenReached);

    graph.remove_edge(dangling).unwrap();
    graph.add_edge(a, b, None).unwrap();
    assert_eq!(graph.outgoing(a).count(), 1);
}

#[test]
fn test_anchoring_a_dangling_arrow() {
    let mut graph = Graph::new();
    let entry = graph.add_node(NodeKind::Entry, None).unwrap();
    let a = graph.add_node(NodeKind::Action, Some("a".into())).unwrap();
    let b = graph.add_node(NodeKind::Action, Some("b".into())).unwrap();

    let edge = graph.begin_edge(a, None).unwrap();
    let err = graph.anchor_edge(edge, entry).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CannotConnectToEntry);
    assert!(!graph.edge(edge).unwrap().is_anchored());

    graph.anchor_edge(edge, b).unwrap();
    assert_eq!(graph.edge(edge).unwrap().target(), Some(b));
    assert_eq!(
        graph.anchor_edge(edge, b).unwrap_err(),
        GraphError::EdgeAlreadyAnchored(edge)
    );
}

#[test]
fn test_remove_node_cascades_to_anchored_arrows() {
    let (mut diagram, ids) = create_decision_diagram();
    let graph = &mut diagram.graph;
    assert_eq!(graph.edge_count(), 4);

    let removed = graph.remove_node(ids.b).unwrap();
    assert_eq!(removed.kind(), NodeKind::Branch);

    // a -> b, b -> c and b -> d are gone; entry -> a survives.
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.outgoing(ids.a).count(), 0);
    assert!(graph.node(ids.a).unwrap().outgoing_edges().is_empty());
    assert!(!graph.contains_node(ids.b));

    // The freed slot lets `a` connect again.
    graph.add_edge(ids.a, ids.c, None).unwrap();
}

#[test]
fn test_ids_are_never_reused() {
    let mut graph = Graph::new();
    let first = graph.add_node(NodeKind::Action, None).unwrap();
    graph.remove_node(first).unwrap();
    let second = graph.add_node(NodeKind::Action, None).unwrap();
    assert_ne!(first, second);
    assert!(graph.node(first).is_none());
    assert_eq!(
        graph.remove_node(first).unwrap_err(),
        GraphError::NodeNotFound(first)
    );
}

#[test]
fn test_removing_entry_clears_it() {
    let (mut diagram, ids) = create_decision_diagram();
    diagram.graph.remove_node(ids.entry).unwrap();
    assert_eq!(diagram.graph.entry(), None);
    diagram.graph.add_node(NodeKind::Entry, None).unwrap();
}

#[test]
fn test_edits_on_missing_items_are_refused() {
    let (mut diagram, ids) = create_decision_diagram();
    let graph = &mut diagram.graph;
    let lonely = graph.add_node(NodeKind::Action, None).unwrap();
    graph.remove_node(lonely).unwrap();

    assert_eq!(
        graph.add_edge(ids.c, lonely, None).unwrap_err(),
        GraphError::NodeNotFound(lonely)
    );
    assert_eq!(
        graph.set_script(lonely, Some("x".into())).unwrap_err(),
        GraphError::NodeNotFound(lonely)
    );

    let edge = graph.add_edge(ids.c, ids.d, None).unwrap();
    graph.remove_edge(edge).unwrap();
    assert_eq!(
        graph.remove_edge(edge).unwrap_err(),
        GraphError::EdgeNotFound(edge)
    );
    assert_eq!(
        graph.set_condition(edge, None).unwrap_err(),
        GraphError::EdgeNotFound(edge)
    );
}

#[test]
fn test_set_script_and_condition() {
    let (mut diagram, ids) = create_decision_diagram();
    let graph = &mut diagram.graph;

    graph.set_script(ids.c, None).unwrap();
    assert_eq!(graph.node(ids.c).unwrap().script(), None);

    let (_, yes_edge) = graph.outgoing(ids.b).next().unwrap();
    let yes_edge = yes_edge.id();
    graph.set_condition(yes_edge, Some(Condition::No)).unwrap();
    assert_eq!(
        graph.edge(yes_edge).unwrap().condition(),
        Some(Condition::No)
    );
}

#[test]
fn test_unchecked_arrows_skip_rules_but_need_both_elements() {
    let mut graph = Graph::new();
    let entry = graph.add_node(NodeKind::Entry, None).unwrap();
    let a = graph.add_node(NodeKind::Action, Some("a".into())).unwrap();
    let b = graph.add_node(NodeKind::Action, Some("b".into())).unwrap();

    graph.add_edge_unchecked(entry, a, None).unwrap();
    graph.add_edge_unchecked(entry, b, None).unwrap();
    graph.add_edge_unchecked(a, entry, None).unwrap();
    assert_eq!(graph.outgoing(entry).count(), 2);
    assert_eq!(graph.edge_count(), 3);

    graph.remove_node(b).unwrap();
    assert_eq!(
        graph.add_edge_unchecked(a, b, None),
        Err(GraphError::NodeNotFound(b))
    );
}
