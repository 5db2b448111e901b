//! Common test utilities for building diagrams.
use flochart::prelude::*;

/// Element ids of the diagram built by [`create_decision_diagram`].
#[allow(dead_code)]
pub struct DecisionIds {
    pub entry: NodeId,
    pub a: NodeId,
    pub b: NodeId,
    pub c: NodeId,
    pub d: NodeId,
}

/// Creates `entry -> A(action "x") -> B(branch "y")`, with B's `yes` arrow
/// going to C (action "c") and its `no` arrow to D (action "d").
#[allow(dead_code)]
pub fn create_decision_diagram() -> (Diagram, DecisionIds) {
    let mut diagram = Diagram::new("decision", "Picks c or d depending on y");
    let graph = &mut diagram.graph;

    let entry = graph.add_node(NodeKind::Entry, None).unwrap();
    let a = graph.add_node(NodeKind::Action, Some("x".into())).unwrap();
    let b = graph.add_node(NodeKind::Branch, Some("y".into())).unwrap();
    let c = graph.add_node(NodeKind::Action, Some("c".into())).unwrap();
    let d = graph.add_node(NodeKind::Action, Some("d".into())).unwrap();

    graph.add_edge(entry, a, None).unwrap();
    graph.add_edge(a, b, None).unwrap();
    graph.add_edge(b, c, Some(Condition::Yes)).unwrap();
    graph.add_edge(b, d, Some(Condition::No)).unwrap();

    (diagram, DecisionIds { entry, a, b, c, d })
}

/// Creates a diamond that re-converges:
/// `entry -> split`, `split -yes-> left`, `split -no-> right`,
/// and both `left` and `right` lead to `join`.
#[allow(dead_code)]
pub fn create_diamond_diagram() -> (Diagram, [NodeId; 5]) {
    let mut diagram = Diagram::new("diamond", "");
    let graph = &mut diagram.graph;

    let entry = graph.add_node(NodeKind::Entry, None).unwrap();
    let split = graph
        .add_node(NodeKind::Branch, Some("return env.vars.go;".into()))
        .unwrap();
    let left = graph
        .add_node(NodeKind::Action, Some("env.vars.n = 1;".into()))
        .unwrap();
    let right = graph
        .add_node(NodeKind::Action, Some("env.vars.n = 2;".into()))
        .unwrap();
    let join = graph
        .add_node(NodeKind::Action, Some("floApi.done();".into()))
        .unwrap();

    graph.add_edge(entry, split, None).unwrap();
    graph.add_edge(split, left, Some(Condition::Yes)).unwrap();
    graph.add_edge(split, right, Some(Condition::No)).unwrap();
    graph.add_edge(left, join, None).unwrap();
    graph.add_edge(right, join, None).unwrap();

    (diagram, [entry, split, left, right, join])
}

/// Counts callable-unit definitions in generated source.
#[allow(dead_code)]
pub fn count_units(source: &str) -> usize {
    source.matches("    function ").count()
}

/// Returns the text of the unit named `name`, up to its closing brace.
#[allow(dead_code)]
pub fn unit_text<'a>(source: &'a str, name: &str) -> &'a str {
    let header = format!("    function {}(env) {{\n", name);
    let start = source
        .find(&header)
        .unwrap_or_else(|| panic!("unit {} not found in:\n{}", name, source));
    let rest = &source[start..];
    let end = rest.find("\n    }\n").expect("unterminated unit") + "\n    }\n".len();
    &rest[..end]
}

/// A definition of the decision diagram as JSON.
#[allow(dead_code)]
pub const DECISION_JSON: &str = r#"{
    "name": "decision",
    "description": "Picks c or d depending on y",
    "nodes": [
        { "key": "start", "kind": "entry" },
        { "key": "A", "kind": "action", "script": "x" },
        { "key": "B", "kind": "branch", "script": "y" },
        { "key": "C", "kind": "action", "script": "c" },
        { "key": "D", "kind": "action", "script": "d" }
    ],
    "edges": [
        { "source": "start", "target": "A" },
        { "source": "A", "target": "B" },
        { "source": "B", "target": "D", "condition": "no" },
        { "source": "B", "target": "C", "condition": "yes" }
    ]
}"#;
