use crosspath::graph::{Graph, RouteGraph};
use crosspath::ingest::EdgeRecord;
use ordered_float::OrderedFloat;

#[test]
fn nodes_are_exactly_edge_endpoints_sorted() {
    let mut graph: RouteGraph<OrderedFloat<f64>> = RouteGraph::new();
    graph.add_edge("Zaragoza", "Madrid", OrderedFloat(312.0));
    graph.add_edge("Madrid", "Valencia", OrderedFloat(357.0));

    assert_eq!(graph.node_labels(), vec!["Madrid", "Valencia", "Zaragoza"]);
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn duplicate_pair_keeps_the_last_weight() {
    let mut graph: RouteGraph<OrderedFloat<f64>> = RouteGraph::new();
    graph.add_edge("A", "B", OrderedFloat(5.0));
    graph.add_edge("A", "B", OrderedFloat(2.0));

    assert_eq!(graph.weight("A", "B"), Some(OrderedFloat(2.0)));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn neighbors_of_unknown_label_is_empty() {
    let mut graph: RouteGraph<OrderedFloat<f64>> = RouteGraph::new();
    graph.add_edge("A", "B", OrderedFloat(1.0));

    assert!(graph.neighbors("Nowhere").is_empty());
    assert!(!graph.contains("Nowhere"));
}

#[test]
fn neighbors_of_sink_is_empty() {
    let mut graph: RouteGraph<OrderedFloat<f64>> = RouteGraph::new();
    graph.add_edge("A", "B", OrderedFloat(1.0));

    // B exists but has no outgoing edges
    assert!(graph.contains("B"));
    assert!(graph.neighbors("B").is_empty());
}

#[test]
fn neighbors_carry_targets_and_weights() {
    let mut graph: RouteGraph<OrderedFloat<f64>> = RouteGraph::new();
    graph.add_edge("A", "B", OrderedFloat(1.0));
    graph.add_edge("A", "C", OrderedFloat(2.5));

    let mut neighbors = graph.neighbors("A");
    neighbors.sort_by_key(|&(label, _)| label.to_string());
    assert_eq!(
        neighbors,
        vec![("B", OrderedFloat(1.0)), ("C", OrderedFloat(2.5))]
    );
}

#[test]
fn weight_of_missing_edge_is_none() {
    let mut graph: RouteGraph<OrderedFloat<f64>> = RouteGraph::new();
    graph.add_edge("A", "B", OrderedFloat(1.0));

    assert_eq!(graph.weight("B", "A"), None);
    assert_eq!(graph.weight("A", "Nowhere"), None);
}

#[test]
fn from_records_matches_incremental_construction() {
    let records = vec![
        EdgeRecord {
            source: "A".to_string(),
            target: "B".to_string(),
            weight: 1.0,
        },
        EdgeRecord {
            source: "B".to_string(),
            target: "C".to_string(),
            weight: 2.0,
        },
        // Duplicate pair: the later record wins
        EdgeRecord {
            source: "A".to_string(),
            target: "B".to_string(),
            weight: 9.0,
        },
    ];

    let graph: RouteGraph<OrderedFloat<f64>> = RouteGraph::from_records(&records);

    assert_eq!(graph.weight("A", "B"), Some(OrderedFloat(9.0)));
    assert_eq!(graph.weight("B", "C"), Some(OrderedFloat(2.0)));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn edges_iterates_every_connection() {
    let mut graph: RouteGraph<OrderedFloat<f64>> = RouteGraph::new();
    graph.add_edge("A", "B", OrderedFloat(1.0));
    graph.add_edge("B", "C", OrderedFloat(2.0));

    let mut edges: Vec<(String, String, f64)> = graph
        .edges()
        .map(|(s, t, w)| (s.to_string(), t.to_string(), w.into_inner()))
        .collect();
    edges.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

    assert_eq!(
        edges,
        vec![
            ("A".to_string(), "B".to_string(), 1.0),
            ("B".to_string(), "C".to_string(), 2.0),
        ]
    );
}
