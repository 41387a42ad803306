use crosspath::{Error, FloydWarshall, PathQuery, RouteGraph};
use ordered_float::OrderedFloat;

fn weighted(edges: &[(&str, &str, f64)]) -> RouteGraph<OrderedFloat<f64>> {
    let mut graph = RouteGraph::new();
    for &(source, target, weight) in edges {
        graph.add_edge(source, target, OrderedFloat(weight));
    }
    graph
}

#[test]
fn self_distances_are_zero() {
    let graph = weighted(&[("A", "B", 3.0), ("B", "C", 4.0)]);
    let all_pairs = FloydWarshall::new().compute(&graph).unwrap();

    for label in ["A", "B", "C"] {
        let v = graph.node_id(label).unwrap();
        assert_eq!(all_pairs.distance(v, v), OrderedFloat(0.0));
        assert_eq!(all_pairs.predecessor(v, v), None);
    }
}

#[test]
fn unreachable_pairs_are_infinite() {
    let graph = weighted(&[("A", "B", 3.0)]);
    let all_pairs = FloydWarshall::new().compute(&graph).unwrap();

    let a = graph.node_id("A").unwrap();
    let b = graph.node_id("B").unwrap();

    assert!(all_pairs.distance(b, a).into_inner().is_infinite());
    assert_eq!(all_pairs.predecessor(b, a), None);
}

#[test]
fn predecessors_are_inherited_through_intermediate_hops() {
    let graph = weighted(&[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 10.0)]);
    let all_pairs = FloydWarshall::new().compute(&graph).unwrap();

    let a = graph.node_id("A").unwrap();
    let b = graph.node_id("B").unwrap();
    let c = graph.node_id("C").unwrap();

    // The improving pass through B must rewrite A->C's predecessor so
    // reconstruction walks A, B, C rather than the direct edge
    assert_eq!(all_pairs.distance(a, c), OrderedFloat(2.0));
    assert_eq!(all_pairs.predecessor(a, c), Some(b));

    match all_pairs.route(a, c).unwrap() {
        PathQuery::Found { distance, path } => {
            assert_eq!(distance, OrderedFloat(2.0));
            assert_eq!(path, vec![a, b, c]);
        }
        other => panic!("expected a found route, got {:?}", other),
    }
}

#[test]
fn route_rejects_out_of_range_vertices() {
    let graph = weighted(&[("A", "B", 1.0)]);
    let all_pairs = FloydWarshall::new().compute(&graph).unwrap();

    assert_eq!(all_pairs.route(0, 99).unwrap(), PathQuery::InvalidInput);
    assert_eq!(all_pairs.route(99, 0).unwrap(), PathQuery::InvalidInput);
}

#[test]
fn node_limit_fails_fast() {
    let graph = weighted(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)]);

    let err = FloydWarshall::new()
        .with_node_limit(3)
        .compute(&graph)
        .unwrap_err();

    assert!(matches!(err, Error::GraphTooLarge { nodes: 4, limit: 3 }));
}

#[test]
fn within_node_limit_computes_normally() {
    let graph = weighted(&[("A", "B", 1.0), ("B", "C", 1.0)]);

    let all_pairs = FloydWarshall::new()
        .with_node_limit(3)
        .compute(&graph)
        .unwrap();

    let a = graph.node_id("A").unwrap();
    let c = graph.node_id("C").unwrap();
    assert_eq!(all_pairs.distance(a, c), OrderedFloat(2.0));
}

#[test]
fn negative_weights_are_tolerated_without_negative_cycles() {
    let graph = weighted(&[("A", "B", 2.0), ("B", "C", -1.0), ("A", "C", 5.0)]);
    let all_pairs = FloydWarshall::new().compute(&graph).unwrap();

    let a = graph.node_id("A").unwrap();
    let b = graph.node_id("B").unwrap();
    let c = graph.node_id("C").unwrap();

    assert_eq!(all_pairs.distance(a, c), OrderedFloat(1.0));
    match all_pairs.route(a, c).unwrap() {
        PathQuery::Found { path, .. } => assert_eq!(path, vec![a, b, c]),
        other => panic!("expected a found route, got {:?}", other),
    }
}

#[test]
fn matrices_cover_every_ordered_pair() {
    let graph = weighted(&[("A", "B", 1.0), ("B", "C", 2.0), ("C", "A", 4.0)]);
    let all_pairs = FloydWarshall::new().compute(&graph).unwrap();

    assert_eq!(all_pairs.vertex_count(), 3);
    for i in 0..3 {
        for j in 0..3 {
            // The cycle connects everything, so every pair is finite
            assert!(all_pairs.distance(i, j).into_inner().is_finite());
        }
    }
}
