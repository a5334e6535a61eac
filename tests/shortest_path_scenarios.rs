//! End-to-end scenarios: matrix or hand-built graph in, all-pairs tables out.

use relax::*;

fn diamond(bc: f64) -> DirectedGraph<&'static str> {
    let mut g = DirectedGraph::new();
    for key in ["A", "B", "C", "D", "E"] {
        g.add_vertex(key).unwrap();
    }
    g.add_edge(&"A", &"B", 1.0).unwrap();
    g.add_edge(&"A", &"C", 4.0).unwrap();
    g.add_edge(&"B", &"C", bc).unwrap();
    g.add_edge(&"B", &"D", 5.0).unwrap();
    g.add_edge(&"C", &"D", 1.0).unwrap();
    g
}

#[test]
fn test_non_negative_diamond() {
    let g = diamond(2.0);
    let results = all_pairs(&g);

    let expected = [("A", 0.0), ("B", 1.0), ("C", 3.0), ("D", 4.0)];
    for (target, dist) in expected {
        assert_eq!(results.distance(&"A", &target).unwrap(), dist, "A -> {target}");
    }
    assert_eq!(
        results.path(&"A", &"D").unwrap(),
        Some(vec![&"A", &"B", &"C", &"D"])
    );
}

#[test]
fn test_negative_edge_diamond() {
    let g = diamond(-3.0);
    let results = all_pairs(&g);

    assert_eq!(results.distance(&"A", &"B").unwrap(), 1.0);
    assert_eq!(results.distance(&"A", &"C").unwrap(), -2.0);
    assert_eq!(results.distance(&"A", &"D").unwrap(), -1.0);
    assert_eq!(results.predecessor(&"A", &"D").unwrap(), Some(&"C"));
}

#[test]
fn test_disconnected_vertex() {
    let g = diamond(2.0);
    let results = all_pairs(&g);
    for source in ["A", "B", "C", "D"] {
        assert_eq!(results.distance(&source, &"E").unwrap(), f64::INFINITY);
        assert_eq!(results.predecessor(&source, &"E").unwrap(), None);
    }
    // E reaches only itself.
    let from_e = results.from_source(&"E").unwrap();
    assert_eq!(from_e.distances().iter().filter(|d| d.is_finite()).count(), 1);
}

#[test]
fn test_unknown_vertex_leaves_graph_unmodified() {
    let mut g = diamond(2.0);
    let before: Vec<_> = g.edges().copied().collect();

    let err = g.add_edge(&"A", &"nowhere", 1.0).unwrap_err();
    assert!(matches!(err, GraphError::UnknownVertex { .. }));
    let err = g.add_edge(&"nowhere", &"A", 1.0).unwrap_err();
    assert!(matches!(err, GraphError::UnknownVertex { .. }));

    let after: Vec<_> = g.edges().copied().collect();
    assert_eq!(before, after);
    assert_eq!(g.vertex_count(), 5);
}

#[test]
fn test_source_rows_are_fresh_and_consistent() {
    let g = diamond(-3.0);
    let results = all_pairs(&g);
    for (source, row) in results.iter() {
        assert_eq!(row.distance(source), 0.0);
        assert_eq!(row.predecessor(source), None);
        assert_eq!(row.distances().len(), g.vertex_count());
        assert_eq!(row.predecessors().len(), g.vertex_count());
    }
}

#[test]
fn test_matrix_entry_point() {
    let matrix = WeightMatrix::from_json_str(
        r#"[
            [0,    1,    4,    "x",  null],
            [null, 0,    -3,   5,    null],
            [null, null, 0,    1,    null],
            [null, null, null, 0,    null],
            [null, null, null, null, 0]
        ]"#,
    )
    .unwrap();
    let graph = matrix.to_labeled_graph().unwrap();
    let results = all_pairs(&graph);

    let a = "A".to_owned();
    assert_eq!(results.distance(&a, &"D".to_owned()).unwrap(), -1.0);
    assert!(results.distance(&a, &"E".to_owned()).unwrap().is_infinite());

    let distances = results.distance_map();
    assert_eq!(distances["B"]["D"], -2.0);
}

#[test]
fn test_negative_cycle_is_best_effort_unless_checked() {
    let mut g: DirectedGraph<&str> = DirectedGraph::new();
    for key in ["A", "B", "C"] {
        g.add_vertex(key).unwrap();
    }
    g.add_edge(&"A", &"B", 1.0).unwrap();
    g.add_edge(&"B", &"C", -5.0).unwrap();
    g.add_edge(&"C", &"B", 2.0).unwrap();

    // Terminates, and path reconstruction never loops.
    let results = all_pairs(&g);
    for source in ["A", "B", "C"] {
        for target in ["A", "B", "C"] {
            let _ = results.path(&source, &target).unwrap();
        }
    }

    let err = all_pairs_checked(&g).unwrap_err();
    assert_eq!(err, GraphError::NegativeCycle { source: "\"A\"".into() });
}

#[test]
fn test_errors_surface_through_matrix_boundary() {
    let err = WeightMatrix::from_json_str("[[0, 1], [2, 3]]").unwrap_err();
    assert_eq!(
        err.to_string(),
        "The main diagonal of the matrix must all be zero (cell 1,1)"
    );

    let err = MatrixError::from(GraphError::NegativeCycle { source: "\"B\"".into() });
    assert_eq!(err.to_string(), "negative-weight cycle reachable from \"B\"");
}
