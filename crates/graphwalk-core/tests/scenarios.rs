//! End-to-end traversal scenarios through `TraversalQuery`.

use graphwalk_core::{Error, Traversal, TraversalQuery};
use serde_json::{json, Value};

fn run(payload: Value) -> Result<Traversal, Error> {
    let query: TraversalQuery = serde_json::from_value(payload).expect("valid payload");
    query.run()
}

fn to_json(traversal: &Traversal) -> Value {
    serde_json::to_value(traversal).expect("traversal serializes")
}

#[test]
fn scenario_a_list_bfs() {
    let traversal = run(json!({
        "vertices": 4,
        "representation": "list",
        "edges": "A B\nA C\nB D",
        "start": "A",
        "type": "bfs"
    }))
    .unwrap();

    assert_eq!(
        to_json(&traversal),
        json!({
            "order": ["A", "B", "C", "D"],
            "steps": [
                {"node": "A", "neighbors": ["B", "C"]},
                {"node": "B", "neighbors": ["A", "D"]},
                {"node": "C", "neighbors": ["A"]},
                {"node": "D", "neighbors": ["B"]}
            ]
        })
    );
}

#[test]
fn scenario_b_list_dfs() {
    let traversal = run(json!({
        "vertices": 4,
        "representation": "list",
        "edges": "A B\nA C\nB D",
        "start": "A",
        "type": "dfs"
    }))
    .unwrap();

    assert_eq!(to_json(&traversal)["order"], json!(["A", "B", "D", "C"]));
}

#[test]
fn scenario_c_matrix_isolated_start() {
    let traversal = run(json!({
        "vertices": 3,
        "representation": "matrix",
        "edges": "A B",
        "start": "C"
    }))
    .unwrap();

    assert_eq!(
        to_json(&traversal),
        json!({"order": ["C"], "steps": [{"node": "C", "neighbors": []}]})
    );
}

#[test]
fn scenario_d_malformed_line_skipped() {
    let with_junk = run(json!({
        "vertices": 4,
        "representation": "list",
        "edges": "A B\nA\nA C\n\nB D",
        "type": "bfs"
    }))
    .unwrap();
    let clean = run(json!({
        "vertices": 4,
        "representation": "list",
        "edges": "A B\nA C\nB D",
        "type": "bfs"
    }))
    .unwrap();

    assert_eq!(with_junk, clean);
}

#[test]
fn scenario_e_unknown_start() {
    let err = run(json!({"vertices": 2, "edges": "A B", "start": "Z"})).unwrap_err();
    assert_eq!(err, Error::UnknownLabel("Z".into()));
}

#[test]
fn list_and_matrix_traces_match() {
    for strategy in ["bfs", "dfs"] {
        let list = run(json!({
            "vertices": "6",
            "representation": "list",
            "edges": "F A\nC A\nB E\nA B\nE D\nD C",
            "start": "c",
            "type": strategy
        }))
        .unwrap();
        let matrix = run(json!({
            "vertices": "6",
            "edges": "F A\nC A\nB E\nA B\nE D\nD C",
            "start": "c",
            "type": strategy
        }))
        .unwrap();
        assert_eq!(list, matrix, "strategy {strategy}");
    }
}

#[test]
fn lowercase_edges_and_start_are_normalized() {
    let traversal = run(json!({
        "vertices": 2,
        "representation": "list",
        "edges": "a b",
        "start": "b"
    }))
    .unwrap();
    assert_eq!(to_json(&traversal)["order"], json!(["B", "A"]));
}

#[test]
fn malformed_vertex_count() {
    let err = run(json!({"vertices": "many", "edges": ""})).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
    assert_eq!(err.code(), "MALFORMED_INPUT");
}

#[test]
fn vertex_count_beyond_alphabet() {
    let err = run(json!({"vertices": 30, "edges": ""})).unwrap_err();
    assert_eq!(
        err,
        Error::OutOfRange {
            requested: 30,
            max: 26
        }
    );
}

#[test]
fn zero_vertices_has_no_start() {
    let err = run(json!({"vertices": 0})).unwrap_err();
    assert_eq!(err, Error::UnknownLabel("A".into()));
}
