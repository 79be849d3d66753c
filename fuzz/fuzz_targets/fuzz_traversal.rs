//! Fuzz target for graph building and BFS/DFS.
//!
//! Builds both representations from arbitrary edges and checks that they
//! trace identically and that every trace is well-formed.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_traversal
//! ```

#![no_main]

use arbitrary::Arbitrary;
use graphwalk_core::graph::{bfs, build_graph, dfs, EdgeSpec, Label, Representation};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    vertices: u8,
    start: u8,
    edges: Vec<(u8, u8)>,
}

fn letter(index: u8) -> String {
    Label::from_index(usize::from(index))
        .map(|label| label.to_string())
        .unwrap_or_else(|| "?".to_string())
}

fuzz_target!(|input: Input| {
    let n = usize::from(input.vertices % 27);
    let edges: Vec<EdgeSpec> = input
        .edges
        .iter()
        .map(|&(a, b)| EdgeSpec::new(&letter(a % 27), &letter(b % 27)))
        .collect();
    let start = letter(input.start % 27);

    let (Ok(list), Ok(matrix)) = (
        build_graph(n, Representation::List, &edges),
        build_graph(n, Representation::Matrix, &edges),
    ) else {
        return;
    };

    for (from_list, from_matrix) in [
        (bfs(&list, &start), bfs(&matrix, &start)),
        (dfs(&list, &start), dfs(&matrix, &start)),
    ] {
        assert_eq!(from_list, from_matrix);
        if let Ok(traversal) = from_list {
            assert_eq!(traversal.order.len(), traversal.steps.len());
            assert!(traversal.order.len() <= n);
        }
    }
});
