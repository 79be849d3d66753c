//! Fuzz target for the edge-text parser.
//!
//! This target feeds arbitrary text to `parse_edges` to find:
//! - Panics on malformed input
//! - Skipped-line bookkeeping that disagrees with the input
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_edge_parser
//! ```

#![no_main]

use graphwalk_core::parse_edges;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed = parse_edges(input);
        let lines = input.split('\n').count();
        assert!(parsed.edges.len() + parsed.skipped.len() <= lines);
        assert!(parsed.skipped.iter().all(|&line| line >= 1 && line <= lines));
    }
});
