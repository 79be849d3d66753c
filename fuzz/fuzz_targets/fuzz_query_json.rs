//! Fuzz target for the JSON request pipeline.
//!
//! Arbitrary bytes are parsed as a traversal request and run; neither step
//! may panic.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_query_json
//! ```

#![no_main]

use graphwalk_core::TraversalQuery;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(query) = serde_json::from_slice::<TraversalQuery>(data) {
        let _ = query.run();
    }
});
