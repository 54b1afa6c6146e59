//! Property-based tests for the graph, matcher and linkage primitives.
//!
//! Every property compares a primitive against a brute-force oracle over
//! generated fixtures: labeling and connectivity against all-pairs
//! reachability, bounded search against all-pairs distances, the three
//! matcher modes against a byte-window scan, and linkage against a naive
//! closure over shared keys.

mod connectivity;
mod linkage;
mod matching;
mod paths;
mod strategies;
mod types;
