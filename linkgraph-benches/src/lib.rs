//! Benchmark support crate for linkgraph.
//!
//! Provides seeded synthetic graphs, string batches and linkage columns plus
//! the parameter types Criterion benchmarks label their runs with.

pub mod error;
pub mod fixtures;
pub mod params;
