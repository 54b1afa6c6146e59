//! Test helpers shared by the linkgraph crates: a tracing layer that records
//! spans and events, and the environment-driven property-test profile.

pub mod profile;
pub mod tracing;
