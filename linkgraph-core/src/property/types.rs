//! Fixture types for property-based tests.

use crate::EdgePair;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// Few random edges; many isolated nodes.
    Sparse,
    /// Most node pairs joined.
    Dense,
    /// Random trees, giving long shortest paths.
    Forest,
    /// Two halves with no edge between them.
    Split,
    /// Sparse edges mixed with self-loops and out-of-range endpoints.
    Noisy,
}

impl Topology {
    pub(super) const ALL: [Self; 5] = [
        Self::Sparse,
        Self::Dense,
        Self::Forest,
        Self::Split,
        Self::Noisy,
    ];
}

/// A generated graph plus a batch of query pairs in external ids.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Topology used during generation.
    pub topology: Topology,
    /// Number of nodes.
    pub node_count: usize,
    /// Edge rows, possibly including invalid ones.
    pub edges: Vec<EdgePair>,
    /// Query rows, including identical and out-of-range pairs.
    pub queries: Vec<EdgePair>,
}

impl GraphFixture {
    /// Node count in the host integer type.
    pub(super) fn n_nodes(&self) -> i64 {
        i64::try_from(self.node_count).expect("fixture sizes fit in i64")
    }
}

/// Inputs for one matcher comparison.
#[derive(Clone, Debug)]
pub(super) struct MatchFixture {
    pub strings: Vec<String>,
    pub patterns: Vec<String>,
    pub ignore_case: bool,
}

/// Text columns and settings for one linkage comparison.
#[derive(Clone, Debug)]
pub(super) struct LinkageFixture {
    pub columns: Vec<Vec<Option<String>>>,
    pub incomparables: Vec<String>,
    pub case_sensitive: bool,
    pub min_group_size: usize,
}
