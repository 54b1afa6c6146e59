//! Benchmark parameter types, rendered into Criterion benchmark ids.

use std::fmt;

/// Parameters for a graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count)
    }
}

/// Parameters for a matcher benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MatcherBenchParams {
    /// Number of strings searched.
    pub string_count: usize,
    /// Number of patterns.
    pub pattern_count: usize,
    /// Whether matching ignores ASCII case.
    pub ignore_case: bool,
}

impl fmt::Display for MatcherBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "strings={},patterns={},icase={}",
            self.string_count, self.pattern_count, self.ignore_case
        )
    }
}

/// Parameters for a record-linkage benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct LinkageBenchParams {
    /// Number of rows per column.
    pub row_count: usize,
    /// Number of distinct values each column draws from.
    pub cardinality: usize,
}

impl fmt::Display for LinkageBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows={},card={}", self.row_count, self.cardinality)
    }
}
