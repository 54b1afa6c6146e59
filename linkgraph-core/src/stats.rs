//! Degree and density statistics computed in one pass over an edge list.

use tracing::instrument;

use crate::{
    error::Result,
    node::{EdgePair, NodeCount, filled_vec},
};

/// Minimum, maximum and mean node degree.
///
/// Nodes without incident edges count as degree zero. An empty graph reports
/// zeros throughout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreeStats {
    /// Smallest degree over all nodes.
    pub min: usize,
    /// Largest degree over all nodes.
    pub max: usize,
    /// Mean degree over all nodes.
    pub mean: f64,
}

impl DegreeStats {
    pub(crate) fn from_degrees(degrees: impl ExactSizeIterator<Item = usize>) -> Self {
        let nodes = degrees.len();
        if nodes == 0 {
            return Self {
                min: 0,
                max: 0,
                mean: 0.0,
            };
        }
        let (min, max, total) = degrees.fold(
            (usize::MAX, 0_usize, 0_usize),
            |(min, max, total), degree| (min.min(degree), max.max(degree), total + degree),
        );
        Self {
            min,
            max,
            mean: total as f64 / nodes as f64,
        }
    }
}

/// Summary statistics for an undirected graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphStats {
    /// Number of input edge rows, including self-loops and invalid rows.
    pub n_edges: usize,
    /// Number of nodes.
    pub n_nodes: usize,
    /// `n_edges` divided by the number of possible undirected edges.
    pub density: f64,
    /// Degree distribution summary.
    pub degree: DegreeStats,
}

/// Computes degree statistics and density for a graph.
///
/// Each valid non-loop edge adds one to the degree of both endpoints;
/// parallel edges count every time. Density uses the raw number of input
/// rows and is `0` for graphs with fewer than two nodes.
///
/// # Errors
/// Returns [`crate::LinkGraphError::InvalidNodeCount`] when `n_nodes` is
/// negative and [`crate::LinkGraphError::AllocationFailed`] when working
/// storage cannot be reserved.
///
/// # Examples
/// ```
/// use linkgraph_core::graph_stats;
///
/// let stats = graph_stats(&[(1, 2), (1, 3)], 3)?;
/// assert_eq!(stats.degree.min, 1);
/// assert_eq!(stats.degree.max, 2);
/// assert!((stats.density - 2.0 / 3.0).abs() < 1e-12);
/// # Ok::<(), linkgraph_core::LinkGraphError>(())
/// ```
#[instrument(
    name = "graph.stats",
    err,
    skip(edges),
    fields(edges = edges.len(), n_nodes = n_nodes),
)]
pub fn graph_stats(edges: &[EdgePair], n_nodes: i64) -> Result<GraphStats> {
    let count = NodeCount::new(n_nodes)?;
    let mut degrees = filled_vec(count.get(), 0_usize)?;
    for &edge in edges {
        if let Some((from, to)) = count.resolve_pair(edge)
            && from != to
        {
            degrees[from] += 1;
            degrees[to] += 1;
        }
    }
    Ok(summarise(edges.len(), count, degrees.into_iter()))
}

pub(crate) fn summarise(
    n_edges: usize,
    count: NodeCount,
    degrees: impl ExactSizeIterator<Item = usize>,
) -> GraphStats {
    GraphStats {
        n_edges,
        n_nodes: count.get(),
        density: density(n_edges, count.get()),
        degree: DegreeStats::from_degrees(degrees),
    }
}

fn density(n_edges: usize, n_nodes: usize) -> f64 {
    let nodes = n_nodes as f64;
    let possible = nodes * (nodes - 1.0) / 2.0;
    if possible > 0.0 {
        n_edges as f64 / possible
    } else {
        0.0
    }
}
