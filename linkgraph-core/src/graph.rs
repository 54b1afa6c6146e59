//! Reusable graph handle: build once, query across many calls.

use tracing::{debug, instrument};

use crate::{
    adjacency::{Adjacency, DistanceBound},
    components::{
        ComponentLabels, ComponentMode, EdgeComponents, label_edges, label_nodes, union_edges,
    },
    error::Result,
    node::{EdgePair, NodeCount},
    query::query_distance,
    stats::{GraphStats, summarise},
};

/// An undirected graph prepared for repeated component, connectivity,
/// distance and statistics queries.
///
/// All methods take external 1-based node ids and apply the same validity
/// rules as the batch functions: out-of-range ids never connect and report
/// [`crate::UNREACHABLE`] distances.
///
/// # Examples
/// ```
/// use linkgraph_core::{ComponentMode, DistanceBound, Graph};
///
/// let graph = Graph::from_edges(&[(1, 2), (2, 3)], 4)?;
/// assert!(graph.connected(1, 3));
/// assert!(!graph.connected(1, 4));
/// assert_eq!(graph.distance(1, 3, DistanceBound::Unbounded)?, 2);
/// assert_eq!(graph.components(ComponentMode::Compressed)?.components(), &[1, 1, 1, 2]);
/// assert_eq!(graph.stats().degree.max, 2);
/// # Ok::<(), linkgraph_core::LinkGraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    count: NodeCount,
    edge_count: usize,
    roots: Vec<usize>,
    adjacency: Adjacency,
}

impl Graph {
    /// Builds the disjoint set and adjacency lists for `edges`.
    ///
    /// # Errors
    /// Returns [`crate::LinkGraphError::InvalidNodeCount`] when `n_nodes` is
    /// negative and [`crate::LinkGraphError::AllocationFailed`] when working
    /// storage cannot be reserved.
    #[instrument(
        name = "graph.build",
        err,
        skip(edges),
        fields(edges = edges.len(), n_nodes = n_nodes),
    )]
    pub fn from_edges(edges: &[EdgePair], n_nodes: i64) -> Result<Self> {
        let count = NodeCount::new(n_nodes)?;
        let roots = union_edges(edges, count)?.roots();
        let (adjacency, skipped) = Adjacency::from_edges(edges, count)?;
        debug!(skipped, "graph handle built");
        Ok(Self {
            count,
            edge_count: edges.len(),
            roots,
            adjacency,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.count.get()
    }

    /// Number of edge rows supplied at build time, including invalid rows.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Labels every node with its component.
    ///
    /// # Errors
    /// Returns [`crate::LinkGraphError::AllocationFailed`] when label storage
    /// cannot be reserved.
    pub fn components(&self, mode: ComponentMode) -> Result<ComponentLabels> {
        label_nodes(&self.roots, mode)
    }

    /// Labels both endpoints of each edge in `edges` with its component in
    /// this graph.
    ///
    /// # Errors
    /// Returns [`crate::LinkGraphError::AllocationFailed`] when label storage
    /// cannot be reserved.
    pub fn edge_components(
        &self,
        edges: &[EdgePair],
        mode: ComponentMode,
    ) -> Result<EdgeComponents> {
        let labels = self.components(mode)?;
        Ok(label_edges(&labels, edges, self.count, mode))
    }

    /// Returns `true` when a path joins `from` and `to`.
    #[must_use]
    pub fn connected(&self, from: i64, to: i64) -> bool {
        self.count
            .resolve_pair((from, to))
            .is_some_and(|(from, to)| self.roots[from] == self.roots[to])
    }

    /// Hop distance between two nodes, or [`crate::UNREACHABLE`].
    ///
    /// # Errors
    /// Returns [`crate::LinkGraphError::AllocationFailed`] when search state
    /// cannot be reserved.
    pub fn distance(&self, from: i64, to: i64, bound: DistanceBound) -> Result<i64> {
        query_distance(&self.adjacency, self.count, (from, to), bound)
    }

    /// Hop distance for each query pair, in input order.
    ///
    /// # Errors
    /// Returns [`crate::LinkGraphError::AllocationFailed`] when search state
    /// cannot be reserved.
    pub fn distances(&self, queries: &[EdgePair], bound: DistanceBound) -> Result<Vec<i64>> {
        queries
            .iter()
            .map(|&pair| query_distance(&self.adjacency, self.count, pair, bound))
            .collect()
    }

    /// Degree and density statistics.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let degrees = (0..self.adjacency.len()).map(|node| self.adjacency.degree(node));
        summarise(self.edge_count, self.count, degrees)
    }
}
