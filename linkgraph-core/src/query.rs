//! Batched connectivity and shortest-path queries against one fixed graph.
//!
//! Each entry point builds its working structure once from the edge list and
//! answers every query pair against it. Queries are independent: results
//! line up with the input order and an invalid pair never affects another.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    adjacency::{Adjacency, DistanceBound},
    components::union_edges,
    error::Result,
    node::{EdgePair, NodeCount, to_external},
};

/// Distance reported for unreachable or invalid query pairs.
pub const UNREACHABLE: i64 = -1;

/// Answers whether each query pair is connected by a path of valid edges.
///
/// Pairs with an out-of-range endpoint report `false`.
///
/// # Errors
/// Returns [`crate::LinkGraphError::InvalidNodeCount`] when `n_nodes` is
/// negative and [`crate::LinkGraphError::AllocationFailed`] when working
/// storage cannot be reserved.
///
/// # Examples
/// ```
/// use linkgraph_core::are_connected;
///
/// let answers = are_connected(&[(1, 2), (2, 3)], &[(1, 3), (1, 4), (1, 9)], 4)?;
/// assert_eq!(answers, vec![true, false, false]);
/// # Ok::<(), linkgraph_core::LinkGraphError>(())
/// ```
#[instrument(
    name = "graph.are_connected",
    err,
    skip(edges, query_pairs),
    fields(edges = edges.len(), queries = query_pairs.len(), n_nodes = n_nodes),
)]
pub fn are_connected(
    edges: &[EdgePair],
    query_pairs: &[EdgePair],
    n_nodes: i64,
) -> Result<Vec<bool>> {
    let count = NodeCount::new(n_nodes)?;
    let mut sets = union_edges(edges, count)?;
    let answers = query_pairs
        .iter()
        .map(|&pair| {
            count
                .resolve_pair(pair)
                .is_some_and(|(from, to)| sets.connected(from, to))
        })
        .collect();
    Ok(answers)
}

/// Computes the unweighted hop distance for each query pair.
///
/// Results are `0` for identical endpoints and [`UNREACHABLE`] for pairs
/// with an out-of-range endpoint, with no path, or whose shortest path is
/// longer than `bound`.
///
/// # Errors
/// Returns [`crate::LinkGraphError::InvalidNodeCount`] when `n_nodes` is
/// negative and [`crate::LinkGraphError::AllocationFailed`] when working
/// storage cannot be reserved.
///
/// # Examples
/// ```
/// use linkgraph_core::{DistanceBound, shortest_paths};
///
/// let edges = [(1, 2), (2, 3)];
/// assert_eq!(shortest_paths(&edges, &[(1, 3)], 4, DistanceBound::Unbounded)?, vec![2]);
/// assert_eq!(shortest_paths(&edges, &[(1, 3)], 4, DistanceBound::AtMost(1))?, vec![-1]);
/// # Ok::<(), linkgraph_core::LinkGraphError>(())
/// ```
#[instrument(
    name = "graph.shortest_paths",
    err,
    skip(edges, query_pairs),
    fields(edges = edges.len(), queries = query_pairs.len(), n_nodes = n_nodes, bound = ?bound),
)]
pub fn shortest_paths(
    edges: &[EdgePair],
    query_pairs: &[EdgePair],
    n_nodes: i64,
    bound: DistanceBound,
) -> Result<Vec<i64>> {
    let (adjacency, count) = build_adjacency(edges, n_nodes)?;
    query_pairs
        .iter()
        .map(|&pair| query_distance(&adjacency, count, pair, bound))
        .collect()
}

/// Parallel form of [`shortest_paths`] that spreads queries over the rayon
/// pool. The adjacency list is shared read-only; every query still owns its
/// search state, so results match the sequential form exactly.
///
/// # Errors
/// Same conditions as [`shortest_paths`].
#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
#[instrument(
    name = "graph.shortest_paths_parallel",
    err,
    skip(edges, query_pairs),
    fields(edges = edges.len(), queries = query_pairs.len(), n_nodes = n_nodes, bound = ?bound),
)]
pub fn shortest_paths_parallel(
    edges: &[EdgePair],
    query_pairs: &[EdgePair],
    n_nodes: i64,
    bound: DistanceBound,
) -> Result<Vec<i64>> {
    let (adjacency, count) = build_adjacency(edges, n_nodes)?;
    query_pairs
        .par_iter()
        .map(|&pair| query_distance(&adjacency, count, pair, bound))
        .collect()
}

fn build_adjacency(edges: &[EdgePair], n_nodes: i64) -> Result<(Adjacency, NodeCount)> {
    let count = NodeCount::new(n_nodes)?;
    let (adjacency, skipped) = Adjacency::from_edges(edges, count)?;
    if skipped > 0 {
        debug!(skipped, "ignored edges with out-of-range endpoints");
    }
    Ok((adjacency, count))
}

/// Resolves one query pair and runs a fresh bounded search for it.
pub(crate) fn query_distance(
    adjacency: &Adjacency,
    count: NodeCount,
    pair: EdgePair,
    bound: DistanceBound,
) -> Result<i64> {
    let Some((source, target)) = count.resolve_pair(pair) else {
        return Ok(UNREACHABLE);
    };
    Ok(adjacency
        .distance(source, target, bound)?
        .map_or(UNREACHABLE, to_external))
}
