//! Undirected adjacency lists and bounded breadth-first search.

use std::collections::VecDeque;

use crate::{
    error::Result,
    node::{EdgePair, NodeCount, filled_vec},
};

/// Upper bound on the hop count a shortest-path query may report.
///
/// Host callers pass an integer where anything `<= 0` means unbounded.
///
/// # Examples
/// ```
/// use linkgraph_core::DistanceBound;
///
/// assert_eq!(DistanceBound::from(0_i64), DistanceBound::Unbounded);
/// assert_eq!(DistanceBound::from(-5_i64), DistanceBound::Unbounded);
/// assert_eq!(DistanceBound::from(3_i64), DistanceBound::AtMost(3));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DistanceBound {
    /// Search the whole reachable set.
    #[default]
    Unbounded,
    /// Stop expanding nodes once their distance reaches this value.
    AtMost(usize),
}

impl DistanceBound {
    /// Returns `true` when a node at `depth` must not be expanded.
    #[must_use]
    pub const fn stops_at(self, depth: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::AtMost(limit) => depth >= limit,
        }
    }
}

impl From<i64> for DistanceBound {
    fn from(max_distance: i64) -> Self {
        match usize::try_from(max_distance) {
            Ok(0) | Err(_) => Self::Unbounded,
            Ok(limit) => Self::AtMost(limit),
        }
    }
}

/// Neighbor lists for every node, both directions inserted.
///
/// Self-loops and edges with out-of-range endpoints are left out. Parallel
/// edges stay as duplicate entries.
#[derive(Clone, Debug)]
pub(crate) struct Adjacency {
    neighbors: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Builds the lists in a single pass over `edges`, returning the number
    /// of rows that were dropped for having an invalid endpoint.
    pub(crate) fn from_edges(edges: &[EdgePair], count: NodeCount) -> Result<(Self, usize)> {
        let mut neighbors = filled_vec(count.get(), Vec::new())?;
        let mut skipped = 0_usize;
        for &edge in edges {
            match count.resolve_pair(edge) {
                Some((from, to)) if from != to => {
                    neighbors[from].push(to);
                    neighbors[to].push(from);
                }
                Some(_) => {}
                None => skipped += 1,
            }
        }
        Ok((Self { neighbors }, skipped))
    }

    pub(crate) fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn degree(&self, node: usize) -> usize {
        self.neighbors[node].len()
    }

    /// Hop count of a shortest `source`-`target` path, if one exists within
    /// `bound`.
    ///
    /// Each call owns its own visited array and queue. The target is
    /// reported as soon as it is discovered, so the result is the edge count
    /// of a shortest path.
    pub(crate) fn distance(
        &self,
        source: usize,
        target: usize,
        bound: DistanceBound,
    ) -> Result<Option<usize>> {
        if source == target {
            return Ok(Some(0));
        }

        let mut visited = filled_vec(self.len(), false)?;
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        visited[source] = true;
        queue.push_back((source, 0));

        while let Some((current, depth)) = queue.pop_front() {
            if bound.stops_at(depth) {
                break;
            }
            for &neighbor in &self.neighbors[current] {
                if visited[neighbor] {
                    continue;
                }
                visited[neighbor] = true;
                if neighbor == target {
                    return Ok(Some(depth + 1));
                }
                queue.push_back((neighbor, depth + 1));
            }
        }

        Ok(None)
    }
}
