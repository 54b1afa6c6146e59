//! Union-find (disjoint set union) engine shared by component labeling,
//! connectivity queries and record linkage.
//!
//! The structure is a pair of flat arrays indexed by element id. `find`
//! compresses paths in two passes; `union_sets` links by rank and, on ties,
//! keeps the left operand's root so root identity is reproducible for a given
//! sequence of unions.

use crate::{
    error::Result,
    node::{NodeCount, filled_vec},
};

/// Disjoint-set forest with path compression and union by rank.
///
/// # Examples
/// ```
/// use linkgraph_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4).expect("size is valid");
/// assert!(sets.union_sets(0, 1));
/// assert!(!sets.union_sets(1, 0));
/// assert!(sets.connected(0, 1));
/// assert!(!sets.connected(0, 3));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `n` singleton sets from a host-supplied size.
    ///
    /// # Errors
    /// Returns [`crate::LinkGraphError::InvalidNodeCount`] when `n` is
    /// negative and [`crate::LinkGraphError::AllocationFailed`] when the
    /// arrays cannot be reserved.
    pub fn new(n: i64) -> Result<Self> {
        Self::with_count(NodeCount::new(n)?)
    }

    /// Creates singleton sets for an already-validated node count.
    ///
    /// # Errors
    /// Returns [`crate::LinkGraphError::AllocationFailed`] when the arrays
    /// cannot be reserved.
    pub fn with_count(count: NodeCount) -> Result<Self> {
        let len = count.get();
        let mut parent = filled_vec(len, 0_usize)?;
        for (index, slot) in parent.iter_mut().enumerate() {
            *slot = index;
        }
        let rank = filled_vec(len, 0_u8)?;
        Ok(Self { parent, rank })
    }

    /// Creates `n` singleton sets without allocation checks.
    #[must_use]
    pub fn with_len(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the number of elements tracked by the structure.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root of `node`'s set, pointing every visited element
    /// directly at it.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`; callers validate indices first.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a root.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    pub fn union_sets(&mut self, left: usize, right: usize) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            self.parent[left] = right;
        } else {
            self.parent[right] = left;
            if left_rank == right_rank {
                self.rank[left] = left_rank.saturating_add(1);
            }
        }
        true
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Resolves the root of every element in index order.
    pub(crate) fn roots(&mut self) -> Vec<usize> {
        (0..self.len()).map(|node| self.find(node)).collect()
    }
}
