//! Translation between external 1-based node ids and internal indices.
//!
//! Hosts number nodes from 1. Every batch entry point validates the node
//! count once through [`NodeCount::new`] and resolves each endpoint through
//! [`NodeCount::resolve`]; anything outside `1..=n` resolves to `None` and the
//! row is skipped rather than rejected.

use crate::error::{LinkGraphError, Result};

/// Node identifier as supplied by the host (1-based).
pub type ExternalId = i64;

/// An edge or query pair expressed in external ids.
pub type EdgePair = (ExternalId, ExternalId);

/// Validated, non-negative number of nodes in a graph.
///
/// # Examples
/// ```
/// use linkgraph_core::NodeCount;
///
/// let count = NodeCount::new(3).expect("non-negative counts are valid");
/// assert_eq!(count.resolve(1), Some(0));
/// assert_eq!(count.resolve(4), None);
/// assert!(NodeCount::new(-1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeCount(usize);

impl NodeCount {
    /// Validates a host-supplied node count.
    ///
    /// # Errors
    /// Returns [`LinkGraphError::InvalidNodeCount`] when `raw` is negative and
    /// [`LinkGraphError::AllocationFailed`] when it exceeds the address space.
    pub fn new(raw: i64) -> Result<Self> {
        if raw < 0 {
            return Err(LinkGraphError::InvalidNodeCount { got: raw });
        }
        usize::try_from(raw)
            .map(Self)
            .map_err(|_| LinkGraphError::AllocationFailed {
                elements: usize::MAX,
            })
    }

    /// Wraps an already-known element count.
    #[must_use]
    pub const fn from_len(len: usize) -> Self {
        Self(len)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Maps an external 1-based id onto an internal index.
    #[must_use]
    pub fn resolve(self, external: ExternalId) -> Option<usize> {
        let index = usize::try_from(external.checked_sub(1)?).ok()?;
        (index < self.0).then_some(index)
    }

    /// Resolves both endpoints of a pair, failing if either is out of range.
    #[must_use]
    pub fn resolve_pair(self, (from, to): EdgePair) -> Option<(usize, usize)> {
        Some((self.resolve(from)?, self.resolve(to)?))
    }
}

/// Converts an internal index or count back to the host integer type.
///
/// Indices are bounded by a [`NodeCount`] that originated from an `i64`, so
/// saturation never triggers for validated input.
pub(crate) fn to_external(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Allocates a vector of `len` copies of `value`, reporting allocation
/// failure instead of aborting.
pub(crate) fn filled_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| LinkGraphError::AllocationFailed { elements: len })?;
    out.resize(len, value);
    Ok(out)
}
