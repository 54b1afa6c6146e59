//! Connected-component labeling over flat edge lists.
//!
//! Labels are assigned by scanning nodes in index order and numbering each
//! root the first time it is seen, so identical input always yields identical
//! labels. Compressed labels are dense and 1-based at the boundary; raw
//! labels expose the 0-based root index.

use tracing::{debug, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::Result,
    node::{EdgePair, NodeCount, filled_vec, to_external},
};

/// Selects how component identifiers are reported.
///
/// # Examples
/// ```
/// use linkgraph_core::ComponentMode;
///
/// assert_eq!(ComponentMode::from(true), ComponentMode::Compressed);
/// assert_eq!(ComponentMode::from(false), ComponentMode::Raw);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ComponentMode {
    /// Dense identifiers starting at 1, with per-component sizes.
    #[default]
    Compressed,
    /// The 0-based index of each component's root node.
    Raw,
}

impl ComponentMode {
    /// Label reported for edges whose endpoints fall outside the graph.
    #[must_use]
    pub const fn invalid_label(self) -> i64 {
        match self {
            Self::Compressed => 0,
            Self::Raw => -1,
        }
    }
}

impl From<bool> for ComponentMode {
    fn from(compress: bool) -> Self {
        if compress { Self::Compressed } else { Self::Raw }
    }
}

/// Per-node component assignment produced by [`find_components`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentLabels {
    components: Vec<i64>,
    component_sizes: Vec<usize>,
    component_count: usize,
}

impl ComponentLabels {
    /// Component identifier of every node, in node order.
    #[must_use]
    pub fn components(&self) -> &[i64] {
        &self.components
    }

    /// Node count per compressed component; `sizes()[k]` belongs to label
    /// `k + 1`. Empty for [`ComponentMode::Raw`].
    #[must_use]
    pub fn component_sizes(&self) -> &[usize] {
        &self.component_sizes
    }

    /// Number of distinct components.
    ///
    /// Raw mode also reports the real count, where the host's raw mode
    /// reports `0`.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Splits the result into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<i64>, Vec<usize>, usize) {
        (self.components, self.component_sizes, self.component_count)
    }
}

/// Per-edge component assignment produced by [`get_edge_components`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeComponents {
    from_components: Vec<i64>,
    to_components: Vec<i64>,
    component_count: usize,
}

impl EdgeComponents {
    /// Component of each edge's `from` endpoint, in input order.
    #[must_use]
    pub fn from_components(&self) -> &[i64] {
        &self.from_components
    }

    /// Component of each edge's `to` endpoint, in input order.
    #[must_use]
    pub fn to_components(&self) -> &[i64] {
        &self.to_components
    }

    /// Number of distinct components in the graph.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }
}

/// Labels every node with the component it belongs to.
///
/// Edges whose endpoints fall outside `1..=n_nodes` are ignored.
///
/// # Errors
/// Returns [`crate::LinkGraphError::InvalidNodeCount`] when `n_nodes` is
/// negative and [`crate::LinkGraphError::AllocationFailed`] when working
/// storage cannot be reserved.
///
/// # Examples
/// ```
/// use linkgraph_core::{ComponentMode, find_components};
///
/// let labels = find_components(&[(1, 2), (2, 3)], 4, ComponentMode::Compressed)?;
/// assert_eq!(labels.components(), &[1, 1, 1, 2]);
/// assert_eq!(labels.component_sizes(), &[3, 1]);
/// assert_eq!(labels.component_count(), 2);
/// # Ok::<(), linkgraph_core::LinkGraphError>(())
/// ```
#[instrument(
    name = "graph.find_components",
    err,
    skip(edges),
    fields(edges = edges.len(), n_nodes = n_nodes, mode = ?mode),
)]
pub fn find_components(
    edges: &[EdgePair],
    n_nodes: i64,
    mode: ComponentMode,
) -> Result<ComponentLabels> {
    let count = NodeCount::new(n_nodes)?;
    let mut sets = union_edges(edges, count)?;
    let labels = label_nodes(&sets.roots(), mode)?;
    debug!(
        components = labels.component_count(),
        "component labeling completed"
    );
    Ok(labels)
}

/// Labels both endpoints of every input edge with their component.
///
/// Output rows line up with `edges`. Edges with an out-of-range endpoint get
/// [`ComponentMode::invalid_label`] on both sides.
///
/// # Errors
/// Returns [`crate::LinkGraphError::InvalidNodeCount`] when `n_nodes` is
/// negative and [`crate::LinkGraphError::AllocationFailed`] when working
/// storage cannot be reserved.
///
/// # Examples
/// ```
/// use linkgraph_core::{ComponentMode, get_edge_components};
///
/// let labels = get_edge_components(&[(1, 2), (3, 9)], 3, ComponentMode::Compressed)?;
/// assert_eq!(labels.from_components(), &[1, 0]);
/// assert_eq!(labels.to_components(), &[1, 0]);
/// # Ok::<(), linkgraph_core::LinkGraphError>(())
/// ```
#[instrument(
    name = "graph.get_edge_components",
    err,
    skip(edges),
    fields(edges = edges.len(), n_nodes = n_nodes, mode = ?mode),
)]
pub fn get_edge_components(
    edges: &[EdgePair],
    n_nodes: i64,
    mode: ComponentMode,
) -> Result<EdgeComponents> {
    let count = NodeCount::new(n_nodes)?;
    let mut sets = union_edges(edges, count)?;
    let labels = label_nodes(&sets.roots(), mode)?;
    Ok(label_edges(&labels, edges, count, mode))
}

/// Builds a disjoint set over `count` nodes and unions every valid edge.
pub(crate) fn union_edges(edges: &[EdgePair], count: NodeCount) -> Result<DisjointSet> {
    let mut sets = DisjointSet::with_count(count)?;
    let mut skipped = 0_usize;
    for &edge in edges {
        match count.resolve_pair(edge) {
            Some((from, to)) => {
                sets.union_sets(from, to);
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, "ignored edges with out-of-range endpoints");
    }
    Ok(sets)
}

/// Assigns a label to every node in index order, given each node's root.
pub(crate) fn label_nodes(roots: &[usize], mode: ComponentMode) -> Result<ComponentLabels> {
    let len = roots.len();
    let mut assigned: Vec<Option<usize>> = filled_vec(len, None)?;
    let mut labels = filled_vec(len, 0_usize)?;
    let mut component_sizes = Vec::new();
    let mut component_count = 0_usize;

    for (&root, label) in roots.iter().zip(labels.iter_mut()) {
        let id = match assigned[root] {
            Some(id) => id,
            None => {
                let id = match mode {
                    ComponentMode::Compressed => {
                        component_sizes.push(0);
                        component_count
                    }
                    ComponentMode::Raw => root,
                };
                component_count += 1;
                assigned[root] = Some(id);
                id
            }
        };
        if mode == ComponentMode::Compressed {
            component_sizes[id] += 1;
        }
        *label = id;
    }

    let components = labels
        .into_iter()
        .map(|id| match mode {
            ComponentMode::Compressed => to_external(id + 1),
            ComponentMode::Raw => to_external(id),
        })
        .collect();

    Ok(ComponentLabels {
        components,
        component_sizes,
        component_count,
    })
}

/// Projects node labels onto both endpoints of every edge.
pub(crate) fn label_edges(
    labels: &ComponentLabels,
    edges: &[EdgePair],
    count: NodeCount,
    mode: ComponentMode,
) -> EdgeComponents {
    let nodes = labels.components();
    let (from_components, to_components) = edges
        .iter()
        .map(|&edge| match count.resolve_pair(edge) {
            Some((from, to)) => (nodes[from], nodes[to]),
            None => (mode.invalid_label(), mode.invalid_label()),
        })
        .unzip();
    EdgeComponents {
        from_components,
        to_components,
        component_count: labels.component_count(),
    }
}
