//! Batch graph and record-linkage primitives over flat, pre-marshaled inputs.
//!
//! Graph entry points take an edge list of 1-based node id pairs plus a node
//! count. Rows naming a node outside `1..=n_nodes` are skipped rather than
//! rejected; only a negative node count or an allocation failure aborts a
//! call. Every call builds its own working state and keeps nothing between
//! invocations, so callers may run them concurrently on disjoint inputs.
//! [`Graph`] keeps the built structures around for repeated queries.
//!
//! # Examples
//! ```
//! use linkgraph_core::{ComponentMode, DistanceBound, find_components, shortest_paths};
//!
//! let edges = [(1, 2), (2, 3)];
//! let labels = find_components(&edges, 4, ComponentMode::Compressed)?;
//! assert_eq!(labels.components(), &[1, 1, 1, 2]);
//!
//! let distances = shortest_paths(&edges, &[(1, 3), (1, 4)], 4, DistanceBound::Unbounded)?;
//! assert_eq!(distances, vec![2, -1]);
//! # Ok::<(), linkgraph_core::LinkGraphError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod components;
mod disjoint_set;
mod error;
mod graph;
mod linkage;
mod matcher;
mod node;
#[cfg(test)]
mod property;
mod query;
mod stats;
#[cfg(test)]
mod test_utils;

#[cfg(feature = "parallel")]
pub use crate::query::shortest_paths_parallel;
pub use crate::{
    adjacency::DistanceBound,
    components::{
        ComponentLabels, ComponentMode, EdgeComponents, find_components, get_edge_components,
    },
    disjoint_set::DisjointSet,
    error::{LinkGraphError, LinkGraphErrorCode, Result},
    graph::Graph,
    linkage::{
        Column, LinkageConfig, LinkageConfigBuilder, LinkageResult, UNGROUPED, multi_column_group,
    },
    matcher::{
        MatchMatrix, MatchOutcome, PatternSet, multi_grepl, multi_grepl_any, multi_grepl_any_fast,
    },
    node::{EdgePair, ExternalId, NodeCount},
    query::{UNREACHABLE, are_connected, shortest_paths},
    stats::{DegreeStats, GraphStats, graph_stats},
};
