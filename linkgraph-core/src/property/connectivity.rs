//! Component labeling and connectivity properties.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{ComponentMode, are_connected, find_components, get_edge_components};

use super::oracle::{all_pairs_distances, index_of};
use super::types::GraphFixture;

fn labeling_failed(error: crate::LinkGraphError) -> TestCaseError {
    TestCaseError::fail(format!("labeling failed: {error}"))
}

/// Same component label exactly when the oracle finds a path, and
/// [`are_connected`] agrees with both.
pub(super) fn run_reachability_agreement_property(fixture: &GraphFixture) -> TestCaseResult {
    let n = fixture.n_nodes();
    let labels = find_components(&fixture.edges, n, ComponentMode::Compressed)
        .map_err(labeling_failed)?;
    let oracle = all_pairs_distances(fixture.node_count, &fixture.edges);
    let ids = labels.components();

    for from in 0..fixture.node_count {
        for to in 0..fixture.node_count {
            prop_assert_eq!(
                ids[from] == ids[to],
                oracle[from][to].is_some(),
                "nodes {} and {} in {:?}",
                from,
                to,
                fixture.topology
            );
        }
    }

    let answers = are_connected(&fixture.edges, &fixture.queries, n).map_err(labeling_failed)?;
    prop_assert_eq!(answers.len(), fixture.queries.len());
    for (&(from, to), &answer) in fixture.queries.iter().zip(&answers) {
        let resolved = (index_of(fixture.node_count, from), index_of(fixture.node_count, to));
        let expected = match resolved {
            (Some(from), Some(to)) => oracle[from][to].is_some(),
            _ => false,
        };
        prop_assert_eq!(answer, expected, "query ({}, {})", from, to);
    }
    Ok(())
}

/// Compressed labels partition the nodes densely in discovery order, and raw
/// labels name a root inside each component.
pub(super) fn run_partition_property(fixture: &GraphFixture) -> TestCaseResult {
    let n = fixture.n_nodes();
    let compressed = find_components(&fixture.edges, n, ComponentMode::Compressed)
        .map_err(labeling_failed)?;
    let raw = find_components(&fixture.edges, n, ComponentMode::Raw).map_err(labeling_failed)?;

    let count = compressed.component_count();
    prop_assert_eq!(compressed.component_sizes().len(), count);
    prop_assert_eq!(
        compressed.component_sizes().iter().sum::<usize>(),
        fixture.node_count
    );
    prop_assert_eq!(raw.component_count(), count);
    prop_assert!(raw.component_sizes().is_empty());

    let mut next_new = 1_i64;
    for (node, &id) in compressed.components().iter().enumerate() {
        prop_assert!((1..=next_new).contains(&id), "node {} has label {}", node, id);
        if id == next_new {
            next_new += 1;
        }
    }

    for (node, &root) in raw.components().iter().enumerate() {
        let root = usize::try_from(root).map_err(|_| TestCaseError::fail("negative raw label"))?;
        prop_assert_eq!(raw.components()[root], i64::try_from(root).unwrap_or(-1));
        prop_assert_eq!(compressed.components()[root], compressed.components()[node]);
    }
    Ok(())
}

/// Repeated labeling is identical and per-edge labels project node labels.
pub(super) fn run_idempotence_property(fixture: &GraphFixture) -> TestCaseResult {
    let n = fixture.n_nodes();
    for mode in [ComponentMode::Compressed, ComponentMode::Raw] {
        let first = find_components(&fixture.edges, n, mode).map_err(labeling_failed)?;
        let second = find_components(&fixture.edges, n, mode).map_err(labeling_failed)?;
        prop_assert_eq!(&first, &second);

        let per_edge = get_edge_components(&fixture.edges, n, mode).map_err(labeling_failed)?;
        prop_assert_eq!(per_edge.component_count(), first.component_count());
        prop_assert_eq!(per_edge.from_components().len(), fixture.edges.len());
        for (row, &(from, to)) in fixture.edges.iter().enumerate() {
            let resolved = (index_of(fixture.node_count, from), index_of(fixture.node_count, to));
            let expected = match resolved {
                (Some(from), Some(to)) => (first.components()[from], first.components()[to]),
                _ => (mode.invalid_label(), mode.invalid_label()),
            };
            prop_assert_eq!(
                (per_edge.from_components()[row], per_edge.to_components()[row]),
                expected
            );
        }
    }
    Ok(())
}
