//! Bounded shortest-path properties.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DistanceBound, Graph, UNREACHABLE, shortest_paths};

use super::oracle::{all_pairs_distances, index_of};
use super::types::GraphFixture;

/// Bounds checked on top of the unbounded search.
const BOUNDS: [usize; 3] = [1, 2, 4];

fn expected_distance(
    fixture: &GraphFixture,
    oracle: &[Vec<Option<usize>>],
    (from, to): (i64, i64),
    bound: DistanceBound,
) -> i64 {
    let (Some(from), Some(to)) = (
        index_of(fixture.node_count, from),
        index_of(fixture.node_count, to),
    ) else {
        return UNREACHABLE;
    };
    match (oracle[from][to], bound) {
        (Some(hops), DistanceBound::AtMost(limit)) if hops > limit => UNREACHABLE,
        (Some(hops), _) => i64::try_from(hops).unwrap_or(UNREACHABLE),
        (None, _) => UNREACHABLE,
    }
}

/// Every query reports the oracle distance when it is within the bound and
/// [`UNREACHABLE`] otherwise; the graph handle agrees with the batch form.
pub(super) fn run_distance_oracle_property(fixture: &GraphFixture) -> TestCaseResult {
    let n = fixture.n_nodes();
    let oracle = all_pairs_distances(fixture.node_count, &fixture.edges);
    let graph = Graph::from_edges(&fixture.edges, n)
        .map_err(|error| TestCaseError::fail(format!("graph build failed: {error}")))?;

    let bounds = std::iter::once(DistanceBound::Unbounded)
        .chain(BOUNDS.iter().map(|&limit| DistanceBound::AtMost(limit)));
    for bound in bounds {
        let distances = shortest_paths(&fixture.edges, &fixture.queries, n, bound)
            .map_err(|error| TestCaseError::fail(format!("search failed: {error}")))?;
        let from_handle = graph
            .distances(&fixture.queries, bound)
            .map_err(|error| TestCaseError::fail(format!("search failed: {error}")))?;
        prop_assert_eq!(&distances, &from_handle);

        for (&pair, &distance) in fixture.queries.iter().zip(&distances) {
            prop_assert_eq!(
                distance,
                expected_distance(fixture, &oracle, pair, bound),
                "query {:?} with {:?} in {:?}",
                pair,
                bound,
                fixture.topology
            );
            if let DistanceBound::AtMost(limit) = bound {
                prop_assert!(distance <= i64::try_from(limit).unwrap_or(i64::MAX));
            }
        }
    }
    Ok(())
}
