//! Fixture generators for property-based tests.
//!
//! Graph fixtures are drawn from a seeded [`SmallRng`] so rstest cases can
//! pin a topology and seed while proptest samples both.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::EdgePair;

use super::types::{GraphFixture, LinkageFixture, MatchFixture, Topology};

/// Largest generated graph.
const MAX_NODES: usize = 40;
/// Dense graphs stay small to keep edge lists short.
const DENSE_MAX_NODES: usize = 14;
/// Queries generated per fixture, on top of one identical pair.
const QUERIES: usize = 16;

pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (prop::sample::select(Topology::ALL.to_vec()), any::<u64>()).prop_map(
        |(topology, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fixture(topology, &mut rng)
        },
    )
}

pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    let (node_count, edges) = match topology {
        Topology::Sparse => sparse(rng),
        Topology::Dense => dense(rng),
        Topology::Forest => forest(rng),
        Topology::Split => split(rng),
        Topology::Noisy => noisy(rng),
    };
    let queries = queries(rng, node_count);
    GraphFixture {
        topology,
        node_count,
        edges,
        queries,
    }
}

fn external(index: usize) -> i64 {
    i64::try_from(index + 1).expect("fixture sizes fit in i64")
}

fn random_edge(rng: &mut SmallRng, nodes: std::ops::Range<usize>) -> EdgePair {
    (
        external(rng.gen_range(nodes.clone())),
        external(rng.gen_range(nodes)),
    )
}

fn sparse(rng: &mut SmallRng) -> (usize, Vec<EdgePair>) {
    let node_count = rng.gen_range(1..=MAX_NODES);
    let edge_count = rng.gen_range(0..=node_count);
    let edges = (0..edge_count)
        .map(|_| random_edge(rng, 0..node_count))
        .collect();
    (node_count, edges)
}

fn dense(rng: &mut SmallRng) -> (usize, Vec<EdgePair>) {
    let node_count = rng.gen_range(2..=DENSE_MAX_NODES);
    let probability = rng.gen_range(0.5..0.9);
    let mut edges = Vec::new();
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if rng.gen_bool(probability) {
                edges.push((external(left), external(right)));
            }
        }
    }
    (node_count, edges)
}

fn forest(rng: &mut SmallRng) -> (usize, Vec<EdgePair>) {
    let node_count = rng.gen_range(2..=MAX_NODES);
    let mut edges = Vec::new();
    for node in 1..node_count {
        if rng.gen_bool(0.8) {
            // Bias towards recent nodes for deep trees.
            let parent = rng.gen_range(node.saturating_sub(3)..node);
            edges.push((external(parent), external(node)));
        }
    }
    (node_count, edges)
}

fn split(rng: &mut SmallRng) -> (usize, Vec<EdgePair>) {
    let node_count = rng.gen_range(2..=MAX_NODES);
    let half = node_count / 2;
    let mut edges = Vec::new();
    for _ in 0..node_count {
        let side = if rng.gen_bool(0.5) {
            0..half.max(1)
        } else {
            half..node_count
        };
        edges.push(random_edge(rng, side));
    }
    (node_count, edges)
}

fn noisy(rng: &mut SmallRng) -> (usize, Vec<EdgePair>) {
    let (node_count, mut edges) = sparse(rng);
    let past_end = external(node_count);
    for _ in 0..rng.gen_range(1..6) {
        let node = external(rng.gen_range(0..node_count));
        let invalid = match rng.gen_range(0..4) {
            0 => (0, node),
            1 => (node, -rng.gen_range(1_i64..5)),
            2 => (past_end + rng.gen_range(0_i64..3), node),
            _ => (node, node),
        };
        edges.push(invalid);
    }
    (node_count, edges)
}

fn queries(rng: &mut SmallRng, node_count: usize) -> Vec<EdgePair> {
    let upper = external(node_count) + 1;
    let mut queries: Vec<EdgePair> = (0..QUERIES)
        .map(|_| (rng.gen_range(-1..=upper), rng.gen_range(-1..=upper)))
        .collect();
    let node = external(rng.gen_range(0..node_count));
    queries.push((node, node));
    queries
}

pub(super) fn match_fixture_strategy() -> impl Strategy<Value = MatchFixture> {
    (
        prop::collection::vec("[abAB ]{0,8}", 0..10),
        prop::collection::vec("[abAB]{0,4}", 0..6),
        any::<bool>(),
    )
        .prop_map(|(strings, patterns, ignore_case)| MatchFixture {
            strings,
            patterns,
            ignore_case,
        })
}

pub(super) fn linkage_fixture_strategy() -> impl Strategy<Value = LinkageFixture> {
    let cell = prop::option::weighted(0.8, "[aAbBc]{0,2}");
    (
        prop::collection::vec(prop::collection::vec(cell, 0..14), 0..4),
        prop::collection::vec("[aAbc]{0,2}", 0..3),
        any::<bool>(),
        0_usize..4,
    )
        .prop_map(
            |(columns, incomparables, case_sensitive, min_group_size)| LinkageFixture {
                columns,
                incomparables,
                case_sensitive,
                min_group_size,
            },
        )
}
