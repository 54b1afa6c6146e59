//! Seeded synthetic inputs for the graph, matcher and linkage benchmarks.
//!
//! Every generator is deterministic for a given seed so repeated Criterion
//! runs measure the same workload.

use linkgraph_core::{Column, EdgePair};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Alphabet used for synthetic strings. Mixed case so case folding matters.
const ALPHABET: &[u8] = b"acgtACGTxy";

/// Configuration for a random edge list.
#[derive(Clone, Copy, Debug)]
pub struct GraphConfig {
    /// Number of nodes; ids run from 1 to this value.
    pub node_count: usize,
    /// Number of edge rows.
    pub edge_count: usize,
    /// Number of query pairs generated alongside the edges.
    pub query_count: usize,
    /// Random seed for reproducibility.
    pub seed: u64,
}

/// A random multigraph with matching query pairs.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: i64,
    edges: Vec<EdgePair>,
    queries: Vec<EdgePair>,
}

impl SyntheticGraph {
    /// Draws edges and queries uniformly over `1..=node_count`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] for an empty node range and
    /// [`BenchSetupError::TooLarge`] when the node count does not fit `i64`.
    pub fn generate(config: &GraphConfig) -> Result<Self, BenchSetupError> {
        if config.node_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "node_count",
            });
        }
        let node_count =
            i64::try_from(config.node_count).map_err(|_| BenchSetupError::TooLarge {
                context: "node_count",
                value: config.node_count,
            })?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let edges = random_pairs(&mut rng, node_count, config.edge_count);
        let queries = random_pairs(&mut rng, node_count, config.query_count);
        Ok(Self {
            node_count,
            edges,
            queries,
        })
    }

    /// Node count in the form the library entry points take.
    #[must_use]
    pub const fn n_nodes(&self) -> i64 {
        self.node_count
    }

    /// Generated edge rows.
    #[must_use]
    pub const fn edges(&self) -> &[EdgePair] {
        self.edges.as_slice()
    }

    /// Generated query pairs.
    #[must_use]
    pub const fn queries(&self) -> &[EdgePair] {
        self.queries.as_slice()
    }
}

fn random_pairs(rng: &mut SmallRng, node_count: i64, len: usize) -> Vec<EdgePair> {
    (0..len)
        .map(|_| (rng.gen_range(1..=node_count), rng.gen_range(1..=node_count)))
        .collect()
}

/// Configuration for a string batch and pattern list.
#[derive(Clone, Copy, Debug)]
pub struct CorpusConfig {
    /// Number of strings to search.
    pub string_count: usize,
    /// Minimum string length in bytes.
    pub min_length: usize,
    /// Maximum string length in bytes; raised to `min_length` when smaller.
    pub max_length: usize,
    /// Number of patterns.
    pub pattern_count: usize,
    /// Random seed for reproducibility.
    pub seed: u64,
}

/// Strings plus patterns, about half of which are cut from the strings.
#[derive(Clone, Debug)]
pub struct TextCorpus {
    strings: Vec<String>,
    patterns: Vec<String>,
}

impl TextCorpus {
    /// Generates a corpus from the supplied configuration.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `string_count` or
    /// `min_length` is zero.
    pub fn generate(config: &CorpusConfig) -> Result<Self, BenchSetupError> {
        if config.string_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "string_count",
            });
        }
        if config.min_length == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "min_length",
            });
        }
        let max_length = config.max_length.max(config.min_length);
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let strings: Vec<String> = (0..config.string_count)
            .map(|_| {
                let len = rng.gen_range(config.min_length..=max_length);
                random_text(&mut rng, len)
            })
            .collect();
        let patterns = (0..config.pattern_count)
            .map(|_| {
                if rng.gen_bool(0.5)
                    && let Some(window) = window_of(&mut rng, &strings)
                {
                    return window;
                }
                let len = rng.gen_range(3..=6);
                random_text(&mut rng, len)
            })
            .collect();
        Ok(Self { strings, patterns })
    }

    /// Strings to search.
    #[must_use]
    pub const fn strings(&self) -> &[String] {
        self.strings.as_slice()
    }

    /// Patterns to search for.
    #[must_use]
    pub const fn patterns(&self) -> &[String] {
        self.patterns.as_slice()
    }
}

fn random_text(rng: &mut SmallRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(ALPHABET.choose(rng).copied().unwrap_or(b'a')))
        .collect()
}

fn window_of(rng: &mut SmallRng, strings: &[String]) -> Option<String> {
    let bytes = strings.choose(rng)?.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let len = rng.gen_range(1..=bytes.len().min(4));
    let start = rng.gen_range(0..=bytes.len().checked_sub(len)?);
    let window = bytes.get(start..start + len)?;
    Some(window.iter().copied().map(char::from).collect())
}

/// Configuration for a set of linkage columns.
#[derive(Clone, Copy, Debug)]
pub struct LinkageColumnsConfig {
    /// Rows per column.
    pub row_count: usize,
    /// Distinct values each column draws from.
    pub cardinality: usize,
    /// Random seed for reproducibility.
    pub seed: u64,
}

/// Generates one text, one integer and one float column with roughly one
/// missing value in ten.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for zero cardinality and
/// [`BenchSetupError::TooLarge`] when it does not fit `u32`.
pub fn linkage_columns(config: &LinkageColumnsConfig) -> Result<Vec<Column>, BenchSetupError> {
    if config.cardinality == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "cardinality",
        });
    }
    let cardinality = u32::try_from(config.cardinality).map_err(|_| BenchSetupError::TooLarge {
        context: "cardinality",
        value: config.cardinality,
    })?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let rows = config.row_count;

    let text = (0..rows)
        .map(|_| present(&mut rng).then(|| format!("id-{}", rng.gen_range(0..cardinality))))
        .collect();
    let integer = (0..rows)
        .map(|_| present(&mut rng).then(|| i64::from(rng.gen_range(0..cardinality))))
        .collect();
    let float = (0..rows)
        .map(|_| present(&mut rng).then(|| f64::from(rng.gen_range(0..cardinality))))
        .collect();

    Ok(vec![
        Column::Text(text),
        Column::Integer(integer),
        Column::Float(float),
    ])
}

fn present(rng: &mut SmallRng) -> bool {
    !rng.gen_ratio(1, 10)
}
