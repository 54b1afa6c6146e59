//! Record linkage: rows sharing a normalized value in any column are grouped.
//!
//! Every present cell is turned into a string key. Rows contributing the same
//! key are unioned in a [`DisjointSet`], so grouping is transitive across
//! columns. Components are then relabeled into 1-based group ids, leaving
//! components below the configured minimum size ungrouped (`0`).

use std::{
    collections::{HashMap, HashSet},
    num::NonZeroUsize,
};

use tracing::{debug, instrument, warn};

use crate::{
    disjoint_set::DisjointSet,
    error::Result,
    node::{NodeCount, filled_vec},
};

/// Group id given to rows whose component is smaller than the minimum size.
pub const UNGROUPED: usize = 0;

/// One input column, aligned with the others by row index.
///
/// Columns may differ in length; rows past the end of a column take no value
/// from it. `None` cells are missing and never link rows.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    /// String cells, compared after the configured case rule.
    Text(Vec<Option<String>>),
    /// Integer cells, keyed by their decimal form.
    Integer(Vec<Option<i64>>),
    /// Floating-point cells, keyed with six fractional digits. NaN is missing.
    Float(Vec<Option<f64>>),
    /// A null column that contributes nothing.
    Absent,
    /// A column of a type the grouper cannot key. It is skipped.
    Unsupported {
        /// Host type name, reported in diagnostics.
        kind: String,
    },
}

impl Column {
    /// Number of rows the column spans.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(cells) => cells.len(),
            Self::Integer(cells) => cells.len(),
            Self::Float(cells) => cells.len(),
            Self::Absent | Self::Unsupported { .. } => 0,
        }
    }

    /// Returns `true` when the column spans no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalized key of the cell at `row`, if it has one.
    fn key(&self, row: usize, fold_case: bool) -> Option<String> {
        match self {
            Self::Text(cells) => {
                let key = cells.get(row)?.as_deref()?;
                Some(if fold_case {
                    key.to_lowercase()
                } else {
                    key.to_owned()
                })
            }
            Self::Integer(cells) => cells.get(row).copied().flatten().map(|v| v.to_string()),
            Self::Float(cells) => cells
                .get(row)
                .copied()
                .flatten()
                .filter(|v| !v.is_nan())
                .map(|v| format!("{v:.6}")),
            Self::Absent | Self::Unsupported { .. } => None,
        }
    }
}

/// Settings for [`multi_column_group`].
///
/// # Examples
/// ```
/// use linkgraph_core::LinkageConfig;
///
/// let config = LinkageConfig::default();
/// assert!(config.case_sensitive());
/// assert_eq!(config.min_group_size().get(), 1);
/// assert!(config.incomparables().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkageConfig {
    incomparables: HashSet<String>,
    case_sensitive: bool,
    min_group_size: NonZeroUsize,
}

impl Default for LinkageConfig {
    fn default() -> Self {
        LinkageConfigBuilder::new().build()
    }
}

impl LinkageConfig {
    /// Starts a builder with default settings.
    #[must_use]
    pub fn builder() -> LinkageConfigBuilder {
        LinkageConfigBuilder::new()
    }

    /// Values that never link rows, as supplied.
    #[must_use]
    pub fn incomparables(&self) -> &HashSet<String> {
        &self.incomparables
    }

    /// Whether string keys are compared exactly.
    #[must_use]
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Smallest component that still receives a group id.
    #[must_use]
    pub fn min_group_size(&self) -> NonZeroUsize {
        self.min_group_size
    }

    fn excluded_keys(&self) -> HashSet<String> {
        if self.case_sensitive {
            return self.incomparables.clone();
        }
        self.incomparables
            .iter()
            .map(|value| value.to_lowercase())
            .collect()
    }
}

/// Configures and constructs [`LinkageConfig`] values.
///
/// # Examples
/// ```
/// use linkgraph_core::LinkageConfigBuilder;
///
/// let config = LinkageConfigBuilder::new()
///     .with_incomparables(["", "N/A"])
///     .with_case_sensitive(false)
///     .with_min_group_size(2)
///     .build();
/// assert_eq!(config.min_group_size().get(), 2);
/// assert!(config.incomparables().contains("N/A"));
/// ```
#[derive(Clone, Debug)]
pub struct LinkageConfigBuilder {
    incomparables: HashSet<String>,
    case_sensitive: bool,
    min_group_size: usize,
}

impl Default for LinkageConfigBuilder {
    fn default() -> Self {
        Self {
            incomparables: HashSet::new(),
            case_sensitive: true,
            min_group_size: 1,
        }
    }
}

impl LinkageConfigBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds values that must never link rows together.
    #[must_use]
    pub fn with_incomparables<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.incomparables.extend(values.into_iter().map(Into::into));
        self
    }

    /// Chooses exact (`true`) or Unicode case-insensitive (`false`) string keys.
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the smallest component that receives a group id. Zero acts as one.
    #[must_use]
    pub fn with_min_group_size(mut self, size: usize) -> Self {
        self.min_group_size = size;
        self
    }

    /// Finalizes the configuration.
    #[must_use]
    pub fn build(self) -> LinkageConfig {
        LinkageConfig {
            incomparables: self.incomparables,
            case_sensitive: self.case_sensitive,
            min_group_size: NonZeroUsize::new(self.min_group_size).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Output of [`multi_column_group`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkageResult {
    group_ids: Vec<usize>,
    group_sizes: Vec<usize>,
    value_map: HashMap<String, Vec<usize>>,
}

impl LinkageResult {
    /// Group id per row; [`UNGROUPED`] for rows in undersized components.
    #[must_use]
    pub fn group_ids(&self) -> &[usize] {
        &self.group_ids
    }

    /// Number of groups that received an id.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.group_sizes.len()
    }

    /// Row count per group; `group_sizes()[k - 1]` belongs to group `k`.
    #[must_use]
    pub fn group_sizes(&self) -> &[usize] {
        &self.group_sizes
    }

    /// Keys shared by at least two rows, with their 1-based row numbers.
    #[must_use]
    pub fn value_map(&self) -> &HashMap<String, Vec<usize>> {
        &self.value_map
    }
}

/// Groups rows that share any non-excluded value in any column.
///
/// # Errors
/// Returns [`crate::LinkGraphError::AllocationFailed`] when working storage
/// for the row range cannot be reserved.
///
/// # Examples
/// ```
/// use linkgraph_core::{Column, LinkageConfig, multi_column_group};
///
/// let names = Column::Text(vec![Some("a".into()), Some("b".into()), Some("c".into())]);
/// let phones = Column::Integer(vec![Some(5), Some(5), Some(7)]);
/// let emails = Column::Text(vec![None, Some("q".into()), Some("q".into())]);
///
/// let result = multi_column_group(&[names, phones, emails], &LinkageConfig::default())?;
/// assert_eq!(result.group_ids(), &[1, 1, 1]);
/// assert_eq!(result.group_sizes(), &[3]);
/// assert_eq!(result.value_map()["5"], vec![1, 2]);
/// # Ok::<(), linkgraph_core::LinkGraphError>(())
/// ```
#[instrument(
    name = "linkage.multi_column_group",
    err,
    skip(columns, config),
    fields(
        columns = columns.len(),
        case_sensitive = config.case_sensitive(),
        min_group_size = config.min_group_size().get(),
    ),
)]
pub fn multi_column_group(columns: &[Column], config: &LinkageConfig) -> Result<LinkageResult> {
    for (index, column) in columns.iter().enumerate() {
        if let Column::Unsupported { kind } = column {
            warn!(column = index, kind = %kind, "skipping column of unsupported type");
        }
    }

    let n_rows = columns.iter().map(Column::len).max().unwrap_or(0);
    let rows_by_key = collect_keys(columns, n_rows, config);

    let mut sets = DisjointSet::with_count(NodeCount::from_len(n_rows))?;
    for rows in rows_by_key.values() {
        if let Some((&first, rest)) = rows.split_first() {
            for &row in rest {
                sets.union_sets(first, row);
            }
        }
    }

    let (group_ids, group_sizes) = assign_groups(&mut sets, config.min_group_size())?;
    let value_map: HashMap<String, Vec<usize>> = rows_by_key
        .into_iter()
        .filter(|(_, rows)| rows.len() >= 2)
        .map(|(key, rows)| (key, rows.into_iter().map(|row| row + 1).collect()))
        .collect();

    debug!(
        rows = n_rows,
        groups = group_sizes.len(),
        shared_values = value_map.len(),
        "record linkage completed"
    );

    Ok(LinkageResult {
        group_ids,
        group_sizes,
        value_map,
    })
}

/// Maps each usable key to the rows holding it, in ascending row order.
fn collect_keys(
    columns: &[Column],
    n_rows: usize,
    config: &LinkageConfig,
) -> HashMap<String, Vec<usize>> {
    let fold_case = !config.case_sensitive();
    let excluded = config.excluded_keys();
    let mut rows_by_key: HashMap<String, Vec<usize>> = HashMap::new();

    for row in 0..n_rows {
        for column in columns {
            let Some(key) = column.key(row, fold_case) else {
                continue;
            };
            if key.is_empty() || excluded.contains(&key) {
                continue;
            }
            let rows = rows_by_key.entry(key).or_default();
            // A row repeating a value across columns is listed once.
            if rows.last() != Some(&row) {
                rows.push(row);
            }
        }
    }
    rows_by_key
}

/// Numbers components of at least `min_size` rows in order of first row.
fn assign_groups(
    sets: &mut DisjointSet,
    min_size: NonZeroUsize,
) -> Result<(Vec<usize>, Vec<usize>)> {
    let n_rows = sets.len();
    let roots = sets.roots();
    let mut members = filled_vec(n_rows, 0_usize)?;
    for &root in &roots {
        members[root] += 1;
    }

    let mut assigned: Vec<Option<usize>> = filled_vec(n_rows, None)?;
    let mut group_ids = filled_vec(n_rows, UNGROUPED)?;
    let mut group_sizes = Vec::new();
    for (row, &root) in roots.iter().enumerate() {
        if members[root] < min_size.get() {
            continue;
        }
        let id = *assigned[root].get_or_insert_with(|| {
            group_sizes.push(members[root]);
            group_sizes.len()
        });
        group_ids[row] = id;
    }
    Ok((group_ids, group_sizes))
}
