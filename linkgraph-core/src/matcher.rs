//! Batch fixed-string containment search over many patterns.
//!
//! Matching is literal (no regex). Case-insensitive matching folds ASCII
//! letters in place into a reused buffer, so UTF-8 input is never decoded or
//! re-encoded. An empty pattern occurs in every string; an empty pattern set
//! matches nothing.

use tracing::instrument;

/// Row-major boolean grid: one row per string, one column per pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl MatchMatrix {
    /// Number of strings.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of patterns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether pattern `col` occurs in string `row`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if col >= self.cols {
            return None;
        }
        let index = row.checked_mul(self.cols)?.checked_add(col)?;
        self.cells.get(index).copied()
    }

    /// All pattern results for string `row`.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        let start = row.checked_mul(self.cols)?;
        self.cells.get(start..start + self.cols).filter(|_| row < self.rows)
    }

    /// Collapses the grid to "any pattern matched" per string.
    #[must_use]
    pub fn any_per_row(&self) -> Vec<bool> {
        (0..self.rows)
            .map(|row| self.row(row).is_some_and(|cells| cells.contains(&true)))
            .collect()
    }
}

/// Result of [`multi_grepl`]: a per-string flag or a full grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// `true` where at least one pattern occurs in the string.
    Any(Vec<bool>),
    /// Per string and pattern containment.
    Matrix(MatchMatrix),
}

/// Patterns preprocessed once for repeated "does any pattern occur" scans.
///
/// Patterns are optionally lower-cased and stably sorted by byte length so a
/// scan can stop at the first pattern longer than the text.
///
/// # Examples
/// ```
/// use linkgraph_core::PatternSet;
///
/// let patterns = PatternSet::new(&["WORLD", "hello"], true);
/// assert_eq!(patterns.any_match(&["Hello there", "goodbye"]), vec![true, false]);
/// ```
#[derive(Clone, Debug)]
pub struct PatternSet {
    patterns: Vec<String>,
    ignore_case: bool,
}

impl PatternSet {
    /// Folds and sorts `patterns`.
    #[must_use]
    pub fn new<P: AsRef<str>>(patterns: &[P], ignore_case: bool) -> Self {
        let mut patterns = fold_patterns(patterns, ignore_case);
        patterns.sort_by_key(String::len);
        Self {
            patterns,
            ignore_case,
        }
    }

    /// Number of patterns in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` when the set holds no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern occurs in `text`.
    ///
    /// `buffer` holds the folded copy of `text` for case-insensitive sets and
    /// can be reused across calls.
    pub fn matches_any(&self, text: &str, buffer: &mut String) -> bool {
        let haystack = fold_into(text, self.ignore_case, buffer);
        for pattern in &self.patterns {
            if pattern.len() > haystack.len() {
                break;
            }
            if haystack.contains(pattern.as_str()) {
                return true;
            }
        }
        false
    }

    /// Runs [`Self::matches_any`] over a batch of strings.
    #[must_use]
    pub fn any_match<S: AsRef<str>>(&self, strings: &[S]) -> Vec<bool> {
        let mut buffer = String::new();
        strings
            .iter()
            .map(|text| self.matches_any(text.as_ref(), &mut buffer))
            .collect()
    }
}

/// Searches every string for every pattern.
///
/// With `match_any` the result collapses to one flag per string; otherwise
/// the full grid is returned.
///
/// # Examples
/// ```
/// use linkgraph_core::{MatchOutcome, multi_grepl};
///
/// let strings = ["hello world", "goodbye", "hello there", "world peace"];
/// let outcome = multi_grepl(&strings, &["hello", "world"], true, false);
/// assert_eq!(outcome, MatchOutcome::Any(vec![true, false, true, true]));
///
/// let MatchOutcome::Matrix(grid) = multi_grepl(&strings, &["hello", "world"], false, false)
/// else {
///     panic!("matrix mode returns a grid");
/// };
/// assert_eq!(grid.row(0), Some(&[true, true][..]));
/// assert_eq!(grid.row(3), Some(&[false, true][..]));
/// ```
#[instrument(
    name = "matcher.multi_grepl",
    skip(strings, patterns),
    fields(strings = strings.len(), patterns = patterns.len()),
)]
pub fn multi_grepl<S, P>(
    strings: &[S],
    patterns: &[P],
    match_any: bool,
    ignore_case: bool,
) -> MatchOutcome
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    if match_any {
        return MatchOutcome::Any(scan_any(strings, patterns, ignore_case));
    }

    let patterns = fold_patterns(patterns, ignore_case);
    let mut cells = Vec::with_capacity(strings.len() * patterns.len());
    let mut buffer = String::new();
    for text in strings {
        let haystack = fold_into(text.as_ref(), ignore_case, &mut buffer);
        cells.extend(
            patterns
                .iter()
                .map(|pattern| haystack.contains(pattern.as_str())),
        );
    }
    MatchOutcome::Matrix(MatchMatrix {
        rows: strings.len(),
        cols: patterns.len(),
        cells,
    })
}

/// Flags strings containing at least one pattern, scanning patterns in input
/// order.
///
/// # Examples
/// ```
/// use linkgraph_core::multi_grepl_any;
///
/// assert_eq!(multi_grepl_any(&["abc", "xyz"], &["B"], true), vec![true, false]);
/// assert_eq!(multi_grepl_any(&["abc"], &[] as &[&str], false), vec![false]);
/// ```
#[instrument(
    name = "matcher.multi_grepl_any",
    skip(strings, patterns),
    fields(strings = strings.len(), patterns = patterns.len()),
)]
pub fn multi_grepl_any<S, P>(strings: &[S], patterns: &[P], ignore_case: bool) -> Vec<bool>
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    scan_any(strings, patterns, ignore_case)
}

/// Same answers as [`multi_grepl_any`], using a length-sorted [`PatternSet`]
/// to reject patterns longer than each string without searching.
///
/// # Examples
/// ```
/// use linkgraph_core::multi_grepl_any_fast;
///
/// let found = multi_grepl_any_fast(&["ab", "abcdef"], &["abcd", "zz"], false);
/// assert_eq!(found, vec![false, true]);
/// ```
#[instrument(
    name = "matcher.multi_grepl_any_fast",
    skip(strings, patterns),
    fields(strings = strings.len(), patterns = patterns.len()),
)]
pub fn multi_grepl_any_fast<S, P>(strings: &[S], patterns: &[P], ignore_case: bool) -> Vec<bool>
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    PatternSet::new(patterns, ignore_case).any_match(strings)
}

fn scan_any<S, P>(strings: &[S], patterns: &[P], ignore_case: bool) -> Vec<bool>
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    let patterns = fold_patterns(patterns, ignore_case);
    let mut buffer = String::new();
    strings
        .iter()
        .map(|text| {
            let haystack = fold_into(text.as_ref(), ignore_case, &mut buffer);
            patterns
                .iter()
                .any(|pattern| haystack.contains(pattern.as_str()))
        })
        .collect()
}

fn fold_patterns<P: AsRef<str>>(patterns: &[P], ignore_case: bool) -> Vec<String> {
    patterns
        .iter()
        .map(|pattern| {
            let mut owned = pattern.as_ref().to_owned();
            if ignore_case {
                owned.make_ascii_lowercase();
            }
            owned
        })
        .collect()
}

fn fold_into<'a>(text: &'a str, ignore_case: bool, buffer: &'a mut String) -> &'a str {
    if !ignore_case {
        return text;
    }
    buffer.clear();
    buffer.push_str(text);
    buffer.make_ascii_lowercase();
    buffer.as_str()
}
