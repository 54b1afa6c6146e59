//! Agreement between the three matcher modes and a byte-window oracle.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MatchOutcome, PatternSet, multi_grepl, multi_grepl_any, multi_grepl_any_fast};

use super::oracle::contains;
use super::types::MatchFixture;

pub(super) fn run_matcher_agreement_property(fixture: &MatchFixture) -> TestCaseResult {
    let MatchFixture {
        strings,
        patterns,
        ignore_case,
    } = fixture;

    let MatchOutcome::Matrix(grid) = multi_grepl(strings, patterns, false, *ignore_case) else {
        return Err(TestCaseError::fail("matrix mode returned a vector"));
    };
    prop_assert_eq!(grid.rows(), strings.len());
    prop_assert_eq!(grid.cols(), patterns.len());
    for (row, text) in strings.iter().enumerate() {
        for (col, pattern) in patterns.iter().enumerate() {
            prop_assert_eq!(
                grid.get(row, col),
                Some(contains(text, pattern, *ignore_case)),
                "{:?} in {:?}",
                pattern,
                text
            );
        }
    }

    let expected = grid.any_per_row();
    prop_assert_eq!(&multi_grepl_any(strings, patterns, *ignore_case), &expected);
    prop_assert_eq!(&multi_grepl_any_fast(strings, patterns, *ignore_case), &expected);
    prop_assert_eq!(
        multi_grepl(strings, patterns, true, *ignore_case),
        MatchOutcome::Any(expected.clone())
    );

    let set = PatternSet::new(patterns, *ignore_case);
    let mut buffer = String::new();
    for (text, &flag) in strings.iter().zip(&expected) {
        prop_assert_eq!(set.matches_any(text, &mut buffer), flag);
    }
    Ok(())
}
