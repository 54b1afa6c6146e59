//! Record-linkage grouping against a naive closure over shared keys.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Column, LinkageConfig, UNGROUPED, multi_column_group};

use super::oracle::link_rows;
use super::types::LinkageFixture;

pub(super) fn run_linkage_closure_property(fixture: &LinkageFixture) -> TestCaseResult {
    let columns: Vec<Column> = fixture.columns.iter().cloned().map(Column::Text).collect();
    let config = LinkageConfig::builder()
        .with_incomparables(fixture.incomparables.iter().cloned())
        .with_case_sensitive(fixture.case_sensitive)
        .with_min_group_size(fixture.min_group_size)
        .build();
    let result = multi_column_group(&columns, &config)
        .map_err(|error| TestCaseError::fail(format!("grouping failed: {error}")))?;
    let oracle = link_rows(fixture);
    let ids = result.group_ids();
    let min_size = fixture.min_group_size.max(1);

    prop_assert_eq!(ids.len(), oracle.component.len());
    for row in 0..ids.len() {
        let big_enough = oracle.component_size[row] >= min_size;
        prop_assert_eq!(ids[row] != UNGROUPED, big_enough, "row {}", row);
        for other in 0..ids.len() {
            if ids[row] != UNGROUPED && ids[other] != UNGROUPED {
                prop_assert_eq!(
                    ids[row] == ids[other],
                    oracle.component[row] == oracle.component[other],
                    "rows {} and {}",
                    row,
                    other
                );
            }
        }
    }

    for (index, &size) in result.group_sizes().iter().enumerate() {
        let members = ids.iter().filter(|&&id| id == index + 1).count();
        prop_assert_eq!(size, members);
    }

    prop_assert_eq!(result.value_map().len(), oracle.shared.len());
    for (key, rows) in &oracle.shared {
        let one_based: Vec<usize> = rows.iter().map(|row| row + 1).collect();
        prop_assert_eq!(result.value_map().get(key), Some(&one_based), "key {:?}", key);
    }
    Ok(())
}
