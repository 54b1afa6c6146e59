//! Shared test utilities for `linkgraph-core`.

use linkgraph_test_support::profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a proptest configuration honoring the workspace-wide
/// `PROGTEST_CASES` and `LINKGRAPH_PBT_FORK` overrides.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
