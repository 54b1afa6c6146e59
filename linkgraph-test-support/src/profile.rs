//! Environment overrides for property-test case counts and forking.
//!
//! Every proptest suite in the workspace reads the same two variables, so a
//! CI job can deepen or fork all suites at once without touching code.

use std::env;

/// Overrides the number of cases per property.
pub const CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Runs proptest cases in forked subprocesses when truthy.
pub const FORK_ENV_KEY: &str = "LINKGRAPH_PBT_FORK";

/// Case count and fork flag for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, falling back to the suite's own
    /// defaults for unset or malformed values.
    ///
    /// # Examples
    /// ```
    /// use linkgraph_test_support::profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(128, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T: Copy>(key: &'static str, default: T, parse: fn(&str) -> Option<T>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(raw.trim()).unwrap_or_else(|| {
        tracing::warn!(env = key, raw = %raw, "ignoring malformed property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|&cases| cases > 0)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
