//! Benchmark setup error type.

use linkgraph_core::LinkGraphError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A library call used during setup failed.
    #[error("linkgraph call failed: {0}")]
    Core(#[from] LinkGraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// A size does not fit the integer type the library call expects.
    #[error("{context} of {value} exceeds the supported range")]
    TooLarge {
        /// The oversized parameter.
        context: &'static str,
        /// The rejected value.
        value: usize,
    },
}
