//! Error types for the linkgraph core library.
//!
//! Malformed rows (out-of-range endpoints, unsupported columns) degrade
//! silently. Only structural problems abort a call, and they surface through
//! [`LinkGraphError`] before any output is produced.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when a batch call cannot run at all.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LinkGraphError {
    /// The node count supplied by the caller was negative.
    #[error("node count must not be negative (got {got})")]
    InvalidNodeCount {
        /// The rejected node count.
        got: i64,
    },
    /// Working arrays for the requested size could not be reserved.
    #[error("failed to allocate working storage for {elements} elements")]
    AllocationFailed {
        /// Number of elements the call attempted to reserve.
        elements: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`LinkGraphError`] variants.
    enum LinkGraphErrorCode for LinkGraphError {
        /// The node count supplied by the caller was negative.
        InvalidNodeCount => InvalidNodeCount { .. } => "LINKGRAPH_INVALID_NODE_COUNT",
        /// Working arrays for the requested size could not be reserved.
        AllocationFailed => AllocationFailed { .. } => "LINKGRAPH_ALLOCATION_FAILED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, LinkGraphError>;
