//! Schema-directed literal encoder.
//!
//! Turns a (value, declaration) pair into source text that rebuilds the value
//! in a target language:
//! - `lower` - lockstep validation into a `literal` tree
//! - `target` - the `Backend` seam and target selection
//! - `go`, `rust` - per-language rendering
//! - `driver` - whole test cases and suites
//! - `error` - failure kinds and value paths

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod driver;
pub mod error;
pub mod go;
pub mod literal;
pub mod lower;
pub mod rust;
pub mod target;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod lower_tests;

pub use driver::{EncodedCase, EncodedOutcome, encode_case, encode_suite};
pub use error::{CaseError, EncodeError, ErrorKind, PathSegment, ValuePath};
pub use go::GoBackend;
pub use literal::Literal;
pub use lower::lower;
pub use rust::RustBackend;
pub use target::{Backend, Encoder, Target, UnknownTarget, map_error_code};

/// Result type for encoding a single value.
pub type Result<T> = std::result::Result<T, EncodeError>;
