//! Error types for literal encoding.

use std::fmt;

use wirelit_core::{ErrorCode, HandleSubtype, NameError};

/// What went wrong, independent of where.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Value shape incompatible with the declaration.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// Null against a non-nullable declaration.
    #[error("nullability violation: {0}")]
    NullabilityViolation(String),

    #[error("handle subtype `{subtype}` is not supported by the {target} target")]
    UnsupportedHandleSubtype {
        subtype: HandleSubtype,
        target: &'static str,
    },

    #[error("no {target} error identifier for error code `{code}`")]
    UnmappedErrorCode {
        code: ErrorCode,
        target: &'static str,
    },

    #[error("handle index {index} out of range (handle table has {len} entries)")]
    HandleIndexOutOfRange { index: usize, len: usize },

    /// Union value with zero or several fields.
    #[error("union value must set exactly one field, found {count}")]
    MalformedUnionValue { count: usize },

    /// A declaration or value construct the encoder cannot place.
    #[error("unknown schema construct: {0}")]
    UnknownSchemaConstruct(String),

    #[error("malformed name: {0}")]
    MalformedName(#[from] NameError),
}

/// One step from the root of the encoded input to the failing node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    UnknownOrdinal(u64),
    Index(usize),
}

/// Location of a failure: `$.outer.inner[2]` inside the value, or
/// `handle_defs[1]` inside the handle table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuePath {
    root: &'static str,
    segments: Vec<PathSegment>,
}

impl ValuePath {
    pub fn root() -> Self {
        Self {
            root: "$",
            segments: Vec::new(),
        }
    }

    pub fn handle_def(index: usize) -> Self {
        Self {
            root: "handle_defs",
            segments: vec![PathSegment::Index(index)],
        }
    }

    pub(crate) fn from_segments(segments: &[PathSegment]) -> Self {
        Self {
            root: "$",
            segments: segments.to_vec(),
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root)?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::UnknownOrdinal(ordinal) => write!(f, ".#{ordinal}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Encoding failure with its location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {path}")]
pub struct EncodeError {
    pub kind: ErrorKind,
    pub path: ValuePath,
}

impl EncodeError {
    pub fn new(kind: ErrorKind, path: ValuePath) -> Self {
        Self { kind, path }
    }

    pub fn at_root(kind: ErrorKind) -> Self {
        Self::new(kind, ValuePath::root())
    }
}

/// Encoding failure attributed to a named test case.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("case `{case}`: {error}")]
pub struct CaseError {
    pub case: String,
    #[source]
    pub error: EncodeError,
}
