//! Target selection and the backend seam.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wirelit_core::{Declaration, ErrorCode, HandleDisposition, HandleSubtype, HandleTable, Value};

use crate::error::{EncodeError, ErrorKind};
use crate::literal::Literal;
use crate::lower::lower;
use crate::{go, rust};

/// Supported target languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Go,
    Rust,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Go, Target::Rust];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Rust => "rust",
        }
    }

    /// Backend with default configuration.
    pub fn backend(self) -> Box<dyn Backend> {
        match self {
            Self::Go => Box::new(go::GoBackend::new(go::Config::default())),
            Self::Rust => Box::new(rust::RustBackend::new(rust::Config::default())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown target `{0}` (expected one of: go, rust)")]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "go" => Ok(Self::Go),
            "rust" => Ok(Self::Rust),
            _ => Err(UnknownTarget(s.to_string())),
        }
    }
}

/// Language-specific rendering of validated literals and auxiliary
/// collections.
///
/// Rendering a [`Literal`] never fails: lowering has already consulted
/// [`Backend::supports_handle`] and rejected anything the backend cannot
/// spell.
pub trait Backend: Send + Sync {
    fn target(&self) -> Target;

    /// Whether handle values of `subtype` can be rendered.
    fn supports_handle(&self, subtype: HandleSubtype) -> bool;

    fn render_value(&self, literal: &Literal<'_>) -> String;

    /// The handle definitions array the test builds its handles from.
    fn render_handle_defs(&self, defs: &HandleTable) -> Result<String, EncodeError>;

    /// Expected encoded bytes.
    fn render_bytes(&self, bytes: &[u8]) -> String;

    fn render_handle_dispositions(&self, dispositions: &[HandleDisposition]) -> String;

    /// Target identifier for an abstract error code.
    fn error_code(&self, code: ErrorCode) -> Result<String, ErrorKind>;
}

/// Encodes values for one test case against one backend.
pub struct Encoder<'a> {
    backend: &'a dyn Backend,
    handles: &'a HandleTable,
}

impl<'a> Encoder<'a> {
    pub fn new(backend: &'a dyn Backend, handles: &'a HandleTable) -> Self {
        Self { backend, handles }
    }

    /// Render `value` as a literal expression of type `decl`.
    pub fn encode(&self, value: &Value, decl: &Declaration) -> Result<String, EncodeError> {
        let literal = lower(value, decl, self.handles, self.backend)?;
        Ok(self.backend.render_value(&literal))
    }

    pub fn handle_defs(&self) -> Result<String, EncodeError> {
        self.backend.render_handle_defs(self.handles)
    }
}

/// Look up the target identifier for `code`.
pub fn map_error_code(backend: &dyn Backend, code: ErrorCode) -> Result<String, EncodeError> {
    backend.error_code(code).map_err(EncodeError::at_root)
}
