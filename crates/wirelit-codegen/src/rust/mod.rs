//! Rust literal rendering.
//!
//! Integers carry type suffixes so literals stay unambiguous inside `vec![]`
//! and tuples. Optional values are `Option`s and nullable records are boxed.

mod collections;
mod config;
mod errors;
mod naming;
mod render;

#[cfg(test)]
mod rust_tests;

pub use config::Config;

use wirelit_core::{ErrorCode, HandleDisposition, HandleSubtype, HandleTable};

use crate::error::{EncodeError, ErrorKind};
use crate::literal::Literal;
use crate::target::{Backend, Target};

/// Renders literals as Rust expressions.
#[derive(Clone, Debug, Default)]
pub struct RustBackend {
    config: Config,
}

impl RustBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Backend for RustBackend {
    fn target(&self) -> Target {
        Target::Rust
    }

    fn supports_handle(&self, subtype: HandleSubtype) -> bool {
        self.is_supported_handle(subtype)
    }

    fn render_value(&self, literal: &Literal<'_>) -> String {
        self.visit(literal)
    }

    fn render_handle_defs(&self, defs: &HandleTable) -> Result<String, EncodeError> {
        self.handle_defs(defs)
    }

    fn render_bytes(&self, bytes: &[u8]) -> String {
        self.byte_slice(bytes)
    }

    fn render_handle_dispositions(&self, dispositions: &[HandleDisposition]) -> String {
        self.handle_dispositions(dispositions)
    }

    fn error_code(&self, code: ErrorCode) -> Result<String, ErrorKind> {
        errors::error_variant(code)
            .map(|variant| format!("{}::Error::{}", self.config.fidl_crate, variant))
            .ok_or(ErrorKind::UnmappedErrorCode {
                code,
                target: Target::Rust.as_str(),
            })
    }
}
