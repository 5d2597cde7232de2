//! Go literal rendering.
//!
//! Output targets the Go bindings runtime: exported UpperCamelCase fields,
//! unions tagged through an `I_<name>Tag` field, tables with `<Field>Present`
//! flags and handles wrapped by their `zx` kernel types.

mod collections;
mod config;
mod errors;
mod naming;
mod render;


pub use config::Config;

use wirelit_core::{ErrorCode, HandleDisposition, HandleSubtype, HandleTable};

use crate::error::{EncodeError, ErrorKind};
use crate::literal::Literal;
use crate::target::{Backend, Target};

/// Renders literals as Go expressions.
#[derive(Clone, Debug, Default)]
pub struct GoBackend {
    config: Config,
}

impl GoBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Backend for GoBackend {
    fn target(&self) -> Target {
        Target::Go
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
        self.bytes(bytes)
    }

    fn render_handle_dispositions(&self, dispositions: &[HandleDisposition]) -> String {
        self.handle_dispositions(dispositions)
    }

    fn error_code(&self, code: ErrorCode) -> Result<String, ErrorKind> {
        errors::error_name(code)
            .map(|name| format!("{}.{}", self.config.fidl_package, name))
            .ok_or(ErrorKind::UnmappedErrorCode {
                code,
                target: Target::Go.as_str(),
            })
    }
}
