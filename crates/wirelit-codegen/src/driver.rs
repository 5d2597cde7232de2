//! Per-case and per-suite encoding.
//!
//! A case renders completely or not at all: the first failure aborts that
//! case and is reported with the case name.

use rayon::prelude::*;
use tracing::debug;
use wirelit_core::{Expectation, Suite, TestCase};

use crate::error::{CaseError, EncodeError, ErrorKind};
use crate::target::{Backend, Encoder, map_error_code};

/// Everything the test template needs for one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedCase {
    pub name: String,
    /// Literal expression for the case value.
    pub value: String,
    pub handle_defs: String,
    pub outcome: EncodedOutcome,
}

/// What the generated test asserts after building the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodedOutcome {
    Bytes {
        bytes: String,
        handle_dispositions: String,
    },
    /// Target identifier of the expected encoding error.
    Error { error: String },
}

/// Render one case against `backend`.
pub fn encode_case(
    backend: &dyn Backend,
    suite: &Suite,
    case: &TestCase,
) -> Result<EncodedCase, CaseError> {
    let wrap = |error: EncodeError| CaseError {
        case: case.name.clone(),
        error,
    };

    let decl = suite.declaration(&case.type_name).ok_or_else(|| {
        wrap(EncodeError::at_root(ErrorKind::UnknownSchemaConstruct(
            format!("no declaration named `{}`", case.type_name),
        )))
    })?;

    let encoder = Encoder::new(backend, &case.handle_defs);
    let value = encoder.encode(&case.value, decl).map_err(wrap)?;
    let handle_defs = encoder.handle_defs().map_err(wrap)?;

    let outcome = match &case.expect {
        Expectation::Bytes {
            bytes,
            handle_dispositions,
        } => {
            if let Some(d) = handle_dispositions
                .iter()
                .find(|d| d.handle >= case.handle_defs.len())
            {
                return Err(wrap(EncodeError::at_root(ErrorKind::HandleIndexOutOfRange {
                    index: d.handle,
                    len: case.handle_defs.len(),
                })));
            }
            EncodedOutcome::Bytes {
                bytes: backend.render_bytes(bytes),
                handle_dispositions: backend.render_handle_dispositions(handle_dispositions),
            }
        }
        Expectation::Error { code } => EncodedOutcome::Error {
            error: map_error_code(backend, *code).map_err(wrap)?,
        },
    };

    debug!(case = %case.name, target = %backend.target(), "encoded case");
    Ok(EncodedCase {
        name: case.name.clone(),
        value,
        handle_defs,
        outcome,
    })
}

/// Render every case of `suite` in parallel.
///
/// Results keep the suite's case order. On failure the error of the first
/// failing case in that order is returned.
pub fn encode_suite(backend: &dyn Backend, suite: &Suite) -> Result<Vec<EncodedCase>, CaseError> {
    debug!(cases = suite.cases.len(), target = %backend.target(), "encoding suite");
    let results: Vec<Result<EncodedCase, CaseError>> = suite
        .cases
        .par_iter()
        .map(|case| encode_case(backend, suite, case))
        .collect();
    results.into_iter().collect()
}
