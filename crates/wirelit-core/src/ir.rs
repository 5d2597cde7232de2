//! Test-suite IR: named declarations plus the cases to generate.
//!
//! The suite arrives as JSON from an upstream loader that has already parsed
//! and resolved the schema. This module only deserializes it and checks the
//! cross references the encoder relies on.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error_code::ErrorCode;
use crate::handle::{HandleDisposition, HandleTable};
use crate::schema::{Declaration, RecordDecl};
use crate::value::Value;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid suite JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("case `{case}` refers to unknown type `{name}`")]
    UnknownType { case: String, name: String },

    #[error("`{name}` is backed by `{subtype}`, expected an integer primitive")]
    InvalidBacking { name: String, subtype: String },

    #[error("declaration keyed `{key}` is named `{name}`")]
    NameMismatch { key: String, name: String },

    #[error("duplicate case name `{0}`")]
    DuplicateCase(String),
}

/// What the generated test checks after constructing the value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Encoding succeeds with exactly these bytes and handle dispositions.
    Bytes {
        bytes: Vec<u8>,
        #[serde(default)]
        handle_dispositions: Vec<HandleDisposition>,
    },
    /// Encoding fails with this error.
    Error { code: ErrorCode },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    /// Qualified name of the top-level declaration.
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: Value,
    #[serde(default)]
    pub handle_defs: HandleTable,
    pub expect: Expectation,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    /// Named top-level declarations, keyed by qualified name.
    #[serde(default)]
    pub declarations: IndexMap<String, Declaration>,
    #[serde(default)]
    pub cases: Vec<TestCase>,
}

impl Suite {
    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    /// Check cross references: case types exist, names agree with keys,
    /// bits and enums sit on integers, case names are unique.
    pub fn validate(&self) -> Result<(), LoadError> {
        for (key, decl) in &self.declarations {
            if let Some(name) = decl.name()
                && name != key
            {
                return Err(LoadError::NameMismatch {
                    key: key.clone(),
                    name: name.to_string(),
                });
            }
            check_backing(decl)?;
        }

        let mut seen = std::collections::HashSet::new();
        for case in &self.cases {
            if !seen.insert(case.name.as_str()) {
                return Err(LoadError::DuplicateCase(case.name.clone()));
            }
            if !self.declarations.contains_key(&case.type_name) {
                return Err(LoadError::UnknownType {
                    case: case.name.clone(),
                    name: case.type_name.clone(),
                });
            }
        }
        Ok(())
    }
}

fn check_backing(decl: &Declaration) -> Result<(), LoadError> {
    match decl {
        Declaration::Bits(scalar) | Declaration::Enum(scalar) => {
            if scalar.subtype.is_integer() {
                Ok(())
            } else {
                Err(LoadError::InvalidBacking {
                    name: scalar.name.clone(),
                    subtype: scalar.subtype.to_string(),
                })
            }
        }
        Declaration::Array(array) => check_backing(&array.elem),
        Declaration::Vector(vector) => check_backing(&vector.elem),
        Declaration::Record(RecordDecl { fields, .. }) => fields
            .values()
            .try_for_each(|field| check_backing(&field.decl)),
        Declaration::Primitive { .. } | Declaration::Handle(_) | Declaration::String(_) => Ok(()),
    }
}

/// Parse and validate a suite.
pub fn parse_suite(json: &str) -> Result<Suite, LoadError> {
    let suite: Suite = serde_json::from_str(json)?;
    suite.validate()?;
    Ok(suite)
}
