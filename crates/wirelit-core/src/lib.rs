#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for schema-directed literal generation.
//!
//! - `schema` - resolved type declarations
//! - `value` - target-independent test values
//! - `handle` - handle subtypes, rights, handle tables and dispositions
//! - `error_code` - the abstract wire-format error enumeration
//! - `naming` - qualified-name translation
//! - `ir` - JSON test-suite loading

pub mod error_code;
pub mod handle;
pub mod ir;
pub mod naming;
pub mod schema;
pub mod utils;
pub mod value;


pub use error_code::ErrorCode;
pub use handle::{HandleDef, HandleDisposition, HandleSubtype, HandleTable, Rights};
pub use ir::{Expectation, LoadError, Suite, TestCase, parse_suite};
pub use naming::{Case, NameError, NameStyle, QualifiedName};
pub use schema::{
    ArrayDecl, Declaration, HandleDecl, NamedScalarDecl, PrimitiveSubtype, RecordDecl,
    RecordField, RecordKind, Resourceness, Strictness, StringDecl, VectorDecl,
};
pub use value::{Field, FieldKey, FloatWidth, HandleRef, RawFloat, Record, UnknownData, Value};
