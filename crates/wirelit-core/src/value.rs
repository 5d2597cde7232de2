//! Abstract, target-independent test values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::handle::Rights;

/// Float width for exact bit patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatWidth {
    F32,
    F64,
}

/// Exact IEEE-754 bit pattern, bypassing decimal rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawFloat {
    pub width: FloatWidth,
    pub bits: u64,
}

/// Reference to an entry of the case's handle table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleRef {
    pub index: usize,
    /// Rights the value expects the handle to carry, when narrower than the
    /// table entry.
    #[serde(default)]
    pub rights: Option<Rights>,
}

/// Raw bytes and owned handles of a field the schema does not know.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownData {
    pub bytes: Vec<u8>,
    /// Handle table indices carried by the unknown field.
    #[serde(default)]
    pub handles: Vec<usize>,
}

/// Key of a record field: a declared name or a bare unknown ordinal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Name(String),
    UnknownOrdinal(u64),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::UnknownOrdinal(ordinal) => write!(f, "#{ordinal}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub key: FieldKey,
    pub value: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named field.
    pub fn field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.push(Field {
            key: FieldKey::Name(name.into()),
            value,
        });
        self
    }

    /// Append an unknown field holding raw data.
    pub fn unknown(mut self, ordinal: u64, data: UnknownData) -> Self {
        self.fields.push(Field {
            key: FieldKey::UnknownOrdinal(ordinal),
            value: Value::UnknownData(data),
        });
        self
    }
}

/// One decoded test datum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float64(f64),
    RawFloat(RawFloat),
    String(String),
    Handle(HandleRef),
    Record(Record),
    List(Vec<Value>),
    /// Only valid as the payload of an unknown-ordinal field.
    UnknownData(UnknownData),
    Null,
}

impl Value {
    pub fn handle(index: usize) -> Self {
        Self::Handle(HandleRef {
            index,
            rights: None,
        })
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Short description used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float64(_) => "float64",
            Self::RawFloat(_) => "raw float",
            Self::String(_) => "string",
            Self::Handle(_) => "handle",
            Self::Record(_) => "record",
            Self::List(_) => "list",
            Self::UnknownData(_) => "unknown data",
            Self::Null => "null",
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}
