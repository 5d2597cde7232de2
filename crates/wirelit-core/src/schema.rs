//! Resolved type schema.
//!
//! Every [`Declaration`] is a fully resolved tree: record fields, vector and
//! array elements carry their child declarations inline, so the encoder never
//! looks names up. The schema is purely descriptive; the only behavior here
//! is classification.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::handle::{HandleSubtype, Rights};

/// Primitive wire types: booleans, integers and floats with their width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveSubtype {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

impl PrimitiveSubtype {
    /// Schema spelling, which is also the Go spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    pub fn is_signed_integer(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    pub fn is_unsigned_integer(self) -> bool {
        matches!(self, Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64)
    }

    pub fn is_integer(self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Whether a signed value fits this integer subtype.
    pub fn holds_signed(self, value: i64) -> bool {
        match self {
            Self::Int8 => i8::try_from(value).is_ok(),
            Self::Int16 => i16::try_from(value).is_ok(),
            Self::Int32 => i32::try_from(value).is_ok(),
            Self::Int64 => true,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64 => {
                u64::try_from(value).is_ok_and(|v| self.holds_unsigned(v))
            }
            Self::Bool | Self::Float32 | Self::Float64 => false,
        }
    }

    /// Whether an unsigned value fits this integer subtype.
    pub fn holds_unsigned(self, value: u64) -> bool {
        match self {
            Self::Uint8 => u8::try_from(value).is_ok(),
            Self::Uint16 => u16::try_from(value).is_ok(),
            Self::Uint32 => u32::try_from(value).is_ok(),
            Self::Uint64 => true,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => {
                i64::try_from(value).is_ok_and(|v| self.holds_signed(v))
            }
            Self::Bool | Self::Float32 | Self::Float64 => false,
        }
    }
}

impl fmt::Display for PrimitiveSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an extensible type accepts members unknown to the schema.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    #[default]
    Strict,
    Flexible,
}

/// Whether a type may contain handles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resourceness {
    #[default]
    Value,
    Resource,
}

/// The three record shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Fixed, ordered fields; all present.
    Struct,
    /// Exactly one active field, identified by a tag.
    Union,
    /// Every field optional, keyed by ordinal.
    Table,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Table => "table",
        }
    }
}

/// Named constant set backed by an integer primitive (bits or enum).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedScalarDecl {
    /// Schema-qualified name, e.g. `test.conformance/Color`.
    pub name: String,
    pub subtype: PrimitiveSubtype,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleDecl {
    pub subtype: HandleSubtype,
    #[serde(default = "Rights::same_rights")]
    pub rights: Rights,
    #[serde(default)]
    pub nullable: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringDecl {
    #[serde(default)]
    pub nullable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayDecl {
    pub elem: Box<Declaration>,
    pub size: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorDecl {
    pub elem: Box<Declaration>,
    #[serde(default)]
    pub nullable: bool,
}

/// One declared member of a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordField {
    /// Wire ordinal. Structs leave this at zero; unions and tables key on it.
    #[serde(default)]
    pub ordinal: u64,
    #[serde(rename = "type")]
    pub decl: Declaration,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDecl {
    /// Schema-qualified name, e.g. `test.conformance/MyStruct`.
    pub name: String,
    pub kind: RecordKind,
    /// Declared fields in declaration order.
    #[serde(default)]
    pub fields: IndexMap<String, RecordField>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub resourceness: Resourceness,
    /// Only meaningful for unions; tables are always flexible.
    #[serde(default)]
    pub strictness: Strictness,
}

impl RecordDecl {
    pub fn field(&self, name: &str) -> Option<&RecordField> {
        self.fields.get(name)
    }

    /// Whether values of this record may carry fields unknown to the schema.
    pub fn is_extensible(&self) -> bool {
        match self.kind {
            RecordKind::Struct => false,
            RecordKind::Union => self.strictness == Strictness::Flexible,
            RecordKind::Table => true,
        }
    }

    pub fn is_resource(&self) -> bool {
        self.resourceness == Resourceness::Resource
    }
}

/// A schema node describing one wire-format type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Declaration {
    Primitive { subtype: PrimitiveSubtype },
    Bits(NamedScalarDecl),
    Enum(NamedScalarDecl),
    Handle(HandleDecl),
    String(StringDecl),
    Array(ArrayDecl),
    Vector(VectorDecl),
    Record(RecordDecl),
}

impl Declaration {
    pub fn primitive(subtype: PrimitiveSubtype) -> Self {
        Self::Primitive { subtype }
    }

    pub fn string(nullable: bool) -> Self {
        Self::String(StringDecl { nullable })
    }

    pub fn vector(elem: Declaration, nullable: bool) -> Self {
        Self::Vector(VectorDecl {
            elem: Box::new(elem),
            nullable,
        })
    }

    pub fn array(elem: Declaration, size: usize) -> Self {
        Self::Array(ArrayDecl {
            elem: Box::new(elem),
            size,
        })
    }

    pub fn handle(subtype: HandleSubtype, nullable: bool) -> Self {
        Self::Handle(HandleDecl {
            subtype,
            rights: Rights::SAME_RIGHTS,
            nullable,
        })
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Primitive { .. } | Self::Bits(_) | Self::Enum(_) | Self::Array(_) => false,
            Self::Handle(decl) => decl.nullable,
            Self::String(decl) => decl.nullable,
            Self::Vector(decl) => decl.nullable,
            Self::Record(decl) => decl.nullable,
        }
    }

    /// Schema-qualified name for named declarations.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Bits(decl) | Self::Enum(decl) => Some(&decl.name),
            Self::Record(decl) => Some(&decl.name),
            _ => None,
        }
    }

    /// Short description used in diagnostics.
    pub fn describe(&self) -> String {
        let base = match self {
            Self::Primitive { subtype } => subtype.to_string(),
            Self::Bits(decl) => format!("bits {}", decl.name),
            Self::Enum(decl) => format!("enum {}", decl.name),
            Self::Handle(decl) => format!("handle<{}>", decl.subtype),
            Self::String(_) => "string".to_string(),
            Self::Array(decl) => format!("array<{}, {}>", decl.elem.describe(), decl.size),
            Self::Vector(decl) => format!("vector<{}>", decl.elem.describe()),
            Self::Record(decl) => format!("{} {}", decl.kind.as_str(), decl.name),
        };
        if self.is_nullable() {
            format!("{base}:optional")
        } else {
            base
        }
    }
}
