//! Validated literal tree.
//!
//! Lowering walks a value and its declaration in lockstep and produces this
//! tree; every node here is already known to be well-typed and renderable by
//! the backend it was lowered for. Backends only format.

use std::fmt;

use wirelit_core::{HandleSubtype, PrimitiveSubtype, QualifiedName, Rights};

/// Integer payload, keeping the signedness the value was written with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntValue {
    Signed(i64),
    Unsigned(u64),
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
        }
    }
}

/// Type as it appears in a collection literal's type position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRef<'a> {
    Primitive(PrimitiveSubtype),
    Named {
        name: QualifiedName<'a>,
        nullable: bool,
    },
    String {
        nullable: bool,
    },
    Handle {
        subtype: HandleSubtype,
        nullable: bool,
    },
    Array {
        elem: Box<TypeRef<'a>>,
        size: usize,
    },
    Vector {
        elem: Box<TypeRef<'a>>,
        nullable: bool,
    },
}

/// Raw payload of a field the schema does not know.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownPayload<'a> {
    pub bytes: &'a [u8],
    /// Handle table indices, bounds-checked.
    pub handles: &'a [usize],
}

#[derive(Clone, Debug, PartialEq)]
pub struct StructLiteral<'a> {
    pub name: QualifiedName<'a>,
    pub nullable: bool,
    /// In declaration order.
    pub fields: Vec<(&'a str, Literal<'a>)>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Variant<'a> {
    Known {
        field: &'a str,
        ordinal: u64,
        value: Box<Literal<'a>>,
    },
    Unknown {
        ordinal: u64,
        data: UnknownPayload<'a>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionLiteral<'a> {
    pub name: QualifiedName<'a>,
    pub nullable: bool,
    pub variant: Variant<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableLiteral<'a> {
    pub name: QualifiedName<'a>,
    pub nullable: bool,
    /// Present known fields, in declaration order.
    pub fields: Vec<(&'a str, Literal<'a>)>,
    /// Unknown fields keyed by ordinal, in value order.
    pub unknown: Vec<(u64, UnknownPayload<'a>)>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal<'a> {
    Bool(bool),
    Int {
        value: IntValue,
        subtype: PrimitiveSubtype,
    },
    Float {
        value: f64,
        subtype: PrimitiveSubtype,
    },
    /// Exact bit pattern for a float of `subtype`'s width.
    FloatBits {
        bits: u64,
        subtype: PrimitiveSubtype,
    },
    Bits {
        name: QualifiedName<'a>,
        value: IntValue,
    },
    Enum {
        name: QualifiedName<'a>,
        value: IntValue,
    },
    String {
        value: &'a str,
        nullable: bool,
    },
    Handle {
        index: usize,
        subtype: HandleSubtype,
        rights: Option<Rights>,
    },
    /// Absent handle in a nullable handle slot.
    InvalidHandle {
        subtype: HandleSubtype,
    },
    /// Absent string, vector or record.
    Null,
    List {
        ty: TypeRef<'a>,
        elems: Vec<Literal<'a>>,
    },
    Struct(StructLiteral<'a>),
    Union(UnionLiteral<'a>),
    Table(TableLiteral<'a>),
}
