//! Declaration builders and rendering shorthands for tests.

use wirelit_core::{
    Declaration, HandleDef, HandleSubtype, HandleTable, NamedScalarDecl, PrimitiveSubtype,
    RecordDecl, RecordField, RecordKind, Resourceness, Rights, Strictness, Value,
};

use crate::error::EncodeError;
use crate::lower::lower;
use crate::target::{Backend, Target};

pub fn prim(subtype: PrimitiveSubtype) -> Declaration {
    Declaration::primitive(subtype)
}

pub fn bits(name: &str, subtype: PrimitiveSubtype) -> Declaration {
    Declaration::Bits(NamedScalarDecl {
        name: name.to_string(),
        subtype,
    })
}

pub fn enum_(name: &str, subtype: PrimitiveSubtype) -> Declaration {
    Declaration::Enum(NamedScalarDecl {
        name: name.to_string(),
        subtype,
    })
}

fn record(kind: RecordKind, name: &str, fields: Vec<(&str, u64, Declaration)>) -> RecordDecl {
    RecordDecl {
        name: name.to_string(),
        kind,
        fields: fields
            .into_iter()
            .map(|(field, ordinal, decl)| (field.to_string(), RecordField { ordinal, decl }))
            .collect(),
        nullable: false,
        resourceness: Resourceness::Value,
        strictness: Strictness::Strict,
    }
}

pub fn struct_decl(name: &str, fields: Vec<(&str, Declaration)>) -> RecordDecl {
    let fields = fields.into_iter().map(|(f, d)| (f, 0, d)).collect();
    record(RecordKind::Struct, name, fields)
}

pub fn union_decl(name: &str, fields: Vec<(&str, u64, Declaration)>) -> RecordDecl {
    record(RecordKind::Union, name, fields)
}

pub fn table_decl(name: &str, fields: Vec<(&str, u64, Declaration)>) -> RecordDecl {
    record(RecordKind::Table, name, fields)
}

pub fn flexible(mut decl: RecordDecl) -> RecordDecl {
    decl.strictness = Strictness::Flexible;
    decl
}

pub fn resource(mut decl: RecordDecl) -> RecordDecl {
    decl.resourceness = Resourceness::Resource;
    decl
}

pub fn optional(mut decl: RecordDecl) -> RecordDecl {
    decl.nullable = true;
    decl
}

/// One channel with `rights`.
pub fn channel_table(rights: u32) -> HandleTable {
    HandleTable::new(vec![HandleDef::new(HandleSubtype::Channel, Rights(rights))])
}

pub fn render(target: Target, value: &Value, decl: &Declaration) -> String {
    render_with(target, value, decl, &HandleTable::default())
}

pub fn render_with(
    target: Target,
    value: &Value,
    decl: &Declaration,
    handles: &HandleTable,
) -> String {
    let backend = target.backend();
    let literal = lower(value, decl, handles, backend.as_ref()).expect("value should lower");
    backend.render_value(&literal)
}

pub fn lower_err(
    backend: &dyn Backend,
    value: &Value,
    decl: &Declaration,
    handles: &HandleTable,
) -> EncodeError {
    lower(value, decl, handles, backend).expect_err("value should be rejected")
}
