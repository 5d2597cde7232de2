use wirelit_core::{
    Declaration, FloatWidth, HandleSubtype, HandleTable, NameError, PrimitiveSubtype as P,
    RawFloat, Record, RecordDecl, UnknownData, Value,
};

use crate::error::ErrorKind;
use crate::go::GoBackend;
use crate::literal::{Literal, TableLiteral, UnknownPayload};
use crate::lower::lower;
use crate::target::{Encoder, Target};
use crate::test_utils::*;

fn point() -> RecordDecl {
    struct_decl(
        "test.conformance/Point",
        vec![("x", prim(P::Int32)), ("y", prim(P::Int32))],
    )
}

fn choice() -> RecordDecl {
    union_decl(
        "test.conformance/Choice",
        vec![
            ("a", 1, prim(P::Int8)),
            ("b", 2, Declaration::string(false)),
        ],
    )
}

fn my_table() -> RecordDecl {
    table_decl(
        "test.conformance/MyTable",
        vec![("first", 1, prim(P::Int8))],
    )
}

fn unknown(bytes: Vec<u8>, handles: Vec<usize>) -> UnknownData {
    UnknownData { bytes, handles }
}

fn err(value: &Value, decl: &Declaration) -> crate::EncodeError {
    lower_err(&GoBackend::default(), value, decl, &HandleTable::default())
}

#[test]
fn encoding_is_deterministic() {
    let decl = Declaration::Record(point());
    let value: Value = Record::new()
        .field("y", Value::Int(2))
        .field("x", Value::Int(1))
        .into();
    for target in Target::ALL {
        let backend = target.backend();
        let handles = HandleTable::default();
        let encoder = Encoder::new(backend.as_ref(), &handles);
        let first = encoder.encode(&value, &decl).unwrap();
        let second = encoder.encode(&value, &decl).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn struct_fields_follow_declaration_order() {
    let decl = Declaration::Record(point());
    let value: Value = Record::new()
        .field("y", Value::Int(2))
        .field("x", Value::Int(1))
        .into();
    let literal = lower(&value, &decl, &HandleTable::default(), &GoBackend::default()).unwrap();
    let Literal::Struct(s) = literal else {
        panic!("expected struct literal");
    };
    let names: Vec<&str> = s.fields.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["x", "y"]);
}

#[test]
fn empty_vector_differs_from_null() {
    let decl = Declaration::vector(prim(P::Int8), true);
    for target in Target::ALL {
        let empty = render(target, &Value::List(vec![]), &decl);
        let null = render(target, &Value::Null, &decl);
        assert_ne!(empty, null, "{target}");
    }
}

#[test]
fn union_requires_exactly_one_field() {
    let decl = Declaration::Record(choice());
    let two: Value = Record::new()
        .field("a", Value::Int(1))
        .field("b", Value::string("x"))
        .into();
    assert_eq!(err(&two, &decl).kind, ErrorKind::MalformedUnionValue { count: 2 });

    let none: Value = Record::new().into();
    let e = err(&none, &decl);
    assert_eq!(e.kind, ErrorKind::MalformedUnionValue { count: 0 });
    assert_eq!(
        e.to_string(),
        "union value must set exactly one field, found 0 at $"
    );
}

#[test]
fn null_requires_nullable_declaration() {
    let decl = Declaration::Record(point());
    let value: Value = Record::new()
        .field("x", Value::Null)
        .field("y", Value::Int(2))
        .into();
    let e = err(&value, &decl);
    assert!(matches!(e.kind, ErrorKind::NullabilityViolation(_)));
    assert_eq!(e.path.to_string(), "$.x");
}

#[test]
fn shape_mismatch() {
    let e = err(&Value::string("1"), &prim(P::Int32));
    assert_eq!(
        e.kind,
        ErrorKind::TypeMismatch("string value for int32".to_string())
    );
}

#[test]
fn integers_must_fit_declared_width() {
    let e = err(&Value::Int(300), &prim(P::Uint8));
    assert_eq!(
        e.kind,
        ErrorKind::TypeMismatch("300 out of range for uint8".to_string())
    );
    assert!(matches!(
        err(&Value::Int(-1), &prim(P::Uint16)).kind,
        ErrorKind::TypeMismatch(_)
    ));
    assert!(matches!(
        err(&Value::Uint(128), &bits("test.conformance/Flags", P::Int8)).kind,
        ErrorKind::TypeMismatch(_)
    ));
}

#[test]
fn floats_must_fit_declared_width() {
    assert!(matches!(
        err(&Value::Float64(1e300), &prim(P::Float32)).kind,
        ErrorKind::TypeMismatch(_)
    ));
    assert!(matches!(
        err(&Value::Float64(-1e39), &prim(P::Float32)).kind,
        ErrorKind::TypeMismatch(_)
    ));

    let decl = prim(P::Float32);
    for f in [f64::from(f32::MAX), f64::NAN, f64::INFINITY, -1.5] {
        let value = Value::Float64(f);
        assert!(lower(&value, &decl, &HandleTable::default(), &GoBackend::default()).is_ok());
    }
    let value = Value::Float64(1e300);
    assert!(lower(&value, &prim(P::Float64), &HandleTable::default(), &GoBackend::default()).is_ok());
}

#[test]
fn raw_float_width_must_match() {
    let raw = Value::RawFloat(RawFloat {
        width: FloatWidth::F64,
        bits: 0,
    });
    assert!(matches!(
        err(&raw, &prim(P::Float32)).kind,
        ErrorKind::TypeMismatch(_)
    ));

    let too_wide = Value::RawFloat(RawFloat {
        width: FloatWidth::F32,
        bits: 1 << 40,
    });
    assert!(matches!(
        err(&too_wide, &prim(P::Float32)).kind,
        ErrorKind::TypeMismatch(_)
    ));
}

#[test]
fn array_length_must_match() {
    let decl = Declaration::array(prim(P::Uint8), 3);
    let e = err(&Value::List(vec![Value::Uint(1)]), &decl);
    assert_eq!(
        e.kind,
        ErrorKind::TypeMismatch("1 elements for array<uint8, 3>".to_string())
    );
}

#[test]
fn struct_fields_must_all_be_present() {
    let decl = Declaration::Record(point());
    let value: Value = Record::new().field("x", Value::Int(1)).into();
    assert!(matches!(err(&value, &decl).kind, ErrorKind::TypeMismatch(_)));
}

#[test]
fn undeclared_field_is_unknown_construct() {
    let decl = Declaration::Record(point());
    let value: Value = Record::new()
        .field("x", Value::Int(1))
        .field("z", Value::Int(3))
        .into();
    let e = err(&value, &decl);
    assert!(matches!(e.kind, ErrorKind::UnknownSchemaConstruct(_)));
    assert_eq!(e.path.to_string(), "$.z");
}

#[test]
fn structs_reject_unknown_ordinals() {
    let decl = Declaration::Record(point());
    let value: Value = Record::new().unknown(3, unknown(vec![], vec![])).into();
    let e = err(&value, &decl);
    assert!(matches!(e.kind, ErrorKind::TypeMismatch(_)));
    assert_eq!(e.path.to_string(), "$.#3");
}

#[test]
fn strict_unions_reject_unknown_ordinals() {
    let decl = Declaration::Record(choice());
    let value: Value = Record::new().unknown(9, unknown(vec![1], vec![])).into();
    assert!(matches!(err(&value, &decl).kind, ErrorKind::TypeMismatch(_)));
}

#[test]
fn unknown_ordinal_must_not_shadow_declared_field() {
    let decl = Declaration::Record(flexible(choice()));
    let value: Value = Record::new().unknown(2, unknown(vec![1], vec![])).into();
    let e = err(&value, &decl);
    assert_eq!(
        e.kind,
        ErrorKind::TypeMismatch(
            "ordinal 2 is declared as field `b` of test.conformance/Choice".to_string()
        )
    );
}

#[test]
fn unknown_handles_require_resource_type() {
    let decl = Declaration::Record(my_table());
    let value: Value = Record::new().unknown(7, unknown(vec![], vec![0])).into();
    let e = lower_err(&GoBackend::default(), &value, &decl, &channel_table(1));
    assert!(matches!(e.kind, ErrorKind::TypeMismatch(_)));
    assert_eq!(e.path.to_string(), "$.#7");
}

#[test]
fn unknown_handles_are_bounds_checked() {
    let decl = Declaration::Record(resource(my_table()));
    let value: Value = Record::new().unknown(7, unknown(vec![], vec![3])).into();
    let e = lower_err(&GoBackend::default(), &value, &decl, &channel_table(1));
    assert_eq!(e.kind, ErrorKind::HandleIndexOutOfRange { index: 3, len: 1 });
    assert_eq!(e.path.to_string(), "$.#7");
}

#[test]
fn unknown_data_outside_unknown_field() {
    let value = Value::UnknownData(unknown(vec![1], vec![]));
    assert!(matches!(
        err(&value, &prim(P::Uint8)).kind,
        ErrorKind::UnknownSchemaConstruct(_)
    ));
}

#[test]
fn table_fields_may_not_repeat() {
    let decl = Declaration::Record(my_table());
    let value: Value = Record::new()
        .field("first", Value::Int(1))
        .field("first", Value::Int(2))
        .into();
    assert!(matches!(err(&value, &decl).kind, ErrorKind::TypeMismatch(_)));

    let value: Value = Record::new()
        .unknown(7, unknown(vec![1], vec![]))
        .unknown(7, unknown(vec![2], vec![]))
        .into();
    assert!(matches!(err(&value, &decl).kind, ErrorKind::TypeMismatch(_)));
}

#[test]
fn table_keeps_known_and_unknown_fields_apart() {
    let decl = Declaration::Record(my_table());
    let value: Value = Record::new()
        .unknown(7, unknown(vec![0xAA, 0xBB], vec![]))
        .field("first", Value::Int(5))
        .into();
    let literal = lower(&value, &decl, &HandleTable::default(), &GoBackend::default()).unwrap();
    let Literal::Table(TableLiteral { fields, unknown, .. }) = literal else {
        panic!("expected table literal");
    };
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].0, "first");
    assert_eq!(
        unknown,
        vec![(
            7,
            UnknownPayload {
                bytes: &[0xAA, 0xBB],
                handles: &[],
            }
        )]
    );
}

#[test]
fn handle_refers_to_table_entry() {
    let decl = Declaration::handle(HandleSubtype::Channel, false);
    let handles = channel_table(1);
    let value = Value::handle(0);
    let literal = lower(&value, &decl, &handles, &GoBackend::default()).unwrap();
    assert_eq!(
        literal,
        Literal::Handle {
            index: 0,
            subtype: HandleSubtype::Channel,
            rights: None,
        }
    );
    assert_eq!(
        render_with(Target::Go, &Value::handle(0), &decl, &handles),
        "zx.Channel(handles[0])"
    );

    let e = lower_err(&GoBackend::default(), &Value::handle(5), &decl, &handles);
    assert_eq!(e.kind, ErrorKind::HandleIndexOutOfRange { index: 5, len: 1 });
}

#[test]
fn null_handle_checks_subtype_support() {
    let decl = Declaration::handle(HandleSubtype::Vmo, true);
    assert!(matches!(
        err(&Value::Null, &decl).kind,
        ErrorKind::UnsupportedHandleSubtype { .. }
    ));
    assert_eq!(
        render(Target::Rust, &Value::Null, &decl),
        "Vmo::from(Handle::invalid())"
    );
}

#[test]
fn nested_failures_report_full_path() {
    let decl = Declaration::vector(Declaration::Record(point()), false);
    let good: Value = Record::new()
        .field("x", Value::Int(1))
        .field("y", Value::Int(2))
        .into();
    let bad: Value = Record::new()
        .field("x", Value::Bool(true))
        .field("y", Value::Int(2))
        .into();
    let value = Value::List(vec![good.clone(), good, bad]);
    let e = err(&value, &decl);
    assert_eq!(e.path.to_string(), "$[2].x");
    assert_eq!(
        e.to_string(),
        "type mismatch: bool value for int32 at $[2].x"
    );
}

#[test]
fn malformed_record_name() {
    let decl = Declaration::Record(struct_decl("test.conformance/", vec![]));
    let e = err(&Record::new().into(), &decl);
    assert_eq!(
        e.kind,
        ErrorKind::MalformedName(NameError::EmptySegment("test.conformance/".to_string()))
    );
}
