use wirelit_core::{
    Declaration, ErrorCode, FloatWidth, HandleDef, HandleDisposition, HandleRef, HandleSubtype,
    HandleTable, PrimitiveSubtype as P, RawFloat, Record, RecordDecl, Rights, UnknownData, Value,
};

use super::{Config, RustBackend};
use crate::error::{ErrorKind, ValuePath};
use crate::target::{Backend, Target};
use crate::test_utils::*;

fn rust(value: &Value, decl: &Declaration) -> String {
    render(Target::Rust, value, decl)
}

fn my_union() -> RecordDecl {
    union_decl(
        "test.conformance/MyUnion",
        vec![
            ("a", 1, prim(P::Int8)),
            ("b", 2, Declaration::string(false)),
        ],
    )
}

#[test]
fn primitives_carry_suffixes() {
    assert_eq!(rust(&Value::Bool(false), &prim(P::Bool)), "false");
    assert_eq!(rust(&Value::Uint(5), &prim(P::Uint8)), "5u8");
    assert_eq!(rust(&Value::Int(-5), &prim(P::Int8)), "-5i8");
    assert_eq!(rust(&Value::Float64(1.5), &prim(P::Float64)), "1.5f64");
    assert_eq!(rust(&Value::Float64(1.0), &prim(P::Float32)), "1.0f32");
}

#[test]
fn floats_without_decimal_form() {
    assert_eq!(rust(&Value::Float64(f64::NAN), &prim(P::Float32)), "f32::NAN");
    assert_eq!(
        rust(&Value::Float64(f64::NEG_INFINITY), &prim(P::Float64)),
        "f64::NEG_INFINITY"
    );
    let raw = Value::RawFloat(RawFloat {
        width: FloatWidth::F32,
        bits: 0x7fc0_0001,
    });
    assert_eq!(rust(&raw, &prim(P::Float32)), "f32::from_bits(0x7fc00001)");
}

#[test]
fn strings() {
    assert_eq!(
        rust(&Value::string("a\"b\n"), &Declaration::string(false)),
        r#"String::from("a\"b\n")"#
    );
    assert_eq!(
        rust(&Value::string("x"), &Declaration::string(true)),
        r#"Some(String::from("x"))"#
    );
    assert_eq!(rust(&Value::Null, &Declaration::string(true)), "None");
}

#[test]
fn bits_and_enums() {
    let flags = bits("test.conformance/MyBits", P::Uint8);
    assert_eq!(
        rust(&Value::Uint(5), &flags),
        "test_conformance::MyBits::from_bits_allow_unknown(5)"
    );
    let color = enum_("test.conformance/Color", P::Int32);
    assert_eq!(
        rust(&Value::Int(-1), &color),
        "test_conformance::Color::from_primitive_allow_unknown(-1)"
    );
}

#[test]
fn reserved_scope_is_escaped() {
    let kind = enum_("self/Kind", P::Uint8);
    assert_eq!(
        rust(&Value::Uint(1), &kind),
        "self_::Kind::from_primitive_allow_unknown(1)"
    );
}

#[test]
fn vectors_and_arrays() {
    let bytes = Declaration::vector(prim(P::Int8), false);
    assert_eq!(rust(&Value::List(vec![]), &bytes), "vec![]");

    let optional = Declaration::vector(prim(P::Int8), true);
    assert_eq!(rust(&Value::Null, &optional), "None");
    assert_eq!(rust(&Value::List(vec![]), &optional), "Some(vec![])");

    let list = Value::List(vec![Value::Int(1), Value::Int(2)]);
    insta::assert_snapshot!(rust(&list, &bytes), @r"
    vec![
    1i8,
    2i8,
    ]
    ");

    let array = Declaration::array(prim(P::Uint8), 2);
    let list = Value::List(vec![Value::Uint(1), Value::Uint(2)]);
    insta::assert_snapshot!(rust(&list, &array), @r"
    [
    1u8,
    2u8,
    ]
    ");
}

#[test]
fn structs() {
    let decl = Declaration::Record(struct_decl(
        "test.conformance/MyStruct",
        vec![
            ("first_field", prim(P::Int32)),
            ("type", Declaration::string(false)),
        ],
    ));
    let value = Record::new()
        .field("first_field", Value::Int(1))
        .field("type", Value::string("x"))
        .into();
    insta::assert_snapshot!(rust(&value, &decl), @r#"
    test_conformance::MyStruct {
    first_field: 1i32,
    type_: String::from("x"),
    }
    "#);

    let empty = Declaration::Record(optional(struct_decl("test.conformance/Empty", vec![])));
    assert_eq!(
        rust(&Record::new().into(), &empty),
        "Some(Box::new(test_conformance::Empty {}))"
    );
}

#[test]
fn unions() {
    let decl = Declaration::Record(my_union());
    let value = Record::new().field("b", Value::string("x")).into();
    assert_eq!(
        rust(&value, &decl),
        r#"test_conformance::MyUnion::B(String::from("x"))"#
    );

    let decl = Declaration::Record(optional(my_union()));
    let value = Record::new().field("a", Value::Int(1)).into();
    assert_eq!(
        rust(&value, &decl),
        "Some(Box::new(test_conformance::MyUnion::A(1i8)))"
    );
}

#[test]
fn union_unknown_variant() {
    let decl = Declaration::Record(flexible(my_union()));
    let data = UnknownData {
        bytes: vec![0xaa, 0xbb],
        handles: vec![],
    };
    let value = Record::new().unknown(7, data).into();
    insta::assert_snapshot!(rust(&value, &decl), @r"
    test_conformance::MyUnion::unknown_variant_for_testing(7, UnknownData {
    bytes: vec![
    0xaa, 0xbb,
    ],
    handles: vec![],
    })
    ");
}

#[test]
fn union_unknown_variant_with_handles() {
    let decl = Declaration::Record(resource(flexible(my_union())));
    let data = UnknownData {
        bytes: vec![],
        handles: vec![0],
    };
    let value = Record::new().unknown(9, data).into();
    let out = render_with(Target::Rust, &value, &decl, &channel_table(1));
    insta::assert_snapshot!(out, @r"
    test_conformance::MyUnion::unknown_variant_for_testing(9, UnknownData {
    bytes: vec![],
    handles: vec![
    HandleInfo::new(copy_handle(&handles[0]), handle_defs[0].subtype, handle_defs[0].rights),
    ],
    })
    ");
}

#[test]
fn tables() {
    let decl = Declaration::Record(table_decl(
        "test.conformance/MyTable",
        vec![
            ("first", 1, prim(P::Int8)),
            ("second", 2, Declaration::string(false)),
        ],
    ));
    let data = UnknownData {
        bytes: vec![0xaa, 0xbb],
        handles: vec![],
    };
    let value = Record::new()
        .field("first", Value::Int(3))
        .unknown(7, data)
        .into();
    insta::assert_snapshot!(rust(&value, &decl), @r"
    test_conformance::MyTable {
    first: Some(3i8),
    unknown_data: Some(BTreeMap::from([
    (7, UnknownData {
    bytes: vec![
    0xaa, 0xbb,
    ],
    handles: vec![],
    }),
    ])),
    ..test_conformance::MyTable::EMPTY
    }
    ");

    insta::assert_snapshot!(rust(&Record::new().into(), &decl), @r"
    test_conformance::MyTable {
    ..test_conformance::MyTable::EMPTY
    }
    ");
}

#[test]
fn null_table_field_is_absent() {
    let decl = Declaration::Record(table_decl(
        "test.conformance/T",
        vec![("v", 1, Declaration::vector(prim(P::Int8), true))],
    ));
    let value = Record::new().field("v", Value::Null).into();
    let out = rust(&value, &decl);
    insta::assert_snapshot!(out, @r"
    test_conformance::T {
    ..test_conformance::T::EMPTY
    }
    ");
    assert!(!out.contains("Some(None)"));
}

#[test]
fn handles() {
    let handles = channel_table(1);
    let channel = Declaration::handle(HandleSubtype::Channel, false);
    assert_eq!(
        render_with(Target::Rust, &Value::handle(0), &channel, &handles),
        "Channel::from(copy_handle(&handles[0]))"
    );

    let raw = Declaration::handle(HandleSubtype::Handle, false);
    assert_eq!(
        render_with(Target::Rust, &Value::handle(0), &raw, &handles),
        "copy_handle(&handles[0])"
    );

    let restricted = Value::Handle(HandleRef {
        index: 0,
        rights: Some(Rights::READ),
    });
    assert_eq!(
        render_with(Target::Rust, &restricted, &channel, &handles),
        "Channel::from(copy_handle_with_rights(&handles[0], Rights::from_bits_retain(4)))"
    );

    let optional = Declaration::handle(HandleSubtype::Channel, true);
    assert_eq!(
        render_with(Target::Rust, &Value::Null, &optional, &handles),
        "Channel::from(Handle::invalid())"
    );
}

#[test]
fn sockets_are_supported() {
    let handles = HandleTable::new(vec![HandleDef::new(HandleSubtype::Socket, Rights(1))]);
    let socket = Declaration::handle(HandleSubtype::Socket, false);
    assert_eq!(
        render_with(Target::Rust, &Value::handle(0), &socket, &handles),
        "Socket::from(copy_handle(&handles[0]))"
    );
}

#[test]
fn unsupported_handle_subtype() {
    let backend = RustBackend::default();
    let handles = HandleTable::new(vec![HandleDef::new(HandleSubtype::Port, Rights(1))]);
    let decl = Declaration::handle(HandleSubtype::Port, false);
    let err = lower_err(&backend, &Value::handle(0), &decl, &handles);
    assert_eq!(
        err.kind,
        ErrorKind::UnsupportedHandleSubtype {
            subtype: HandleSubtype::Port,
            target: "rust",
        }
    );
}

#[test]
fn handle_defs() {
    let backend = RustBackend::default();
    assert_eq!(
        backend.render_handle_defs(&HandleTable::default()).unwrap(),
        "&[]"
    );

    let defs = HandleTable::new(vec![
        HandleDef::new(HandleSubtype::Channel, Rights(1)),
        HandleDef::new(HandleSubtype::Eventpair, Rights::SAME_RIGHTS),
    ]);
    insta::assert_snapshot!(backend.render_handle_defs(&defs).unwrap(), @r"
    &[
    HandleDef { subtype: ObjectType::CHANNEL, rights: Rights::from_bits_retain(1) },
    HandleDef { subtype: ObjectType::EVENTPAIR, rights: Rights::from_bits_retain(2147483648) },
    ]
    ");
}

#[test]
fn handle_defs_reject_untyped_handles() {
    let backend = RustBackend::default();
    let defs = HandleTable::new(vec![HandleDef::new(HandleSubtype::Handle, Rights(1))]);
    let err = backend.render_handle_defs(&defs).unwrap_err();
    assert_eq!(err.path, ValuePath::handle_def(0));
}

#[test]
fn bytes() {
    let backend = RustBackend::default();
    assert_eq!(backend.render_bytes(&[]), "&[]");
    insta::assert_snapshot!(backend.render_bytes(&[1, 2, 3]), @r"
    &[
    0x01, 0x02, 0x03,
    ]
    ");
}

#[test]
fn zero_bytes_per_line_is_clamped() {
    let config: Config = serde_json::from_str(r#"{"bytes_per_line": 0}"#).unwrap();
    assert_eq!(config.bytes_per_line, 1);
    let backend = RustBackend::new(config);
    insta::assert_snapshot!(backend.render_bytes(&[0xaa, 0xbb]), @r"
    &[
    0xaa,
    0xbb,
    ]
    ");
}

#[test]
fn handle_dispositions() {
    let backend = RustBackend::default();
    assert_eq!(backend.render_handle_dispositions(&[]), "vec![]");

    let dispositions = [HandleDisposition {
        handle: 0,
        subtype: HandleSubtype::Channel,
        rights: Rights::READ | Rights::WRITE,
    }];
    insta::assert_snapshot!(backend.render_handle_dispositions(&dispositions), @r"
    vec![
    HandleDisposition {
    handle_op: HandleOp::Move(copy_handle(&handles[0])),
    object_type: ObjectType::CHANNEL,
    rights: Rights::from_bits_retain(12),
    result: Status::OK,
    },
    ]
    ");
}

#[test]
fn error_codes() {
    let backend = RustBackend::default();
    assert_eq!(
        backend.error_code(ErrorCode::InvalidPaddingByte).unwrap(),
        "fidl::Error::NonZeroPadding"
    );
    for code in ErrorCode::ALL {
        assert!(backend.error_code(code).is_ok(), "{code} is unmapped");
    }

    let backend = RustBackend::new(Config::new().fidl_crate("fidl_next"));
    assert_eq!(
        backend.error_code(ErrorCode::StringTooLong).unwrap(),
        "fidl_next::Error::StringTooLong"
    );
}

#[test]
fn config_deserializes_with_defaults() {
    let config: Config = serde_json::from_str(r#"{"handles_var": "hs"}"#).unwrap();
    assert_eq!(config, Config::new().handles_var("hs"));
    assert_eq!(config.handle_defs_var, "handle_defs");
}
