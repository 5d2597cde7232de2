//! Rust paths, field and variant names.

use wirelit_core::naming::escape_reserved;
use wirelit_core::utils::{to_snake_case, to_upper_camel_case};
use wirelit_core::{Case, HandleSubtype, NameStyle, PrimitiveSubtype, QualifiedName};

use super::RustBackend;

const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Modules are snake_case, types UpperCamelCase: `test_conformance::MyStruct`.
pub(super) const STYLE: NameStyle = NameStyle {
    separator: "::",
    scope_case: Case::Snake,
    leaf_case: Case::UpperCamel,
    reserved: KEYWORDS,
};

impl RustBackend {
    pub(super) fn qualified(&self, name: &QualifiedName<'_>) -> String {
        name.render(&STYLE)
    }

    pub(super) fn field_name(&self, field: &str) -> String {
        escape_reserved(to_snake_case(field), KEYWORDS)
    }

    pub(super) fn variant_name(&self, field: &str) -> String {
        escape_reserved(to_upper_camel_case(field), KEYWORDS)
    }

    pub(super) fn primitive(&self, subtype: PrimitiveSubtype) -> &'static str {
        match subtype {
            PrimitiveSubtype::Bool => "bool",
            PrimitiveSubtype::Int8 => "i8",
            PrimitiveSubtype::Int16 => "i16",
            PrimitiveSubtype::Int32 => "i32",
            PrimitiveSubtype::Int64 => "i64",
            PrimitiveSubtype::Uint8 => "u8",
            PrimitiveSubtype::Uint16 => "u16",
            PrimitiveSubtype::Uint32 => "u32",
            PrimitiveSubtype::Uint64 => "u64",
            PrimitiveSubtype::Float32 => "f32",
            PrimitiveSubtype::Float64 => "f64",
        }
    }

    pub(super) fn is_supported_handle(&self, subtype: HandleSubtype) -> bool {
        matches!(
            subtype,
            HandleSubtype::Handle
                | HandleSubtype::Channel
                | HandleSubtype::Event
                | HandleSubtype::Eventpair
                | HandleSubtype::Socket
                | HandleSubtype::Vmo
        )
    }

    /// Handle type of `subtype`: `Handle`, `Channel`, `EventPair`, ...
    pub(super) fn handle_type(&self, subtype: HandleSubtype) -> String {
        match subtype {
            HandleSubtype::Eventpair => "EventPair".to_string(),
            other => to_upper_camel_case(other.as_str()),
        }
    }

    /// `ObjectType` constant for `subtype`.
    pub(super) fn object_type(&self, subtype: HandleSubtype) -> String {
        match subtype {
            HandleSubtype::Handle => "ObjectType::NONE".to_string(),
            other => format!("ObjectType::{}", other.as_str().to_ascii_uppercase()),
        }
    }
}
