//! Go identifiers and type names.

use wirelit_core::utils::{to_lower_camel_case, to_upper_camel_case};
use wirelit_core::{Case, HandleSubtype, NameStyle, QualifiedName};

use crate::literal::TypeRef;

use super::GoBackend;

const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Packages are snake_case, exported types UpperCamelCase: `test_conformance.MyStruct`.
pub(super) const STYLE: NameStyle = NameStyle {
    separator: ".",
    scope_case: Case::Snake,
    leaf_case: Case::UpperCamel,
    reserved: KEYWORDS,
};

impl GoBackend {
    pub(super) fn qualified(&self, name: &QualifiedName<'_>) -> String {
        name.render(&STYLE)
    }

    /// Exported struct field name.
    pub(super) fn field_name(&self, field: &str) -> String {
        to_upper_camel_case(field)
    }

    /// Tag field of a union struct: `I_myUnionTag`.
    pub(super) fn union_tag_field(&self, name: &QualifiedName<'_>) -> String {
        format!("I_{}Tag", to_lower_camel_case(name.leaf()))
    }

    /// Tag constant for a known variant: `test_conformance.MyUnionB`.
    pub(super) fn union_tag_const(&self, name: &QualifiedName<'_>, field: &str) -> String {
        format!("{}{}", self.qualified(name), to_upper_camel_case(field))
    }

    /// Subtypes with a `zx` wrapper type the bindings can hold.
    pub(super) fn is_supported_handle(&self, subtype: HandleSubtype) -> bool {
        matches!(
            subtype,
            HandleSubtype::Handle | HandleSubtype::Channel | HandleSubtype::Event
        )
    }

    /// `zx` type of a handle: `zx.Handle`, `zx.Channel`, ...
    pub(super) fn handle_type(&self, subtype: HandleSubtype) -> String {
        format!(
            "{}.{}",
            self.config.zx_package,
            to_upper_camel_case(subtype.as_str())
        )
    }

    /// Type in declaration position; nullable references are pointers.
    pub(super) fn type_name(&self, ty: &TypeRef<'_>) -> String {
        self.type_name_with(ty, "*")
    }

    /// Type in composite-literal position; nullable references take an address.
    pub(super) fn type_literal(&self, ty: &TypeRef<'_>) -> String {
        self.type_name_with(ty, "&")
    }

    /// Composite-literal type of a named record.
    pub(super) fn record_literal(&self, name: &QualifiedName<'_>, nullable: bool) -> String {
        let prefix = if nullable { "&" } else { "" };
        format!("{prefix}{}", self.qualified(name))
    }

    fn type_name_with(&self, ty: &TypeRef<'_>, pointer: &str) -> String {
        let prefix = |nullable: bool| if nullable { pointer } else { "" };
        match ty {
            TypeRef::Primitive(subtype) => subtype.as_str().to_string(),
            TypeRef::Named { name, nullable } => {
                format!("{}{}", prefix(*nullable), self.qualified(name))
            }
            TypeRef::String { nullable } => format!("{}string", prefix(*nullable)),
            TypeRef::Array { elem, size } => format!("[{size}]{}", self.type_name(elem)),
            TypeRef::Vector { elem, nullable } => {
                format!("{}[]{}", prefix(*nullable), self.type_name(elem))
            }
            TypeRef::Handle { subtype, .. } => self.handle_type(*subtype),
        }
    }
}
