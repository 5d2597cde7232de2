//! Literal tree to Go expression.

use std::fmt::Write as _;

use wirelit_core::{HandleSubtype, PrimitiveSubtype};

use crate::literal::{Literal, StructLiteral, TableLiteral, UnionLiteral, Variant};

use super::GoBackend;

impl GoBackend {
    pub(super) fn visit(&self, literal: &Literal<'_>) -> String {
        match literal {
            Literal::Bool(b) => b.to_string(),
            Literal::Int { value, .. } => value.to_string(),
            Literal::Float { value, subtype } => self.float(*value, *subtype),
            Literal::FloatBits { bits, subtype } => match subtype {
                PrimitiveSubtype::Float32 => format!("math.Float32frombits({bits:#x})"),
                _ => format!("math.Float64frombits({bits:#x})"),
            },
            Literal::Bits { name, value } | Literal::Enum { name, value } => {
                format!("{}({})", self.qualified(name), value)
            }
            Literal::String { value, nullable } => {
                if *nullable {
                    format!("&[]string{{{}}}[0]", quote(value))
                } else {
                    quote(value)
                }
            }
            Literal::Handle { index, subtype, .. } => self.handle(*index, *subtype),
            Literal::InvalidHandle { .. } => format!("{}.HandleInvalid", self.config.zx_package),
            Literal::Null => "nil".to_string(),
            Literal::List { ty, elems } => {
                let items: Vec<String> = elems.iter().map(|e| self.visit(e)).collect();
                composite(&self.type_literal(ty), &items)
            }
            Literal::Struct(s) => self.struct_(s),
            Literal::Union(u) => self.union(u),
            Literal::Table(t) => self.table(t),
        }
    }

    fn float(&self, value: f64, subtype: PrimitiveSubtype) -> String {
        let special = if value.is_nan() {
            "math.NaN()"
        } else if value == f64::INFINITY {
            "math.Inf(1)"
        } else if value == f64::NEG_INFINITY {
            "math.Inf(-1)"
        } else {
            return format!("{value:?}");
        };
        match subtype {
            PrimitiveSubtype::Float32 => format!("float32({special})"),
            _ => special.to_string(),
        }
    }

    fn handle(&self, index: usize, subtype: HandleSubtype) -> String {
        let handle = format!("{}[{index}]", self.config.handles_var);
        match subtype {
            HandleSubtype::Handle => handle,
            _ => format!("{}({handle})", self.handle_type(subtype)),
        }
    }

    fn struct_(&self, s: &StructLiteral<'_>) -> String {
        let fields: Vec<String> = s
            .fields
            .iter()
            .map(|(name, value)| format!("{}: {}", self.field_name(name), self.visit(value)))
            .collect();
        composite(&self.record_literal(&s.name, s.nullable), &fields)
    }

    fn union(&self, u: &UnionLiteral<'_>) -> String {
        let tag_field = self.union_tag_field(&u.name);
        let fields = match &u.variant {
            Variant::Known { field, value, .. } => vec![
                format!("{tag_field}: {}", self.union_tag_const(&u.name, field)),
                format!("{}: {}", self.field_name(field), self.visit(value)),
            ],
            Variant::Unknown { ordinal, data } => vec![
                format!("{tag_field}: {ordinal}"),
                format!("I_unknownData: {}", self.unknown_data(data)),
            ],
        };
        composite(&self.record_literal(&u.name, u.nullable), &fields)
    }

    fn table(&self, t: &TableLiteral<'_>) -> String {
        let mut fields = Vec::with_capacity(t.fields.len() * 2 + 1);
        for (name, value) in &t.fields {
            let field = self.field_name(name);
            fields.push(format!("{field}: {}", self.visit(value)));
            fields.push(format!("{field}Present: true"));
        }
        if !t.unknown.is_empty() {
            let entries: Vec<String> = t
                .unknown
                .iter()
                .map(|(ordinal, data)| format!("{ordinal}: {}", self.unknown_data(data)))
                .collect();
            let ty = format!("map[uint64]{}.UnknownData", self.config.fidl_package);
            fields.push(format!("I_unknownData: {}", composite(&ty, &entries)));
        }
        composite(&self.record_literal(&t.name, t.nullable), &fields)
    }
}

/// `ty{}` when empty, otherwise one element per line with trailing commas.
pub(super) fn composite(ty: &str, items: &[String]) -> String {
    if items.is_empty() {
        return format!("{ty}{{}}");
    }
    let mut out = format!("{ty}{{\n");
    for item in items {
        out.push_str(item);
        out.push_str(",\n");
    }
    out.push('}');
    out
}

/// Go interpreted string literal.
pub(super) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
