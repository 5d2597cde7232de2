//! Literal tree to Rust expression.

use wirelit_core::{HandleSubtype, PrimitiveSubtype, Rights};

use crate::literal::{Literal, StructLiteral, TableLiteral, TypeRef, UnionLiteral, Variant};

use super::RustBackend;

impl RustBackend {
    pub(super) fn visit(&self, literal: &Literal<'_>) -> String {
        match literal {
            Literal::Bool(b) => b.to_string(),
            Literal::Int { value, subtype } => format!("{value}{}", self.primitive(*subtype)),
            Literal::Float { value, subtype } => self.float(*value, *subtype),
            Literal::FloatBits { bits, subtype } => {
                format!("{}::from_bits({bits:#x})", self.primitive(*subtype))
            }
            Literal::Bits { name, value } => {
                format!("{}::from_bits_allow_unknown({value})", self.qualified(name))
            }
            Literal::Enum { name, value } => {
                format!("{}::from_primitive_allow_unknown({value})", self.qualified(name))
            }
            Literal::String { value, nullable } => {
                some(format!("String::from({value:?})"), *nullable)
            }
            Literal::Handle {
                index,
                subtype,
                rights,
            } => self.handle(*index, *subtype, *rights),
            Literal::InvalidHandle { subtype } => {
                self.typed_handle(*subtype, "Handle::invalid()".to_string())
            }
            Literal::Null => "None".to_string(),
            Literal::List { ty, elems } => {
                let items: Vec<String> = elems.iter().map(|e| self.visit(e)).collect();
                match ty {
                    TypeRef::Array { .. } => block("[", &items, "]"),
                    TypeRef::Vector { nullable, .. } => {
                        some(block("vec![", &items, "]"), *nullable)
                    }
                    // Lowering only builds lists from arrays and vectors.
                    _ => block("vec![", &items, "]"),
                }
            }
            Literal::Struct(s) => self.struct_(s),
            Literal::Union(u) => self.union(u),
            Literal::Table(t) => self.table(t),
        }
    }

    fn float(&self, value: f64, subtype: PrimitiveSubtype) -> String {
        let ty = self.primitive(subtype);
        if value.is_nan() {
            format!("{ty}::NAN")
        } else if value == f64::INFINITY {
            format!("{ty}::INFINITY")
        } else if value == f64::NEG_INFINITY {
            format!("{ty}::NEG_INFINITY")
        } else {
            format!("{value:?}{ty}")
        }
    }

    pub(super) fn copy_handle(&self, index: usize) -> String {
        format!("copy_handle(&{}[{index}])", self.config.handles_var)
    }

    fn handle(&self, index: usize, subtype: HandleSubtype, rights: Option<Rights>) -> String {
        let handle = match rights {
            Some(rights) => format!(
                "copy_handle_with_rights(&{}[{index}], {})",
                self.config.handles_var,
                self.rights(rights)
            ),
            None => self.copy_handle(index),
        };
        self.typed_handle(subtype, handle)
    }

    fn typed_handle(&self, subtype: HandleSubtype, handle: String) -> String {
        match subtype {
            HandleSubtype::Handle => handle,
            _ => format!("{}::from({handle})", self.handle_type(subtype)),
        }
    }

    pub(super) fn rights(&self, rights: Rights) -> String {
        format!("Rights::from_bits_retain({rights})")
    }

    fn struct_(&self, s: &StructLiteral<'_>) -> String {
        let fields: Vec<String> = s
            .fields
            .iter()
            .map(|(name, value)| format!("{}: {}", self.field_name(name), self.visit(value)))
            .collect();
        let name = self.qualified(&s.name);
        boxed(block(&format!("{name} {{"), &fields, "}"), s.nullable)
    }

    fn union(&self, u: &UnionLiteral<'_>) -> String {
        let name = self.qualified(&u.name);
        let literal = match &u.variant {
            Variant::Known { field, value, .. } => {
                format!("{name}::{}({})", self.variant_name(field), self.visit(value))
            }
            Variant::Unknown { ordinal, data } => format!(
                "{name}::unknown_variant_for_testing({ordinal}, {})",
                self.unknown_data(data)
            ),
        };
        boxed(literal, u.nullable)
    }

    fn table(&self, t: &TableLiteral<'_>) -> String {
        let name = self.qualified(&t.name);
        let mut out = format!("{name} {{\n");
        for (field, value) in &t.fields {
            out.push_str(&format!(
                "{}: Some({}),\n",
                self.field_name(field),
                self.visit(value)
            ));
        }
        if !t.unknown.is_empty() {
            let entries: Vec<String> = t
                .unknown
                .iter()
                .map(|(ordinal, data)| format!("({ordinal}, {})", self.unknown_data(data)))
                .collect();
            out.push_str(&format!(
                "unknown_data: Some({}),\n",
                block("BTreeMap::from([", &entries, "])")
            ));
        }
        out.push_str(&format!("..{name}::EMPTY\n}}"));
        boxed(out, t.nullable)
    }
}

/// `open close` when empty, otherwise one item per line with trailing commas.
pub(super) fn block(open: &str, items: &[String], close: &str) -> String {
    if items.is_empty() {
        return format!("{open}{close}");
    }
    let mut out = format!("{open}\n");
    for item in items {
        out.push_str(item);
        out.push_str(",\n");
    }
    out.push_str(close);
    out
}

fn some(expr: String, nullable: bool) -> String {
    if nullable {
        format!("Some({expr})")
    } else {
        expr
    }
}

fn boxed(expr: String, nullable: bool) -> String {
    if nullable {
        format!("Some(Box::new({expr}))")
    } else {
        expr
    }
}
