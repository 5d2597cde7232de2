//! Lockstep lowering of (value, declaration) pairs into a [`Literal`] tree.
//!
//! All validation happens here: shape compatibility, nullability, integer
//! ranges, handle indices, union exclusivity, unknown-field placement and
//! backend support for handle subtypes. A failure stops the walk and carries
//! the path of the offending node.

use std::collections::{HashMap, HashSet};

use tracing::trace;
use wirelit_core::{
    Declaration, Field, FieldKey, FloatWidth, HandleDecl, HandleSubtype, HandleTable,
    PrimitiveSubtype, QualifiedName, RecordDecl, RecordKind, Value,
};

use crate::error::{EncodeError, ErrorKind, PathSegment, ValuePath};
use crate::literal::{
    IntValue, Literal, StructLiteral, TableLiteral, TypeRef, UnionLiteral, UnknownPayload,
    Variant,
};
use crate::target::Backend;

/// Lower `value` against `decl`, checking it can be rendered by `backend`.
pub fn lower<'a>(
    value: &'a Value,
    decl: &'a Declaration,
    handles: &HandleTable,
    backend: &dyn Backend,
) -> Result<Literal<'a>> {
    Lowerer {
        handles,
        backend,
        path: Vec::new(),
    }
    .value(value, decl)
}

struct Lowerer<'h> {
    handles: &'h HandleTable,
    backend: &'h dyn Backend,
    path: Vec<PathSegment>,
}

type Result<T> = std::result::Result<T, EncodeError>;

impl<'h> Lowerer<'h> {
    fn error(&self, kind: ErrorKind) -> EncodeError {
        EncodeError::new(kind, ValuePath::from_segments(&self.path))
    }

    fn mismatch(&self, value: &Value, decl: &Declaration) -> EncodeError {
        self.error(ErrorKind::TypeMismatch(format!(
            "{} value for {}",
            value.kind_name(),
            decl.describe()
        )))
    }

    fn nested<T>(
        &mut self,
        segment: PathSegment,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    fn name<'a>(&self, name: &'a str) -> Result<QualifiedName<'a>> {
        QualifiedName::parse(name).map_err(|e| self.error(ErrorKind::MalformedName(e)))
    }

    fn value<'a>(&mut self, value: &'a Value, decl: &'a Declaration) -> Result<Literal<'a>> {
        match value {
            Value::Null => return self.null(decl),
            Value::UnknownData(_) => {
                return Err(self.error(ErrorKind::UnknownSchemaConstruct(format!(
                    "unknown data outside an unknown field, for {}",
                    decl.describe()
                ))));
            }
            _ => {}
        }

        match decl {
            Declaration::Primitive { subtype } => self.primitive(value, decl, *subtype),
            Declaration::Bits(scalar) => Ok(Literal::Bits {
                name: self.name(&scalar.name)?,
                value: self.integer(value, decl, scalar.subtype)?,
            }),
            Declaration::Enum(scalar) => Ok(Literal::Enum {
                name: self.name(&scalar.name)?,
                value: self.integer(value, decl, scalar.subtype)?,
            }),
            Declaration::Handle(handle) => self.handle(value, decl, handle),
            Declaration::String(string) => match value {
                Value::String(s) => Ok(Literal::String {
                    value: s,
                    nullable: string.nullable,
                }),
                _ => Err(self.mismatch(value, decl)),
            },
            Declaration::Array(array) => {
                let Value::List(items) = value else {
                    return Err(self.mismatch(value, decl));
                };
                if items.len() != array.size {
                    return Err(self.error(ErrorKind::TypeMismatch(format!(
                        "{} elements for {}",
                        items.len(),
                        decl.describe()
                    ))));
                }
                self.list(items, decl, &array.elem)
            }
            Declaration::Vector(vector) => {
                let Value::List(items) = value else {
                    return Err(self.mismatch(value, decl));
                };
                self.list(items, decl, &vector.elem)
            }
            Declaration::Record(record) => {
                let Value::Record(fields) = value else {
                    return Err(self.mismatch(value, decl));
                };
                match record.kind {
                    RecordKind::Struct => self.struct_(&fields.fields, record),
                    RecordKind::Union => self.union(&fields.fields, record),
                    RecordKind::Table => self.table(&fields.fields, record),
                }
            }
        }
    }

    fn null<'a>(&self, decl: &'a Declaration) -> Result<Literal<'a>> {
        if !decl.is_nullable() {
            return Err(self.error(ErrorKind::NullabilityViolation(format!(
                "null for non-nullable {}",
                decl.describe()
            ))));
        }
        match decl {
            Declaration::Handle(handle) => {
                self.check_handle_subtype(handle.subtype)?;
                Ok(Literal::InvalidHandle {
                    subtype: handle.subtype,
                })
            }
            _ => Ok(Literal::Null),
        }
    }

    fn primitive<'a>(
        &self,
        value: &Value,
        decl: &Declaration,
        subtype: PrimitiveSubtype,
    ) -> Result<Literal<'a>> {
        match (value, subtype) {
            (Value::Bool(b), PrimitiveSubtype::Bool) => Ok(Literal::Bool(*b)),
            (Value::Int(_) | Value::Uint(_), _) if subtype.is_integer() => Ok(Literal::Int {
                value: self.integer(value, decl, subtype)?,
                subtype,
            }),
            (Value::Float64(f), _) if subtype.is_float() => {
                if subtype == PrimitiveSubtype::Float32
                    && f.is_finite()
                    && f.abs() > f64::from(f32::MAX)
                {
                    return Err(self.error(ErrorKind::TypeMismatch(format!(
                        "{f} out of range for {subtype}"
                    ))));
                }
                Ok(Literal::Float {
                    value: *f,
                    subtype,
                })
            }
            (Value::RawFloat(raw), _) if subtype.is_float() => {
                let fits = match (raw.width, subtype) {
                    (FloatWidth::F32, PrimitiveSubtype::Float32) => {
                        u32::try_from(raw.bits).is_ok()
                    }
                    (FloatWidth::F64, PrimitiveSubtype::Float64) => true,
                    _ => false,
                };
                if !fits {
                    return Err(self.error(ErrorKind::TypeMismatch(format!(
                        "raw {:?} bits {:#x} for {subtype}",
                        raw.width, raw.bits
                    ))));
                }
                Ok(Literal::FloatBits {
                    bits: raw.bits,
                    subtype,
                })
            }
            _ => Err(self.mismatch(value, decl)),
        }
    }

    fn integer(
        &self,
        value: &Value,
        decl: &Declaration,
        subtype: PrimitiveSubtype,
    ) -> Result<IntValue> {
        let (int, fits) = match value {
            Value::Int(v) => (IntValue::Signed(*v), subtype.holds_signed(*v)),
            Value::Uint(v) => (IntValue::Unsigned(*v), subtype.holds_unsigned(*v)),
            _ => return Err(self.mismatch(value, decl)),
        };
        if !fits {
            return Err(self.error(ErrorKind::TypeMismatch(format!(
                "{int} out of range for {}",
                decl.describe()
            ))));
        }
        Ok(int)
    }

    fn check_handle_subtype(&self, subtype: HandleSubtype) -> Result<()> {
        if self.backend.supports_handle(subtype) {
            Ok(())
        } else {
            Err(self.error(ErrorKind::UnsupportedHandleSubtype {
                subtype,
                target: self.backend.target().as_str(),
            }))
        }
    }

    fn check_handle_index(&self, index: usize) -> Result<()> {
        if index < self.handles.len() {
            Ok(())
        } else {
            Err(self.error(ErrorKind::HandleIndexOutOfRange {
                index,
                len: self.handles.len(),
            }))
        }
    }

    fn handle<'a>(
        &self,
        value: &Value,
        decl: &Declaration,
        handle: &HandleDecl,
    ) -> Result<Literal<'a>> {
        let Value::Handle(handle_ref) = value else {
            return Err(self.mismatch(value, decl));
        };
        self.check_handle_index(handle_ref.index)?;
        self.check_handle_subtype(handle.subtype)?;
        Ok(Literal::Handle {
            index: handle_ref.index,
            subtype: handle.subtype,
            rights: handle_ref.rights,
        })
    }

    fn type_ref<'a>(&self, decl: &'a Declaration) -> Result<TypeRef<'a>> {
        Ok(match decl {
            Declaration::Primitive { subtype } => TypeRef::Primitive(*subtype),
            Declaration::Bits(scalar) | Declaration::Enum(scalar) => TypeRef::Named {
                name: self.name(&scalar.name)?,
                nullable: false,
            },
            Declaration::Record(record) => TypeRef::Named {
                name: self.name(&record.name)?,
                nullable: record.nullable,
            },
            Declaration::Handle(handle) => {
                self.check_handle_subtype(handle.subtype)?;
                TypeRef::Handle {
                    subtype: handle.subtype,
                    nullable: handle.nullable,
                }
            }
            Declaration::String(string) => TypeRef::String {
                nullable: string.nullable,
            },
            Declaration::Array(array) => TypeRef::Array {
                elem: Box::new(self.type_ref(&array.elem)?),
                size: array.size,
            },
            Declaration::Vector(vector) => TypeRef::Vector {
                elem: Box::new(self.type_ref(&vector.elem)?),
                nullable: vector.nullable,
            },
        })
    }

    fn list<'a>(
        &mut self,
        items: &'a [Value],
        decl: &'a Declaration,
        elem: &'a Declaration,
    ) -> Result<Literal<'a>> {
        let ty = self.type_ref(decl)?;
        let elems = items
            .iter()
            .enumerate()
            .map(|(i, item)| self.nested(PathSegment::Index(i), |this| this.value(item, elem)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Literal::List { ty, elems })
    }

    fn not_extensible(&self, ordinal: u64, record: &RecordDecl) -> EncodeError {
        self.error(ErrorKind::TypeMismatch(format!(
            "unknown ordinal {ordinal} on {} {}, which is not extensible",
            record.kind.as_str(),
            record.name
        )))
    }

    fn unknown_field<T>(&self, record: &RecordDecl) -> Result<T> {
        Err(self.error(ErrorKind::UnknownSchemaConstruct(format!(
            "field not declared on {} {}",
            record.kind.as_str(),
            record.name
        ))))
    }

    fn unknown_payload<'a>(
        &self,
        value: &'a Value,
        ordinal: u64,
        record: &RecordDecl,
    ) -> Result<UnknownPayload<'a>> {
        if !record.is_extensible() {
            return Err(self.not_extensible(ordinal, record));
        }
        if let Some((name, _)) = record.fields.iter().find(|(_, f)| f.ordinal == ordinal) {
            return Err(self.error(ErrorKind::TypeMismatch(format!(
                "ordinal {ordinal} is declared as field `{name}` of {}",
                record.name
            ))));
        }
        let Value::UnknownData(data) = value else {
            return Err(self.error(ErrorKind::TypeMismatch(format!(
                "{} value for unknown field, expected unknown data",
                value.kind_name()
            ))));
        };
        if !data.handles.is_empty() && !record.is_resource() {
            return Err(self.error(ErrorKind::TypeMismatch(format!(
                "unknown data carries handles but {} is not a resource type",
                record.name
            ))));
        }
        for &index in &data.handles {
            self.check_handle_index(index)?;
        }
        Ok(UnknownPayload {
            bytes: &data.bytes,
            handles: &data.handles,
        })
    }

    /// Index known fields by name, rejecting duplicates and undeclared names.
    fn known_fields<'a>(
        &mut self,
        fields: &'a [Field],
        record: &RecordDecl,
    ) -> Result<HashMap<&'a str, &'a Value>> {
        let mut known = HashMap::new();
        for field in fields {
            let FieldKey::Name(name) = &field.key else {
                continue;
            };
            self.nested(PathSegment::Field(name.clone()), |this| {
                if record.field(name).is_none() {
                    return this.unknown_field(record);
                }
                if known.insert(name.as_str(), &field.value).is_some() {
                    return Err(this.error(ErrorKind::TypeMismatch(format!(
                        "field `{name}` set more than once"
                    ))));
                }
                Ok(())
            })?;
        }
        Ok(known)
    }

    fn struct_<'a>(
        &mut self,
        fields: &'a [Field],
        record: &'a RecordDecl,
    ) -> Result<Literal<'a>> {
        if let Some(ordinal) = fields.iter().find_map(|f| match f.key {
            FieldKey::UnknownOrdinal(ordinal) => Some(ordinal),
            FieldKey::Name(_) => None,
        }) {
            return self.nested(PathSegment::UnknownOrdinal(ordinal), |this| {
                Err(this.not_extensible(ordinal, record))
            });
        }

        let known = self.known_fields(fields, record)?;
        let mut lowered = Vec::with_capacity(record.fields.len());
        for (name, field) in &record.fields {
            let Some(&value) = known.get(name.as_str()) else {
                return Err(self.error(ErrorKind::TypeMismatch(format!(
                    "struct {} is missing field `{name}`",
                    record.name
                ))));
            };
            let literal = self.nested(PathSegment::Field(name.clone()), |this| {
                this.value(value, &field.decl)
            })?;
            lowered.push((name.as_str(), literal));
        }

        Ok(Literal::Struct(StructLiteral {
            name: self.name(&record.name)?,
            nullable: record.nullable,
            fields: lowered,
        }))
    }

    fn union<'a>(
        &mut self,
        fields: &'a [Field],
        record: &'a RecordDecl,
    ) -> Result<Literal<'a>> {
        let [field] = fields else {
            return Err(self.error(ErrorKind::MalformedUnionValue {
                count: fields.len(),
            }));
        };

        let variant = match &field.key {
            FieldKey::Name(name) => {
                let Some((field_name, decl)) = record.fields.get_key_value(name) else {
                    return self.nested(PathSegment::Field(name.clone()), |this| {
                        this.unknown_field(record)
                    });
                };
                trace!(union = %record.name, variant = %field_name, "lowering union variant");
                let value = self.nested(PathSegment::Field(name.clone()), |this| {
                    this.value(&field.value, &decl.decl)
                })?;
                Variant::Known {
                    field: field_name.as_str(),
                    ordinal: decl.ordinal,
                    value: Box::new(value),
                }
            }
            FieldKey::UnknownOrdinal(ordinal) => {
                trace!(union = %record.name, ordinal = *ordinal, "lowering unknown union variant");
                let data = self.nested(PathSegment::UnknownOrdinal(*ordinal), |this| {
                    this.unknown_payload(&field.value, *ordinal, record)
                })?;
                Variant::Unknown {
                    ordinal: *ordinal,
                    data,
                }
            }
        };

        Ok(Literal::Union(UnionLiteral {
            name: self.name(&record.name)?,
            nullable: record.nullable,
            variant,
        }))
    }

    fn table<'a>(
        &mut self,
        fields: &'a [Field],
        record: &'a RecordDecl,
    ) -> Result<Literal<'a>> {
        let known = self.known_fields(fields, record)?;

        let mut unknown = Vec::new();
        let mut seen_ordinals = HashSet::new();
        for field in fields {
            let FieldKey::UnknownOrdinal(ordinal) = field.key else {
                continue;
            };
            let payload = self.nested(PathSegment::UnknownOrdinal(ordinal), |this| {
                if !seen_ordinals.insert(ordinal) {
                    return Err(this.error(ErrorKind::TypeMismatch(format!(
                        "unknown ordinal {ordinal} set more than once"
                    ))));
                }
                this.unknown_payload(&field.value, ordinal, record)
            })?;
            unknown.push((ordinal, payload));
        }
        if !unknown.is_empty() {
            trace!(table = %record.name, count = unknown.len(), "collected unknown table fields");
        }

        let mut lowered = Vec::with_capacity(known.len());
        for (name, field) in &record.fields {
            let Some(&value) = known.get(name.as_str()) else {
                continue;
            };
            // A null table field is an absent one.
            if matches!(value, Value::Null) {
                trace!(table = %record.name, field = %name, "dropping null table field");
                continue;
            }
            let literal = self.nested(PathSegment::Field(name.clone()), |this| {
                this.value(value, &field.decl)
            })?;
            lowered.push((name.as_str(), literal));
        }

        Ok(Literal::Table(TableLiteral {
            name: self.name(&record.name)?,
            nullable: record.nullable,
            fields: lowered,
            unknown,
        }))
    }
}
