// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Field shape classification.
//!
//! The interpreter only cares about two properties of a field: whether it
//! holds a nested message or a scalar, and whether it is repeated. These
//! combine into the closed [`FieldShape`] enum, which the interpreter matches
//! exhaustively.

use std::fmt;

use prost_reflect::{FieldDescriptor, Kind, MessageDescriptor};
use serde::Serialize;

/// Whether a field carries a nested message or a scalar leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// Numbers, strings, booleans, bytes, enums
    Scalar,
    /// Nested message (map entries included)
    Message,
}

impl FieldKind {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Scalar => "scalar",
            FieldKind::Message => "message",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a field holds one value or a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cardinality {
    /// Singular field
    Single,
    /// Repeated field (maps included)
    Repeated,
}

impl Cardinality {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Single => "single",
            Cardinality::Repeated => "repeated",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four field shapes handled by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldShape {
    /// Repeated nested message
    RepeatedMessage,
    /// Singular nested message
    Message,
    /// Repeated scalar
    RepeatedScalar,
    /// Singular scalar
    Scalar,
}

impl FieldShape {
    /// Combine a kind and a cardinality into a shape.
    pub fn from_parts(kind: FieldKind, cardinality: Cardinality) -> Self {
        match (kind, cardinality) {
            (FieldKind::Message, Cardinality::Repeated) => FieldShape::RepeatedMessage,
            (FieldKind::Message, Cardinality::Single) => FieldShape::Message,
            (FieldKind::Scalar, Cardinality::Repeated) => FieldShape::RepeatedScalar,
            (FieldKind::Scalar, Cardinality::Single) => FieldShape::Scalar,
        }
    }

    /// Classify a protobuf field descriptor.
    pub fn of(field: &FieldDescriptor) -> Self {
        Self::from_parts(field_kind(field), field_cardinality(field))
    }

    /// Kind half of the shape.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldShape::RepeatedMessage | FieldShape::Message => FieldKind::Message,
            FieldShape::RepeatedScalar | FieldShape::Scalar => FieldKind::Scalar,
        }
    }

    /// Cardinality half of the shape.
    pub fn cardinality(&self) -> Cardinality {
        match self {
            FieldShape::RepeatedMessage | FieldShape::RepeatedScalar => Cardinality::Repeated,
            FieldShape::Message | FieldShape::Scalar => Cardinality::Single,
        }
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldShape::RepeatedMessage => "repeated message",
            FieldShape::Message => "message",
            FieldShape::RepeatedScalar => "repeated scalar",
            FieldShape::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

fn field_kind(field: &FieldDescriptor) -> FieldKind {
    match field.kind() {
        Kind::Message(_) => FieldKind::Message,
        _ => FieldKind::Scalar,
    }
}

fn field_cardinality(field: &FieldDescriptor) -> Cardinality {
    if field.is_list() || field.is_map() {
        Cardinality::Repeated
    } else {
        Cardinality::Single
    }
}

/// Static information about a field, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldInfo {
    /// Field name
    pub name: String,
    /// Field number on the wire
    pub number: u32,
    /// Protobuf type name (e.g. "int32", ".pkg.Pet")
    pub type_name: String,
    /// Scalar or message
    pub kind: FieldKind,
    /// Single or repeated
    pub cardinality: Cardinality,
    /// Field index (declaration order)
    pub index: usize,
}

impl FieldInfo {
    /// Build field info from a protobuf field descriptor.
    pub fn from_descriptor(field: &FieldDescriptor, index: usize) -> Self {
        let type_name = match field.kind() {
            Kind::Message(message) if field.is_map() => format!(
                "map<{}>",
                message
                    .fields()
                    .map(|f| kind_name(&f.kind()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            kind => kind_name(&kind),
        };

        Self {
            name: field.name().to_string(),
            number: field.number(),
            type_name,
            kind: field_kind(field),
            cardinality: field_cardinality(field),
            index,
        }
    }

    /// Shape of this field.
    pub fn shape(&self) -> FieldShape {
        FieldShape::from_parts(self.kind, self.cardinality)
    }
}

fn kind_name(kind: &Kind) -> String {
    match kind {
        Kind::Double => "double".to_string(),
        Kind::Float => "float".to_string(),
        Kind::Int32 => "int32".to_string(),
        Kind::Int64 => "int64".to_string(),
        Kind::Uint32 => "uint32".to_string(),
        Kind::Uint64 => "uint64".to_string(),
        Kind::Sint32 => "sint32".to_string(),
        Kind::Sint64 => "sint64".to_string(),
        Kind::Fixed32 => "fixed32".to_string(),
        Kind::Fixed64 => "fixed64".to_string(),
        Kind::Sfixed32 => "sfixed32".to_string(),
        Kind::Sfixed64 => "sfixed64".to_string(),
        Kind::Bool => "bool".to_string(),
        Kind::String => "string".to_string(),
        Kind::Bytes => "bytes".to_string(),
        Kind::Message(message) => message.full_name().to_string(),
        Kind::Enum(enum_desc) => enum_desc.full_name().to_string(),
    }
}

/// Abstract schema descriptor.
///
/// Lets tooling list fields without caring how the schema was loaded.
pub trait SchemaDescriptor {
    /// Get all fields in this schema.
    fn fields_info(&self) -> Vec<FieldInfo>;
}

impl SchemaDescriptor for MessageDescriptor {
    fn fields_info(&self) -> Vec<FieldInfo> {
        self.fields()
            .enumerate()
            .map(|(index, field)| FieldInfo::from_descriptor(&field, index))
            .collect()
    }
}
