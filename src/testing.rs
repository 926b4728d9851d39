// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Descriptor fixtures shared by unit tests.

use prost::Message;
use prost_reflect::{DescriptorPool, DynamicMessage, Value as ReflectValue};
use prost_types::field_descriptor_proto::{Label, Type as ProtoType};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, MessageOptions,
};

fn field(name: &str, number: i32, label: Label, ty: ProtoType) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(label as i32),
        r#type: Some(ty as i32),
        ..Default::default()
    }
}

fn message_field(name: &str, number: i32, label: Label, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..field(name, number, label, ProtoType::Message)
    }
}

fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

/// Descriptor set for the `test` package (proto2 presence semantics).
///
/// ```text
/// Pet     { string species = 1; }
/// Address { string city = 1; string name = 2; }
/// Person  { string name = 1; repeated Pet pets = 2; Address address = 3;
///           repeated string tags = 4; map<string, int32> scores = 5; }
/// Item    { int32 id = 1; }
/// Wrapper { repeated Item items = 1; }
/// Batch   { repeated Wrapper wrappers = 1; }
/// Inner   { int32 x = 1; int32 y = 2; }
/// Outer   { int32 x = 1; Inner inner = 2; int32 y = 3; }
/// Holder  { string label = 1; Wrapper wrapper = 2; }
/// Node    { int32 value = 1; Node child = 2; }
/// ```
pub fn person_fds() -> Vec<u8> {
    let scores_entry = DescriptorProto {
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..message(
            "ScoresEntry",
            vec![
                field("key", 1, Label::Optional, ProtoType::String),
                field("value", 2, Label::Optional, ProtoType::Int32),
            ],
        )
    };

    let person = DescriptorProto {
        nested_type: vec![scores_entry],
        ..message(
            "Person",
            vec![
                field("name", 1, Label::Optional, ProtoType::String),
                message_field("pets", 2, Label::Repeated, ".test.Pet"),
                message_field("address", 3, Label::Optional, ".test.Address"),
                field("tags", 4, Label::Repeated, ProtoType::String),
                message_field("scores", 5, Label::Repeated, ".test.Person.ScoresEntry"),
            ],
        )
    };

    let fds = FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some("test.proto".to_string()),
            package: Some("test".to_string()),
            message_type: vec![
                message(
                    "Pet",
                    vec![field("species", 1, Label::Optional, ProtoType::String)],
                ),
                message(
                    "Address",
                    vec![
                        field("city", 1, Label::Optional, ProtoType::String),
                        field("name", 2, Label::Optional, ProtoType::String),
                    ],
                ),
                person,
                message(
                    "Item",
                    vec![field("id", 1, Label::Optional, ProtoType::Int32)],
                ),
                message(
                    "Wrapper",
                    vec![message_field("items", 1, Label::Repeated, ".test.Item")],
                ),
                message(
                    "Batch",
                    vec![message_field("wrappers", 1, Label::Repeated, ".test.Wrapper")],
                ),
                message(
                    "Inner",
                    vec![
                        field("x", 1, Label::Optional, ProtoType::Int32),
                        field("y", 2, Label::Optional, ProtoType::Int32),
                    ],
                ),
                message(
                    "Outer",
                    vec![
                        field("x", 1, Label::Optional, ProtoType::Int32),
                        message_field("inner", 2, Label::Optional, ".test.Inner"),
                        field("y", 3, Label::Optional, ProtoType::Int32),
                    ],
                ),
                message(
                    "Holder",
                    vec![
                        field("label", 1, Label::Optional, ProtoType::String),
                        message_field("wrapper", 2, Label::Optional, ".test.Wrapper"),
                    ],
                ),
                message(
                    "Node",
                    vec![
                        field("value", 1, Label::Optional, ProtoType::Int32),
                        message_field("child", 2, Label::Optional, ".test.Node"),
                    ],
                ),
            ],
            ..Default::default()
        }],
    };
    fds.encode_to_vec()
}

/// Descriptor set for the `scalars` package (proto3) covering every scalar type.
pub fn scalar_fds() -> Vec<u8> {
    let fds = FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some("scalars.proto".to_string()),
            package: Some("scalars".to_string()),
            syntax: Some("proto3".to_string()),
            enum_type: vec![EnumDescriptorProto {
                name: Some("Color".to_string()),
                value: vec![
                    EnumValueDescriptorProto {
                        name: Some("COLOR_UNSPECIFIED".to_string()),
                        number: Some(0),
                        ..Default::default()
                    },
                    EnumValueDescriptorProto {
                        name: Some("COLOR_RED".to_string()),
                        number: Some(1),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
            message_type: vec![message(
                "Scalars",
                vec![
                    field("double_field", 1, Label::Optional, ProtoType::Double),
                    field("float_field", 2, Label::Optional, ProtoType::Float),
                    field("int64_field", 3, Label::Optional, ProtoType::Int64),
                    field("uint64_field", 4, Label::Optional, ProtoType::Uint64),
                    field("int32_field", 5, Label::Optional, ProtoType::Int32),
                    field("uint32_field", 6, Label::Optional, ProtoType::Uint32),
                    field("bool_field", 7, Label::Optional, ProtoType::Bool),
                    field("string_field", 8, Label::Optional, ProtoType::String),
                    field("bytes_field", 9, Label::Optional, ProtoType::Bytes),
                    FieldDescriptorProto {
                        type_name: Some(".scalars.Color".to_string()),
                        ..field("color", 10, Label::Optional, ProtoType::Enum)
                    },
                ],
            )],
            ..Default::default()
        }],
    };
    fds.encode_to_vec()
}

/// Pool over [`person_fds`].
pub fn person_pool() -> DescriptorPool {
    DescriptorPool::decode(person_fds().as_slice()).expect("valid fixture descriptor set")
}

/// Create an empty message of the given `test.*` type.
pub fn new_message(pool: &DescriptorPool, type_name: &str) -> DynamicMessage {
    let descriptor = pool
        .get_message_by_name(type_name)
        .expect("fixture type exists");
    DynamicMessage::new(descriptor)
}

/// Build a `test.Item` with the given id.
pub fn item(pool: &DescriptorPool, id: i32) -> DynamicMessage {
    let mut msg = new_message(pool, "test.Item");
    msg.set_field_by_name("id", ReflectValue::I32(id));
    msg
}

/// Build a `test.Wrapper` holding items with the given ids.
pub fn wrapper(pool: &DescriptorPool, ids: &[i32]) -> DynamicMessage {
    let mut msg = new_message(pool, "test.Wrapper");
    let items = ids
        .iter()
        .map(|id| ReflectValue::Message(item(pool, *id)))
        .collect();
    msg.set_field_by_name("items", ReflectValue::List(items));
    msg
}

/// Build a `test.Pet`.
pub fn pet(pool: &DescriptorPool, species: &str) -> DynamicMessage {
    let mut msg = new_message(pool, "test.Pet");
    msg.set_field_by_name("species", ReflectValue::String(species.to_string()));
    msg
}
