// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use prost::Message;
use prost_reflect::{DescriptorPool, DynamicMessage, MapKey, MessageDescriptor, Value};
use prost_types::field_descriptor_proto::{Label, Type as ProtoType};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet, MessageOptions,
};

use protoframe::SchemaRegistry;

// ============================================================================
// Descriptor Fixtures
// ============================================================================

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

/// Encoded descriptor set for the proto3 `shop` package.
///
/// ```text
/// Customer  { string id = 1; string name = 2; }
/// LineItem  { string sku = 1; int32 qty = 2; double price = 3; }
/// Order     { string id = 1; Customer customer = 2; repeated LineItem items = 3;
///             repeated string notes = 4; map<string, int32> discounts = 5; }
/// OrderList { repeated Order orders = 1; }
/// ```
pub fn shop_fds() -> Vec<u8> {
    let discounts_entry = DescriptorProto {
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..message(
            "DiscountsEntry",
            vec![
                field("key", 1, Label::Optional, ProtoType::String),
                field("value", 2, Label::Optional, ProtoType::Int32),
            ],
        )
    };

    let order = DescriptorProto {
        nested_type: vec![discounts_entry],
        ..message(
            "Order",
            vec![
                field("id", 1, Label::Optional, ProtoType::String),
                message_field("customer", 2, Label::Optional, ".shop.Customer"),
                message_field("items", 3, Label::Repeated, ".shop.LineItem"),
                field("notes", 4, Label::Repeated, ProtoType::String),
                message_field("discounts", 5, Label::Repeated, ".shop.Order.DiscountsEntry"),
            ],
        )
    };

    let fds = FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some("shop.proto".to_string()),
            package: Some("shop".to_string()),
            syntax: Some("proto3".to_string()),
            message_type: vec![
                message(
                    "Customer",
                    vec![
                        field("id", 1, Label::Optional, ProtoType::String),
                        field("name", 2, Label::Optional, ProtoType::String),
                    ],
                ),
                message(
                    "LineItem",
                    vec![
                        field("sku", 1, Label::Optional, ProtoType::String),
                        field("qty", 2, Label::Optional, ProtoType::Int32),
                        field("price", 3, Label::Optional, ProtoType::Double),
                    ],
                ),
                order,
                message(
                    "OrderList",
                    vec![message_field("orders", 1, Label::Repeated, ".shop.Order")],
                ),
            ],
            ..Default::default()
        }],
    };
    fds.encode_to_vec()
}

/// Registry over [`shop_fds`].
pub fn shop_registry() -> SchemaRegistry {
    SchemaRegistry::from_bytes(&shop_fds()).expect("valid shop descriptor set")
}

/// Descriptor for a `shop.*` message type.
pub fn descriptor(type_name: &str) -> MessageDescriptor {
    shop_registry()
        .get_message(type_name)
        .expect("fixture type exists")
}

fn pool() -> DescriptorPool {
    shop_registry().pool().clone()
}

fn new_message(type_name: &str) -> DynamicMessage {
    let descriptor = pool()
        .get_message_by_name(type_name)
        .expect("fixture type exists");
    DynamicMessage::new(descriptor)
}

// ============================================================================
// Message Builders
// ============================================================================

/// Build a `shop.Customer`.
pub fn customer(id: &str, name: &str) -> DynamicMessage {
    let mut msg = new_message("shop.Customer");
    msg.set_field_by_name("id", Value::String(id.to_string()));
    msg.set_field_by_name("name", Value::String(name.to_string()));
    msg
}

/// Build a `shop.LineItem`.
pub fn line_item(sku: &str, qty: i32, price: f64) -> DynamicMessage {
    let mut msg = new_message("shop.LineItem");
    msg.set_field_by_name("sku", Value::String(sku.to_string()));
    msg.set_field_by_name("qty", Value::I32(qty));
    msg.set_field_by_name("price", Value::F64(price));
    msg
}

/// Builder for `shop.Order`; unset parts stay absent on the wire.
#[derive(Default)]
pub struct OrderBuilder {
    id: Option<String>,
    customer: Option<DynamicMessage>,
    items: Vec<DynamicMessage>,
    notes: Vec<String>,
    discounts: Vec<(String, i32)>,
}

impl OrderBuilder {
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn customer(mut self, customer: DynamicMessage) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn item(mut self, item: DynamicMessage) -> Self {
        self.items.push(item);
        self
    }

    pub fn note(mut self, note: &str) -> Self {
        self.notes.push(note.to_string());
        self
    }

    pub fn discount(mut self, code: &str, percent: i32) -> Self {
        self.discounts.push((code.to_string(), percent));
        self
    }

    pub fn build(self) -> DynamicMessage {
        let mut msg = new_message("shop.Order");
        if let Some(id) = self.id {
            msg.set_field_by_name("id", Value::String(id));
        }
        if let Some(customer) = self.customer {
            msg.set_field_by_name("customer", Value::Message(customer));
        }
        if !self.items.is_empty() {
            let items = self.items.into_iter().map(Value::Message).collect();
            msg.set_field_by_name("items", Value::List(items));
        }
        if !self.notes.is_empty() {
            let notes = self.notes.into_iter().map(Value::String).collect();
            msg.set_field_by_name("notes", Value::List(notes));
        }
        if !self.discounts.is_empty() {
            let discounts = self
                .discounts
                .into_iter()
                .map(|(code, percent)| (MapKey::String(code), Value::I32(percent)))
                .collect();
            msg.set_field_by_name("discounts", Value::Map(discounts));
        }
        msg
    }
}

/// Start building a `shop.Order`.
pub fn order() -> OrderBuilder {
    OrderBuilder::default()
}

/// Build a `shop.OrderList` from orders.
pub fn order_list(orders: Vec<DynamicMessage>) -> DynamicMessage {
    let mut msg = new_message("shop.OrderList");
    if !orders.is_empty() {
        let orders = orders.into_iter().map(Value::Message).collect();
        msg.set_field_by_name("orders", Value::List(orders));
    }
    msg
}

/// Two orders, each with an id and a named customer.
pub fn two_orders() -> DynamicMessage {
    order_list(vec![
        order().id("o-1").customer(customer("", "Ana")).build(),
        order().id("o-2").customer(customer("", "Bo")).build(),
    ])
}

// ============================================================================
// Files
// ============================================================================

/// Path in the temp directory unique to this test process.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("protoframe_it_{}_{name}", std::process::id()))
}

/// Write bytes to a temp file and return its path.
pub fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, bytes).expect("write temp file");
    path
}
