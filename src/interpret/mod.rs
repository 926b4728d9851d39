// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message interpretation.
//!
//! Walks a decoded [`DynamicMessage`] and produces keyed records. Every
//! present field is classified into one of four [`FieldShape`]s:
//!
//! - **Repeated message**: a list of records. When it is the only present
//!   field and flattening is on, the whole message unwraps into one record
//!   per element instead.
//! - **Message**: merged into the parent record when flattening (colliding
//!   keys become `"<field>.<key>"`), otherwise kept as a nested record.
//! - **Repeated scalar**: the list of values.
//! - **Scalar**: the value itself.
//!
//! Fields are visited in declaration order, so collision outcomes are
//! deterministic.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use protoframe::interpret::Interpreter;
//! use protoframe::schema::SchemaRegistry;
//! use protoframe::ReaderConfig;
//!
//! # let fds_bytes = vec![0u8; 0];
//! # let payload = vec![0u8; 0];
//! let registry = SchemaRegistry::from_bytes(&fds_bytes)?;
//! let descriptor = registry.get_message("pkg.Wrapper")?;
//! let message = protoframe::decode(&payload, &descriptor)?;
//!
//! let rows = Interpreter::new(ReaderConfig::default())
//!     .interpret(&message)?
//!     .into_rows();
//! # Ok(())
//! # }
//! ```

use std::cmp::Ordering;

use prost_reflect::{
    DynamicMessage, FieldDescriptor, MapKey, ReflectMessage, Value as ReflectValue,
};
use tracing::{debug, trace};

use crate::core::{FrameError, Interpreted, ReaderConfig, Record, Result, Value};
use crate::schema::FieldShape;

/// Converts messages into records according to a [`ReaderConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    config: ReaderConfig,
}

impl Interpreter {
    /// Create an interpreter with the given policy.
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Interpret one message into a record, or into rows when it unwraps.
    pub fn interpret(&self, message: &DynamicMessage) -> Result<Interpreted> {
        self.interpret_at(message, 0)
    }

    /// Interpret a message as a list of rows.
    ///
    /// With `field` set, every element of that repeated message field is
    /// interpreted independently; otherwise the message itself is
    /// interpreted and normalized to rows.
    pub fn to_rows(&self, message: &DynamicMessage, field: Option<&str>) -> Result<Vec<Record>> {
        let Some(name) = field else {
            return Ok(self.interpret(message)?.into_rows());
        };

        let descriptor = message.descriptor();
        let field = descriptor
            .get_field_by_name(name)
            .ok_or_else(|| FrameError::field_not_found(descriptor.full_name(), name))?;

        let shape = FieldShape::of(&field);
        if shape != FieldShape::RepeatedMessage {
            return Err(unsupported(&field, shape));
        }
        if !message.has_field(&field) {
            return Ok(Vec::new());
        }

        let value = message.get_field(&field);
        self.repeated_rows(&field, &value, 0)
    }

    fn interpret_at(&self, message: &DynamicMessage, depth: usize) -> Result<Interpreted> {
        if depth >= self.config.max_depth {
            return Err(FrameError::depth_exceeded(self.config.max_depth));
        }

        let descriptor = message.descriptor();
        let present: Vec<FieldDescriptor> = descriptor
            .fields()
            .filter(|field| message.has_field(field))
            .collect();

        let mut record = Record::new();
        for field in &present {
            let value = message.get_field(field);
            let shape = FieldShape::of(field);

            if shape == FieldShape::RepeatedMessage && present.len() == 1 && self.config.flatten {
                let rows = self.repeated_rows(field, &value, depth)?;
                debug!(
                    message = descriptor.full_name(),
                    field = field.name(),
                    rows = rows.len(),
                    "unwrapping repeated message into rows"
                );
                return Ok(Interpreted::Rows(rows));
            }

            self.visit(&mut record, field, shape, &value, depth)?;
        }

        Ok(Interpreted::Record(record))
    }

    fn visit(
        &self,
        record: &mut Record,
        field: &FieldDescriptor,
        shape: FieldShape,
        value: &ReflectValue,
        depth: usize,
    ) -> Result<()> {
        let name = field.name();
        match (shape, value) {
            (FieldShape::RepeatedMessage, ReflectValue::List(_) | ReflectValue::Map(_)) => {
                let rows = self.repeated_rows(field, value, depth)?;
                record.insert(
                    name.to_string(),
                    Value::List(rows.into_iter().map(Value::Record).collect()),
                );
            }
            (FieldShape::Message, ReflectValue::Message(nested)) => {
                let interpreted = self.interpret_at(nested, depth + 1)?;
                self.put_nested(record, name, interpreted);
            }
            (FieldShape::RepeatedScalar, ReflectValue::List(items)) => {
                let values = items
                    .iter()
                    .map(|item| scalar_value(item).ok_or_else(|| unsupported(field, shape)))
                    .collect::<Result<Vec<_>>>()?;
                record.insert(name.to_string(), Value::List(values));
            }
            (FieldShape::Scalar, value) => {
                let value = scalar_value(value).ok_or_else(|| unsupported(field, shape))?;
                record.insert(name.to_string(), value);
            }
            _ => return Err(unsupported(field, shape)),
        }
        Ok(())
    }

    /// Interpret each element of a repeated message (or map) field.
    ///
    /// Elements that unwrap themselves contribute their rows directly, so
    /// the result is always a flat list of records.
    fn repeated_rows(
        &self,
        field: &FieldDescriptor,
        value: &ReflectValue,
        depth: usize,
    ) -> Result<Vec<Record>> {
        match value {
            ReflectValue::List(items) => {
                let mut rows = Vec::with_capacity(items.len());
                for item in items {
                    let ReflectValue::Message(element) = item else {
                        return Err(unsupported(field, FieldShape::RepeatedMessage));
                    };
                    rows.extend(self.interpret_at(element, depth + 1)?.into_rows());
                }
                Ok(rows)
            }
            ReflectValue::Map(entries) => {
                let mut entries: Vec<_> = entries.iter().collect();
                entries.sort_by(|(a, _), (b, _)| map_key_order(a, b));

                let mut rows = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    let mut entry = Record::new();
                    entry.insert("key".to_string(), map_key_value(key));
                    match value {
                        // Entry wrapper and value are both nesting levels on the wire
                        ReflectValue::Message(nested) => {
                            let interpreted = self.interpret_at(nested, depth + 2)?;
                            self.put_nested(&mut entry, "value", interpreted);
                        }
                        scalar => {
                            let scalar = scalar_value(scalar)
                                .ok_or_else(|| unsupported(field, FieldShape::RepeatedMessage))?;
                            entry.insert("value".to_string(), scalar);
                        }
                    }
                    rows.push(entry);
                }
                Ok(rows)
            }
            _ => Err(unsupported(field, FieldShape::RepeatedMessage)),
        }
    }

    /// Store an interpreted singular message under `name`.
    fn put_nested(&self, record: &mut Record, name: &str, nested: Interpreted) {
        match nested {
            Interpreted::Record(sub) if self.config.flatten => {
                for (key, value) in sub {
                    let key = if record.contains_key(&key) || self.config.prefix_nested {
                        trace!(field = name, key = key.as_str(), "prefixing nested key");
                        format!("{name}.{key}")
                    } else {
                        key
                    };
                    record.insert(key, value);
                }
            }
            // A sequence cannot be merged into keys, so it stays a list cell
            other => {
                record.insert(name.to_string(), other.into_value());
            }
        }
    }
}

/// Interpret one message with the given policy.
pub fn interpret(message: &DynamicMessage, config: &ReaderConfig) -> Result<Interpreted> {
    Interpreter::new(*config).interpret(message)
}

fn unsupported(field: &FieldDescriptor, shape: FieldShape) -> FrameError {
    FrameError::unsupported_field(
        field.name(),
        shape.kind().as_str(),
        shape.cardinality().as_str(),
    )
}

/// Convert a scalar reflect value; containers yield `None`.
fn scalar_value(value: &ReflectValue) -> Option<Value> {
    match value {
        ReflectValue::Bool(v) => Some(Value::Bool(*v)),
        ReflectValue::I32(v) => Some(Value::Int32(*v)),
        ReflectValue::I64(v) => Some(Value::Int64(*v)),
        ReflectValue::U32(v) => Some(Value::UInt32(*v)),
        ReflectValue::U64(v) => Some(Value::UInt64(*v)),
        ReflectValue::F32(v) => Some(Value::Float32(*v)),
        ReflectValue::F64(v) => Some(Value::Float64(*v)),
        ReflectValue::String(v) => Some(Value::String(v.clone())),
        ReflectValue::Bytes(v) => Some(Value::Bytes(v.to_vec())),
        ReflectValue::EnumNumber(v) => Some(Value::Enum(*v)),
        ReflectValue::List(_) | ReflectValue::Map(_) | ReflectValue::Message(_) => None,
    }
}

fn map_key_value(key: &MapKey) -> Value {
    match key {
        MapKey::Bool(v) => Value::Bool(*v),
        MapKey::I32(v) => Value::Int32(*v),
        MapKey::I64(v) => Value::Int64(*v),
        MapKey::U32(v) => Value::UInt32(*v),
        MapKey::U64(v) => Value::UInt64(*v),
        MapKey::String(v) => Value::String(v.clone()),
    }
}

// Keys of one map share a type, so mixed pairs never occur in practice.
fn map_key_order(a: &MapKey, b: &MapKey) -> Ordering {
    match (a, b) {
        (MapKey::Bool(a), MapKey::Bool(b)) => a.cmp(b),
        (MapKey::I32(a), MapKey::I32(b)) => a.cmp(b),
        (MapKey::I64(a), MapKey::I64(b)) => a.cmp(b),
        (MapKey::U32(a), MapKey::U32(b)) => a.cmp(b),
        (MapKey::U64(a), MapKey::U64(b)) => a.cmp(b),
        (MapKey::String(a), MapKey::String(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}
