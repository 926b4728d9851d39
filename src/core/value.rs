// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Record value type system.
//!
//! Provides the value representation produced by the message interpreter.
//! Scalars are carried through untouched; nested messages become records and
//! repeated fields become lists. All variants are serde-serializable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyed record in field visitation order.
pub type Record = IndexMap<String, Value>;

/// A cell value in an interpreted record.
///
/// Scalar variants mirror the protobuf scalar types. The interpreter never
/// inspects scalar content; it only moves values into records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    // Boolean
    Bool(bool),

    // Signed integers (sint/sfixed variants included)
    Int32(i32),
    Int64(i64),

    // Unsigned integers (fixed variants included)
    UInt32(u32),
    UInt64(u64),

    // Floating point
    Float32(f32),
    Float64(f64),

    // String (UTF-8)
    String(String),

    // Binary data
    Bytes(Vec<u8>),

    // Enum value number
    Enum(i32),

    // Repeated scalars, or records of a repeated message cell
    List(Vec<Value>),

    // Nested message kept as a cell
    Record(Record),
}

impl Value {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the inner record.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::UInt32(_) => "uint32",
            Value::UInt64(_) => "uint64",
            Value::Float32(_) => "float32",
            Value::Float64(_) => "float64",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Enum(_) => "enum",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::UInt32(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Value::Enum(v) => write!(f, "enum({v})"),
            Value::List(v) => write!(f, "[{} elements]", v.len()),
            Value::Record(v) => write!(f, "{{{} fields}}", v.len()),
        }
    }
}

/// Result of interpreting one message.
///
/// A message normally yields a single record. A message whose only present
/// field is a repeated message yields one record per element when flattening.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Interpreted {
    /// A single keyed record
    Record(Record),
    /// Multiple records produced by unwrapping
    Rows(Vec<Record>),
}

impl Interpreted {
    /// Normalize into a sequence of records.
    pub fn into_rows(self) -> Vec<Record> {
        match self {
            Interpreted::Record(record) => vec![record],
            Interpreted::Rows(rows) => rows,
        }
    }

    /// Check whether the message unwrapped into rows.
    pub fn is_rows(&self) -> bool {
        matches!(self, Interpreted::Rows(_))
    }

    /// Get the single record, if this is not an unwrapped result.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Interpreted::Record(record) => Some(record),
            Interpreted::Rows(_) => None,
        }
    }

    /// Convert into a cell value: records stay records, rows become a list.
    pub fn into_value(self) -> Value {
        match self {
            Interpreted::Record(record) => Value::Record(record),
            Interpreted::Rows(rows) => Value::List(rows.into_iter().map(Value::Record).collect()),
        }
    }
}
