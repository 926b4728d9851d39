// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON rendering.
//!
//! Bytes are written as lowercase hex strings, absent cells as `null`, and
//! non-finite floats as `null` since JSON has no representation for them.

use std::io::Write;

use serde_json::{json, Map, Number};

use crate::core::{FrameError, Result, Value};
use crate::table::Table;

/// Convert a cell value to JSON.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Bool(v) => serde_json::Value::Bool(*v),
        Value::Int32(v) | Value::Enum(v) => json!(v),
        Value::Int64(v) => json!(v),
        Value::UInt32(v) => json!(v),
        Value::UInt64(v) => json!(v),
        Value::Float32(v) => float_to_json(*v as f64),
        Value::Float64(v) => float_to_json(*v),
        Value::String(v) => serde_json::Value::String(v.clone()),
        Value::Bytes(v) => serde_json::Value::String(hex::encode(v)),
        Value::List(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
        Value::Record(record) => serde_json::Value::Object(
            record
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

fn float_to_json(v: f64) -> serde_json::Value {
    Number::from_f64(v)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

/// Build a `{"columns": [...], "rows": [[...], ...]}` document.
pub fn table_to_json(table: &Table) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = table
        .rows()
        .iter()
        .map(|row| {
            serde_json::Value::Array(
                row.iter()
                    .map(|cell| cell.as_ref().map_or(serde_json::Value::Null, value_to_json))
                    .collect(),
            )
        })
        .collect();

    json!({
        "columns": table.columns(),
        "rows": rows,
    })
}

/// Write the table as one pretty-printed JSON document.
pub fn write_json<W: Write>(table: &Table, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &table_to_json(table))
        .map_err(|e| FrameError::io("<output>", e.to_string()))?;
    writeln!(out)?;
    Ok(())
}

/// Write one JSON object per row, with only the keys present in that row.
pub fn write_json_lines<W: Write>(table: &Table, out: &mut W) -> Result<()> {
    for row in table.rows() {
        let object: Map<String, serde_json::Value> = table
            .columns()
            .iter()
            .zip(row)
            .filter_map(|(column, cell)| cell.as_ref().map(|v| (column.clone(), value_to_json(v))))
            .collect();
        serde_json::to_writer(&mut *out, &object)
            .map_err(|e| FrameError::io("<output>", e.to_string()))?;
        writeln!(out)?;
    }
    Ok(())
}
