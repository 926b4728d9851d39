// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CSV rendering.
//!
//! Writes a header row followed by one line per table row. Absent cells are
//! left empty. Nested records and lists are written as compact JSON text and
//! bytes as lowercase hex. Fields containing the delimiter, a quote, or a
//! line break are quoted per RFC 4180 when quoting is enabled.

use std::io::Write;

use crate::core::{Result, Value};
use crate::render::json::value_to_json;
use crate::table::Table;

/// CSV writer options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: char,
    /// RFC 4180 double-quote handling
    pub quoting: bool,
    /// Emit the header row
    pub header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quoting: true,
            header: true,
        }
    }
}

/// Write a table as CSV.
pub fn write_csv<W: Write>(table: &Table, out: &mut W, options: &CsvOptions) -> Result<()> {
    if options.header {
        let header: Vec<String> = table
            .columns()
            .iter()
            .map(|column| escape(column, options))
            .collect();
        write_line(out, &header, options.delimiter)?;
    }

    for row in table.rows() {
        let fields: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(value) => escape(&cell_text(value), options),
                None => String::new(),
            })
            .collect();
        write_line(out, &fields, options.delimiter)?;
    }

    Ok(())
}

fn write_line<W: Write>(out: &mut W, fields: &[String], delimiter: char) -> Result<()> {
    let mut line = fields.join(delimiter.to_string().as_str());
    line.push('\n');
    out.write_all(line.as_bytes())?;
    Ok(())
}

/// Plain text for one cell, before quoting.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bytes(b) => hex::encode(b),
        Value::Enum(v) => v.to_string(),
        Value::List(_) | Value::Record(_) => value_to_json(value).to_string(),
        scalar => scalar.to_string(),
    }
}

fn escape(text: &str, options: &CsvOptions) -> String {
    let needs_quotes = text.contains(options.delimiter)
        || text.contains('"')
        || text.contains('\n')
        || text.contains('\r');
    if options.quoting && needs_quotes {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
