// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Table rendering.
//!
//! Output formats for a [`Table`](crate::table::Table):
//! - [`csv`] - delimited text with a header row
//! - [`json`] - a columns/rows document or one JSON object per line

pub mod csv;
pub mod json;

use std::io::Write;

pub use self::csv::{write_csv, CsvOptions};
pub use self::json::{table_to_json, value_to_json, write_json, write_json_lines};

use crate::core::Result;
use crate::table::Table;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderFormat {
    /// Comma-separated values
    #[default]
    Csv,
    /// Single JSON document with columns and rows
    Json,
    /// One JSON object per row
    JsonLines,
}

/// Error returned when parsing a `RenderFormat` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRenderFormatError {
    _private: (),
}

impl std::fmt::Display for ParseRenderFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid format name, expected 'csv', 'json', or 'jsonl'")
    }
}

impl std::error::Error for ParseRenderFormatError {}

impl std::str::FromStr for RenderFormat {
    type Err = ParseRenderFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(RenderFormat::Csv),
            "json" => Ok(RenderFormat::Json),
            "jsonl" | "ndjson" => Ok(RenderFormat::JsonLines),
            _ => Err(ParseRenderFormatError { _private: () }),
        }
    }
}

impl RenderFormat {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Csv => "csv",
            RenderFormat::Json => "json",
            RenderFormat::JsonLines => "jsonl",
        }
    }
}

/// Render a table in the given format.
pub fn render<W: Write>(table: &Table, format: RenderFormat, out: &mut W) -> Result<()> {
    match format {
        RenderFormat::Csv => write_csv(table, out, &CsvOptions::default()),
        RenderFormat::Json => write_json(table, out),
        RenderFormat::JsonLines => write_json_lines(table, out),
    }
}
