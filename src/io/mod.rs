// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoding and conversion entry points.
//!
//! Ties the pieces together: read a [`Source`], decode it with a message
//! descriptor, interpret the message, and tabularize the result.

pub mod source;

pub use source::Source;

use prost_reflect::{DynamicMessage, MessageDescriptor};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::{FrameError, ReaderConfig, Result};
use crate::interpret::Interpreter;
use crate::table::Table;

/// Decode a serialized message.
pub fn decode(bytes: &[u8], descriptor: &MessageDescriptor) -> Result<DynamicMessage> {
    DynamicMessage::decode(descriptor.clone(), bytes)
        .map_err(|e| FrameError::decode(descriptor.full_name(), e.to_string()))
}

/// Convert one serialized message into a table.
pub fn convert(
    source: impl Into<Source>,
    descriptor: &MessageDescriptor,
    config: &ReaderConfig,
) -> Result<Table> {
    convert_field(source, descriptor, None, config)
}

/// Convert one serialized message into a table, optionally taking rows from
/// the elements of a named repeated message field.
pub fn convert_field(
    source: impl Into<Source>,
    descriptor: &MessageDescriptor,
    field: Option<&str>,
    config: &ReaderConfig,
) -> Result<Table> {
    let source = source.into();
    let label = source.to_string();
    let bytes = source.read()?;
    if bytes.is_empty() {
        warn!(source = label.as_str(), "empty payload decodes to an empty message");
    }

    let message = decode(&bytes, descriptor)?;
    let rows = Interpreter::new(*config).to_rows(&message, field)?;
    let table = Table::from_records(rows);

    debug!(
        source = label.as_str(),
        type_name = descriptor.full_name(),
        rows = table.len(),
        columns = table.columns().len(),
        "converted message"
    );
    Ok(table)
}

/// Convert several sources in parallel and concatenate the tables in input order.
///
/// Fails as a whole if any source fails.
pub fn convert_all(
    sources: Vec<Source>,
    descriptor: &MessageDescriptor,
    field: Option<&str>,
    config: &ReaderConfig,
) -> Result<Table> {
    let tables = sources
        .into_par_iter()
        .map(|source| convert_field(source, descriptor, field, config))
        .collect::<Result<Vec<_>>>()?;

    let mut combined = Table::new();
    for table in tables {
        combined.extend(table);
    }
    Ok(combined)
}
