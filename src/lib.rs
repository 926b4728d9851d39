// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Protoframe
//!
//! Turn protobuf messages into tables.
//!
//! A decoded message is a tree of named fields. Protoframe walks that tree
//! and produces keyed records, then lines the records up into a table whose
//! columns are the union of all keys.
//!
//! ## Architecture
//!
//! - `schema/` - descriptor loading and field shape classification
//! - `interpret/` - the recursive message-to-record conversion
//! - `table/` - record normalization and column bookkeeping
//! - `io/` - input sources, decoding and conversion entry points
//! - `render/` - CSV and JSON output
//!
//! ## Flattening policy
//!
//! With [`ReaderConfig::flatten`] on (the default), nested messages are merged
//! into their parent record and a message whose only content is a repeated
//! message expands into one row per element. Keys that would collide are
//! written as `"<field>.<key>"`; [`ReaderConfig::prefix_nested`] prefixes
//! every merged key.
//!
//! ## Example
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use protoframe::{convert, ReaderConfig, SchemaRegistry};
//!
//! let registry = SchemaRegistry::from_file("descriptors.pb")?;
//! let descriptor = registry.get_message("pkg.Wrapper")?;
//!
//! let table = convert(
//!     std::path::PathBuf::from("wrapper.bin"),
//!     &descriptor,
//!     &ReaderConfig::default(),
//! )?;
//! println!("{} rows, columns: {:?}", table.len(), table.columns());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{FrameError, Interpreted, ReaderConfig, Record, Result, Value};

// Descriptor handling
pub mod schema;

pub use schema::{FieldShape, SchemaRegistry};

// Message interpretation
pub mod interpret;

pub use interpret::{interpret, Interpreter};

// Tabular output
pub mod table;

pub use table::{tabularize, Table};

// Input sources and conversion
pub mod io;

pub use io::{convert, convert_all, convert_field, decode, Source};

// Table rendering
pub mod render;

pub use render::RenderFormat;

#[cfg(test)]
mod testing;
