// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Protobuf schema handling.
//!
//! This module provides:
//! - [`SchemaRegistry`] - message descriptor lookup over a `FileDescriptorSet`
//! - [`FieldShape`] - the closed kind × cardinality classification of fields

pub mod descriptor;
pub mod registry;

pub use descriptor::{Cardinality, FieldInfo, FieldKind, FieldShape, SchemaDescriptor};
pub use registry::SchemaRegistry;
