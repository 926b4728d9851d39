// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod convert;
mod schema;

pub use convert::ConvertCmd;
pub use schema::SchemaCmd;
