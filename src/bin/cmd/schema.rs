// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema command - inspect the message types of a descriptor set.

use std::path::PathBuf;

use clap::Subcommand;
use serde::Serialize;

use crate::common::{load_registry, Result};
use protoframe::schema::FieldInfo;

/// Descriptor operations.
#[derive(Subcommand, Clone, Debug)]
pub enum SchemaCmd {
    /// List all message types in the descriptor set
    List {
        /// Compiled FileDescriptorSet
        #[arg(value_name = "FDS")]
        descriptor: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the fields of a message type and how each is interpreted
    Show {
        /// Compiled FileDescriptorSet
        #[arg(value_name = "FDS")]
        descriptor: PathBuf,

        /// Fully qualified message type
        #[arg(value_name = "TYPE")]
        message_type: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

impl SchemaCmd {
    pub fn run(self) -> Result<()> {
        match self {
            SchemaCmd::List { descriptor, json } => cmd_list(descriptor, json),
            SchemaCmd::Show {
                descriptor,
                message_type,
                json,
            } => cmd_show(descriptor, message_type, json),
        }
    }
}

fn cmd_list(descriptor: PathBuf, json: bool) -> Result<()> {
    let registry = load_registry(&descriptor)?;
    let names = registry.message_names();

    output_json_or(json, &names, || {
        println!("=== Message Types in {} ===", descriptor.display());
        println!();
        for name in &names {
            println!("{name}");
        }
        Ok(())
    })
}

#[derive(Serialize)]
struct MessageSchema {
    message_type: String,
    fields: Vec<FieldRow>,
}

#[derive(Serialize)]
struct FieldRow {
    #[serde(flatten)]
    info: FieldInfo,
    shape: String,
}

fn cmd_show(descriptor: PathBuf, message_type: String, json: bool) -> Result<()> {
    let registry = load_registry(&descriptor)?;
    let full_name = registry.get_message(&message_type)?.full_name().to_string();
    let fields: Vec<FieldRow> = registry
        .describe(&message_type)?
        .into_iter()
        .map(|info| FieldRow {
            shape: info.shape().to_string(),
            info,
        })
        .collect();

    let schema = MessageSchema {
        message_type: full_name,
        fields,
    };

    output_json_or(json, &schema, || {
        println!("=== {} ===", schema.message_type);
        println!();
        for row in &schema.fields {
            println!(
                "  {:>3}  {:<20} {:<28} {}",
                row.info.number, row.info.name, row.info.type_name, row.shape
            );
        }
        Ok(())
    })
}

fn output_json_or<T>(
    json: bool,
    value: &T,
    human_fn: impl FnOnce() -> std::io::Result<()>,
) -> Result<()>
where
    T: Serialize,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human_fn()?;
    }
    Ok(())
}
