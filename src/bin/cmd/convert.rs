// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Convert command - turn serialized messages into a table.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::common::{
    load_registry, open_output, read_inputs, resolve_config, ConfigOverrides, Result,
};
use protoframe::render::render;
use protoframe::{convert_all, RenderFormat};

/// Convert serialized messages into a table.
#[derive(Args, Clone, Debug)]
pub struct ConvertCmd {
    /// Compiled FileDescriptorSet (protoc --descriptor_set_out)
    #[arg(short, long, value_name = "FDS")]
    descriptor: PathBuf,

    /// Fully qualified message type of every input
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    message_type: String,

    /// Take rows from the elements of this repeated message field
    #[arg(long, value_name = "FIELD")]
    field: Option<String>,

    /// Output format: csv, json, or jsonl
    #[arg(short, long, default_value = "csv")]
    format: RenderFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Reader configuration file (TOML)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep nested messages as record cells instead of merging them
    #[arg(long)]
    no_flatten: bool,

    /// Prefix every merged nested key with its field name
    #[arg(long)]
    prefix_nested: bool,

    /// Maximum message nesting depth
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Message files, hex:<digits> buffers, or - for stdin
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<String>,
}

impl ConvertCmd {
    pub fn run(self) -> Result<()> {
        let config = resolve_config(
            self.config.as_deref(),
            ConfigOverrides {
                no_flatten: self.no_flatten,
                prefix_nested: self.prefix_nested,
                max_depth: self.max_depth,
            },
        )?;
        let registry = load_registry(&self.descriptor)?;
        let descriptor = registry.get_message(&self.message_type)?;
        let sources = read_inputs(&self.inputs)?;

        let table = convert_all(sources, &descriptor, self.field.as_deref(), &config)?;

        let mut out = open_output(self.output.as_deref())?;
        render(&table, self.format, &mut out)?;
        out.flush()?;

        if let Some(path) = &self.output {
            eprintln!(
                "Wrote {} rows x {} columns to {} ({})",
                table.len(),
                table.columns().len(),
                path.display(),
                self.format.as_str()
            );
        }
        Ok(())
    }
}
