// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Protoframe CLI
//!
//! Convert serialized protobuf messages into tables.
//!
//! ## Usage
//!
//! ```sh
//! # Convert one message to CSV on stdout
//! protoframe convert --descriptor schema.pb --type pkg.Wrapper wrapper.bin
//!
//! # Several messages, one row per element of a repeated field, as JSON lines
//! protoframe convert -d schema.pb -t pkg.Person --field pets --format jsonl a.bin b.bin
//!
//! # List message types in a descriptor set
//! protoframe schema list schema.pb
//!
//! # Show the fields of one message type
//! protoframe schema show schema.pb pkg.Person
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{ConvertCmd, SchemaCmd};
use common::Result;

/// Protoframe - protobuf messages as tables
///
/// Reads serialized messages against a compiled descriptor set and writes
/// the flattened records as CSV or JSON.
#[derive(Parser, Clone)]
#[command(name = "protoframe")]
#[command(about = "Convert protobuf messages into tabular records", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Convert serialized messages into a table
    Convert(ConvertCmd),

    /// Descriptor operations (list, show)
    #[command(subcommand)]
    Schema(SchemaCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(cmd) => cmd.run(),
        Commands::Schema(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
