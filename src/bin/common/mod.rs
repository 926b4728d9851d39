// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use protoframe::{ReaderConfig, SchemaRegistry, Source};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Input argument that reads the payload from stdin.
pub const STDIN_ARG: &str = "-";

/// Command-line flags layered over the reader configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub no_flatten: bool,
    pub prefix_nested: bool,
    pub max_depth: Option<usize>,
}

/// Load the config file if given, then apply command-line flags.
///
/// Flags only ever switch behavior on; an absent flag keeps the file's value.
pub fn resolve_config(path: Option<&Path>, overrides: ConfigOverrides) -> Result<ReaderConfig> {
    let mut config = match path {
        Some(path) => ReaderConfig::load(path)?,
        None => ReaderConfig::default(),
    };

    if overrides.no_flatten {
        config = config.with_flatten(false);
    }
    if overrides.prefix_nested {
        config = config.with_prefix_nested(true);
    }
    if let Some(max_depth) = overrides.max_depth {
        if max_depth == 0 {
            anyhow::bail!("--max-depth must be at least 1");
        }
        config = config.with_max_depth(max_depth);
    }
    Ok(config)
}

/// Load a descriptor set from disk.
pub fn load_registry(path: &Path) -> Result<SchemaRegistry> {
    Ok(SchemaRegistry::from_file(path)?)
}

/// Turn input arguments into sources, reading `-` from stdin.
pub fn read_inputs(args: &[String]) -> Result<Vec<Source>> {
    let stdin_count = args.iter().filter(|arg| arg.as_str() == STDIN_ARG).count();
    if stdin_count > 1 {
        anyhow::bail!("stdin ('{STDIN_ARG}') can only be given once");
    }

    args.iter()
        .map(|arg| {
            if arg == STDIN_ARG {
                let mut bytes = Vec::new();
                std::io::stdin().lock().read_to_end(&mut bytes)?;
                Ok(Source::Bytes(bytes))
            } else {
                Ok(Source::parse(arg)?)
            }
        })
        .collect()
}

/// Open the output file, or stdout when no path is given.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| anyhow::anyhow!("cannot create '{}': {e}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}
