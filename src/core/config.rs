// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Reader configuration.
//!
//! A [`ReaderConfig`] is fixed for the duration of a conversion and consulted
//! read-only by the interpreter. It can be built in code or loaded from TOML:
//!
//! ```toml
//! flatten = true
//! prefix_nested = false
//! max_depth = 100
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{FrameError, Result};

/// Default nesting limit, matching the protobuf decoder recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Flattening policy for message interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Merge nested messages into the parent record and unwrap
    /// single repeated-message containers into rows.
    pub flatten: bool,
    /// Always prefix merged keys with the nested field name.
    pub prefix_nested: bool,
    /// Maximum message nesting depth accepted by the interpreter.
    pub max_depth: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            flatten: true,
            prefix_nested: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ReaderConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flatten policy.
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Set the nested key prefixing policy.
    pub fn with_prefix_nested(mut self, prefix_nested: bool) -> Self {
        self.prefix_nested = prefix_nested;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ReaderConfig =
            toml::from_str(text).map_err(|e| FrameError::config(e.to_string()))?;
        if config.max_depth == 0 {
            return Err(FrameError::config("max_depth must be at least 1"));
        }
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| FrameError::io(path.display().to_string(), e.to_string()))?;
        Self::from_toml_str(&text)
    }
}
