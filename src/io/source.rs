// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Input sources for conversion.
//!
//! A conversion reads its payload either from a file on disk or from an
//! in-memory buffer. Paths are read in full before decoding.
//!
//! # Example
//!
//! ```rust,no_run
//! use protoframe::io::Source;
//!
//! let from_file = Source::parse("message.bin")?;
//! let inline = Source::parse("hex:0a03416e61")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::{FrameError, Result};

/// Prefix marking an inline hex-encoded payload in [`Source::parse`].
pub const HEX_PREFIX: &str = "hex:";

/// Where a serialized message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// File holding exactly one serialized message
    Path(PathBuf),
    /// Serialized message already in memory
    Bytes(Vec<u8>),
}

impl Source {
    /// Interpret a command-line style argument as a source.
    ///
    /// `hex:<digits>` yields an in-memory buffer; anything else must name an
    /// existing regular file.
    pub fn parse(arg: &str) -> Result<Self> {
        if let Some(digits) = arg.strip_prefix(HEX_PREFIX) {
            let bytes = hex::decode(digits.trim())
                .map_err(|e| FrameError::invalid_source(format!("invalid hex buffer: {e}")))?;
            return Ok(Source::Bytes(bytes));
        }

        let path = Path::new(arg);
        if path.is_file() {
            Ok(Source::Path(path.to_path_buf()))
        } else {
            Err(FrameError::invalid_source(format!(
                "'{arg}' is neither a file nor a {HEX_PREFIX} buffer"
            )))
        }
    }

    /// Load the full payload.
    pub fn read(self) -> Result<Vec<u8>> {
        match self {
            Source::Bytes(bytes) => Ok(bytes),
            Source::Path(path) => {
                let display = path.display().to_string();
                let metadata = std::fs::metadata(&path)
                    .map_err(|e| FrameError::io(&display, e.to_string()))?;
                if !metadata.is_file() {
                    return Err(FrameError::invalid_source(format!(
                        "'{display}' is not a regular file"
                    )));
                }
                std::fs::read(&path).map_err(|e| FrameError::io(display, e.to_string()))
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for Source {
    fn from(bytes: Vec<u8>) -> Self {
        Source::Bytes(bytes)
    }
}

impl From<&[u8]> for Source {
    fn from(bytes: &[u8]) -> Self {
        Source::Bytes(bytes.to_vec())
    }
}
