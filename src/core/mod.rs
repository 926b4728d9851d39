// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout protoframe.
//!
//! This module provides the foundational types for the library:
//! - [`FrameError`] - Error handling for the conversion pipeline
//! - [`Value`] and [`Record`] - Interpreted cell values and keyed records
//! - [`ReaderConfig`] - Flattening policy

pub mod config;
pub mod error;
pub mod value;

pub use config::{ReaderConfig, DEFAULT_MAX_DEPTH};
pub use error::{FrameError, Result};
pub use value::{Interpreted, Record, Value};
