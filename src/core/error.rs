// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for protoframe.
//!
//! Provides error types for the conversion pipeline:
//! - Input acquisition and decoding
//! - Descriptor loading and lookup
//! - Message interpretation

use std::fmt;

/// Errors that can occur while turning a protobuf payload into a table.
#[derive(Debug, Clone)]
pub enum FrameError {
    /// Input is neither a readable file nor a byte buffer
    InvalidSourceKind {
        /// Description of the rejected source
        source: String,
    },

    /// The payload could not be parsed as the requested message type
    DecodeError {
        /// Full name of the message type
        type_name: String,
        /// Decoder error message
        message: String,
    },

    /// A field's runtime value does not match its declared shape
    UnsupportedFieldKind {
        /// Field name
        field: String,
        /// Declared kind (scalar/message)
        kind: String,
        /// Declared cardinality (single/repeated)
        cardinality: String,
    },

    /// Message nesting went deeper than the configured limit
    DepthExceeded {
        /// Configured maximum depth
        limit: usize,
    },

    /// Named field does not exist on the message type
    FieldNotFound {
        /// Full name of the message type
        message_type: String,
        /// Requested field name
        field: String,
    },

    /// Type not found in the descriptor pool
    TypeNotFound {
        /// Type name that was not found
        type_name: String,
    },

    /// Descriptor set could not be loaded
    InvalidSchema {
        /// Schema name or identifier
        schema_name: String,
        /// Validation error message
        reason: String,
    },

    /// Reader configuration could not be parsed
    ConfigError {
        /// Error message
        message: String,
    },

    /// I/O failure while reading input
    Io {
        /// Path involved, if any
        path: Option<String>,
        /// Error message
        message: String,
    },
}

impl FrameError {
    /// Create an invalid source error.
    pub fn invalid_source(source: impl Into<String>) -> Self {
        FrameError::InvalidSourceKind {
            source: source.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        FrameError::DecodeError {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported field kind error.
    pub fn unsupported_field(
        field: impl Into<String>,
        kind: impl Into<String>,
        cardinality: impl Into<String>,
    ) -> Self {
        FrameError::UnsupportedFieldKind {
            field: field.into(),
            kind: kind.into(),
            cardinality: cardinality.into(),
        }
    }

    /// Create a depth exceeded error.
    pub fn depth_exceeded(limit: usize) -> Self {
        FrameError::DepthExceeded { limit }
    }

    /// Create a "field not found" error.
    pub fn field_not_found(message_type: impl Into<String>, field: impl Into<String>) -> Self {
        FrameError::FieldNotFound {
            message_type: message_type.into(),
            field: field.into(),
        }
    }

    /// Create a "type not found" error.
    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        FrameError::TypeNotFound {
            type_name: type_name.into(),
        }
    }

    /// Create an invalid schema error.
    pub fn invalid_schema(schema_name: impl Into<String>, reason: impl Into<String>) -> Self {
        FrameError::InvalidSchema {
            schema_name: schema_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        FrameError::ConfigError {
            message: message.into(),
        }
    }

    /// Create an I/O error tied to a path.
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        FrameError::Io {
            path: Some(path.into()),
            message: message.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            FrameError::InvalidSourceKind { source } => vec![("source", source.clone())],
            FrameError::DecodeError { type_name, message } => {
                vec![("type", type_name.clone()), ("message", message.clone())]
            }
            FrameError::UnsupportedFieldKind {
                field,
                kind,
                cardinality,
            } => vec![
                ("field", field.clone()),
                ("kind", kind.clone()),
                ("cardinality", cardinality.clone()),
            ],
            FrameError::DepthExceeded { limit } => vec![("limit", limit.to_string())],
            FrameError::FieldNotFound {
                message_type,
                field,
            } => vec![("type", message_type.clone()), ("field", field.clone())],
            FrameError::TypeNotFound { type_name } => vec![("type", type_name.clone())],
            FrameError::InvalidSchema {
                schema_name,
                reason,
            } => vec![("schema", schema_name.clone()), ("reason", reason.clone())],
            FrameError::ConfigError { message } => vec![("message", message.clone())],
            FrameError::Io { path, message } => {
                let mut fields = Vec::with_capacity(2);
                if let Some(path) = path {
                    fields.push(("path", path.clone()));
                }
                fields.push(("message", message.clone()));
                fields
            }
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::InvalidSourceKind { source } => {
                write!(f, "Unknown input source: {source}")
            }
            FrameError::DecodeError { type_name, message } => {
                write!(f, "Failed to decode '{type_name}': {message}")
            }
            FrameError::UnsupportedFieldKind {
                field,
                kind,
                cardinality,
            } => write!(
                f,
                "Unsupported field '{field}' (kind: {kind}, cardinality: {cardinality})"
            ),
            FrameError::DepthExceeded { limit } => {
                write!(f, "Message nesting exceeds maximum depth of {limit}")
            }
            FrameError::FieldNotFound {
                message_type,
                field,
            } => write!(f, "Field '{field}' not found on '{message_type}'"),
            FrameError::TypeNotFound { type_name } => {
                write!(f, "Type not found: '{type_name}'")
            }
            FrameError::InvalidSchema {
                schema_name,
                reason,
            } => write!(f, "Invalid schema '{schema_name}': {reason}"),
            FrameError::ConfigError { message } => write!(f, "Invalid configuration: {message}"),
            FrameError::Io {
                path: Some(path),
                message,
            } => write!(f, "I/O error on '{path}': {message}"),
            FrameError::Io {
                path: None,
                message,
            } => write!(f, "I/O error: {message}"),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<std::io::Error> for FrameError {
    fn from(err: std::io::Error) -> Self {
        FrameError::Io {
            path: None,
            message: err.to_string(),
        }
    }
}

/// Result type for protoframe operations.
pub type Result<T> = std::result::Result<T, FrameError>;
