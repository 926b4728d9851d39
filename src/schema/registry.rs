// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Descriptor registry backed by a `FileDescriptorSet`.
//!
//! Message types are resolved by full name against a prost-reflect
//! [`DescriptorPool`]. Resolved descriptors are cached so repeated lookups
//! from many conversions stay cheap; the cache is behind an `RwLock` so one
//! registry can be shared across threads.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use prost::Message;
use prost_reflect::{DescriptorPool, MessageDescriptor};
use prost_types::FileDescriptorSet;

use crate::core::{FrameError, Result};
use crate::schema::descriptor::{FieldInfo, SchemaDescriptor};

/// Registry of message descriptors loaded from descriptor sets.
pub struct SchemaRegistry {
    /// Pool holding every loaded file
    pool: DescriptorPool,
    /// Cached message descriptors indexed by full type name
    descriptors: RwLock<HashMap<String, MessageDescriptor>>,
}

impl SchemaRegistry {
    /// Create a registry over an existing descriptor pool.
    pub fn from_pool(pool: DescriptorPool) -> Self {
        Self {
            pool,
            descriptors: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry from serialized `FileDescriptorSet` bytes.
    pub fn from_bytes(fds_bytes: &[u8]) -> Result<Self> {
        let fds = decode_descriptor_set("<bytes>", fds_bytes)?;
        let pool = DescriptorPool::from_file_descriptor_set(fds).map_err(|e| {
            FrameError::invalid_schema("<bytes>", format!("Failed to build descriptor pool: {e}"))
        })?;
        Ok(Self::from_pool(pool))
    }

    /// Create a registry from a `FileDescriptorSet` file
    /// (as produced by `protoc --descriptor_set_out`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| FrameError::io(path.display().to_string(), e.to_string()))?;
        let name = path.display().to_string();
        let fds = decode_descriptor_set(&name, &bytes)?;
        let pool = DescriptorPool::from_file_descriptor_set(fds).map_err(|e| {
            FrameError::invalid_schema(name, format!("Failed to build descriptor pool: {e}"))
        })?;
        Ok(Self::from_pool(pool))
    }

    /// Add another serialized `FileDescriptorSet` to the pool.
    pub fn add_file_descriptor_set(&mut self, fds_bytes: &[u8]) -> Result<()> {
        let fds = decode_descriptor_set("<bytes>", fds_bytes)?;
        self.pool.add_file_descriptor_set(fds).map_err(|e| {
            FrameError::invalid_schema("<bytes>", format!("Failed to extend descriptor pool: {e}"))
        })
    }

    /// Get the underlying descriptor pool.
    pub fn pool(&self) -> &DescriptorPool {
        &self.pool
    }

    /// Resolve a message descriptor by full name.
    ///
    /// A leading `.` (as used in `type_name` references) is accepted.
    pub fn get_message(&self, type_name: &str) -> Result<MessageDescriptor> {
        let type_name = type_name.trim_start_matches('.');

        // Check the cache first
        {
            let descriptors = self
                .descriptors
                .read()
                .map_err(|e| FrameError::config(format!("Descriptor read lock poisoned: {e}")))?;
            if let Some(descriptor) = descriptors.get(type_name) {
                return Ok(descriptor.clone());
            }
        }

        let descriptor = self
            .pool
            .get_message_by_name(type_name)
            .ok_or_else(|| FrameError::type_not_found(type_name))?;

        self.descriptors
            .write()
            .map_err(|e| FrameError::config(format!("Descriptor write lock poisoned: {e}")))?
            .insert(type_name.to_string(), descriptor.clone());

        tracing::debug!(type_name, "resolved message descriptor");
        Ok(descriptor)
    }

    /// List the full names of all message types, excluding synthetic map entries.
    pub fn message_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .pool
            .all_messages()
            .filter(|m| !m.is_map_entry())
            .map(|m| m.full_name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Describe the fields of a message type in declaration order.
    pub fn describe(&self, type_name: &str) -> Result<Vec<FieldInfo>> {
        Ok(self.get_message(type_name)?.fields_info())
    }
}

fn decode_descriptor_set(name: &str, bytes: &[u8]) -> Result<FileDescriptorSet> {
    FileDescriptorSet::decode(bytes).map_err(|e| {
        FrameError::invalid_schema(name, format!("Failed to decode FileDescriptorSet: {e}"))
    })
}
