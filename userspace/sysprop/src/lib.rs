// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: System property store seam used by early boot hooks
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Stable
//! TEST_COVERAGE: 9 unit tests + 1 property test
//!
//! PUBLIC API:
//!   - PropertyStore: read/write access to the platform property registry
//!   - MemoryStore: in-process backend (host tests, dry runs)
//!   - CommandStore: backend driving the platform `getprop`/`setprop` tools
//!   - validate_key(), validate_value(): registry naming and size rules
//!
//! INVARIANTS:
//!   - Keys match `[A-Za-z0-9._-]+` and never contain `..`
//!   - Values are shorter than PROP_VALUE_MAX unless the key is read-only (`ro.`)

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]

mod command;
#[cfg(feature = "backend-host")]
mod memory;

pub use command::CommandStore;
#[cfg(feature = "backend-host")]
pub use memory::MemoryStore;

use thiserror::Error;

/// Size of a property value buffer on the platform, including the trailing NUL.
pub const PROP_VALUE_MAX: usize = 92;

/// Prefix of properties that may only be set once and are exempt from the value limit.
pub const READ_ONLY_PREFIX: &str = "ro.";

/// Errors produced by property stores.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// Key is empty or contains characters the registry refuses.
    #[error("invalid property key {0:?}")]
    InvalidKey(String),
    /// Value does not fit into a property slot.
    #[error("value for {key} is {len} bytes (limit {limit})")]
    ValueTooLong {
        /// Key being written.
        key: String,
        /// Length of the rejected value in bytes.
        len: usize,
        /// Largest accepted length.
        limit: usize,
    },
    /// Launching the helper tool failed.
    #[error("failed to run {tool}: {source}")]
    Io {
        /// Tool that could not be launched.
        tool: String,
        /// Underlying operating system error.
        source: std::io::Error,
    },
    /// Helper tool ran but reported failure.
    #[error("{tool} {key} failed: {detail}")]
    ToolFailed {
        /// Tool that failed.
        tool: String,
        /// Key being accessed.
        key: String,
        /// Exit status or diagnostic output.
        detail: String,
    },
}

/// Access to the platform key/value property registry.
pub trait PropertyStore {
    /// Returns the current value of `key`, or `None` when it is unset.
    fn get(&self, key: &str) -> Result<Option<String>, PropertyError>;

    /// Writes `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), PropertyError>;
}

/// Checks that `key` is acceptable to the registry.
pub fn validate_key(key: &str) -> Result<(), PropertyError> {
    let valid_chars = key
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));
    if key.is_empty()
        || !valid_chars
        || key.starts_with('.')
        || key.ends_with('.')
        || key.contains("..")
    {
        return Err(PropertyError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Checks that `value` fits the slot reserved for `key`.
pub fn validate_value(key: &str, value: &str) -> Result<(), PropertyError> {
    let limit = PROP_VALUE_MAX - 1;
    if value.len() > limit && !key.starts_with(READ_ONLY_PREFIX) {
        return Err(PropertyError::ValueTooLong {
            key: key.to_string(),
            len: value.len(),
            limit,
        });
    }
    Ok(())
}
