// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types surfaced by the property hook.
//!
//! Only [`ConfigError`] ever reaches the process exit status. Hardware and
//! command line failures are logged by the stage that hit them and replaced by
//! the stage default.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure while querying a kernel interface.
#[derive(Debug, Error)]
pub enum HardwareQueryError {
    /// Opening or reading the interface failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Kernel interface path.
        path: PathBuf,
        /// Underlying operating system error.
        source: std::io::Error,
    },
    /// The interface returned contents that could not be interpreted.
    #[error("unexpected contents in {path}: {detail}")]
    Parse {
        /// Kernel interface path.
        path: PathBuf,
        /// Human readable description of the issue.
        detail: String,
    },
    /// The read did not complete within the configured bound.
    #[error("reading {path} did not finish within {timeout:?}")]
    Timeout {
        /// Kernel interface path.
        path: PathBuf,
        /// Bound that was exceeded.
        timeout: Duration,
    },
}

/// A kernel command line entry that is not a `key=value` pair.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandLineParseError {
    /// Entry carries no `=` at all (bare flags such as `quiet`).
    #[error("entry {0:?} has no value")]
    MissingSeparator(String),
    /// Entry carries more than one `=`.
    #[error("entry {0:?} has more than one '='")]
    ExtraSeparator(String),
    /// Entry starts with `=`.
    #[error("entry {0:?} has an empty key")]
    EmptyKey(String),
}

/// Configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Location of the config file.
        path: PathBuf,
        /// Underlying operating system error.
        source: std::io::Error,
    },
    /// TOML parsing failed.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Location of the malformed config file.
        path: PathBuf,
        /// Error returned by the TOML deserializer.
        source: toml::de::Error,
    },
    /// File parsed but holds a value the hook cannot run with.
    #[error("invalid config {path}: {reason}")]
    Invalid {
        /// Location of the config file.
        path: PathBuf,
        /// Human readable description of the issue.
        reason: String,
    },
}
