// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Kernel command line tokenizer.
//!
//! The command line is split on ASCII whitespace; each entry must be exactly
//! `key=value`. Anything else is reported as a [`CommandLineParseError`] and
//! skipped by the lookups below.

use std::path::Path;
use std::time::Duration;

use log::debug;

use crate::error::{CommandLineParseError, HardwareQueryError};
use crate::kernel_fs::read_bounded;

/// Kernel interface exposing the boot command line.
pub const DEFAULT_CMDLINE_PATH: &str = "/proc/cmdline";

/// Splits one entry into its key and value.
pub fn parse_entry(entry: &str) -> Result<(&str, &str), CommandLineParseError> {
    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| CommandLineParseError::MissingSeparator(entry.to_string()))?;
    if value.contains('=') {
        return Err(CommandLineParseError::ExtraSeparator(entry.to_string()));
    }
    if key.is_empty() {
        return Err(CommandLineParseError::EmptyKey(entry.to_string()));
    }
    Ok((key, value))
}

/// Lazily yields every entry of `cmdline`, in order.
pub fn entries(
    cmdline: &str,
) -> impl Iterator<Item = Result<(&str, &str), CommandLineParseError>> + '_ {
    cmdline.split_ascii_whitespace().map(parse_entry)
}

/// Returns the value of the last well-formed entry named `key`.
pub fn lookup<'a>(cmdline: &'a str, key: &str) -> Option<&'a str> {
    entries(cmdline)
        .filter_map(|entry| match entry {
            Ok(pair) => Some(pair),
            Err(err) => {
                debug!("land-init: skipping cmdline {err}");
                None
            }
        })
        .filter(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .last()
}

/// Reads the kernel command line. Invalid UTF-8 is replaced rather than
/// rejected, so only the entries carrying it are affected.
pub fn read_cmdline(path: &Path, timeout: Duration) -> Result<String, HardwareQueryError> {
    let bytes = read_bounded(path, timeout)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
