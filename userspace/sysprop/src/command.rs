// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Property backend that drives the platform command line tools.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use log::trace;

use crate::{validate_key, validate_value, PropertyError, PropertyStore};

const DEFAULT_GETPROP: &str = "/system/bin/getprop";
const DEFAULT_SETPROP: &str = "/system/bin/setprop";

/// Reads and writes properties by spawning `getprop` / `setprop`.
#[derive(Clone, Debug)]
pub struct CommandStore {
    getprop: PathBuf,
    setprop: PathBuf,
}

impl Default for CommandStore {
    fn default() -> Self {
        Self::new(DEFAULT_GETPROP, DEFAULT_SETPROP)
    }
}

impl CommandStore {
    /// Uses the given tool binaries instead of the system defaults.
    pub fn new(getprop: impl Into<PathBuf>, setprop: impl Into<PathBuf>) -> Self {
        Self {
            getprop: getprop.into(),
            setprop: setprop.into(),
        }
    }

    fn run(tool: &Path, key: &str, args: &[&str]) -> Result<Output, PropertyError> {
        trace!("sysprop: {} {:?}", tool.display(), args);
        let output = Command::new(tool)
            .args(args)
            .output()
            .map_err(|source| PropertyError::Io {
                tool: tool.display().to_string(),
                source,
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = match stderr.trim() {
                "" => output.status.to_string(),
                msg => msg.to_string(),
            };
            return Err(PropertyError::ToolFailed {
                tool: tool.display().to_string(),
                key: key.to_string(),
                detail,
            });
        }
        Ok(output)
    }
}

impl PropertyStore for CommandStore {
    fn get(&self, key: &str) -> Result<Option<String>, PropertyError> {
        validate_key(key)?;
        let output = Self::run(&self.getprop, key, &[key])?;
        let value = String::from_utf8_lossy(&output.stdout);
        // getprop prints an empty line for unset keys.
        match value.trim_end_matches(['\r', '\n']) {
            "" => Ok(None),
            v => Ok(Some(v.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PropertyError> {
        validate_key(key)?;
        validate_value(key, value)?;
        Self::run(&self.setprop, key, &[key, value]).map(|_| ())
    }
}
