// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Optional TOML configuration for the hook.
//!
//! ```toml
//! boot_reason_path = "/proc/sys/kernel/boot_reason"
//! cmdline_path = "/proc/cmdline"
//! meminfo_path = "/proc/meminfo"
//! device_property = "ro.cm.device"
//! device_codename = "land"
//! read_timeout_ms = 500
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::boot_reason::DEFAULT_BOOT_REASON_PATH;
use crate::cmdline::DEFAULT_CMDLINE_PATH;
use crate::error::ConfigError;
use crate::memory::DEFAULT_MEMINFO_PATH;
use crate::variant::{DEVICE_CODENAME, DEVICE_PROPERTY};

/// Location probed when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "/vendor/etc/land-init.toml";

const DEFAULT_READ_TIMEOUT_MS: u64 = 500;

/// Runtime settings. Every field is optional in the file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// PMIC boot reason interface.
    pub boot_reason_path: PathBuf,
    /// Kernel command line interface.
    pub cmdline_path: PathBuf,
    /// Memory totals interface.
    pub meminfo_path: PathBuf,
    /// Property holding the device codename.
    pub device_property: String,
    /// Codename the board table applies to.
    pub device_codename: String,
    /// Upper bound for each kernel interface read, in milliseconds.
    pub read_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boot_reason_path: PathBuf::from(DEFAULT_BOOT_REASON_PATH),
            cmdline_path: PathBuf::from(DEFAULT_CMDLINE_PATH),
            meminfo_path: PathBuf::from(DEFAULT_MEMINFO_PATH),
            device_property: DEVICE_PROPERTY.to_string(),
            device_codename: DEVICE_CODENAME.to_string(),
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Loads `path`, failing if it is missing or malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.read_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "read_timeout_ms must be at least 1".into(),
            });
        }
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Read bound as a [`Duration`].
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}
