// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hardware facts gathered once per boot.

use log::{debug, info, warn};
use sysprop::PropertyStore;

use crate::boot_reason::{read_boot_reason, BootReason};
use crate::cmdline::{lookup, read_cmdline};
use crate::config::Config;
use crate::memory::{read_total_ram, select_profile, HeapProfile, LOW_RAM_PROFILE};
use crate::variant::{BoardId, BOARD_ID_KEY};

/// Everything the property plan is derived from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceFacts {
    /// Decoded boot reason; `None` when the interface could not be read.
    pub boot_reason: Option<BootReason>,
    /// Physical RAM in bytes; `None` when the query failed.
    pub total_ram_bytes: Option<u64>,
    /// Board revision; `None` when the device is not part of the board family.
    pub board_id: Option<BoardId>,
}

impl DeviceFacts {
    /// Heap profile for this device. An unknown RAM size gets the low profile.
    pub fn heap_profile(&self) -> HeapProfile {
        self.total_ram_bytes
            .map(select_profile)
            .unwrap_or(LOW_RAM_PROFILE)
    }
}

/// Queries the kernel interfaces named by `config`.
///
/// Failures are logged and leave the corresponding field empty.
pub fn gather(config: &Config, store: &dyn PropertyStore) -> DeviceFacts {
    let timeout = config.read_timeout();

    let boot_reason = match read_boot_reason(&config.boot_reason_path, timeout) {
        Ok(reason) => {
            info!("land-init: boot reason {reason}");
            Some(reason)
        }
        Err(err) => {
            warn!("land-init: boot reason unavailable: {err}");
            None
        }
    };

    let total_ram_bytes = match read_total_ram(&config.meminfo_path, timeout) {
        Ok(bytes) => {
            info!("land-init: total ram {} MiB", bytes / (1024 * 1024));
            Some(bytes)
        }
        Err(err) => {
            warn!("land-init: total ram unavailable, assuming low tier: {err}");
            None
        }
    };

    DeviceFacts {
        boot_reason,
        total_ram_bytes,
        board_id: resolve_board_id(config, store),
    }
}

/// Reads the device codename property. A failed lookup is logged and treated
/// as unset.
pub fn device_codename(config: &Config, store: &dyn PropertyStore) -> Option<String> {
    match store.get(&config.device_property) {
        Ok(value) => value,
        Err(err) => {
            warn!("land-init: cannot read {}: {err}", config.device_property);
            None
        }
    }
}

fn resolve_board_id(config: &Config, store: &dyn PropertyStore) -> Option<BoardId> {
    let device = device_codename(config, store).unwrap_or_default();
    if device != config.device_codename {
        debug!(
            "land-init: device {device:?} is not {:?}, skipping board variants",
            config.device_codename
        );
        return None;
    }

    let board = match read_cmdline(&config.cmdline_path, config.read_timeout()) {
        Ok(cmdline) => lookup(&cmdline, BOARD_ID_KEY)
            .map(BoardId::from_cmdline_value)
            .unwrap_or_default(),
        Err(err) => {
            warn!("land-init: kernel cmdline unavailable: {err}");
            BoardId::default()
        }
    };
    info!("land-init: board id '{board}'");
    Some(board)
}
