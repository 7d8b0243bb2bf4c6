// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: RAM tier detection and dalvik heap profiles
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Stable
//! TEST_COVERAGE: 4 unit tests + 2 property tests

use std::path::Path;
use std::time::Duration;

use crate::error::HardwareQueryError;
use crate::kernel_fs::read_bounded;

/// Kernel interface reporting physical memory totals.
pub const DEFAULT_MEMINFO_PATH: &str = "/proc/meminfo";

/// Devices with strictly more RAM than this get the high profile.
pub const HIGH_RAM_THRESHOLD_BYTES: u64 = 2048 * 1024 * 1024;

/// Memory manager and graphics cache sizing for one RAM tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeapProfile {
    /// `dalvik.vm.heapstartsize`
    pub start_size: &'static str,
    /// `dalvik.vm.heapgrowthlimit`
    pub growth_limit: &'static str,
    /// `dalvik.vm.heapsize`
    pub max_size: &'static str,
    /// `dalvik.vm.heapminfree`
    pub min_free: &'static str,
    /// `dalvik.vm.heapmaxfree`
    pub max_free: &'static str,
    /// `ro.hwui.text_large_cache_height`
    pub large_text_cache_height: &'static str,
}

/// Profile for devices above 2 GiB (phone-xxhdpi-3072 heap layout).
pub const HIGH_RAM_PROFILE: HeapProfile = HeapProfile {
    start_size: "8m",
    growth_limit: "288m",
    max_size: "768m",
    min_free: "512k",
    max_free: "8m",
    large_text_cache_height: "1024",
};

/// Profile for devices at or below 2 GiB (phone-xxhdpi-2048 heap layout).
pub const LOW_RAM_PROFILE: HeapProfile = HeapProfile {
    start_size: "16m",
    growth_limit: "192m",
    max_size: "512m",
    min_free: "2m",
    max_free: "8m",
    large_text_cache_height: "1024",
};

/// Picks the heap profile for a device with `total_ram_bytes` of RAM.
pub fn select_profile(total_ram_bytes: u64) -> HeapProfile {
    if total_ram_bytes > HIGH_RAM_THRESHOLD_BYTES {
        HIGH_RAM_PROFILE
    } else {
        LOW_RAM_PROFILE
    }
}

/// Extracts `MemTotal` from meminfo contents, in bytes.
pub fn parse_mem_total(meminfo: &str) -> Option<u64> {
    let line = meminfo
        .lines()
        .find_map(|line| line.strip_prefix("MemTotal:"))?;
    let mut fields = line.split_whitespace();
    let amount: u64 = fields.next()?.parse().ok()?;
    let scale = match fields.next() {
        Some("kB") | Some("KB") | Some("kb") => 1024,
        None => 1,
        Some(_) => return None,
    };
    amount.checked_mul(scale)
}

/// Reads total physical RAM in bytes.
pub fn read_total_ram(path: &Path, timeout: Duration) -> Result<u64, HardwareQueryError> {
    let bytes = read_bounded(path, timeout)?;
    let meminfo = String::from_utf8_lossy(&bytes);
    parse_mem_total(&meminfo).ok_or_else(|| HardwareQueryError::Parse {
        path: path.to_path_buf(),
        detail: "no usable MemTotal line".into(),
    })
}
