// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CONTEXT: Integration tests for the in-memory dry run used by `land-init --dry-run`
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Stable
//! TEST_COVERAGE: 3 integration tests
//!
//! TEST_SCENARIOS:
//!   - test_dry_run_with_device_publishes_board_keys(): codename supplied
//!   - test_dry_run_without_device_publishes_common_keys(): no codename
//!   - test_dry_run_other_device(): foreign codename skips board keys

use std::fs;

use land_init::{dry_run, Config};

const BOARD_KEYS: [&str; 4] = [
    "ro.product.wt.boardid",
    "ro.build.display.wtid",
    "mm.enable.qcom_parser",
    "ro.product.model",
];

fn fixture_config(dir: &std::path::Path) -> Config {
    fs::write(dir.join("boot_reason"), "3\n").unwrap();
    fs::write(dir.join("meminfo"), "MemTotal:       1899108 kB\n").unwrap();
    fs::write(dir.join("cmdline"), "quiet board_id=S88537EC1:1\n").unwrap();
    Config {
        boot_reason_path: dir.join("boot_reason"),
        cmdline_path: dir.join("cmdline"),
        meminfo_path: dir.join("meminfo"),
        ..Config::default()
    }
}

fn value<'a>(writes: &'a [(String, String)], key: &str) -> Option<&'a str> {
    writes
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn test_dry_run_with_device_publishes_board_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writes = dry_run(&fixture_config(dir.path()), Some("land".into()));

    assert_eq!(writes.first().map(|(k, _)| k.as_str()), Some("ro.alarm_boot"));
    assert_eq!(value(&writes, "ro.alarm_boot"), Some("true"));
    assert_eq!(value(&writes, "ro.product.wt.boardid"), Some("S88537EC1"));
    assert_eq!(
        value(&writes, "ro.build.display.wtid"),
        Some("SW_S88537EC1_V079_M20_MP_XM")
    );
    assert_eq!(value(&writes, "mm.enable.qcom_parser"), Some("196495"));
    assert_eq!(value(&writes, "ro.product.model"), Some("Redmi 3S"));
    assert_eq!(writes.len(), 1 + 4 + 6 + 11);
}

#[test]
fn test_dry_run_without_device_publishes_common_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writes = dry_run(&fixture_config(dir.path()), None);

    for key in BOARD_KEYS {
        assert_eq!(value(&writes, key), None, "{key} written without codename");
    }
    assert_eq!(value(&writes, "dalvik.vm.heapsize"), Some("512m"));
    assert_eq!(value(&writes, "ro.hwui.text_large_cache_height"), Some("1024"));
    assert_eq!(writes.len(), 1 + 6 + 11);
}

#[test]
fn test_dry_run_other_device() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writes = dry_run(&fixture_config(dir.path()), Some("kenzo".into()));
    for key in BOARD_KEYS {
        assert_eq!(value(&writes, key), None, "{key} written for kenzo");
    }
}
