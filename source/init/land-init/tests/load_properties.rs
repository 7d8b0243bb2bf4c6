// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CONTEXT: End-to-end runs of the property hook against fake kernel interfaces
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Stable
//! TEST_COVERAGE: 5 integration tests
//!
//! TEST_SCENARIOS:
//!   - test_land_high_ram_alarm_boot(): full property set on a 3 GiB Redmi 3X
//!   - test_other_device_publishes_only_common_keys(): codename gate closed
//!   - test_missing_interfaces_use_defaults(): nothing readable, safe defaults
//!   - test_config_file_drives_paths(): TOML config points at the fixtures
//!   - test_non_utf8_cmdline_keeps_board_id(): stray bytes in another entry

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use land_init::{load_properties, Config};
use sysprop::MemoryStore;

const LAND_CMDLINE: &str = "sched_enable_hmp=1 console=ttyHSL0,115200,n8 \
    androidboot.hardware=qcom msm_rtb.filter=0x237 lpm_levels.sleep_disabled=1 \
    board_id=S88537AB1:S88537AB1 androidboot.bootdevice=7824900.sdhci quiet\n";

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new(boot_reason: &str, mem_total_kb: u64, cmdline: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("boot_reason"), boot_reason).unwrap();
        fs::write(
            dir.path().join("meminfo"),
            format!("MemTotal:       {mem_total_kb} kB\nMemFree:          81234 kB\n"),
        )
        .unwrap();
        fs::write(dir.path().join("cmdline"), cmdline).unwrap();
        Self { dir }
    }

    fn config(&self) -> Config {
        config_in(self.dir.path())
    }
}

fn config_in(dir: &Path) -> Config {
    Config {
        boot_reason_path: dir.join("boot_reason"),
        cmdline_path: dir.join("cmdline"),
        meminfo_path: dir.join("meminfo"),
        ..Config::default()
    }
}

fn published(store: &MemoryStore) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for (key, value) in store.journal() {
        assert!(
            map.insert(key.clone(), value).is_none(),
            "{key} written twice"
        );
    }
    map
}

fn expect(map: &BTreeMap<String, String>, key: &str, value: &str) {
    assert_eq!(map.get(key).map(String::as_str), Some(value), "property {key}");
}

#[test]
fn test_land_high_ram_alarm_boot() {
    let fixture = Fixture::new("3\n", 2_877_592, LAND_CMDLINE);
    let store = MemoryStore::with_properties([("ro.cm.device", "land")]);
    let report = load_properties(&fixture.config(), &store);
    assert!(report.is_complete());

    let map = published(&store);
    assert_eq!(report.written, map.len());
    expect(&map, "ro.alarm_boot", "true");
    expect(&map, "ro.product.wt.boardid", "S88537AB1");
    expect(&map, "ro.build.display.wtid", "SW_S88537AB1_V079_M20_MP_XM");
    assert!(!map.contains_key("mm.enable.qcom_parser"));
    expect(&map, "ro.product.model", "Redmi 3X");

    expect(&map, "dalvik.vm.heapstartsize", "8m");
    expect(&map, "dalvik.vm.heapgrowthlimit", "288m");
    expect(&map, "dalvik.vm.heapsize", "768m");
    expect(&map, "dalvik.vm.heaptargetutilization", "0.75");
    expect(&map, "dalvik.vm.heapminfree", "512k");
    expect(&map, "dalvik.vm.heapmaxfree", "8m");

    expect(&map, "ro.hwui.texture_cache_size", "72");
    expect(&map, "ro.hwui.layer_cache_size", "48");
    expect(&map, "ro.hwui.r_buffer_cache_size", "8");
    expect(&map, "ro.hwui.path_cache_size", "32");
    expect(&map, "ro.hwui.gradient_cache_size", "1");
    expect(&map, "ro.hwui.drop_shadow_cache_size", "6");
    expect(&map, "ro.hwui.texture_cache_flushrate", "0.4");
    expect(&map, "ro.hwui.text_small_cache_width", "1024");
    expect(&map, "ro.hwui.text_small_cache_height", "1024");
    expect(&map, "ro.hwui.text_large_cache_width", "2048");
    expect(&map, "ro.hwui.text_large_cache_height", "1024");
    assert_eq!(map.len(), 1 + 3 + 6 + 11);
}

#[test]
fn test_other_device_publishes_only_common_keys() {
    let fixture = Fixture::new("8\n", 1_899_108, LAND_CMDLINE);
    let store = MemoryStore::with_properties([("ro.cm.device", "kenzo")]);
    load_properties(&fixture.config(), &store);

    let map = published(&store);
    for key in [
        "ro.product.wt.boardid",
        "ro.build.display.wtid",
        "mm.enable.qcom_parser",
        "ro.product.model",
    ] {
        assert!(!map.contains_key(key), "{key} written for foreign device");
    }
    expect(&map, "ro.alarm_boot", "false");
    expect(&map, "dalvik.vm.heapstartsize", "16m");
    expect(&map, "dalvik.vm.heapgrowthlimit", "192m");
    expect(&map, "dalvik.vm.heapsize", "512m");
    expect(&map, "dalvik.vm.heapminfree", "2m");
    expect(&map, "dalvik.vm.heapmaxfree", "8m");
    assert_eq!(map.len(), 1 + 6 + 11);
}

#[test]
fn test_missing_interfaces_use_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = MemoryStore::with_properties([("ro.cm.device", "land")]);
    let report = load_properties(&config_in(dir.path()), &store);
    assert!(report.is_complete());

    let map = published(&store);
    expect(&map, "ro.alarm_boot", "false");
    expect(&map, "ro.product.wt.boardid", "");
    assert!(!map.contains_key("ro.build.display.wtid"));
    expect(&map, "ro.product.model", "Redmi 3S");
    expect(&map, "dalvik.vm.heapstartsize", "16m");
    expect(&map, "ro.hwui.text_large_cache_height", "1024");
}

#[test]
fn test_config_file_drives_paths() {
    let fixture = Fixture::new("5\n", 1_899_108, "board_id=S88537BA1:x quiet\n");
    let config_path = fixture.dir.path().join("land-init.toml");
    fs::write(
        &config_path,
        format!(
            "boot_reason_path = {:?}\ncmdline_path = {:?}\nmeminfo_path = {:?}\n\
             device_codename = \"land\"\nread_timeout_ms = 1000\n",
            fixture.dir.path().join("boot_reason"),
            fixture.dir.path().join("cmdline"),
            fixture.dir.path().join("meminfo"),
        ),
    )
    .unwrap();
    let config = Config::load(&config_path).expect("config");
    assert_eq!(config, Config { read_timeout_ms: 1000, ..fixture.config() });

    let store = MemoryStore::with_properties([("ro.cm.device", "land")]);
    load_properties(&config, &store);
    let map = published(&store);
    expect(&map, "ro.product.wt.boardid", "S88537BA1");
    expect(&map, "ro.build.display.wtid", "SW_S88537BA1_V079_M20_MP_XM");
    expect(&map, "mm.enable.qcom_parser", "196495");
    expect(&map, "ro.product.model", "Redmi 3S");
}

#[test]
fn test_non_utf8_cmdline_keeps_board_id() {
    let fixture = Fixture::new("1\n", 2_877_592, "");
    fs::write(
        fixture.dir.path().join("cmdline"),
        b"androidboot.serialno=\xff\xfe board_id=S88537AB1:S88537AB1\n",
    )
    .unwrap();
    let store = MemoryStore::with_properties([("ro.cm.device", "land")]);
    load_properties(&fixture.config(), &store);

    let map = published(&store);
    expect(&map, "ro.product.wt.boardid", "S88537AB1");
    expect(&map, "ro.build.display.wtid", "SW_S88537AB1_V079_M20_MP_XM");
    expect(&map, "ro.product.model", "Redmi 3X");
}
