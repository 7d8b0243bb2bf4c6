// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Pure mapping from device facts to property assignments
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Stable
//! TEST_COVERAGE: 6 unit tests
//!
//! INVARIANTS:
//!   - Each key appears at most once in a plan
//!   - Assignment order: alarm boot, board variant, dalvik heap, hwui caches
//!   - `ro.hwui.text_large_cache_height` always mirrors the heap profile

use crate::boot_reason::alarm_boot_value;
use crate::facts::DeviceFacts;
use crate::variant::{self, BoardId};

/// Property keys written by the hook.
#[allow(missing_docs)]
pub mod keys {
    pub const ALARM_BOOT: &str = "ro.alarm_boot";

    pub const BOARD_ID: &str = "ro.product.wt.boardid";
    pub const DISPLAY_ID: &str = "ro.build.display.wtid";
    pub const MEDIA_PARSER: &str = "mm.enable.qcom_parser";
    pub const MODEL: &str = "ro.product.model";

    pub const HEAP_START_SIZE: &str = "dalvik.vm.heapstartsize";
    pub const HEAP_GROWTH_LIMIT: &str = "dalvik.vm.heapgrowthlimit";
    pub const HEAP_SIZE: &str = "dalvik.vm.heapsize";
    pub const HEAP_TARGET_UTILIZATION: &str = "dalvik.vm.heaptargetutilization";
    pub const HEAP_MIN_FREE: &str = "dalvik.vm.heapminfree";
    pub const HEAP_MAX_FREE: &str = "dalvik.vm.heapmaxfree";

    pub const TEXT_LARGE_CACHE_HEIGHT: &str = "ro.hwui.text_large_cache_height";
}

/// Heap target utilization shared by both RAM tiers.
pub const HEAP_TARGET_UTILIZATION: &str = "0.75";

/// Graphics cache sizing that does not depend on the RAM tier.
pub const HWUI_CACHE_DEFAULTS: [(&str, &str); 10] = [
    ("ro.hwui.texture_cache_size", "72"),
    ("ro.hwui.layer_cache_size", "48"),
    ("ro.hwui.r_buffer_cache_size", "8"),
    ("ro.hwui.path_cache_size", "32"),
    ("ro.hwui.gradient_cache_size", "1"),
    ("ro.hwui.drop_shadow_cache_size", "6"),
    ("ro.hwui.texture_cache_flushrate", "0.4"),
    ("ro.hwui.text_small_cache_width", "1024"),
    ("ro.hwui.text_small_cache_height", "1024"),
    ("ro.hwui.text_large_cache_width", "2048"),
];

/// One property write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyAssignment {
    /// Property key.
    pub key: &'static str,
    /// Value to publish.
    pub value: String,
}

/// Ordered set of writes derived from [`DeviceFacts`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyPlan {
    assignments: Vec<PropertyAssignment>,
}

impl PropertyPlan {
    /// Derives the full plan for `facts`.
    pub fn build(facts: &DeviceFacts) -> Self {
        let mut plan = Self::default();
        plan.push(keys::ALARM_BOOT, alarm_boot_value(facts.boot_reason));

        if let Some(board) = &facts.board_id {
            plan.push_board(board);
        }

        let profile = facts.heap_profile();
        plan.push(keys::HEAP_START_SIZE, profile.start_size);
        plan.push(keys::HEAP_GROWTH_LIMIT, profile.growth_limit);
        plan.push(keys::HEAP_SIZE, profile.max_size);
        plan.push(keys::HEAP_TARGET_UTILIZATION, HEAP_TARGET_UTILIZATION);
        plan.push(keys::HEAP_MIN_FREE, profile.min_free);
        plan.push(keys::HEAP_MAX_FREE, profile.max_free);

        for (key, value) in HWUI_CACHE_DEFAULTS {
            plan.push(key, value);
        }
        plan.push(keys::TEXT_LARGE_CACHE_HEIGHT, profile.large_text_cache_height);
        plan
    }

    fn push_board(&mut self, board: &BoardId) {
        self.push(keys::BOARD_ID, board.as_str());
        if let Some(row) = variant::lookup(board) {
            self.push(keys::DISPLAY_ID, row.display_id);
            if let Some(flags) = row.media_parser {
                self.push(keys::MEDIA_PARSER, flags);
            }
        }
        self.push(keys::MODEL, variant::model_name(board));
    }

    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.assignments.iter_mut().find(|a| a.key == key) {
            Some(existing) => existing.value = value,
            None => self.assignments.push(PropertyAssignment { key, value }),
        }
    }

    /// Value planned for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Assignments in publication order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyAssignment> {
        self.assignments.iter()
    }

    /// Number of planned writes.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True when nothing is planned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
