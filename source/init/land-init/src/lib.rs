// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Vendor property hook for the land (Redmi 3S/3X) board family
//! OWNERS: @init-team @runtime
//! STATUS: Functional
//! API_STABILITY: Stable
//! TEST_COVERAGE: 43 unit tests + 3 property tests + 8 integration tests
//!
//! PUBLIC API:
//!   - load_properties(): gather facts, build the plan, publish it
//!   - facts::gather(): one-shot hardware queries
//!   - plan::PropertyPlan: pure facts -> properties mapping
//!   - publish::publish(): best-effort writes into a PropertyStore
//!   - dry_run(): run against an in-memory store and return the writes
//!
//! DEPENDS_ON: sysprop (property store seam)
//! INVARIANTS:
//!   - Runs to completion exactly once; no failure aborts boot
//!   - Board variant keys are only written for the configured codename
//!
//! The hook runs in four stages: boot reason, RAM tier, board variant, publish.
//! Each stage hands an immutable value to the next; nothing is kept in globals.

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]

pub mod boot_reason;
pub mod cmdline;
pub mod config;
pub mod error;
pub mod facts;
mod kernel_fs;
pub mod memory;
pub mod plan;
pub mod publish;
pub mod variant;

use log::{info, warn};
use sysprop::{MemoryStore, PropertyStore};

pub use config::Config;
pub use facts::{device_codename, DeviceFacts};
pub use plan::{PropertyAssignment, PropertyPlan};
pub use publish::PublishReport;

/// Runs the whole hook against `store`.
pub fn load_properties(config: &Config, store: &dyn PropertyStore) -> PublishReport {
    let facts = facts::gather(config, store);
    let plan = PropertyPlan::build(&facts);
    let report = publish::publish(store, &plan);
    if report.is_complete() {
        info!("land-init: published {} properties", report.written);
    } else {
        warn!(
            "land-init: published {} properties, {} failed",
            report.written,
            report.failed.len()
        );
    }
    report
}

/// Runs the hook against an in-memory store whose codename property holds
/// `device`, returning the writes in publication order.
pub fn dry_run(config: &Config, device: Option<String>) -> Vec<(String, String)> {
    let store = MemoryStore::with_properties(
        device.map(|codename| (config.device_property.clone(), codename)),
    );
    load_properties(config, &store);
    store.journal()
}
