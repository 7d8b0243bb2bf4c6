// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Writes a [`PropertyPlan`] into a property store.

use log::{debug, warn};
use sysprop::{PropertyError, PropertyStore};

use crate::plan::PropertyPlan;

/// Outcome of a publish pass.
#[derive(Debug, Default)]
pub struct PublishReport {
    /// Number of keys written successfully.
    pub written: usize,
    /// Keys the store refused, with the reason.
    pub failed: Vec<(&'static str, PropertyError)>,
}

impl PublishReport {
    /// True when every planned key was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Publishes every assignment of `plan`, continuing past failures.
pub fn publish(store: &dyn PropertyStore, plan: &PropertyPlan) -> PublishReport {
    let mut report = PublishReport::default();
    for assignment in plan.iter() {
        match store.set(assignment.key, &assignment.value) {
            Ok(()) => {
                debug!("land-init: {}={}", assignment.key, assignment.value);
                report.written += 1;
            }
            Err(err) => {
                warn!("land-init: failed to set {}: {err}", assignment.key);
                report.failed.push((assignment.key, err));
            }
        }
    }
    report
}
