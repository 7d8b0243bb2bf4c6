// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Bounded reads of procfs/sysfs style kernel files.

use std::fs;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::HardwareQueryError;

/// Reads the raw bytes of `path`, giving up after `timeout`.
///
/// Kernel interfaces are not guaranteed to be UTF-8; callers decode lossily so
/// one bad byte cannot hide the rest of the contents.
///
/// The read runs on a helper thread; a kernel interface that never returns
/// leaves that thread parked but lets boot carry on.
pub fn read_bounded(path: &Path, timeout: Duration) -> Result<Vec<u8>, HardwareQueryError> {
    let (tx, rx) = mpsc::channel();
    let owned = path.to_path_buf();
    thread::Builder::new()
        .name("land-init-read".into())
        .spawn(move || {
            let _ = tx.send(fs::read(&owned));
        })
        .map_err(|source| HardwareQueryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    match rx.recv_timeout(timeout) {
        Ok(Ok(contents)) => Ok(contents),
        Ok(Err(source)) => Err(HardwareQueryError::Io {
            path: path.to_path_buf(),
            source,
        }),
        Err(_) => Err(HardwareQueryError::Timeout {
            path: path.to_path_buf(),
            timeout,
        }),
    }
}
