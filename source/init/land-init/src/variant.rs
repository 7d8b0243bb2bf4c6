// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Board revision table for the land hardware family
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Stable
//! TEST_COVERAGE: 6 unit tests
//!
//! Board revisions are matched exactly against [`BOARD_VARIANTS`]. Unknown or
//! empty ids publish no display build id but still receive a model name.

use std::fmt;

/// Command line key carrying the board revision.
pub const BOARD_ID_KEY: &str = "board_id";

/// Property naming the device codename.
pub const DEVICE_PROPERTY: &str = "ro.cm.device";

/// Codename of the only device the board table applies to.
pub const DEVICE_CODENAME: &str = "land";

/// Value published to enable the vendor media parsers.
pub const MEDIA_PARSER_FLAGS: &str = "196495";

/// Board id of the Redmi 3X.
pub const REDMI_3X_BOARD_ID: &str = "S88537AB1";

/// Manufacturer hardware revision identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardId(String);

impl BoardId {
    /// Builds a board id from a `board_id` command line value, keeping only
    /// the segment before the first `:`.
    pub fn from_cmdline_value(value: &str) -> Self {
        let head = value.split(':').next().unwrap_or_default();
        Self(head.to_string())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no board id was found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-revision build metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardVariant {
    /// Board id this row applies to.
    pub board_id: &'static str,
    /// `ro.build.display.wtid` value.
    pub display_id: &'static str,
    /// `mm.enable.qcom_parser` value, when the revision needs it.
    pub media_parser: Option<&'static str>,
}

/// Known land board revisions.
pub const BOARD_VARIANTS: [BoardVariant; 6] = [
    BoardVariant {
        board_id: "S88537AA1",
        display_id: "SW_S88537AA1_V079_M20_MP_XM",
        media_parser: None,
    },
    BoardVariant {
        board_id: "S88537AB1",
        display_id: "SW_S88537AB1_V079_M20_MP_XM",
        media_parser: None,
    },
    BoardVariant {
        board_id: "S88537AC1",
        display_id: "SW_S88537AC1_V079_M20_MP_XM",
        media_parser: None,
    },
    BoardVariant {
        board_id: "S88537BA1",
        display_id: "SW_S88537BA1_V079_M20_MP_XM",
        media_parser: Some(MEDIA_PARSER_FLAGS),
    },
    BoardVariant {
        board_id: "S88537CA1",
        display_id: "SW_S88537CA1_V079_M20_MP_XM",
        media_parser: Some(MEDIA_PARSER_FLAGS),
    },
    BoardVariant {
        board_id: "S88537EC1",
        display_id: "SW_S88537EC1_V079_M20_MP_XM",
        media_parser: Some(MEDIA_PARSER_FLAGS),
    },
];

/// Finds the table row for `board`.
pub fn lookup(board: &BoardId) -> Option<&'static BoardVariant> {
    BOARD_VARIANTS
        .iter()
        .find(|variant| variant.board_id == board.as_str())
}

/// Marketing model name for `board`.
pub fn model_name(board: &BoardId) -> &'static str {
    if board.as_str() == REDMI_3X_BOARD_ID {
        "Redmi 3X"
    } else {
        "Redmi 3S"
    }
}
