//! Index-based list change records.

use serde::Serialize;

/// One atomic mutation of an ordered list.
///
/// Indices follow the usual incremental-list contract: `Removed` and the
/// source side of `Moved` refer to the list before the change, `Inserted`
/// and the target side of `Moved` refer to the list after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ListChange {
    /// A value was inserted at `index`.
    Inserted { index: usize },
    /// The value at `from` now lives at `to`.
    Moved { from: usize, to: usize },
    /// The value at `index` was removed.
    Removed { index: usize },
    /// The value at `index` was overwritten in place.
    Replaced { index: usize },
    /// The list was cleared or replaced wholesale.
    Reset,
}

impl ListChange {
    /// Short stable label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inserted { .. } => "inserted",
            Self::Moved { .. } => "moved",
            Self::Removed { .. } => "removed",
            Self::Replaced { .. } => "replaced",
            Self::Reset => "reset",
        }
    }
}
