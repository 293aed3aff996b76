use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AppError;

/// Lifecycle status of a repository item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemStatus {
    Archived,
    Deleted,
    Draft,
    Live,
    Moderating,
    Personal,
    Rejected,
    Review,
    Suspended,
}

/// Statuses a default search is restricted to.
pub const LIVE_STATUSES: &[ItemStatus] = &[ItemStatus::Live, ItemStatus::Review];

/// Every status outside [`LIVE_STATUSES`].
pub const NON_LIVE_STATUSES: &[ItemStatus] = &[
    ItemStatus::Archived,
    ItemStatus::Deleted,
    ItemStatus::Draft,
    ItemStatus::Moderating,
    ItemStatus::Personal,
    ItemStatus::Rejected,
    ItemStatus::Suspended,
];

/// All statuses, live first.
pub fn all_statuses() -> Vec<ItemStatus> {
    LIVE_STATUSES
        .iter()
        .chain(NON_LIVE_STATUSES)
        .copied()
        .collect()
}

/// All statuses except `DELETED`.
pub fn non_deleted_statuses() -> Vec<ItemStatus> {
    all_statuses()
        .into_iter()
        .filter(|s| *s != ItemStatus::Deleted)
        .collect()
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Archived => "ARCHIVED",
            ItemStatus::Deleted => "DELETED",
            ItemStatus::Draft => "DRAFT",
            ItemStatus::Live => "LIVE",
            ItemStatus::Moderating => "MODERATING",
            ItemStatus::Personal => "PERSONAL",
            ItemStatus::Rejected => "REJECTED",
            ItemStatus::Review => "REVIEW",
            ItemStatus::Suspended => "SUSPENDED",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_statuses()
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::bad_request(format!("Unknown item status: {s}")))
    }
}

/// The status toggle on the refine panel: live items only, or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusSelection {
    #[default]
    Live,
    All,
}

impl StatusSelection {
    pub fn statuses(&self) -> Vec<ItemStatus> {
        match self {
            StatusSelection::Live => LIVE_STATUSES.to_vec(),
            StatusSelection::All => all_statuses(),
        }
    }

    /// Recover the toggle position from a status list. Anything other than
    /// exactly the live set reads as `All`.
    pub fn from_statuses(statuses: &[ItemStatus]) -> Self {
        let mut sorted = statuses.to_vec();
        sorted.sort();
        let mut live = LIVE_STATUSES.to_vec();
        live.sort();
        if sorted == live {
            StatusSelection::Live
        } else {
            StatusSelection::All
        }
    }
}
