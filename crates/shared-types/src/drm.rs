use serde::{Deserialize, Serialize};

/// DRM state of an item for the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrmStatus {
    pub terms_accepted: bool,
    pub is_allow_summary: bool,
}

impl Default for DrmStatus {
    /// Items without DRM behave as if the terms were already accepted.
    fn default() -> Self {
        Self {
            terms_accepted: true,
            is_allow_summary: true,
        }
    }
}

impl DrmStatus {
    /// Whether the terms dialog must be shown before the item can be opened.
    pub fn requires_acceptance(&self) -> bool {
        !self.terms_accepted
    }
}

/// Terms the user must agree to before viewing an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrmTerms {
    pub title: String,
    pub terms: String,
    #[serde(default)]
    pub regular_permission: Vec<String>,
    #[serde(default)]
    pub additional_permission: Vec<String>,
}
