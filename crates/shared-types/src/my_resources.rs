use crate::status::{non_deleted_statuses, ItemStatus, LIVE_STATUSES};
use crate::user::CurrentUserDetails;

/// The views offered by the "my resources" page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MyResourcesType {
    #[default]
    Published,
    Drafts,
    Scrapbook,
    ModerationQueue,
    Archive,
    AllResources,
}

pub const ALL_MY_RESOURCES_TYPES: &[MyResourcesType] = &[
    MyResourcesType::Published,
    MyResourcesType::Drafts,
    MyResourcesType::Scrapbook,
    MyResourcesType::ModerationQueue,
    MyResourcesType::Archive,
    MyResourcesType::AllResources,
];

impl MyResourcesType {
    pub fn display_name(&self) -> &'static str {
        match self {
            MyResourcesType::Published => "Published",
            MyResourcesType::Drafts => "Drafts",
            MyResourcesType::Scrapbook => "Scrapbook",
            MyResourcesType::ModerationQueue => "Moderation queue",
            MyResourcesType::Archive => "Archive",
            MyResourcesType::AllResources => "All resources",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        ALL_MY_RESOURCES_TYPES
            .iter()
            .copied()
            .find(|t| t.display_name() == name)
    }

    /// Statuses searched for this view.
    pub fn statuses(&self) -> Vec<ItemStatus> {
        match self {
            MyResourcesType::Published => LIVE_STATUSES.to_vec(),
            MyResourcesType::Drafts => vec![ItemStatus::Draft],
            MyResourcesType::Scrapbook => vec![ItemStatus::Personal],
            MyResourcesType::ModerationQueue => vec![
                ItemStatus::Moderating,
                ItemStatus::Rejected,
                ItemStatus::Review,
            ],
            MyResourcesType::Archive => vec![ItemStatus::Archived],
            MyResourcesType::AllResources => non_deleted_statuses(),
        }
    }

    /// Views spanning several statuses let the user narrow them down.
    pub fn shows_status_selector(&self) -> bool {
        matches!(
            self,
            MyResourcesType::ModerationQueue | MyResourcesType::AllResources
        )
    }

    /// Scrapbook items belong to no collection.
    pub fn shows_collection_selector(&self) -> bool {
        *self != MyResourcesType::Scrapbook
    }
}

/// The views `user` may pick from. Scrapbook is left out without access.
pub fn my_resources_types_for(user: Option<&CurrentUserDetails>) -> Vec<MyResourcesType> {
    let scrapbook = user.is_some_and(CurrentUserDetails::has_scrapbook_access);
    ALL_MY_RESOURCES_TYPES
        .iter()
        .copied()
        .filter(|t| scrapbook || *t != MyResourcesType::Scrapbook)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_view_has_its_status_set() {
        assert_eq!(
            MyResourcesType::Published.statuses(),
            vec![ItemStatus::Live, ItemStatus::Review]
        );
        assert_eq!(MyResourcesType::Scrapbook.statuses(), vec![ItemStatus::Personal]);
        assert_eq!(
            MyResourcesType::ModerationQueue.statuses(),
            vec![ItemStatus::Moderating, ItemStatus::Rejected, ItemStatus::Review]
        );
        assert!(!MyResourcesType::AllResources
            .statuses()
            .contains(&ItemStatus::Deleted));
    }

    #[test]
    fn display_names_round_trip() {
        for t in ALL_MY_RESOURCES_TYPES {
            assert_eq!(MyResourcesType::from_display_name(t.display_name()), Some(*t));
        }
        assert_eq!(MyResourcesType::from_display_name("Trash"), None);
    }

    fn user(guest: bool) -> CurrentUserDetails {
        CurrentUserDetails {
            id: "u1".to_string(),
            username: "user".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email_address: None,
            guest,
            can_download_search_result: false,
        }
    }

    #[test]
    fn scrapbook_needs_access() {
        assert!(my_resources_types_for(Some(&user(false))).contains(&MyResourcesType::Scrapbook));
        let guest_views = my_resources_types_for(Some(&user(true)));
        assert!(!guest_views.contains(&MyResourcesType::Scrapbook));
        assert_eq!(guest_views.len(), ALL_MY_RESOURCES_TYPES.len() - 1);
        assert!(!my_resources_types_for(None).contains(&MyResourcesType::Scrapbook));
    }

    #[test]
    fn refine_sections_depend_on_the_view() {
        assert!(MyResourcesType::ModerationQueue.shows_status_selector());
        assert!(MyResourcesType::AllResources.shows_status_selector());
        assert!(!MyResourcesType::Published.shows_status_selector());
        assert!(!MyResourcesType::Scrapbook.shows_collection_selector());
        assert!(MyResourcesType::Drafts.shows_collection_selector());
    }
}
