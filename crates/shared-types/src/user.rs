use serde::{Deserialize, Serialize};

/// A user as returned by the user query endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserDetails {
    /// "First Last (username)", or just the username when no name is known.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            format!("{full} ({})", self.username)
        }
    }
}

/// The signed-in user, as reported by `content/currentuser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserDetails {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default)]
    pub guest: bool,
    #[serde(default)]
    pub can_download_search_result: bool,
}

impl CurrentUserDetails {
    /// The user as a search owner filter.
    pub fn as_owner(&self) -> UserDetails {
        UserDetails {
            id: self.id.clone(),
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email_address.clone(),
        }
    }

    /// Guests have no scrapbook.
    pub fn has_scrapbook_access(&self) -> bool {
        !self.guest
    }
}

/// A user group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDetails {
    pub id: String,
    pub name: String,
}

/// Body of a lookup request resolving ids to details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Response to a [`LookupRequest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<UserDetails>,
    #[serde(default)]
    pub groups: Vec<GroupDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_full_name() {
        let mut user = UserDetails {
            id: "1".to_string(),
            username: "jdoe".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: None,
        };
        assert_eq!(user.display_name(), "Jane Doe (jdoe)");
        user.first_name.clear();
        user.last_name.clear();
        assert_eq!(user.display_name(), "jdoe");
    }

    #[test]
    fn deserializes_camel_case_with_missing_names() {
        let user: UserDetails =
            serde_json::from_str(r#"{"id":"u1","username":"admin","firstName":"Ad"}"#).unwrap();
        assert_eq!(user.first_name, "Ad");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn current_user_becomes_an_owner_filter() {
        let user: CurrentUserDetails = serde_json::from_str(
            r#"{"id":"u1","username":"admin","firstName":"Ad","emailAddress":"a@b.c","canDownloadSearchResult":true}"#,
        )
        .unwrap();
        assert!(user.can_download_search_result);
        assert!(user.has_scrapbook_access());
        let owner = user.as_owner();
        assert_eq!(owner.id, "u1");
        assert_eq!(owner.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn guests_have_no_scrapbook() {
        let guest: CurrentUserDetails =
            serde_json::from_str(r#"{"id":"guest","username":"guest","guest":true}"#).unwrap();
        assert!(!guest.has_scrapbook_access());
        assert!(!guest.can_download_search_result);
    }
}
