use serde::Deserialize;
use shared_types::{
    AppError, CurrentUserDetails, GroupDetails, LookupRequest, LookupResponse, UserDetails,
};

use crate::{send_json, Client};

#[derive(Debug, Deserialize)]
struct UserQueryResult {
    #[serde(default)]
    users: Vec<UserDetails>,
}

impl Client {
    /// The signed-in user, or the guest account.
    #[tracing::instrument(skip(self))]
    pub async fn current_user(&self) -> Result<CurrentUserDetails, AppError> {
        send_json(self.get("content/currentuser")).await
    }

    /// Users matching `query`, optionally restricted to members of the
    /// given groups.
    #[tracing::instrument(skip(self))]
    pub async fn list_users(
        &self,
        query: &str,
        group_filter: &[String],
    ) -> Result<Vec<UserDetails>, AppError> {
        let mut pairs = vec![
            ("q".to_string(), query.to_string()),
            ("users".to_string(), "true".to_string()),
            ("groups".to_string(), "false".to_string()),
            ("roles".to_string(), "false".to_string()),
        ];
        pairs.extend(group_filter.iter().map(|g| ("byGroups".to_string(), g.clone())));
        let result: UserQueryResult = send_json(self.get("userquery/search").query(&pairs)).await?;
        Ok(result.users)
    }

    /// Details of the groups with the given ids. Unknown ids are skipped.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_groups(&self, ids: &[String]) -> Result<Vec<GroupDetails>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let body = LookupRequest {
            groups: ids.to_vec(),
            ..LookupRequest::default()
        };
        let response: LookupResponse =
            send_json(self.post("userquery/lookup").json(&body)).await?;
        Ok(response.groups)
    }
}
