use shared_types::{AdvancedSearchDefinition, AdvancedSearchSummary, AppError};

use crate::{send_json, Client};

impl Client {
    #[tracing::instrument(skip(self))]
    pub async fn list_advanced_searches(&self) -> Result<Vec<AdvancedSearchSummary>, AppError> {
        send_json(self.get("settings/advancedsearch")).await
    }

    /// Wizard controls of one advanced search.
    #[tracing::instrument(skip(self))]
    pub async fn get_advanced_search(&self, uuid: &str) -> Result<AdvancedSearchDefinition, AppError> {
        let mut definition: AdvancedSearchDefinition = send_json(
            self.get(&format!("settings/advancedsearch/{}", urlencoding::encode(uuid))),
        )
        .await?;
        if definition.id.is_empty() {
            definition.id = uuid.to_string();
        }
        Ok(definition)
    }
}
