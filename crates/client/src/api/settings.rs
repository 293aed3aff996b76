use shared_types::{AppError, SearchSettings};

use crate::{send_empty, send_json, Client};

impl Client {
    #[tracing::instrument(skip(self))]
    pub async fn get_search_settings(&self) -> Result<SearchSettings, AppError> {
        send_json(self.get("settings/search")).await
    }

    /// Replace the search settings wholesale.
    #[tracing::instrument(skip(self, settings))]
    pub async fn update_search_settings(&self, settings: &SearchSettings) -> Result<(), AppError> {
        #[cfg(feature = "validation")]
        {
            use crate::error_convert::ValidateRequest;
            settings.validate_request()?;
        }
        send_empty(self.put("settings/search").json(settings)).await?;
        tracing::info!("Search settings saved");
        Ok(())
    }
}
