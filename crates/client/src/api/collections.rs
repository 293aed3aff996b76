use shared_types::{AppError, Collection, MimeTypeFilter, PagedResult};

use crate::{send_json, Client};

impl Client {
    /// Collections the current user may search.
    #[tracing::instrument(skip(self))]
    pub async fn list_collections(&self) -> Result<Vec<Collection>, AppError> {
        let page: PagedResult<Collection> =
            send_json(self.get("collection/").query(&[("privilege", "SEARCH_COLLECTION")])).await?;
        Ok(page.results)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_mime_type_filters(&self) -> Result<Vec<MimeTypeFilter>, AppError> {
        send_json(self.get("settings/search/filter")).await
    }
}
