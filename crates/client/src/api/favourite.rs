use shared_types::{
    AddFavouriteItemRequest, AddFavouriteSearchRequest, AppError, FavouriteItem, FavouriteSearch,
    SearchOptions,
};

use crate::{send_empty, send_json, Client};

impl Client {
    /// Bookmark an item. `item_key` is `uuid/version`.
    #[tracing::instrument(skip(self, keywords))]
    pub async fn add_favourite_item(
        &self,
        item_key: &str,
        keywords: Vec<String>,
        is_always_latest: bool,
    ) -> Result<FavouriteItem, AppError> {
        let body = AddFavouriteItemRequest {
            item_id: item_key.to_string(),
            keywords,
            is_always_latest,
        };
        let item: FavouriteItem = send_json(self.post("favourite/item").json(&body)).await?;
        tracing::info!(bookmark_id = item.bookmark_id, "Favourite added");
        Ok(item)
    }

    /// Remove a bookmark.
    ///
    /// The id is optional so callers can pass a result's `bookmark_id`
    /// directly; `None` is rejected without contacting the server.
    #[tracing::instrument(skip(self))]
    pub async fn delete_favourite_item(&self, bookmark_id: Option<u64>) -> Result<(), AppError> {
        let Some(id) = bookmark_id else {
            tracing::error!("Attempted to delete a favourite without a bookmark id");
            return Err(AppError::bad_request("No bookmark ID provided"));
        };
        send_empty(self.delete(&format!("favourite/item/{id}"))).await
    }

    /// Save the search described by `options` under `name`.
    #[tracing::instrument(skip(self, options))]
    pub async fn add_favourite_search(
        &self,
        name: &str,
        options: &SearchOptions,
    ) -> Result<FavouriteSearch, AppError> {
        let body = AddFavouriteSearchRequest::new(name, options)?;
        let saved: FavouriteSearch = send_json(self.post("favourite/search").json(&body)).await?;
        tracing::info!(id = saved.id, "Favourite search saved");
        Ok(saved)
    }
}
