use serde::Deserialize;
use shared_types::{
    sort_classifications, AppError, CategoryCount, Classification, PagedResult, SearchOptions,
    SearchResultItem,
};

use crate::{send_json, Client};

/// Classification facets configured by an administrator.
pub const FACET_SETTINGS_PATH: &str = "settings/facetedsearch/classification";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FacetSetting {
    id: u64,
    name: String,
    schema_node: String,
    #[serde(default)]
    max_results: Option<u32>,
    #[serde(default)]
    order_index: u32,
}

#[derive(Debug, Deserialize)]
struct FacetResults {
    #[serde(default)]
    results: Vec<CategoryCount>,
}

/// Terms shown per facet when a facet has no limit configured.
const DEFAULT_FACET_RESULTS: u32 = 10;

impl Client {
    /// Run a search.
    #[tracing::instrument(skip(self, options), fields(page = options.current_page))]
    pub async fn search(
        &self,
        options: &SearchOptions,
    ) -> Result<PagedResult<SearchResultItem>, AppError> {
        let params = options.to_search_params();
        let result: PagedResult<SearchResultItem> =
            send_json(self.get("search2").query(&params.to_query_pairs())).await?;
        tracing::debug!(available = result.available, "Search complete");
        Ok(result)
    }

    /// Facet counts for every configured classification, scoped to the
    /// current search. Classifications with no terms are dropped.
    #[tracing::instrument(skip(self, options))]
    pub async fn list_classifications(
        &self,
        options: &SearchOptions,
    ) -> Result<Vec<Classification>, AppError> {
        let settings: Vec<FacetSetting> = send_json(self.get(FACET_SETTINGS_PATH)).await?;
        let mut pairs = options.to_search_params().to_query_pairs();
        // Facets cover the whole result set, not one page.
        pairs.retain(|(key, _)| key != "start" && key != "length" && key != "order");

        let mut classifications = Vec::with_capacity(settings.len());
        for setting in settings {
            let mut query = pairs.clone();
            query.push(("nodes".to_string(), setting.schema_node.clone()));
            let facets: FacetResults = send_json(self.get("search2/facet").query(&query)).await?;
            if facets.results.is_empty() {
                continue;
            }
            classifications.push(Classification {
                id: setting.id,
                name: setting.name,
                schema_node: setting.schema_node,
                max_display_results: setting.max_results.unwrap_or(DEFAULT_FACET_RESULTS),
                categories: facets.results,
                order_index: setting.order_index,
            });
        }
        sort_classifications(&mut classifications);
        Ok(classifications)
    }
}
