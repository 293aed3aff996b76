use shared_types::{AppError, SearchOptions};

use crate::{send_empty, Client};

/// CSV export of a search, limited to one collection.
pub const EXPORT_PATH: &str = "search2/export";

/// Query for an export: the whole result set rather than one page.
fn export_pairs(options: &SearchOptions) -> Result<Vec<(String, String)>, AppError> {
    if options.single_collection().is_none() {
        return Err(AppError::bad_request(
            "Export is limited to exactly one collection",
        ));
    }
    let mut pairs = options.to_search_params().to_query_pairs();
    pairs.retain(|(key, _)| key != "start" && key != "length");
    Ok(pairs)
}

impl Client {
    /// Address the browser downloads the export from.
    pub fn export_url(&self, options: &SearchOptions) -> Result<String, AppError> {
        let pairs = export_pairs(options)?;
        reqwest::Url::parse_with_params(&self.url(EXPORT_PATH), &pairs)
            .map(String::from)
            .map_err(|e| AppError::internal(format!("Failed to build export URL: {e}")))
    }

    /// Ask the server whether the export would be allowed, without
    /// downloading it.
    #[tracing::instrument(skip(self, options))]
    pub async fn confirm_export(&self, options: &SearchOptions) -> Result<(), AppError> {
        let pairs = export_pairs(options)?;
        send_empty(self.head(EXPORT_PATH).query(&pairs)).await
    }
}
