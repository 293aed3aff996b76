//! Deep links that carry a whole search in the address bar.

use crate::search::SearchOptions;
use crate::AppError;

/// Query parameter holding the JSON-encoded [`SearchOptions`].
pub const SEARCH_OPTIONS_PARAM: &str = "searchOptions";

/// Path of the search page, relative to the application base.
pub const SEARCH_PAGE_PATH: &str = "/page/search";

/// Build a link that reopens the search page with `options`.
///
/// `base_path` is the application root without a trailing slash, e.g.
/// `https://repo.example.edu/institution`.
pub fn share_search_link(base_path: &str, options: &SearchOptions) -> Result<String, AppError> {
    let json = serde_json::to_string(options)
        .map_err(|e| AppError::internal(format!("Failed to encode search options: {e}")))?;
    Ok(format!(
        "{}{SEARCH_PAGE_PATH}?{SEARCH_OPTIONS_PARAM}={}",
        base_path.trim_end_matches('/'),
        urlencoding::encode(&json)
    ))
}

/// Recover the options from a query string (with or without the leading `?`).
///
/// Returns `Ok(None)` when the parameter is absent and an error when it is
/// present but does not decode to a valid record.
pub fn parse_share_query(query: &str) -> Result<Option<SearchOptions>, AppError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let Some(raw) = query.split('&').find_map(|pair| {
        pair.split_once('=')
            .filter(|(key, _)| *key == SEARCH_OPTIONS_PARAM)
            .map(|(_, value)| value)
    }) else {
        return Ok(None);
    };

    // Form encoders write spaces as '+', which percent-decoding leaves alone.
    let raw = raw.replace('+', "%20");
    let json = urlencoding::decode(&raw)
        .map_err(|e| AppError::bad_request(format!("Malformed searchOptions parameter: {e}")))?;
    let options: SearchOptions = serde_json::from_str(&json)
        .map_err(|e| AppError::bad_request(format!("Invalid searchOptions parameter: {e}")))?;
    if options.first_result_offset().is_none() {
        return Err(AppError::bad_request(format!(
            "searchOptions page {} of {} rows is out of range",
            options.current_page, options.rows_per_page
        )));
    }
    Ok(Some(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DisplayMode, SortOrder};
    use crate::status::ItemStatus;
    use pretty_assertions::assert_eq;

    fn shared_options() -> SearchOptions {
        SearchOptions {
            rows_per_page: 10,
            current_page: 0,
            sort_order: Some(SortOrder::Rank),
            raw_mode: false,
            status: Some(vec![ItemStatus::Live, ItemStatus::Review]),
            search_attachments: Some(true),
            query: Some(String::new()),
            collections: Some(vec![]),
            mime_type_filters: Some(vec![]),
            display_mode: Some(DisplayMode::List),
            date_range_quick_mode_enabled: Some(true),
            ..SearchOptions::default()
        }
    }

    #[test]
    fn link_encodes_options_as_json() {
        let link = share_search_link("http://localhost:8080/vanilla", &shared_options()).unwrap();
        let expected_json = r#"{"rowsPerPage":10,"currentPage":0,"sortOrder":"rank","rawMode":false,"status":["LIVE","REVIEW"],"searchAttachments":true,"query":"","collections":[],"mimeTypeFilters":[],"displayMode":"list","dateRangeQuickModeEnabled":true}"#;
        assert_eq!(
            link,
            format!(
                "http://localhost:8080/vanilla/page/search?searchOptions={}",
                urlencoding::encode(expected_json)
            )
        );
    }

    #[test]
    fn link_round_trips_to_an_equal_record() {
        let options = shared_options();
        let link = share_search_link("http://localhost:8080/vanilla/", &options).unwrap();
        let (_, query) = link.split_once('?').unwrap();
        assert_eq!(parse_share_query(query).unwrap(), Some(options));
    }

    #[test]
    fn missing_parameter_is_none() {
        assert_eq!(parse_share_query("").unwrap(), None);
        assert_eq!(parse_share_query("?foo=bar").unwrap(), None);
    }

    #[test]
    fn garbage_parameter_is_an_error() {
        assert!(parse_share_query("searchOptions=not-json").is_err());
        assert!(parse_share_query("searchOptions=%7B%22sortOrder%22%3A%22bogus%22%7D").is_err());
    }

    #[test]
    fn out_of_range_paging_is_rejected() {
        let json = r#"{"rowsPerPage":100000,"currentPage":100000}"#;
        let query = format!("searchOptions={}", urlencoding::encode(json));
        let err = parse_share_query(&query).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");

        let json = r#"{"rowsPerPage":50,"currentPage":1000}"#;
        let query = format!("searchOptions={}", urlencoding::encode(json));
        let parsed = parse_share_query(&query).unwrap().unwrap();
        assert_eq!(parsed.first_result_offset(), Some(50_000));
    }

    #[test]
    fn plus_is_read_as_space() {
        let parsed = parse_share_query(
            "searchOptions=%7B%22rowsPerPage%22%3A10%2C%22currentPage%22%3A0%2C%22query%22%3A%22a+b%22%7D",
        )
        .unwrap()
        .unwrap();
        assert_eq!(parsed.query.as_deref(), Some("a b"));
    }
}
