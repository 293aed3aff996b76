use serde::{Deserialize, Serialize};

use crate::search::SearchOptions;
use crate::share::share_search_link;
use crate::AppError;

/// Request to add an item to the current user's favourites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavouriteItemRequest {
    /// `uuid/version` of the item.
    #[serde(rename = "itemID")]
    pub item_id: String,
    pub keywords: Vec<String>,
    pub is_always_latest: bool,
}

/// Server response to an added favourite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavouriteItem {
    #[serde(rename = "itemID")]
    pub item_id: String,
    #[serde(rename = "bookmarkID")]
    pub bookmark_id: u64,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, rename = "isAlwaysLatest")]
    pub is_always_latest: bool,
}

/// Request to save a search under a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFavouriteSearchRequest {
    pub name: String,
    /// Root-relative link that reopens the search.
    pub url: String,
}

impl AddFavouriteSearchRequest {
    /// A named favourite pointing at `options`. The name is trimmed and
    /// must not be blank.
    pub fn new(name: &str, options: &SearchOptions) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request("A favourite search needs a name"));
        }
        Ok(Self {
            name: name.to_string(),
            url: share_search_link("", options)?,
        })
    }
}

/// A saved search as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavouriteSearch {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// Split a free-text tag field into individual tags.
///
/// Tags are separated by commas or whitespace; empty tags are dropped.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
