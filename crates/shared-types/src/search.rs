use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::date_range::LastModifiedDateRange;
use crate::drm::DrmStatus;
use crate::status::{ItemStatus, LIVE_STATUSES};
use crate::user::UserDetails;
use crate::wizard::WizardFieldValue;
use crate::AppError;

/// Marker appended to a query to request prefix matching.
pub const WILDCARD: char = '*';

/// Default page size of the search page.
pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;

/// Page sizes offered by the pagination control.
pub const ROWS_PER_PAGE_OPTIONS: &[u32] = &[10, 25, 50];

/// Ordering of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Rank,
    DateModified,
    DateCreated,
    Name,
    Rating,
}

/// Every sort order, in the order the selector lists them.
pub const ALL_SORT_ORDERS: &[SortOrder] = &[
    SortOrder::Rank,
    SortOrder::DateModified,
    SortOrder::DateCreated,
    SortOrder::Name,
    SortOrder::Rating,
];

impl SortOrder {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Rank => "rank",
            SortOrder::DateModified => "datemodified",
            SortOrder::DateCreated => "datecreated",
            SortOrder::Name => "name",
            SortOrder::Rating => "rating",
        }
    }

    /// Human-readable name for display in selectors.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Rank => "Relevance",
            SortOrder::DateModified => "Date last modified",
            SortOrder::DateCreated => "Date created",
            SortOrder::Name => "Title",
            SortOrder::Rating => "User rating",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    /// Strict parse: an out-of-enumeration value is a schema mismatch, not a
    /// reason to fall back to the server default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SORT_ORDERS
            .iter()
            .copied()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| AppError::bad_request(format!("Unknown sort order: {s}")))
    }
}

/// How results are laid out on the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    #[serde(rename = "list")]
    List,
    #[serde(rename = "gallery-image")]
    GalleryImage,
    #[serde(rename = "gallery-video")]
    GalleryVideo,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::List => "list",
            DisplayMode::GalleryImage => "gallery-image",
            DisplayMode::GalleryVideo => "gallery-video",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DisplayMode::List => "List",
            DisplayMode::GalleryImage => "Image gallery",
            DisplayMode::GalleryVideo => "Video gallery",
        }
    }

    pub fn is_gallery(&self) -> bool {
        !matches!(self, DisplayMode::List)
    }
}

/// A searchable collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Collection {
    pub uuid: String,
    pub name: String,
}

/// A named group of MIME types offered as a single search filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MimeTypeFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub mime_types: Vec<String>,
}

/// Terms picked from one classification facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCategories {
    pub id: u64,
    pub schema_node: String,
    pub categories: Vec<String>,
}

/// Everything the search page knows about the current search.
///
/// Field order is the order of keys in a shared search link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub rows_per_page: u32,
    pub current_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(default)]
    pub raw_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<ItemStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_attachments: Option<bool>,
    /// `None` means no query was entered, which is not the same as `""`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<Collection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_range: Option<LastModifiedDateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type_filters: Option<Vec<MimeTypeFilter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<DisplayMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range_quick_mode_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_categories: Option<Vec<SelectedCategories>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_attachments: Option<bool>,
    /// Values entered on the advanced search panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_search_criteria: Option<Vec<WizardFieldValue>>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            current_page: 0,
            sort_order: None,
            raw_mode: false,
            status: None,
            search_attachments: None,
            query: None,
            collections: None,
            last_modified_date_range: None,
            owner: None,
            mime_types: None,
            mime_type_filters: None,
            display_mode: None,
            date_range_quick_mode_enabled: None,
            selected_categories: None,
            include_attachments: None,
            advanced_search_criteria: None,
        }
    }
}

/// Trim `query` and, when asked and there is something left, append a
/// single wildcard marker.
pub fn format_query(query: &str, add_wildcard: bool) -> String {
    let trimmed = query.trim();
    if add_wildcard && !trimmed.is_empty() {
        format!("{trimmed}{WILDCARD}")
    } else {
        trimmed.to_string()
    }
}

impl SearchOptions {
    /// Build the wire-level request for these options.
    pub fn to_search_params(&self) -> SearchParams {
        let query = self
            .query
            .as_deref()
            .map(|q| format_query(q, !self.raw_mode))
            .filter(|q| !q.is_empty());

        let mime_types = match (&self.mime_types, &self.mime_type_filters) {
            (Some(types), _) => types.clone(),
            (None, Some(filters)) => filters
                .iter()
                .flat_map(|f| f.mime_types.iter().cloned())
                .collect(),
            (None, None) => Vec::new(),
        };

        let display_mode = self.display_mode.unwrap_or_default();
        let include_attachments = self
            .include_attachments
            .unwrap_or_else(|| display_mode.is_gallery());

        let categories = self
            .selected_categories
            .iter()
            .flatten()
            .filter(|c| !c.categories.is_empty())
            .map(|c| (c.schema_node.clone(), c.categories.clone()));
        let criteria = self
            .advanced_search_criteria
            .iter()
            .flatten()
            .filter(|c| !c.values.is_empty())
            .map(|c| (c.schema_node.clone(), c.values.clone()));
        let musts = categories.chain(criteria).collect();

        let range = self.last_modified_date_range.as_ref();

        SearchParams {
            query,
            start: self.first_result_offset().unwrap_or(u32::MAX),
            length: self.rows_per_page,
            status: self
                .status
                .clone()
                .unwrap_or_else(|| LIVE_STATUSES.to_vec()),
            order: self.sort_order,
            collections: self
                .collections
                .iter()
                .flatten()
                .map(|c| c.uuid.clone())
                .collect(),
            owner: self.owner.as_ref().map(|o| o.id.clone()),
            modified_after: range.and_then(|r| r.modified_after.clone()),
            modified_before: range.and_then(|r| r.modified_before.clone()),
            mime_types,
            search_attachments: self.search_attachments,
            include_attachments,
            musts,
        }
    }

    /// Index of the first result on the current page, or `None` when the
    /// page lies beyond what a `u32` offset can address.
    pub fn first_result_offset(&self) -> Option<u32> {
        self.current_page.checked_mul(self.rows_per_page)
    }

    /// The one selected collection, if exactly one is selected.
    pub fn single_collection(&self) -> Option<&Collection> {
        match self.collections.as_deref() {
            Some([only]) => Some(only),
            _ => None,
        }
    }

    /// Copy of these options pointing at another page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            current_page: page,
            ..self.clone()
        }
    }

    /// Copy of these options with a new query. A query change always
    /// returns to the first page.
    pub fn with_query(&self, query: Option<String>) -> Self {
        Self {
            query,
            current_page: 0,
            ..self.clone()
        }
    }
}

/// Request parameters for the search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: Option<String>,
    pub start: u32,
    pub length: u32,
    pub status: Vec<ItemStatus>,
    pub order: Option<SortOrder>,
    pub collections: Vec<String>,
    pub owner: Option<String>,
    pub modified_after: Option<String>,
    pub modified_before: Option<String>,
    pub mime_types: Vec<String>,
    pub search_attachments: Option<bool>,
    pub include_attachments: bool,
    /// `(schema node, accepted terms)` pairs that every result must match.
    pub musts: Vec<(String, Vec<String>)>,
}

impl SearchParams {
    /// Render as query-string pairs. List values repeat their key.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut push = |key: &str, value: String| pairs.push((key.to_string(), value));

        if let Some(query) = &self.query {
            push("query", query.clone());
        }
        push("start", self.start.to_string());
        push("length", self.length.to_string());
        for status in &self.status {
            push("status", status.as_str().to_string());
        }
        if let Some(order) = self.order {
            push("order", order.as_str().to_string());
        }
        for collection in &self.collections {
            push("collections", collection.clone());
        }
        if let Some(owner) = &self.owner {
            push("owner", owner.clone());
        }
        if let Some(after) = &self.modified_after {
            push("modifiedAfter", after.clone());
        }
        if let Some(before) = &self.modified_before {
            push("modifiedBefore", before.clone());
        }
        for mime_type in &self.mime_types {
            push("mimeTypes", mime_type.clone());
        }
        if let Some(search_attachments) = self.search_attachments {
            push("searchAttachments", search_attachments.to_string());
        }
        push("includeAttachments", self.include_attachments.to_string());
        for (node, terms) in &self.musts {
            for term in terms {
                push("musts", format!("{node}:{term}"));
            }
        }
        pairs
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub start: u32,
    pub length: u32,
    pub available: u32,
    pub results: Vec<T>,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            start: 0,
            length: DEFAULT_ROWS_PER_PAGE,
            available: 0,
            results: Vec::new(),
        }
    }
}

impl<T> PagedResult<T> {
    /// Number of pages needed for `available` results at `rows_per_page`.
    pub fn page_count(&self, rows_per_page: u32) -> u32 {
        if rows_per_page == 0 {
            return 1;
        }
        self.available.div_ceil(rows_per_page).max(1)
    }
}

/// A custom metadata field shown under a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayField {
    pub name: String,
    pub html: String,
}

/// An attachment summary on a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentSummary {
    pub id: String,
    pub description: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub preview: bool,
}

/// One item in a page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub uuid: String,
    pub version: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ItemStatus,
    pub created_date: String,
    pub modified_date: String,
    #[serde(default)]
    pub collection_id: Option<String>,
    #[serde(default)]
    pub comment_count: Option<u32>,
    #[serde(default = "no_rating")]
    pub star_ratings: f32,
    #[serde(default)]
    pub attachments: Vec<AttachmentSummary>,
    #[serde(default)]
    pub display_fields: Vec<DisplayField>,
    #[serde(default)]
    pub bookmark_id: Option<u64>,
    #[serde(default = "latest_by_default")]
    pub is_latest_version: bool,
    #[serde(default)]
    pub drm_status: Option<DrmStatus>,
}

fn no_rating() -> f32 {
    -1.0
}

fn latest_by_default() -> bool {
    true
}

impl SearchResultItem {
    /// `uuid/version`, the key used by favourites and selection.
    pub fn item_key(&self) -> String {
        format!("{}/{}", self.uuid, self.version)
    }

    /// Title to show, falling back to the uuid.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.uuid)
    }
}
