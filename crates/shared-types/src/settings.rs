use serde::{Deserialize, Serialize};

use crate::search::SortOrder;

/// Server-held configuration of the search page. Read and written whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
#[serde(rename_all = "camelCase", default)]
pub struct SearchSettings {
    pub searching_show_non_live_checkbox: bool,
    pub searching_disable_gallery: bool,
    pub searching_disable_videos: bool,
    pub searching_disable_owner_filter: bool,
    pub searching_disable_date_modified_filter: bool,
    pub file_count_disabled: bool,
    pub default_search_sort: SortOrder,
    pub authenticate_feeds_by_default: bool,
    #[cfg_attr(
        feature = "validation",
        validate(range(max = 2, message = "URL level must be between 0 and 2"))
    )]
    pub url_level: u8,
    #[cfg_attr(
        feature = "validation",
        validate(range(max = 8, message = "Boost must be between 0 and 8"))
    )]
    pub title_boost: u8,
    #[cfg_attr(
        feature = "validation",
        validate(range(max = 8, message = "Boost must be between 0 and 8"))
    )]
    pub description_boost: u8,
    #[cfg_attr(
        feature = "validation",
        validate(range(max = 8, message = "Boost must be between 0 and 8"))
    )]
    pub attachment_boost: u8,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            searching_show_non_live_checkbox: false,
            searching_disable_gallery: false,
            searching_disable_videos: false,
            searching_disable_owner_filter: false,
            searching_disable_date_modified_filter: false,
            file_count_disabled: false,
            default_search_sort: SortOrder::Rank,
            authenticate_feeds_by_default: false,
            url_level: 0,
            title_boost: 0,
            description_boost: 0,
            attachment_boost: 0,
        }
    }
}

impl SearchSettings {
    /// Display modes the search page may offer under these settings.
    pub fn available_display_modes(&self) -> Vec<crate::search::DisplayMode> {
        use crate::search::DisplayMode;
        let mut modes = vec![DisplayMode::List];
        if !self.searching_disable_gallery {
            modes.push(DisplayMode::GalleryImage);
        }
        if !self.searching_disable_videos {
            modes.push(DisplayMode::GalleryVideo);
        }
        modes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DisplayMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_gives_defaults() {
        let settings: SearchSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, SearchSettings::default());
        assert_eq!(settings.default_search_sort, SortOrder::Rank);
    }

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "searchingShowNonLiveCheckbox": true,
            "searchingDisableGallery": true,
            "defaultSearchSort": "datemodified",
            "urlLevel": 2,
            "titleBoost": 5
        }"#;
        let settings: SearchSettings = serde_json::from_str(json).unwrap();
        assert!(settings.searching_show_non_live_checkbox);
        assert_eq!(settings.default_search_sort, SortOrder::DateModified);
        assert_eq!(settings.url_level, 2);
        assert_eq!(settings.title_boost, 5);
        assert_eq!(settings.attachment_boost, 0);
    }

    #[test]
    fn unknown_sort_order_is_rejected() {
        let result = serde_json::from_str::<SearchSettings>(r#"{"defaultSearchSort":"bogus"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn disabled_modes_are_hidden() {
        let settings = SearchSettings {
            searching_disable_videos: true,
            ..SearchSettings::default()
        };
        assert_eq!(
            settings.available_display_modes(),
            vec![DisplayMode::List, DisplayMode::GalleryImage]
        );
    }

    #[cfg(feature = "validation")]
    #[test]
    fn out_of_range_boost_fails_validation() {
        use validator::Validate;
        let settings = SearchSettings {
            title_boost: 9,
            url_level: 3,
            ..SearchSettings::default()
        };
        let err: crate::AppError = settings.validate().unwrap_err().into();
        assert!(err.field_errors.contains_key("title_boost"));
        assert!(err.field_errors.contains_key("url_level"));
    }
}
