use dioxus::prelude::*;
use shared_types::{SearchSettings, SortOrder, ALL_SORT_ORDERS};
use shared_ui::components::{
    toast_app_error, use_toast, Button, LabelledSelect, LabelledSwitch, SelectOption,
    SettingsListControl, ToastOptions,
};

use crate::AppContext;

/// On/off settings, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFlag {
    ShowNonLive,
    DisableGallery,
    DisableVideos,
    DisableOwnerFilter,
    DisableDateFilter,
    FileCountDisabled,
    AuthenticateFeeds,
}

const ALL_FLAGS: &[SettingsFlag] = &[
    SettingsFlag::ShowNonLive,
    SettingsFlag::DisableGallery,
    SettingsFlag::DisableVideos,
    SettingsFlag::DisableOwnerFilter,
    SettingsFlag::DisableDateFilter,
    SettingsFlag::FileCountDisabled,
    SettingsFlag::AuthenticateFeeds,
];

impl SettingsFlag {
    fn label(&self) -> &'static str {
        match self {
            SettingsFlag::ShowNonLive => "Show non-live checkbox",
            SettingsFlag::DisableGallery => "Disable image gallery",
            SettingsFlag::DisableVideos => "Disable video gallery",
            SettingsFlag::DisableOwnerFilter => "Disable owner filter",
            SettingsFlag::DisableDateFilter => "Disable date modified filter",
            SettingsFlag::FileCountDisabled => "Hide attachment counts",
            SettingsFlag::AuthenticateFeeds => "Authenticate feeds by default",
        }
    }

    fn get(&self, settings: &SearchSettings) -> bool {
        match self {
            SettingsFlag::ShowNonLive => settings.searching_show_non_live_checkbox,
            SettingsFlag::DisableGallery => settings.searching_disable_gallery,
            SettingsFlag::DisableVideos => settings.searching_disable_videos,
            SettingsFlag::DisableOwnerFilter => settings.searching_disable_owner_filter,
            SettingsFlag::DisableDateFilter => settings.searching_disable_date_modified_filter,
            SettingsFlag::FileCountDisabled => settings.file_count_disabled,
            SettingsFlag::AuthenticateFeeds => settings.authenticate_feeds_by_default,
        }
    }

    fn set(&self, settings: &mut SearchSettings, value: bool) {
        let field = match self {
            SettingsFlag::ShowNonLive => &mut settings.searching_show_non_live_checkbox,
            SettingsFlag::DisableGallery => &mut settings.searching_disable_gallery,
            SettingsFlag::DisableVideos => &mut settings.searching_disable_videos,
            SettingsFlag::DisableOwnerFilter => &mut settings.searching_disable_owner_filter,
            SettingsFlag::DisableDateFilter => &mut settings.searching_disable_date_modified_filter,
            SettingsFlag::FileCountDisabled => &mut settings.file_count_disabled,
            SettingsFlag::AuthenticateFeeds => &mut settings.authenticate_feeds_by_default,
        };
        *field = value;
    }
}

/// Bounded numeric settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsLevel {
    Url,
    TitleBoost,
    DescriptionBoost,
    AttachmentBoost,
}

const ALL_LEVELS: &[SettingsLevel] = &[
    SettingsLevel::Url,
    SettingsLevel::TitleBoost,
    SettingsLevel::DescriptionBoost,
    SettingsLevel::AttachmentBoost,
];

impl SettingsLevel {
    fn label(&self) -> &'static str {
        match self {
            SettingsLevel::Url => "URL level",
            SettingsLevel::TitleBoost => "Title boost",
            SettingsLevel::DescriptionBoost => "Description boost",
            SettingsLevel::AttachmentBoost => "Attachment content boost",
        }
    }

    fn max(&self) -> u8 {
        match self {
            SettingsLevel::Url => 2,
            _ => 8,
        }
    }

    fn field<'a>(&self, settings: &'a mut SearchSettings) -> &'a mut u8 {
        match self {
            SettingsLevel::Url => &mut settings.url_level,
            SettingsLevel::TitleBoost => &mut settings.title_boost,
            SettingsLevel::DescriptionBoost => &mut settings.description_boost,
            SettingsLevel::AttachmentBoost => &mut settings.attachment_boost,
        }
    }

    fn get(&self, settings: &SearchSettings) -> u8 {
        match self {
            SettingsLevel::Url => settings.url_level,
            SettingsLevel::TitleBoost => settings.title_boost,
            SettingsLevel::DescriptionBoost => settings.description_boost,
            SettingsLevel::AttachmentBoost => settings.attachment_boost,
        }
    }

    /// Store `value`, clamped to the allowed range.
    fn set(&self, settings: &mut SearchSettings, value: u8) {
        *self.field(settings) = value.min(self.max());
    }
}

/// Administration page for the server-held search settings.
#[component]
pub fn SearchSettingsPage() -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_toast();
    let mut settings = use_signal(SearchSettings::default);
    let mut loaded = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let load_client = ctx.client.clone();
    use_hook(move || {
        spawn(async move {
            match load_client.get_search_settings().await {
                Ok(current) => {
                    settings.set(current);
                    loaded.set(true);
                }
                Err(err) => toast_app_error(&toasts, "Could not load search settings", &err),
            }
        })
    });

    let save_client = ctx.client.clone();
    let save = move |_| {
        let client = save_client.clone();
        let current = settings();
        saving.set(true);
        spawn(async move {
            match client.update_search_settings(&current).await {
                Ok(()) => {
                    tracing::info!("Search settings saved");
                    toasts.success("Search settings saved".to_string(), ToastOptions::new());
                }
                Err(err) => toast_app_error(&toasts, "Could not save search settings", &err),
            }
            saving.set(false);
        });
    };

    let sort_options = ALL_SORT_ORDERS
        .iter()
        .map(|o| SelectOption::new(o.as_str(), o.display_name()))
        .collect::<Vec<_>>();
    let current = settings();

    rsx! {
        div { class: "search-settings-page",
            if !loaded() {
                p { class: "search-status", "Loading\u{2026}" }
            } else {
                div { class: "settings-list",
                    SettingsListControl {
                        primary_text: "Default sort order".to_string(),
                        secondary_text: "Used when a search starts without a sort".to_string(),
                        control: rsx! {
                            LabelledSelect {
                                value: current.default_search_sort.as_str().to_string(),
                                options: sort_options,
                                on_change: move |value: String| match value.parse::<SortOrder>() {
                                    Ok(order) => settings.write().default_search_sort = order,
                                    Err(err) => tracing::error!(%err, "Unknown default sort"),
                                },
                            }
                        },
                    }
                    for flag in ALL_FLAGS.iter().copied() {
                        SettingsListControl {
                            key: "{flag.label()}",
                            primary_text: flag.label().to_string(),
                            control: rsx! {
                                LabelledSwitch {
                                    label: String::new(),
                                    checked: flag.get(&current),
                                    on_change: move |value: bool| flag.set(&mut settings.write(), value),
                                }
                            },
                        }
                    }
                    for level in ALL_LEVELS.iter().copied() {
                        SettingsListControl {
                            key: "{level.label()}",
                            primary_text: level.label().to_string(),
                            secondary_text: format!("0 to {}", level.max()),
                            control: rsx! {
                                LabelledSelect {
                                    value: level.get(&current).to_string(),
                                    options: (0..=level.max())
                                        .map(|n| SelectOption::new(n.to_string(), n.to_string()))
                                        .collect::<Vec<_>>(),
                                    on_change: move |value: String| match value.parse::<u8>() {
                                        Ok(n) => level.set(&mut settings.write(), n),
                                        Err(_) => tracing::warn!(%value, "Ignoring unparseable level"),
                                    },
                                }
                            },
                        }
                    }
                }
                div { class: "search-settings-actions",
                    Button { busy: saving(), onclick: save, "Save" }
                }
            }
        }
    }
}
