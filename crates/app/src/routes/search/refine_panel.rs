use client::Client;
use dioxus::prelude::*;
use shared_types::{
    option_to_range, range_to_option, today, Classification, Collection, DateRangeOption,
    ItemStatus, LastModifiedDateRange, MimeTypeFilter, SearchOptions, SearchSettings,
    SelectedCategories, StatusSelection, UserDetails, ALL_DATE_RANGE_OPTIONS, LIVE_STATUSES,
};
use shared_ui::components::{
    toast_app_error, use_toast, Button, ButtonVariant, Input, LabelledCheckbox, LabelledSelect,
    LabelledSwitch, SelectOption,
};

use crate::AppContext;

/// Add `value` if absent, remove it if present. An emptied list becomes
/// `None` so the filter drops out of the request.
pub(crate) fn toggle<T: PartialEq + Clone>(current: Option<Vec<T>>, value: &T) -> Option<Vec<T>> {
    let mut values = current.unwrap_or_default();
    match values.iter().position(|v| v == value) {
        Some(index) => {
            values.remove(index);
        }
        None => values.push(value.clone()),
    }
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Toggle one term of a classification, keeping one entry per classification.
fn toggle_category(
    current: Option<Vec<SelectedCategories>>,
    classification: &Classification,
    term: &str,
) -> Option<Vec<SelectedCategories>> {
    let mut selected = current.unwrap_or_default();
    match selected.iter_mut().find(|s| s.id == classification.id) {
        Some(entry) => {
            let term = term.to_string();
            entry.categories = toggle(Some(entry.categories.clone()), &term).unwrap_or_default();
        }
        None => selected.push(SelectedCategories {
            id: classification.id,
            schema_node: classification.schema_node.clone(),
            categories: vec![term.to_string()],
        }),
    }
    selected.retain(|s| !s.categories.is_empty());
    if selected.is_empty() {
        None
    } else {
        Some(selected)
    }
}

fn is_category_selected(options: &SearchOptions, id: u64, term: &str) -> bool {
    options
        .selected_categories
        .iter()
        .flatten()
        .any(|s| s.id == id && s.categories.iter().any(|c| c == term))
}

/// Range for a quick option; `All` clears the filter.
fn quick_range(option: DateRangeOption) -> Option<LastModifiedDateRange> {
    match option {
        DateRangeOption::All => None,
        other => Some(option_to_range(other, today())),
    }
}

/// Set one side of a custom range. An empty input opens that side.
fn custom_range(
    current: Option<&LastModifiedDateRange>,
    after: Option<String>,
    before: Option<String>,
) -> Option<LastModifiedDateRange> {
    let mut range = current.cloned().unwrap_or_default();
    if let Some(after) = after {
        range.modified_after = Some(after).filter(|s| !s.is_empty());
    }
    if let Some(before) = before {
        range.modified_before = Some(before).filter(|s| !s.is_empty());
    }
    if range == LastModifiedDateRange::default() {
        None
    } else {
        Some(range)
    }
}

/// Flip one status within a fixed set of choices. Unticking the last one
/// goes back to the whole set rather than to the live default.
fn toggle_status(
    current: Option<Vec<ItemStatus>>,
    status: ItemStatus,
    choices: &[ItemStatus],
) -> Vec<ItemStatus> {
    let current = current.filter(|c| c.iter().all(|s| choices.contains(s)));
    toggle(current, &status).unwrap_or_else(|| choices.to_vec())
}

/// Filters beside the result list. Every change returns to the first page.
///
/// `status_choices` replaces the live/non-live switch with one checkbox per
/// status.
#[component]
pub fn RefinePanel(
    mut options: Signal<SearchOptions>,
    settings: SearchSettings,
    #[props(default = true)] show_collections: bool,
    #[props(default = true)] show_owner: bool,
    #[props(default)] status_choices: Option<Vec<ItemStatus>>,
) -> Element {
    let ctx = use_context::<AppContext>();

    let collections_client = ctx.client.clone();
    let collections = use_resource(move || {
        let client = collections_client.clone();
        async move { client.list_collections().await }
    });

    let filters_client = ctx.client.clone();
    let mime_filters = use_resource(move || {
        let client = filters_client.clone();
        async move { client.list_mime_type_filters().await }
    });

    let classifications_client = ctx.client.clone();
    let classifications = use_resource(move || {
        let client = classifications_client.clone();
        let opts = options();
        async move { client.list_classifications(&opts).await }
    });

    let current = options();
    let statuses = current.status.clone().unwrap_or_else(|| LIVE_STATUSES.to_vec());
    let include_non_live = StatusSelection::from_statuses(&statuses) == StatusSelection::All;

    let collection_list = match &*collections.read() {
        Some(Ok(list)) => list.clone(),
        Some(Err(err)) => {
            tracing::warn!(%err, "Collections unavailable");
            Vec::new()
        }
        None => Vec::new(),
    };
    let filter_list = match &*mime_filters.read() {
        Some(Ok(list)) => list.clone(),
        Some(Err(err)) => {
            tracing::warn!(%err, "MIME type filters unavailable");
            Vec::new()
        }
        None => Vec::new(),
    };
    let classification_list = match &*classifications.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        div { class: "refine-panel",
            h2 { class: "refine-panel-title", "Refine search" }

            if show_collections && !collection_list.is_empty() {
                RefineSection { title: "Collections",
                    for collection in collection_list {
                        CollectionCheckbox { key: "{collection.uuid}", options, collection }
                    }
                }
            }

            if !settings.searching_disable_date_modified_filter {
                RefineSection { title: "Date modified",
                    DateRangeSelector { options }
                }
            }

            if let Some(choices) = status_choices {
                RefineSection { title: "Status",
                    for status in choices.clone() {
                        LabelledCheckbox {
                            key: "{status.as_str()}",
                            label: status.as_str().to_string(),
                            checked: statuses.contains(&status),
                            on_change: {
                                let choices = choices.clone();
                                move |_| {
                                    let mut opts = options.write();
                                    opts.status = Some(toggle_status(opts.status.take(), status, &choices));
                                    opts.current_page = 0;
                                }
                            },
                        }
                    }
                }
            } else if settings.searching_show_non_live_checkbox {
                RefineSection { title: "Status",
                    LabelledSwitch {
                        label: "Include non-live items".to_string(),
                        checked: include_non_live,
                        on_change: move |all: bool| {
                            let selection = if all { StatusSelection::All } else { StatusSelection::Live };
                            let mut opts = options.write();
                            opts.status = Some(selection.statuses());
                            opts.current_page = 0;
                        },
                    }
                }
            }

            if show_owner && !settings.searching_disable_owner_filter {
                RefineSection { title: "Owner",
                    OwnerSelector { options }
                }
            }

            if !filter_list.is_empty() {
                RefineSection { title: "File types",
                    for filter in filter_list {
                        MimeFilterCheckbox { key: "{filter.name}", options, filter }
                    }
                }
            }

            RefineSection { title: "Attachments",
                LabelledSwitch {
                    label: "Search attachments".to_string(),
                    checked: current.search_attachments.unwrap_or(true),
                    on_change: move |value: bool| {
                        let mut opts = options.write();
                        opts.search_attachments = Some(value);
                        opts.current_page = 0;
                    },
                }
            }

            for classification in classification_list {
                ClassificationFacet { key: "{classification.id}", options, classification }
            }
        }
    }
}

#[component]
fn RefineSection(title: String, children: Element) -> Element {
    rsx! {
        section { class: "refine-section",
            h3 { class: "refine-section-title", "{title}" }
            {children}
        }
    }
}

#[component]
fn CollectionCheckbox(mut options: Signal<SearchOptions>, collection: Collection) -> Element {
    let checked = options
        .read()
        .collections
        .iter()
        .flatten()
        .any(|c| c.uuid == collection.uuid);

    rsx! {
        LabelledCheckbox {
            label: collection.name.clone(),
            checked,
            on_change: move |_| {
                let mut opts = options.write();
                opts.collections = toggle(opts.collections.take(), &collection);
                opts.current_page = 0;
            },
        }
    }
}

#[component]
fn MimeFilterCheckbox(mut options: Signal<SearchOptions>, filter: MimeTypeFilter) -> Element {
    let checked = options
        .read()
        .mime_type_filters
        .iter()
        .flatten()
        .any(|f| f.name == filter.name);

    rsx! {
        LabelledCheckbox {
            label: filter.name.clone(),
            checked,
            on_change: move |_| {
                let mut opts = options.write();
                opts.mime_type_filters = toggle(opts.mime_type_filters.take(), &filter);
                opts.current_page = 0;
            },
        }
    }
}

/// Quick options or a custom from/to pair, switched by the user.
#[component]
fn DateRangeSelector(mut options: Signal<SearchOptions>) -> Element {
    let current = options();
    let quick_mode = current.date_range_quick_mode_enabled.unwrap_or(true);
    let range = current.last_modified_date_range.clone().unwrap_or_default();
    let selected = range_to_option(current.last_modified_date_range.as_ref(), today());
    let quick_options = ALL_DATE_RANGE_OPTIONS
        .iter()
        .map(|o| SelectOption::new(o.display_name(), o.display_name()))
        .collect::<Vec<_>>();
    let after = range.modified_after.clone().unwrap_or_default();
    let before = range.modified_before.clone().unwrap_or_default();

    rsx! {
        LabelledSwitch {
            label: "Quick select".to_string(),
            checked: quick_mode,
            on_change: move |quick: bool| {
                let mut opts = options.write();
                opts.date_range_quick_mode_enabled = Some(quick);
                opts.last_modified_date_range = None;
                opts.current_page = 0;
            },
        }
        if quick_mode {
            LabelledSelect {
                label: "Modified".to_string(),
                value: selected.display_name().to_string(),
                options: quick_options,
                on_change: move |name: String| {
                    let mut opts = options.write();
                    opts.last_modified_date_range = quick_range(DateRangeOption::from_display_name(&name));
                    opts.current_page = 0;
                },
            }
        } else {
            Input {
                label: "Modified after".to_string(),
                input_type: "date".to_string(),
                value: after,
                on_input: move |evt: FormEvent| {
                    let mut opts = options.write();
                    opts.last_modified_date_range =
                        custom_range(opts.last_modified_date_range.as_ref(), Some(evt.value()), None);
                    opts.current_page = 0;
                },
            }
            Input {
                label: "Modified before".to_string(),
                input_type: "date".to_string(),
                value: before,
                on_input: move |evt: FormEvent| {
                    let mut opts = options.write();
                    opts.last_modified_date_range =
                        custom_range(opts.last_modified_date_range.as_ref(), None, Some(evt.value()));
                    opts.current_page = 0;
                },
            }
        }
    }
}

/// Look up users by name and restrict results to one owner.
#[component]
fn OwnerSelector(mut options: Signal<SearchOptions>) -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_toast();
    let mut lookup = use_signal(String::new);
    let mut matches = use_signal(Vec::<UserDetails>::new);
    let mut searching = use_signal(|| false);

    let owner = options.read().owner.clone();

    let find = move |client: Client| {
        let text = lookup();
        if text.trim().is_empty() {
            return;
        }
        searching.set(true);
        spawn(async move {
            match client.list_users(text.trim(), &[]).await {
                Ok(users) => {
                    tracing::debug!(count = users.len(), "Owner lookup returned");
                    matches.set(users);
                }
                Err(err) => toast_app_error(&toasts, "Could not look up users", &err),
            }
            searching.set(false);
        });
    };

    rsx! {
        if let Some(user) = owner {
            div { class: "owner-selected",
                span { "{user.display_name()}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        let mut opts = options.write();
                        opts.owner = None;
                        opts.current_page = 0;
                    },
                    "Clear"
                }
            }
        } else {
            div { class: "owner-lookup",
                Input {
                    placeholder: "Username or name".to_string(),
                    aria_label: "Owner",
                    value: lookup(),
                    on_input: move |evt: FormEvent| lookup.set(evt.value()),
                    on_enter: {
                        let client = ctx.client.clone();
                        move |_| find(client.clone())
                    },
                }
                Button {
                    variant: ButtonVariant::Outline,
                    busy: searching(),
                    onclick: {
                        let client = ctx.client.clone();
                        move |_| find(client.clone())
                    },
                    "Find"
                }
            }
            if !matches.read().is_empty() {
                ul { class: "owner-matches",
                    for user in matches() {
                        li { key: "{user.id}",
                            button {
                                r#type: "button",
                                class: "owner-match",
                                onclick: move |_| {
                                    let mut opts = options.write();
                                    opts.owner = Some(user.clone());
                                    opts.current_page = 0;
                                    matches.set(Vec::new());
                                    lookup.set(String::new());
                                },
                                "{user.display_name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One classification with its top terms and a "show more" toggle.
#[component]
fn ClassificationFacet(mut options: Signal<SearchOptions>, classification: Classification) -> Element {
    let mut expanded = use_signal(|| false);
    let show_all = expanded();
    let has_more = classification.categories.len() > classification.max_display_results as usize;
    let id = classification.id;
    let current = options();

    let rows = classification
        .visible_categories(show_all)
        .iter()
        .map(|c| {
            (
                c.term.clone(),
                format!("{} ({})", c.term, c.count),
                is_category_selected(&current, id, &c.term),
            )
        })
        .collect::<Vec<_>>();

    if rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        RefineSection { title: classification.name.clone(),
            for (term, label, checked) in rows {
                LabelledCheckbox {
                    key: "{term}",
                    label,
                    checked,
                    on_change: {
                        let classification = classification.clone();
                        move |_| {
                            let mut opts = options.write();
                            opts.selected_categories =
                                toggle_category(opts.selected_categories.take(), &classification, &term);
                            opts.current_page = 0;
                        }
                    },
                }
            }
            if has_more {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| expanded.set(!show_all),
                    if show_all { "Show less" } else { "Show more" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{CategoryCount, ItemStatus};

    fn keyword_facet() -> Classification {
        Classification {
            id: 7,
            name: "Keywords".to_string(),
            schema_node: "/item/keyword".to_string(),
            max_display_results: 5,
            categories: vec![CategoryCount {
                term: "cats".to_string(),
                count: 3,
            }],
            order_index: 0,
        }
    }

    #[test]
    fn status_toggle_stays_within_the_choices() {
        let choices = [ItemStatus::Moderating, ItemStatus::Rejected, ItemStatus::Review];
        let narrowed = toggle_status(Some(choices.to_vec()), ItemStatus::Rejected, &choices);
        assert_eq!(narrowed, vec![ItemStatus::Moderating, ItemStatus::Review]);

        let last = toggle_status(Some(vec![ItemStatus::Review]), ItemStatus::Review, &choices);
        assert_eq!(last, choices.to_vec());

        let from_default = toggle_status(None, ItemStatus::Review, &choices);
        assert_eq!(from_default, vec![ItemStatus::Review]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let added = toggle(None, &"a".to_string());
        assert_eq!(added, Some(vec!["a".to_string()]));
        let both = toggle(added, &"b".to_string());
        assert_eq!(both, Some(vec!["a".to_string(), "b".to_string()]));
        let one = toggle(both, &"a".to_string());
        assert_eq!(one, Some(vec!["b".to_string()]));
    }

    #[test]
    fn toggling_the_last_value_clears_the_filter() {
        assert_eq!(toggle(Some(vec![ItemStatus::Live]), &ItemStatus::Live), None);
    }

    #[test]
    fn category_toggle_groups_terms_by_classification() {
        let facet = keyword_facet();
        let first = toggle_category(None, &facet, "cats");
        let second = toggle_category(first, &facet, "dogs");
        assert_eq!(
            second,
            Some(vec![SelectedCategories {
                id: 7,
                schema_node: "/item/keyword".to_string(),
                categories: vec!["cats".to_string(), "dogs".to_string()],
            }])
        );
        let cleared = toggle_category(toggle_category(second, &facet, "cats"), &facet, "dogs");
        assert_eq!(cleared, None);
    }

    #[test]
    fn selected_terms_are_reported() {
        let facet = keyword_facet();
        let options = SearchOptions {
            selected_categories: toggle_category(None, &facet, "cats"),
            ..SearchOptions::default()
        };
        assert!(is_category_selected(&options, 7, "cats"));
        assert!(!is_category_selected(&options, 7, "dogs"));
        assert!(!is_category_selected(&options, 8, "cats"));
    }

    #[test]
    fn all_clears_the_date_filter() {
        assert_eq!(quick_range(DateRangeOption::All), None);
        let today_range = quick_range(DateRangeOption::Today).unwrap();
        assert!(today_range.modified_after.is_some());
        assert_eq!(today_range.modified_before, None);
    }

    #[test]
    fn custom_range_sets_one_side_at_a_time() {
        let after = custom_range(None, Some("2024-01-01".to_string()), None);
        assert_eq!(
            after,
            Some(LastModifiedDateRange {
                modified_after: Some("2024-01-01".to_string()),
                modified_before: None,
            })
        );
        let both = custom_range(after.as_ref(), None, Some("2024-02-01".to_string()));
        assert_eq!(both.as_ref().and_then(|r| r.modified_before.as_deref()), Some("2024-02-01"));
        let cleared = custom_range(both.as_ref(), Some(String::new()), Some(String::new()));
        assert_eq!(cleared, None);
    }
}
