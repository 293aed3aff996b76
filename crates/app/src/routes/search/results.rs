use dioxus::prelude::*;
use shared_types::{
    AppError, DisplayMode, PagedResult, SearchOptions, SearchResultItem, SortOrder,
    ALL_SORT_ORDERS,
};
use shared_ui::components::{use_toast, LabelledSelect, ResultCard, SearchPagination, SelectOption};

use super::item_actions::{open_item, DrmAcceptanceDialog, FavouriteToggle, PendingDrm};
use crate::AppContext;

fn sort_options() -> Vec<SelectOption> {
    ALL_SORT_ORDERS
        .iter()
        .map(|o| SelectOption::new(o.as_str(), o.display_name()))
        .collect()
}

fn display_mode_options(modes: &[DisplayMode]) -> Vec<SelectOption> {
    modes
        .iter()
        .map(|m| SelectOption::new(m.as_str(), m.display_name()))
        .collect()
}

/// Summary line above the results.
fn result_count_label(available: u32) -> String {
    match available {
        0 => "No results found".to_string(),
        1 => "1 result".to_string(),
        n => format!("{n} results"),
    }
}

/// A page of results with its sort, display-mode and paging controls.
#[component]
pub fn SearchResults(
    mut options: Signal<SearchOptions>,
    results: Option<Result<PagedResult<SearchResultItem>, AppError>>,
    #[props(default = true)] show_display_modes: bool,
    #[props(default)] available_modes: Vec<DisplayMode>,
    on_refresh: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_toast();
    let pending_drm = use_signal(|| None::<PendingDrm>);

    let current = options();
    let sort_value = current.sort_order.unwrap_or(SortOrder::Rank).as_str().to_string();
    let display_mode = current.display_mode.unwrap_or_default();

    let body = match results {
        None => rsx! {
            p { class: "search-status", "Searching\u{2026}" }
        },
        Some(Err(err)) => rsx! {
            div { class: "search-error", role: "alert",
                p { "The search could not be completed." }
                p { class: "search-error-detail", "{err.message}" }
            }
        },
        Some(Ok(page)) => {
            let available = page.available;
            let favourites = ctx.flags.favourites;
            let list_class = if display_mode.is_gallery() {
                "search-result-list gallery"
            } else {
                "search-result-list"
            };
            rsx! {
                p { class: "search-count", "{result_count_label(available)}" }
                div { class: list_class,
                    for item in page.results {
                        ResultCard {
                            key: "{item.item_key()}",
                            item: item.clone(),
                            onselect: {
                                let ctx = ctx.clone();
                                move |selected: SearchResultItem| open_item(&ctx, toasts, selected, pending_drm)
                            },
                            actions: rsx! {
                                if favourites {
                                    FavouriteToggle { item: item.clone(), on_changed: on_refresh }
                                }
                            },
                        }
                    }
                }
                if available > 0 {
                    SearchPagination {
                        available,
                        current_page: current.current_page,
                        rows_per_page: current.rows_per_page,
                        on_page_change: move |page: u32| {
                            let next = options.read().with_page(page);
                            options.set(next);
                        },
                        on_rows_per_page_change: move |rows: u32| {
                            let mut opts = options.write();
                            opts.rows_per_page = rows;
                            opts.current_page = 0;
                        },
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "search-results",
            div { class: "search-results-header",
                LabelledSelect {
                    label: "Sort by".to_string(),
                    value: sort_value,
                    options: sort_options(),
                    on_change: move |value: String| match value.parse::<SortOrder>() {
                        Ok(order) => {
                            let mut opts = options.write();
                            opts.sort_order = Some(order);
                            opts.current_page = 0;
                        }
                        Err(err) => tracing::error!(%err, "Sort selector produced an unknown order"),
                    },
                }
                if show_display_modes && available_modes.len() > 1 {
                    LabelledSelect {
                        label: "Display".to_string(),
                        value: display_mode.as_str().to_string(),
                        options: display_mode_options(&available_modes),
                        on_change: move |value: String| {
                            let mode = available_modes.iter().copied().find(|m| m.as_str() == value);
                            options.write().display_mode = mode;
                        },
                    }
                }
            }
            {body}
        }
        DrmAcceptanceDialog { pending: pending_drm }
    }
}
