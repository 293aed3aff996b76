mod advanced;
mod item_actions;
mod refine_panel;
mod results;
mod search_actions;
mod share;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShare2;
use dioxus_free_icons::Icon;
use shared_types::{
    parse_share_query, raw_mode_for, share_search_link, SearchOptions, SearchSettings,
};
use shared_ui::components::{toast_app_error, use_toast, Button, ButtonVariant, SearchBar, ToastOptions};

use crate::debounce::{use_debouncer, QUERY_DEBOUNCE_MS};
use crate::{storage, AppContext};

use advanced::AdvancedSearchPanel;
use search_actions::{ExportButton, FavouriteSearchButton};
pub(crate) use refine_panel::RefinePanel;
pub(crate) use results::SearchResults;

/// Options a search page starts from, and whether they came from a shared
/// link. An unreadable link is ignored.
fn initial_options(query: &str) -> (SearchOptions, bool) {
    match parse_share_query(query) {
        Ok(Some(options)) => (options, true),
        Ok(None) => (SearchOptions::default(), false),
        Err(err) => {
            tracing::warn!(%err, "Ignoring unreadable shared search");
            (SearchOptions::default(), false)
        }
    }
}

/// Options to switch to when the page's query string changes while it is
/// mounted. Only a readable shared search replaces the current one.
fn reseeded_options(previous: &str, query: &str) -> Option<SearchOptions> {
    if previous == query {
        return None;
    }
    match initial_options(query) {
        (options, true) => Some(options),
        (_, false) => None,
    }
}

/// `None` for a blank query box.
fn entered_query(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Options for "new search": everything cleared except the user's wildcard
/// mode and the configured default sort.
fn cleared_options(current: &SearchOptions, settings: &SearchSettings) -> SearchOptions {
    SearchOptions {
        raw_mode: current.raw_mode,
        rows_per_page: current.rows_per_page,
        sort_order: Some(settings.default_search_sort),
        ..SearchOptions::default()
    }
}

/// The main search page.
///
/// Results are only requested once the search settings and the stored
/// wildcard mode are known, so the first request already carries them.
#[component]
pub fn SearchPage(query: String) -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_toast();
    let (start, from_link) = use_hook(|| initial_options(&query));

    let mut options = use_signal(|| start.clone());
    let mut query_text = use_signal(|| start.query.clone().unwrap_or_default());
    let mut settings = use_signal(SearchSettings::default);
    let mut ready = use_signal(|| false);
    let mut debouncer = use_debouncer(QUERY_DEBOUNCE_MS);
    let mut seeded_query = use_signal(|| query.clone());

    use_effect(use_reactive(&query, move |query: String| {
        let previous = seeded_query.peek().clone();
        seeded_query.set(query.clone());
        if let Some(next) = reseeded_options(&previous, &query) {
            tracing::debug!("Following a new shared search");
            debouncer.cancel();
            query_text.set(next.query.clone().unwrap_or_default());
            options.set(next);
        }
    }));

    let init_client = ctx.client.clone();
    use_hook(move || {
        spawn(async move {
            let wildcard = storage::load_wildcard_mode().await;
            let loaded = match init_client.get_search_settings().await {
                Ok(loaded) => loaded,
                Err(err) => {
                    tracing::warn!(%err, "Using default search settings");
                    SearchSettings::default()
                }
            };
            if !from_link {
                let mut opts = options.write();
                opts.raw_mode = raw_mode_for(wildcard);
                opts.sort_order = Some(loaded.default_search_sort);
            }
            settings.set(loaded);
            ready.set(true);
        })
    });

    let search_client = ctx.client.clone();
    let mut results = use_resource(move || {
        let client = search_client.clone();
        let opts = options();
        let ready = ready();
        async move {
            if !ready {
                return None;
            }
            Some(client.search(&opts).await)
        }
    });

    let copy_link = move |_| {
        let opts = options();
        spawn(async move {
            let origin = share::current_origin().await;
            match share_search_link(&origin, &opts) {
                Ok(link) => {
                    share::copy_to_clipboard(&link);
                    tracing::info!(%link, "Search link copied");
                    toasts.success("Search link copied".to_string(), ToastOptions::new());
                }
                Err(err) => toast_app_error(&toasts, "Could not build a search link", &err),
            }
        });
    };

    let current = options();
    let search_results = results.read().clone().flatten();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }
        div { class: "search-page",
            section { class: "search-main",
                SearchBar {
                    query: query_text(),
                    raw_mode: current.raw_mode,
                    on_query_change: move |text: String| {
                        query_text.set(text.clone());
                        debouncer.call(move || {
                            let next = options.read().with_query(entered_query(&text));
                            options.set(next);
                        });
                    },
                    on_raw_mode_change: move |raw: bool| {
                        storage::save_wildcard_mode(!raw);
                        options.write().raw_mode = raw;
                    },
                    on_search: move |_| {
                        debouncer.cancel();
                        let next = options.read().with_query(entered_query(&query_text()));
                        options.set(next);
                    },
                    if ctx.flags.share_search {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: copy_link,
                            Icon::<LdShare2> { icon: LdShare2, width: 16, height: 16 }
                            "Share"
                        }
                    }
                    if ctx.flags.favourites {
                        FavouriteSearchButton { options }
                    }
                    ExportButton { options }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            debouncer.cancel();
                            query_text.set(String::new());
                            let next = cleared_options(&options.read(), &settings.read());
                            options.set(next);
                        },
                        "New search"
                    }
                }
                SearchResults {
                    options,
                    results: search_results,
                    show_display_modes: true,
                    available_modes: settings.read().available_display_modes(),
                    on_refresh: move |_| results.restart(),
                }
            }
            aside { class: "search-refine",
                if ready() {
                    RefinePanel { options, settings: settings() }
                    AdvancedSearchPanel { options }
                }
            }
        }
    }
}
