use dioxus::prelude::*;
use shared_types::{
    my_resources_types_for, MyResourcesType, SearchOptions, SearchSettings, SortOrder,
    UserDetails,
};
use shared_ui::components::{LabelledSelect, SelectOption};

use crate::routes::search::{RefinePanel, SearchResults};
use crate::routes::Route;
use crate::session::use_session;
use crate::AppContext;

/// The view named in the URL, falling back to published items.
fn selected_view(view: Option<&str>) -> MyResourcesType {
    view.and_then(MyResourcesType::from_display_name)
        .unwrap_or_default()
}

/// Search options for one view: the user's own items in the view's
/// statuses, in the configured default order.
fn view_options(kind: MyResourcesType, owner: Option<UserDetails>, sort: SortOrder) -> SearchOptions {
    SearchOptions {
        status: Some(kind.statuses()),
        owner,
        sort_order: Some(sort),
        ..SearchOptions::default()
    }
}

/// The user's own items, split by lifecycle stage.
///
/// Nothing is searched until both the user and the search settings are
/// known, so the first request is already restricted to the owner.
#[component]
pub fn MyResources(view: Option<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let mut kind = use_signal(|| selected_view(view.as_deref()));
    let mut settings = use_signal(SearchSettings::default);
    let mut ready = use_signal(|| false);
    let mut options = use_signal(SearchOptions::default);

    let settings_client = ctx.client.clone();
    use_hook(move || {
        spawn(async move {
            match settings_client.get_search_settings().await {
                Ok(loaded) => settings.set(loaded),
                Err(err) => tracing::warn!(%err, "Using default search settings"),
            }
            ready.set(true);
        })
    });

    use_effect(move || {
        let owner = session.current_user.read().as_ref().map(|u| u.as_owner());
        let sort = settings.read().default_search_sort;
        options.set(view_options(kind(), owner, sort));
    });

    let search_client = ctx.client.clone();
    let mut results = use_resource(move || {
        let client = search_client.clone();
        let opts = options();
        let ready = ready() && opts.owner.is_some();
        async move {
            if !ready {
                return None;
            }
            Some(client.search(&opts).await)
        }
    });

    let current_kind = kind();
    let views = my_resources_types_for(session.current_user.read().as_ref())
        .into_iter()
        .map(|t| SelectOption::new(t.display_name(), t.display_name()))
        .collect::<Vec<_>>();
    let nav = use_navigator();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search/search.css") }
        div { class: "search-page my-resources-page",
            section { class: "search-main",
                header { class: "my-resources-header",
                    LabelledSelect {
                        label: "Show".to_string(),
                        value: current_kind.display_name().to_string(),
                        options: views,
                        on_change: move |name: String| {
                            let Some(next) = MyResourcesType::from_display_name(&name) else {
                                tracing::warn!(%name, "Unknown resources view");
                                return;
                            };
                            kind.set(next);
                            nav.replace(Route::MyResources { view: Some(name) });
                        },
                    }
                }
                SearchResults {
                    options,
                    results: results.read().clone().flatten(),
                    show_display_modes: false,
                    on_refresh: move |_| results.restart(),
                }
            }
            aside { class: "search-refine",
                if ready() {
                    RefinePanel {
                        options,
                        settings: settings(),
                        show_collections: current_kind.shows_collection_selector(),
                        show_owner: false,
                        status_choices: current_kind
                            .shows_status_selector()
                            .then(|| current_kind.statuses()),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ItemStatus;

    #[test]
    fn unknown_or_missing_view_is_published() {
        assert_eq!(selected_view(None), MyResourcesType::Published);
        assert_eq!(selected_view(Some("Nonsense")), MyResourcesType::Published);
        assert_eq!(selected_view(Some("Scrapbook")), MyResourcesType::Scrapbook);
    }

    #[test]
    fn view_restricts_statuses_to_the_owner() {
        let owner = UserDetails {
            id: "u1".to_string(),
            username: "admin".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: None,
        };
        let options = view_options(MyResourcesType::Drafts, Some(owner.clone()), SortOrder::Rank);
        assert_eq!(options.status, Some(vec![ItemStatus::Draft]));
        assert_eq!(options.owner, Some(owner));
        assert_eq!(options.sort_order, Some(SortOrder::Rank));
        assert_eq!(options.current_page, 0);
    }
}
