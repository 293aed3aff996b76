pub mod my_resources;
pub mod not_found;
pub mod search;
pub mod search_settings;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFolder, LdSearch, LdSettings};
use dioxus_free_icons::Icon;

use my_resources::MyResources;
use not_found::NotFound;
use search::SearchPage;
use search_settings::SearchSettingsPage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[redirect("/", || Route::SearchPage { query: String::new() })]
    // `query` is the raw query string; a shared link carries the search in
    // its `searchOptions` parameter.
    #[route("/page/search?:..query")]
    SearchPage { query: String },
    #[route("/page/myresources?:view")]
    MyResources { view: Option<String> },
    #[route("/page/searchsettings")]
    SearchSettingsPage {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

fn nav_class(active: bool) -> String {
    if active {
        "app-nav-link active".to_string()
    } else {
        "app-nav-link".to_string()
    }
}

/// Top navigation and page frame.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    let page_title = match &route {
        Route::SearchPage { .. } => "Search",
        Route::MyResources { .. } => "My resources",
        Route::SearchSettingsPage {} => "Search settings",
        Route::NotFound { .. } => "",
    };

    rsx! {
        document::Title { "{page_title}" }
        div { class: "app-shell",
            header { class: "app-header",
                span { class: "app-brand", "Repository" }
                nav { class: "app-nav",
                    Link {
                        to: Route::SearchPage { query: String::new() },
                        class: nav_class(matches!(route, Route::SearchPage { .. })),
                        Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                        "Search"
                    }
                    Link {
                        to: Route::MyResources { view: None },
                        class: nav_class(matches!(route, Route::MyResources { .. })),
                        Icon::<LdFolder> { icon: LdFolder, width: 16, height: 16 }
                        "My resources"
                    }
                    Link {
                        to: Route::SearchSettingsPage {},
                        class: nav_class(matches!(route, Route::SearchSettingsPage {})),
                        Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                        "Settings"
                    }
                }
            }
            main { class: "app-main",
                h1 { class: "app-page-title", "{page_title}" }
                Outlet::<Route> {}
            }
        }
    }
}
