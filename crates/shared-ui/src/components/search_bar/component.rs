use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::input::Input;
use crate::components::switch::LabelledSwitch;

/// Query box with the wildcard-mode switch.
///
/// `raw_mode` is the inverse of the switch: the switch reads "Wildcard
/// search" and is on when queries get a trailing wildcard. Extra actions
/// (share, new search) are passed as children.
#[component]
pub fn SearchBar(
    query: String,
    raw_mode: bool,
    on_query_change: EventHandler<String>,
    on_raw_mode_change: EventHandler<bool>,
    on_search: EventHandler<()>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            div { class: "search-bar-query",
                Input {
                    value: query,
                    placeholder: "Search resources".to_string(),
                    aria_label: "Search",
                    on_input: move |evt: FormEvent| on_query_change.call(evt.value()),
                    on_enter: move |_| on_search.call(()),
                }
            }
            LabelledSwitch {
                label: "Wildcard search".to_string(),
                checked: !raw_mode,
                on_change: move |wildcard: bool| on_raw_mode_change.call(!wildcard),
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_search.call(()),
                "Search"
            }
            {children}
        }
    }
}
