use dioxus::prelude::*;
use shared_types::SearchResultItem;

use crate::components::status_badge::StatusBadge;

/// One search result: title, description, custom metadata and status.
///
/// Per-item actions such as the favourite toggle go in `actions`.
#[component]
pub fn ResultCard(
    item: SearchResultItem,
    #[props(default)] onselect: Option<EventHandler<SearchResultItem>>,
    #[props(default)] actions: Element,
) -> Element {
    let title = item.title().to_string();
    let modified = item.modified_date.get(..10).unwrap_or(&item.modified_date).to_string();
    let attachments = item.attachments.len();
    let selected = item.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        article { class: "result-card",
            div { class: "result-card-header",
                h3 { class: "result-card-title",
                    button {
                        class: "result-card-link",
                        r#type: "button",
                        onclick: move |_| {
                            if let Some(handler) = &onselect {
                                handler.call(selected.clone());
                            }
                        },
                        "{title}"
                    }
                }
                StatusBadge { status: item.status }
                div { class: "result-card-actions", {actions} }
            }
            if let Some(description) = &item.description {
                p { class: "result-card-description", "{description}" }
            }
            if !item.display_fields.is_empty() {
                dl { class: "result-card-fields",
                    for field in item.display_fields.iter() {
                        dt { key: "{field.name}", "{field.name}" }
                        dd { dangerous_inner_html: "{field.html}" }
                    }
                }
            }
            div { class: "result-card-meta",
                span { "Modified {modified}" }
                if attachments > 0 {
                    span { "{attachments} attachment(s)" }
                }
                if !item.is_latest_version {
                    span { class: "result-card-old-version", "Not the latest version" }
                }
            }
        }
    }
}
