use dioxus::prelude::*;
use shared_types::ItemStatus;

fn tone(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Live => "live",
        ItemStatus::Review | ItemStatus::Moderating => "pending",
        ItemStatus::Rejected | ItemStatus::Deleted | ItemStatus::Suspended => "blocked",
        ItemStatus::Archived | ItemStatus::Draft | ItemStatus::Personal => "inactive",
    }
}

/// An item's lifecycle status as an inline badge.
#[component]
pub fn StatusBadge(status: ItemStatus) -> Element {
    let text = status.as_str().to_lowercase();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "status-badge",
            "data-tone": tone(status),
            "{text}"
        }
    }
}
