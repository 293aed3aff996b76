use dioxus::prelude::*;
use shared_types::ROWS_PER_PAGE_OPTIONS;

use crate::components::button::{Button, ButtonVariant};
use crate::components::form_select::{LabelledSelect, SelectOption};

/// One-based positions of the first and last result shown, clamped to
/// `available`.
fn page_span(available: u32, current_page: u32, rows_per_page: u32) -> (u32, u32) {
    if available == 0 {
        return (0, 0);
    }
    let first = current_page
        .saturating_mul(rows_per_page)
        .saturating_add(1)
        .min(available);
    let last = current_page
        .saturating_add(1)
        .saturating_mul(rows_per_page)
        .min(available);
    (first, last)
}

/// Zero-based page navigation with a rows-per-page selector.
///
/// Changing the page size jumps back to the first page.
#[component]
pub fn SearchPagination(
    available: u32,
    current_page: u32,
    rows_per_page: u32,
    on_page_change: EventHandler<u32>,
    on_rows_per_page_change: EventHandler<u32>,
) -> Element {
    let page_count = if rows_per_page > 0 {
        available.div_ceil(rows_per_page).max(1)
    } else {
        1
    };
    let (first, last) = page_span(available, current_page, rows_per_page);
    let on_last_page = current_page.saturating_add(1) >= page_count;
    let options = ROWS_PER_PAGE_OPTIONS
        .iter()
        .map(|n| SelectOption::new(n.to_string(), n.to_string()))
        .collect::<Vec<_>>();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            LabelledSelect {
                label: "Items per page".to_string(),
                value: rows_per_page.to_string(),
                options,
                on_change: move |value: String| {
                    match value.parse::<u32>() {
                        Ok(rows) => on_rows_per_page_change.call(rows),
                        Err(_) => tracing::warn!(%value, "ignoring unparseable page size"),
                    }
                },
            }
            span { class: "pagination-info", "{first}-{last} of {available}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: current_page == 0,
                aria_label: "First page",
                onclick: move |_| on_page_change.call(0),
                "\u{00ab}"
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: current_page == 0,
                aria_label: "Previous page",
                onclick: move |_| on_page_change.call(current_page.saturating_sub(1)),
                "\u{2039}"
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: on_last_page,
                aria_label: "Next page",
                onclick: move |_| on_page_change.call(current_page.saturating_add(1)),
                "\u{203a}"
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: on_last_page,
                aria_label: "Last page",
                onclick: move |_| on_page_change.call(page_count - 1),
                "\u{00bb}"
            }
        }
    }
}
