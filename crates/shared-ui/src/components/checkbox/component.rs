use dioxus::prelude::*;
use dioxus_primitives::checkbox as prim;

pub use prim::CheckboxState;

/// A controlled checkbox with its label text beside it.
#[component]
pub fn LabelledCheckbox(
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let state = if checked {
        CheckboxState::Checked
    } else {
        CheckboxState::Unchecked
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "checkbox-row",
            prim::Checkbox {
                class: "checkbox",
                checked: Some(state),
                disabled: disabled,
                on_checked_change: move |state: CheckboxState| {
                    on_change.call(state == CheckboxState::Checked);
                },
                prim::CheckboxIndicator { class: "checkbox-indicator",
                    span { class: "checkbox-icon", "\u{2713}" }
                }
            }
            span { class: "checkbox-label", "{label}" }
        }
    }
}
