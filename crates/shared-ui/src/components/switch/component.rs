use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// A controlled switch with a text label.
#[component]
pub fn LabelledSwitch(
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "switch-row",
            prim::Switch {
                class: "switch",
                checked: Some(checked),
                disabled: disabled,
                on_checked_change: move |value: bool| on_change.call(value),
                prim::SwitchThumb { class: "switch-thumb" }
            }
            span { class: "switch-label", "{label}" }
        }
    }
}
