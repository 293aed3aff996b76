use dioxus::prelude::*;

/// One entry of a [`LabelledSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A native select over a fixed list of options.
///
/// `on_change` receives the chosen option's value.
#[component]
pub fn LabelledSelect(
    #[props(default)] value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "form-select-wrapper",
            if !label.is_empty() {
                span { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value.clone(),
                disabled: disabled,
                onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
                for entry in options {
                    option {
                        key: "{entry.value}",
                        value: "{entry.value}",
                        selected: entry.value == value,
                        "{entry.label}"
                    }
                }
            }
        }
    }
}
