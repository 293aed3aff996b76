use dioxus::prelude::*;

/// One row of a settings list: primary text, optional secondary text, and
/// the control that edits the setting on the right.
#[component]
pub fn SettingsListControl(
    primary_text: String,
    #[props(default)] secondary_text: Option<String>,
    control: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "settings-list-control",
            div { class: "settings-list-text",
                span { class: "settings-list-primary", "{primary_text}" }
                if let Some(secondary) = secondary_text {
                    span { class: "settings-list-secondary", "{secondary}" }
                }
            }
            div { class: "settings-list-action", {control} }
        }
    }
}
