use dioxus::prelude::*;

/// A labelled text input.
///
/// `on_enter` fires when Enter is pressed, so a query box can search
/// immediately instead of waiting for its debounce.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_enter: Option<EventHandler<()>>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "input-wrapper",
            if !label.is_empty() {
                span { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        if let Some(handler) = &on_enter {
                            handler.call(());
                        }
                    }
                },
                ..merged,
            }
        }
    }
}
