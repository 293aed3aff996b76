use dioxus::prelude::*;
use shared_types::WizardControlOption;

use super::{Choice, ControlState, ControlSurface, DateField, FormModel, OptionEntry, WizardError};
use crate::components::{Button, ButtonVariant, Input, LabelledCheckbox, LabelledSelect, SelectOption};

/// Apply an edit to the form and log it if the control could not be found.
fn update(
    mut model: Signal<FormModel>,
    edit: impl FnOnce(&mut FormModel) -> Result<(), WizardError>,
) {
    if let Err(err) = edit(&mut model.write()) {
        tracing::warn!(error = %err, "Wizard control update failed");
    }
}

/// Title, mandatory marker and description shown above a control.
#[component]
pub fn WizardLabel(
    #[props(default)] title: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default = false)] mandatory: bool,
) -> Element {
    rsx! {
        div { class: "wizard-label",
            if let Some(title) = title {
                span { class: "wizard-label-title", "{title}" }
                if mandatory {
                    span { class: "wizard-label-mandatory", "*" }
                }
            }
            if let Some(description) = description {
                p { class: "wizard-label-description", "{description}" }
            }
        }
    }
}

/// One control of a [`FormModel`], rendered by its state.
#[component]
pub fn WizardControlView(model: Signal<FormModel>, index: usize) -> Element {
    let Some(control) = model.read().control(index).cloned() else {
        return rsx! {};
    };
    let definition = control.definition;
    let title = definition.label().to_string();

    let body = match control.state {
        ControlState::Text(value) => {
            let title = title.clone();
            rsx! {
                Input {
                    value: value,
                    on_input: move |evt: FormEvent| {
                        let value = evt.value();
                        update(model, |m| m.set_input_value(&title, &value));
                    },
                }
            }
        }
        ControlState::Choices { exclusive, options } => {
            let rows: Vec<Vec<Choice>> = definition
                .option_rows()
                .into_iter()
                .map(|row| row.iter().filter_map(|o| choice_for(&options, o)).collect())
                .collect();
            let group = title.clone();
            rsx! {
                div { class: "wizard-option-group",
                    for row in rows {
                        div { class: "wizard-option-row",
                            for choice in row {
                                ChoiceView { model, group: group.clone(), exclusive, choice }
                            }
                        }
                    }
                }
            }
        }
        ControlState::Select { options, selected } => {
            let value = selected
                .and_then(|i| options.get(i))
                .map(|o| o.value.clone())
                .unwrap_or_default();
            let listbox = title.clone();
            let choices = options.clone();
            rsx! {
                LabelledSelect {
                    value: value,
                    options: options
                        .into_iter()
                        .map(|o| SelectOption::new(o.value, o.label))
                        .collect::<Vec<_>>(),
                    on_change: move |value: String| {
                        let Some(option) = choices.iter().find(|o| o.value == value) else {
                            return;
                        };
                        let label = option.label.clone();
                        update(model, |m| m.select_option(&listbox, &label));
                    },
                }
            }
        }
        ControlState::Dates { start, end } => {
            rsx! {
                div { class: "wizard-dates",
                    for (field, value) in DateField::BOTH.into_iter().zip([start, end]) {
                        DateInput { model, title: title.clone(), field, value }
                    }
                }
            }
        }
        ControlState::Shuffle { options, selected } => {
            let chosen: Vec<OptionEntry> = selected
                .iter()
                .filter_map(|i| options.get(*i).cloned())
                .collect();
            let available: Vec<OptionEntry> = options
                .iter()
                .enumerate()
                .filter(|(i, _)| !selected.contains(i))
                .map(|(_, o)| o.clone())
                .collect();
            rsx! {
                div { class: "wizard-shufflebox",
                    ul { class: "wizard-shuffle-list", aria_label: "Available",
                        for entry in available {
                            ShuffleEntry { model, title: title.clone(), option: entry, add: true }
                        }
                    }
                    ul { class: "wizard-shuffle-list", aria_label: "Selected",
                        for entry in chosen {
                            ShuffleEntry { model, title: title.clone(), option: entry, add: false }
                        }
                    }
                }
            }
        }
        ControlState::Static => {
            let html = definition.description.clone().unwrap_or_default();
            return rsx! {
                div { class: "wizard-control wizard-html", dangerous_inner_html: "{html}" }
            };
        }
        ControlState::Unsupported => rsx! {
            p { class: "wizard-unsupported",
                "Unsupported control type: {definition.control_type}"
            }
        },
    };

    rsx! {
        div { class: "wizard-control",
            WizardLabel {
                title: definition.title.clone(),
                description: definition.description.clone(),
                mandatory: definition.mandatory,
            }
            {body}
        }
    }
}

fn choice_for(options: &[Choice], option: &WizardControlOption) -> Option<Choice> {
    options
        .iter()
        .find(|c| c.label == option.label() && c.value == option.value)
        .cloned()
}

#[component]
fn ChoiceView(model: Signal<FormModel>, group: String, exclusive: bool, choice: Choice) -> Element {
    let label = choice.label.clone();
    if exclusive {
        return rsx! {
            label { class: "wizard-choice",
                input {
                    r#type: "radio",
                    name: "{group}",
                    value: "{choice.value}",
                    checked: choice.checked,
                    onchange: move |_| update(model, |m| m.click(&label)),
                }
                "{choice.label}"
            }
        };
    }

    rsx! {
        LabelledCheckbox {
            label: choice.label.clone(),
            checked: choice.checked,
            on_change: move |_: bool| update(model, |m| m.click(&label)),
        }
    }
}

#[component]
fn DateInput(model: Signal<FormModel>, title: String, field: DateField, value: String) -> Element {
    rsx! {
        Input {
            label: field.label().to_string(),
            input_type: "date".to_string(),
            value: value,
            on_input: move |evt: FormEvent| {
                let value = evt.value();
                update(model, |m| m.set_date_field(&title, field, &value));
            },
        }
    }
}

#[component]
fn ShuffleEntry(model: Signal<FormModel>, title: String, option: OptionEntry, add: bool) -> Element {
    let label = option.label.clone();
    let action = if add { "Add" } else { "Remove" };
    let aria = format!("{action} {label}");
    rsx! {
        li { class: "wizard-shuffle-entry",
            span { "{option.label}" }
            Button {
                variant: ButtonVariant::Ghost,
                aria_label: aria,
                onclick: move |_| {
                    if add {
                        update(model, |m| m.shuffle_move(&title, &label));
                    } else {
                        update(model, |m| m.shuffle_remove(&title, &label));
                    }
                },
                "{action}"
            }
        }
    }
}

/// Every control of an advanced search, top to bottom.
#[component]
pub fn WizardForm(model: Signal<FormModel>) -> Element {
    let count = model.read().controls().len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "wizard-form",
            for index in 0..count {
                WizardControlView { key: "{index}", model, index }
            }
        }
    }
}
