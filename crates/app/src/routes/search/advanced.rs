use dioxus::prelude::*;
use shared_types::{AdvancedSearchDefinition, SearchOptions, WizardFieldValue};
use shared_ui::components::{
    toast_app_error, use_toast, Button, ButtonVariant, LabelledSelect, SelectOption,
};
use shared_ui::wizard::{form_values, restore_form_values, FormModel, WizardForm};

use crate::AppContext;

/// A fresh form for `definition`, pre-filled with criteria already in force.
fn build_model(definition: &AdvancedSearchDefinition, existing: &[WizardFieldValue]) -> FormModel {
    let mut model = FormModel::new(&definition.controls);
    if let Err(err) = restore_form_values(&mut model, existing) {
        tracing::warn!(%err, search = %definition.name, "Could not restore advanced search values");
    }
    model
}

/// Criteria to search with. Nothing entered means no criteria.
fn criteria(values: Vec<WizardFieldValue>) -> Option<Vec<WizardFieldValue>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Whether criteria this panel applied have since been dropped from the
/// search, e.g. by starting a new search.
fn criteria_dropped(applied: bool, options: &SearchOptions) -> bool {
    applied && options.advanced_search_criteria.is_none()
}

/// Picker for the configured advanced searches and the form of the chosen one.
#[component]
pub fn AdvancedSearchPanel(mut options: Signal<SearchOptions>) -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_toast();
    let mut selected = use_signal(String::new);
    let mut definition = use_signal(|| None::<AdvancedSearchDefinition>);
    let mut model = use_signal(FormModel::default);
    let mut applied = use_signal(|| options.peek().advanced_search_criteria.is_some());

    use_effect(move || {
        if criteria_dropped(*applied.peek(), &options.read()) {
            tracing::debug!("Advanced search criteria dropped, resetting the form");
            selected.set(String::new());
            definition.set(None);
            model.set(FormModel::default());
            applied.set(false);
        }
    });

    let list_client = ctx.client.clone();
    let searches = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_advanced_searches().await }
    });

    let summaries = match &*searches.read() {
        Some(Ok(list)) => list.clone(),
        Some(Err(err)) => {
            tracing::warn!(%err, "Advanced searches unavailable");
            Vec::new()
        }
        None => Vec::new(),
    };
    if summaries.is_empty() {
        return rsx! {};
    }

    let mut choices = vec![SelectOption::new("", "None")];
    choices.extend(summaries.iter().map(|s| SelectOption::new(s.uuid.clone(), s.name.clone())));

    let load_client = ctx.client.clone();
    let choose = move |uuid: String| {
        selected.set(uuid.clone());
        if uuid.is_empty() {
            applied.set(false);
            definition.set(None);
            model.set(FormModel::default());
            let mut opts = options.write();
            opts.advanced_search_criteria = None;
            opts.current_page = 0;
            return;
        }
        let client = load_client.clone();
        spawn(async move {
            match client.get_advanced_search(&uuid).await {
                Ok(loaded) => {
                    let existing = options.read().advanced_search_criteria.clone().unwrap_or_default();
                    model.set(build_model(&loaded, &existing));
                    definition.set(Some(loaded));
                }
                Err(err) => toast_app_error(&toasts, "Could not load the advanced search", &err),
            }
        });
    };

    let apply = move |_| match form_values(&model.read()) {
        Ok(values) => {
            tracing::debug!(count = values.len(), "Applying advanced search criteria");
            let values = criteria(values);
            applied.set(values.is_some());
            let mut opts = options.write();
            opts.advanced_search_criteria = values;
            opts.current_page = 0;
        }
        Err(err) => toast_app_error(&toasts, "Could not read the advanced search", &err.into()),
    };

    let clear = move |_| {
        applied.set(false);
        model.write().reset();
        let mut opts = options.write();
        opts.advanced_search_criteria = None;
        opts.current_page = 0;
    };

    rsx! {
        section { class: "advanced-search",
            h2 { class: "refine-panel-title", "Advanced search" }
            LabelledSelect {
                label: "Search form".to_string(),
                value: selected(),
                options: choices,
                on_change: choose,
            }
            if definition.read().is_some() {
                WizardForm { model }
                div { class: "advanced-search-actions",
                    Button { onclick: apply, "Apply" }
                    Button { variant: ButtonVariant::Ghost, onclick: clear, "Clear" }
                }
            }
        }
    }
}
