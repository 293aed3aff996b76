use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdHeart};
use dioxus_free_icons::Icon;
use shared_types::SearchOptions;
use shared_ui::components::{
    toast_app_error, use_toast, Button, ButtonVariant, ConfirmDialog, Input, ToastOptions,
};

use super::share::open_external;
use crate::session::use_session;
use crate::AppContext;

const COLLECTION_LIMIT: &str = "Export is limited to one collection. Select exactly one to export.";

/// Why the current search cannot be exported, if it cannot.
fn export_blocked(options: &SearchOptions) -> Option<&'static str> {
    match options.single_collection() {
        Some(_) => None,
        None => Some(COLLECTION_LIMIT),
    }
}

/// Saves the current search as a named favourite.
#[component]
pub fn FavouriteSearchButton(options: Signal<SearchOptions>) -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_toast();
    let mut open = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let save = move |_| {
        let client = ctx.client.clone();
        let opts = options();
        let entered = name();
        busy.set(true);
        spawn(async move {
            match client.add_favourite_search(&entered, &opts).await {
                Ok(saved) => {
                    toasts.success(format!("Saved \"{}\" to favourites", saved.name), ToastOptions::new());
                    open.set(false);
                    name.set(String::new());
                }
                Err(err) => toast_app_error(&toasts, "Could not save the search", &err),
            }
            busy.set(false);
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            aria_label: "Add search to favourites",
            onclick: move |_| open.set(true),
            Icon::<LdHeart> { icon: LdHeart, width: 16, height: 16 }
            "Favourite"
        }
        ConfirmDialog {
            open: open(),
            on_open_change: move |value: bool| open.set(value),
            title: "Add search to favourites".to_string(),
            confirm_label: "Save".to_string(),
            busy: busy(),
            on_confirm: save,
            Input {
                label: "Name".to_string(),
                value: name(),
                on_input: move |evt: FormEvent| name.set(evt.value()),
            }
        }
    }
}

/// Downloads the results as CSV. Hidden from users without the
/// permission; limited to searches in exactly one collection.
#[component]
pub fn ExportButton(options: Signal<SearchOptions>) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let toasts = use_toast();
    let mut exporting = use_signal(|| false);

    if !session.can_download_search_result() {
        return rsx! {};
    }

    let export = move |_| {
        let opts = options();
        if let Some(reason) = export_blocked(&opts) {
            toasts.error(reason.to_string(), ToastOptions::new());
            return;
        }
        let client = ctx.client.clone();
        exporting.set(true);
        spawn(async move {
            let url = match client.confirm_export(&opts).await {
                Ok(()) => client.export_url(&opts),
                Err(err) => Err(err),
            };
            match url {
                Ok(url) => {
                    tracing::info!(%url, "Exporting search result");
                    open_external(&url);
                }
                Err(err) => toast_app_error(&toasts, "Could not export the search result", &err),
            }
            exporting.set(false);
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            aria_label: "Export search result",
            busy: exporting(),
            onclick: export,
            Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
            "Export"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Collection;

    fn collection(uuid: &str) -> Collection {
        Collection {
            uuid: uuid.to_string(),
            name: uuid.to_string(),
        }
    }

    #[test]
    fn export_needs_exactly_one_collection() {
        let mut options = SearchOptions::default();
        assert_eq!(export_blocked(&options), Some(COLLECTION_LIMIT));
        options.collections = Some(vec![collection("a"), collection("b")]);
        assert_eq!(export_blocked(&options), Some(COLLECTION_LIMIT));
        options.collections = Some(vec![collection("a")]);
        assert_eq!(export_blocked(&options), None);
    }
}
