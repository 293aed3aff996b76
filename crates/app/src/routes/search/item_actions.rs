use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdStar;
use dioxus_free_icons::Icon;
use shared_types::{parse_tags, DrmTerms, SearchResultItem};
use shared_ui::components::{
    toast_app_error, use_toast, Button, ButtonVariant, ConfirmDialog, Input, LabelledSwitch,
    ToastOptions, Toasts,
};

use super::share::open_external;
use crate::AppContext;

/// Summary page of an item on the repository server, which lives beside
/// the API root (`…/api` → `…/items/{uuid}/{version}/`).
pub fn item_summary_url(api_base: &str, uuid: &str, version: u32) -> String {
    let base = api_base.trim_end_matches('/');
    let root = base.strip_suffix("/api").unwrap_or(base);
    format!("{root}/items/{uuid}/{version}/")
}

/// An item waiting for its DRM terms to be accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDrm {
    pub item: SearchResultItem,
    pub terms: DrmTerms,
}

/// Open a result, asking for DRM acceptance first when the item needs it.
pub fn open_item(
    ctx: &AppContext,
    toasts: Toasts,
    item: SearchResultItem,
    mut pending: Signal<Option<PendingDrm>>,
) {
    let status = item.drm_status.clone().unwrap_or_default();
    let url = item_summary_url(ctx.client.base_url(), &item.uuid, item.version);
    if !status.requires_acceptance() {
        open_external(&url);
        return;
    }

    let client = ctx.client.clone();
    spawn(async move {
        match client.list_drm_terms(&item.uuid, item.version).await {
            Ok(terms) => pending.set(Some(PendingDrm { item, terms })),
            Err(err) => toast_app_error(&toasts, "Could not load the item's terms", &err),
        }
    });
}

/// Terms dialog shown before a DRM-protected item opens.
#[component]
pub fn DrmAcceptanceDialog(mut pending: Signal<Option<PendingDrm>>) -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_toast();
    let mut accepting = use_signal(|| false);

    let Some(current) = pending() else {
        return rsx! {};
    };
    let PendingDrm { item, terms } = current;

    let accept = move |_| {
        let client = ctx.client.clone();
        let item = item.clone();
        accepting.set(true);
        spawn(async move {
            match client.accept_drm_terms(&item.uuid, item.version).await {
                Ok(()) => {
                    tracing::info!(uuid = %item.uuid, version = item.version, "DRM terms accepted");
                    pending.set(None);
                    open_external(&item_summary_url(client.base_url(), &item.uuid, item.version));
                }
                Err(err) => toast_app_error(&toasts, "Could not accept the terms", &err),
            }
            accepting.set(false);
        });
    };

    rsx! {
        ConfirmDialog {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    pending.set(None);
                }
            },
            title: terms.title.clone(),
            confirm_label: "Accept".to_string(),
            busy: accepting(),
            on_confirm: accept,
            p { "{terms.terms}" }
            if !terms.regular_permission.is_empty() {
                h4 { "You may" }
                ul {
                    for permission in terms.regular_permission.iter() {
                        li { "{permission}" }
                    }
                }
            }
            if !terms.additional_permission.is_empty() {
                h4 { "You may also" }
                ul {
                    for permission in terms.additional_permission.iter() {
                        li { "{permission}" }
                    }
                }
            }
        }
    }
}

/// Star button that adds or removes a result from the user's favourites.
#[component]
pub fn FavouriteToggle(item: SearchResultItem, on_changed: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_toast();
    let mut adding = use_signal(|| false);
    let mut removing = use_signal(|| false);
    let mut tags = use_signal(String::new);
    let mut always_latest = use_signal(|| true);
    let mut busy = use_signal(|| false);

    let is_favourite = item.bookmark_id.is_some();
    let title = item.title().to_string();
    let star_label = if is_favourite {
        "Remove from favourites"
    } else {
        "Add to favourites"
    };

    let add_client = ctx.client.clone();
    let item_key = item.item_key();
    let add = move |_| {
        let client = add_client.clone();
        let item_key = item_key.clone();
        let keywords = parse_tags(&tags());
        let latest = always_latest();
        busy.set(true);
        spawn(async move {
            match client.add_favourite_item(&item_key, keywords, latest).await {
                Ok(_) => {
                    toasts.success("Added to favourites".to_string(), ToastOptions::new());
                    adding.set(false);
                    tags.set(String::new());
                    on_changed.call(());
                }
                Err(err) => toast_app_error(&toasts, "Could not add favourite", &err),
            }
            busy.set(false);
        });
    };

    let remove_client = ctx.client.clone();
    let bookmark_id = item.bookmark_id;
    let remove = move |_| {
        let client = remove_client.clone();
        busy.set(true);
        spawn(async move {
            match client.delete_favourite_item(bookmark_id).await {
                Ok(()) => {
                    toasts.success("Removed from favourites".to_string(), ToastOptions::new());
                    removing.set(false);
                    on_changed.call(());
                }
                Err(err) => toast_app_error(&toasts, "Could not remove favourite", &err),
            }
            busy.set(false);
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            aria_label: star_label,
            aria_pressed: is_favourite,
            onclick: move |_| {
                if is_favourite {
                    removing.set(true);
                } else {
                    adding.set(true);
                }
            },
            Icon::<LdStar> { icon: LdStar, width: 16, height: 16 }
        }
        ConfirmDialog {
            open: adding(),
            on_open_change: move |open: bool| adding.set(open),
            title: "Add to favourites".to_string(),
            confirm_label: "Add".to_string(),
            busy: busy(),
            on_confirm: add,
            p { "{title}" }
            Input {
                label: "Tags".to_string(),
                placeholder: "Separate tags with commas or spaces".to_string(),
                value: tags(),
                on_input: move |evt: FormEvent| tags.set(evt.value()),
            }
            LabelledSwitch {
                label: "Always use the latest version".to_string(),
                checked: always_latest(),
                on_change: move |value: bool| always_latest.set(value),
            }
        }
        ConfirmDialog {
            open: removing(),
            on_open_change: move |open: bool| removing.set(open),
            title: "Remove from favourites".to_string(),
            confirm_label: "Remove".to_string(),
            busy: busy(),
            on_confirm: remove,
            p { "Remove \"{title}\" from your favourites?" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_url_sits_beside_the_api_root() {
        assert_eq!(
            item_summary_url("https://repo.example.edu/inst/api/", "abc", 2),
            "https://repo.example.edu/inst/items/abc/2/"
        );
        assert_eq!(
            item_summary_url("http://localhost:8080", "abc", 1),
            "http://localhost:8080/items/abc/1/"
        );
    }
}
